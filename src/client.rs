//! Cliente HTTP para los endpoints de vales

use crate::config::Config;
use crate::error::Result;
use reqwest::header::{CONTENT_TYPE, COOKIE};
use serde::Serialize;
use std::time::Duration;
use tracing::debug;
use vales_common::{resolve, Error, Flow, Outcome, ServerReply};

pub struct ValesClient {
    http: reqwest::Client,
    base_url: String,
    session_cookie: Option<String>,
}

impl ValesClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url(),
            session_cookie: config.session_cookie(),
        })
    }

    pub fn url(&self, flow: Flow) -> String {
        format!("{}{}", self.base_url, flow.path())
    }

    /// Una petición POST; los fallos de red se devuelven como `Error::Transport`
    pub async fn post<T: Serialize>(&self, flow: Flow, body: &T) -> vales_common::Result<ServerReply> {
        let url = self.url(flow);
        let body = serde_json::to_string(body)?;
        debug!(%url, %body, "POST");

        let mut request = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body);
        if let Some(cookie) = &self.session_cookie {
            request = request.header(COOKIE, cookie);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;
        debug!(%status, %text, "respuesta");

        ServerReply::from_json(&text)
    }

    /// Envía y decide la reacción
    pub async fn submit<T: Serialize>(&self, flow: Flow, body: &T) -> Outcome {
        resolve(flow, self.post(flow, body).await)
    }
}
