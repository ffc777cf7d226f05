use crate::error::{Result, ValesError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const ENV_BASE_URL: &str = "VALES_BASE_URL";
pub const ENV_SESSION: &str = "VALES_SESSION";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Origen del servidor, sin barra final
    pub base_url: String,
    /// Cookie de sesión copiada del navegador (`session=...`)
    pub session_cookie: Option<String>,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".into(),
            session_cookie: None,
            timeout_seconds: 30,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ValesError::Config("No se encontró el directorio personal".into()))?;
        Ok(home.join(".config").join("vales").join("config.json"))
    }

    /// Origen efectivo: la variable de entorno tiene prioridad
    pub fn base_url(&self) -> String {
        std::env::var(ENV_BASE_URL)
            .unwrap_or_else(|_| self.base_url.clone())
            .trim_end_matches('/')
            .to_string()
    }

    pub fn session_cookie(&self) -> Option<String> {
        std::env::var(ENV_SESSION)
            .ok()
            .or_else(|| self.session_cookie.clone())
    }

    pub fn set_base_url(&mut self, url: String) -> Result<()> {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ValesError::Config(format!("URL inválida: {}", url)));
        }
        self.base_url = url.trim_end_matches('/').to_string();
        Ok(())
    }

    pub fn set_session_cookie(&mut self, cookie: String) {
        self.session_cookie = Some(cookie);
    }
}
