use anyhow::Context;
use clap::Parser;
use dialoguer::Confirm;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::time::Duration;
use tracing::{info, Level};
use vales_cli::{cli, client, config, draft, error, output};
use cli::{Cli, Commands, ValeAccion};
use client::ValesClient;
use config::Config;
use error::ValesError;
use vales_common::{Flow, Identificacion, Outcome, SignatureRequest};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = Config::load().context("no se pudo leer la configuración")?;

    let ok = match cli.command {
        Commands::Firma { accion } => {
            let body = SignatureRequest { identificacion: Identificacion::parse(accion.id()) };
            send(&config, accion.flow(), &body).await?
        }

        Commands::Vale { accion: ValeAccion::Editar { id, tipo, archivo, yes } } => {
            let body = draft::ValeFile::load(&archivo)?.into_request(&id)?;
            println!(
                "Vale {} ({}): {} materiales, {} reportados",
                body.identificacion,
                tipo,
                body.materiales.len(),
                body.reportados.len()
            );
            if !yes && !confirm("¿Guardar los cambios del vale?")? {
                return Err(ValesError::Cancelled.into());
            }
            send(&config, tipo.flow(), &body).await?
        }

        Commands::Registro { archivo, yes } => {
            let body = draft::RegistroFile::load(&archivo)?.into_request()?;
            println!(
                "Registro de {} ({}): {} materiales",
                body.draft.nombre,
                body.draft.control,
                body.items.len()
            );
            if !yes && !confirm("¿Enviar el registro?")? {
                return Err(ValesError::Cancelled.into());
            }
            send(&config, Flow::Register, &body).await?
        }

        Commands::Filtrar { archivo, consulta } => {
            let content = std::fs::read_to_string(&archivo)
                .with_context(|| format!("no se pudo leer {}", archivo.display()))?;
            for line in output::filter_lines(&content, &consulta) {
                println!("{}", line);
            }
            true
        }

        Commands::Config { set_base_url, set_session, show } => {
            let mut config = config;

            if let Some(url) = set_base_url {
                config.set_base_url(url)?;
                config.save()?;
                println!("✔ Servidor configurado: {}", config.base_url);
            }

            if let Some(cookie) = set_session {
                config.set_session_cookie(cookie);
                config.save()?;
                println!("✔ Cookie de sesión guardada");
            }

            if show {
                println!("Configuración:");
                println!("  Servidor: {}", config.base_url());
                println!("  Tiempo límite: {}s", config.timeout_seconds);
                println!(
                    "  Sesión: {}",
                    if config.session_cookie().is_some() { "configurada" } else { "sin configurar" }
                );
            }
            true
        }
    };

    if !ok {
        std::process::exit(1);
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    // Sólo falla si ya hay un suscriptor instalado
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn confirm(prompt: &str) -> error::Result<bool> {
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| ValesError::Io(std::io::Error::other(e.to_string())))
}

/// Envía con indicador de espera y muestra el resultado
async fn send<T: Serialize>(config: &Config, flow: Flow, body: &T) -> error::Result<bool> {
    let client = ValesClient::new(config)?;
    info!(url = %client.url(flow), "enviando");

    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("Enviando...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let outcome: Outcome = client.submit(flow, body).await;
    spinner.finish_and_clear();

    let (ok, text) = output::describe(&outcome);
    if ok {
        println!("{}", text);
    } else {
        eprintln!("{}", text);
    }
    Ok(ok)
}
