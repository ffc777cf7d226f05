use clap::{Parser, Subcommand};
use std::path::PathBuf;
use vales_common::Flow;

#[derive(Parser)]
#[command(name = "vales")]
#[command(about = "Vales de préstamo de material de laboratorio", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Muestra el detalle de cada petición
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Firma de solicitudes pendientes
    Firma {
        #[command(subcommand)]
        accion: FirmaAccion,
    },

    /// Operaciones sobre un vale existente
    Vale {
        #[command(subcommand)]
        accion: ValeAccion,
    },

    /// Registra un vale nuevo desde un archivo JSON
    Registro {
        /// Campos del formulario, `reporte` e `items`
        #[arg(required = true)]
        archivo: PathBuf,

        /// No pedir confirmación
        #[arg(short, long)]
        yes: bool,
    },

    /// Filtra las líneas de un archivo como lo hacen los buscadores de la página
    Filtrar {
        #[arg(required = true)]
        archivo: PathBuf,

        consulta: String,
    },

    /// Configuración
    Config {
        /// Origen del servidor (http://host:puerto)
        #[arg(long)]
        set_base_url: Option<String>,

        /// Cookie de sesión (`session=...`)
        #[arg(long)]
        set_session: Option<String>,

        /// Muestra la configuración actual
        #[arg(long)]
        show: bool,
    },
}

#[derive(Subcommand)]
pub enum FirmaAccion {
    /// Acepta la solicitud
    Aceptar { id: String },
    /// Cancela la solicitud
    Cancelar { id: String },
}

impl FirmaAccion {
    pub fn flow(&self) -> Flow {
        match self {
            FirmaAccion::Aceptar { .. } => Flow::AcceptSolicitud,
            FirmaAccion::Cancelar { .. } => Flow::CancelSolicitud,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            FirmaAccion::Aceptar { id } | FirmaAccion::Cancelar { id } => id,
        }
    }
}

#[derive(Subcommand)]
pub enum ValeAccion {
    /// Reemplaza los materiales de un vale
    Editar {
        id: String,

        /// Tipo de vale (activos/maestros)
        #[arg(short, long, default_value = "activos")]
        tipo: ValeTipo,

        /// JSON con `materiales` y `reportados`
        #[arg(short, long)]
        archivo: PathBuf,

        /// No pedir confirmación
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ValeTipo {
    #[default]
    Activos,
    Maestros,
}

impl ValeTipo {
    pub fn flow(self) -> Flow {
        match self {
            ValeTipo::Activos => Flow::EditActiveVale,
            ValeTipo::Maestros => Flow::EditTeacherVale,
        }
    }
}

impl std::str::FromStr for ValeTipo {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "activos" | "activo" | "a" => Ok(ValeTipo::Activos),
            "maestros" | "maestro" | "m" => Ok(ValeTipo::Maestros),
            _ => Err(format!("Tipo desconocido: {}. Usa activos o maestros", s)),
        }
    }
}

impl std::fmt::Display for ValeTipo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValeTipo::Activos => write!(f, "activos"),
            ValeTipo::Maestros => write!(f, "maestros"),
        }
    }
}
