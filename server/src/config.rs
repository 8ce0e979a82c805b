use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use error_stack::{Report, ResultExt};
use kernel::KernelError;
use vodca::References;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: &str = "8080";
const DEFAULT_LOG_DIR: &str = "./logs/";

#[derive(Debug, References)]
pub struct AppConfig {
    host: IpAddr,
    port: u16,
    log_dir: PathBuf,
}

impl AppConfig {
    /// Reads `ELIBRARY_*` variables, falling back to `.env` and then to defaults.
    pub fn from_env() -> error_stack::Result<Self, KernelError> {
        let host = env_or("ELIBRARY_HOST", DEFAULT_HOST)?;
        let port = env_or("ELIBRARY_PORT", DEFAULT_PORT)?;
        let log_dir = env_or("ELIBRARY_LOG_DIR", DEFAULT_LOG_DIR)?;
        Self::parse(&host, &port, &log_dir)
    }

    fn parse(host: &str, port: &str, log_dir: &str) -> error_stack::Result<Self, KernelError> {
        let host = host
            .parse::<IpAddr>()
            .change_context_lazy(|| KernelError::Internal)
            .attach_printable_lazy(|| format!("invalid ELIBRARY_HOST: {host}"))?;
        let port = port
            .parse::<u16>()
            .change_context_lazy(|| KernelError::Internal)
            .attach_printable_lazy(|| format!("invalid ELIBRARY_PORT: {port}"))?;
        Ok(Self {
            host,
            port,
            log_dir: PathBuf::from(log_dir),
        })
    }

    pub fn address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn env_or(key: &str, default: &str) -> error_stack::Result<String, KernelError> {
    match dotenvy::var(key) {
        Ok(value) => Ok(value),
        Err(dotenvy::Error::EnvVar(std::env::VarError::NotPresent)) => Ok(default.to_string()),
        Err(e) => Err(Report::new(e)
            .change_context(KernelError::Internal)
            .attach_printable(format!("failed to read {key}"))),
    }
}
