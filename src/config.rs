use std::path::{Path, PathBuf};

use config::{Config, File, FileFormat};
use serde::Deserialize;

use crate::error::AppError;

/// Default config file name, looked up in the user's home directory.
pub const DEFAULT_CONFIG_FILE: &str = ".gddns.json";

/// A registered domain together with its API credential pair.
#[derive(Debug, Deserialize, Clone)]
pub struct Domain {
    pub name: String,
    pub api_key: String,
    pub api_secret: String,
}

/// The full parsed configuration file.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Domains {
    pub domains: Vec<Domain>,
}

impl Domains {
    /// Case-insensitive lookup of a configured domain. The first match wins;
    /// an unknown name fails with every configured name in the message.
    pub fn resolve(&self, requested: &str) -> crate::Result<&Domain> {
        self.domains
            .iter()
            .find(|d| d.name.eq_ignore_ascii_case(requested))
            .ok_or_else(|| AppError::DomainNotFound {
                domain: requested.to_string(),
                known: self.domains.iter().map(|d| d.name.clone()).collect(),
            })
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

fn default_config_path() -> crate::Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| AppError::ConfigError("could not determine home directory".to_string()))?;
    Ok(home.join(DEFAULT_CONFIG_FILE))
}

/// Load the credential set from `path`, or from the per-user default when no
/// path is given. Returns the set together with the file actually used.
pub fn load(path: Option<&Path>) -> crate::Result<(Domains, PathBuf)> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };
    if !path.exists() {
        return Err(AppError::ConfigNotFound(path));
    }

    let settings = Config::builder()
        .add_source(File::from(path.as_path()).format(FileFormat::Json))
        .build()
        .map_err(|_| {
            AppError::ConfigError(format!(
                "error while reading {}, check the file syntax",
                path.display()
            ))
        })?;

    let domains: Domains = settings.try_deserialize().map_err(|_| {
        AppError::ConfigError(format!(
            "error while unmarshal {}, check the syntax",
            path.display()
        ))
    })?;

    Ok((domains, path))
}
