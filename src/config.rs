use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};
use std::path::{Path, PathBuf};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Contents of `lokvani.toml`. Every key is optional.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct LokvaniConfig {
    pub database: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub static_dir: Option<String>,
}

/// Values given on the command line or through the environment.
#[derive(Debug, Clone, Default)]
pub struct ServeOverrides {
    pub database: Option<PathBuf>,
    pub host: Option<IpAddr>,
    pub port: Option<u16>,
    pub static_dir: Option<PathBuf>,
}

/// Fully resolved settings for `lokvani serve`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServeSettings {
    pub database: PathBuf,
    pub host: IpAddr,
    pub port: u16,
    pub static_dir: PathBuf,
}

impl ServeSettings {
    /// Overrides win over the config file, which wins over defaults.
    pub fn resolve(overrides: ServeOverrides, config: Option<&LokvaniConfig>) -> anyhow::Result<Self> {
        let file = config.cloned().unwrap_or_default();

        let host = match (overrides.host, file.host.as_deref()) {
            (Some(host), _) => host,
            (None, Some(raw)) => raw
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid host '{}' in config: {}", raw, e))?,
            (None, None) => DEFAULT_HOST,
        };

        Ok(Self {
            database: overrides
                .database
                .or(file.database.map(PathBuf::from))
                .unwrap_or_else(default_database_path),
            host,
            port: overrides.port.or(file.port).unwrap_or(DEFAULT_PORT),
            static_dir: overrides
                .static_dir
                .or(file.static_dir.map(PathBuf::from))
                .unwrap_or_else(default_static_dir),
        })
    }
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("lokvani.toml")
}

pub fn default_database_path() -> PathBuf {
    PathBuf::from("data").join("lokvani.db")
}

pub fn default_static_dir() -> PathBuf {
    PathBuf::from("frontend")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<LokvaniConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: LokvaniConfig = toml::from_str(&contents)?;
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &LokvaniConfig, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("config already exists at {} (use --force to overwrite)", path.display());
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}

/// The config `lokvani init` writes: every default spelled out.
pub fn starter_config() -> LokvaniConfig {
    LokvaniConfig {
        database: Some(default_database_path().to_string_lossy().into_owned()),
        host: Some(DEFAULT_HOST.to_string()),
        port: Some(DEFAULT_PORT),
        static_dir: Some(default_static_dir().to_string_lossy().into_owned()),
    }
}

pub fn ensure_db_dir(db_path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
