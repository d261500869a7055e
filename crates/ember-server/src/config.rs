use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_bind() -> String {
    "localhost".into()
}

fn default_port() -> u16 {
    1000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            let config: ServerConfig = toml::from_str(&contents)?;
            Ok(config)
        } else {
            tracing::info!("No config file found at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.bind, "localhost");
        assert_eq!(config.port, 1000);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let config: ServerConfig = toml::from_str("port = 25565").unwrap();
        assert_eq!(config.bind, "localhost");
        assert_eq!(config.port, 25565);
    }

    #[test]
    fn missing_file_uses_defaults() {
        let config = ServerConfig::load(Path::new("does/not/exist.toml")).unwrap();
        assert_eq!(config.port, 1000);
    }
}
