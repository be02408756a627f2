use anyhow::{Context, Result};

const HOST_VAR: &str = "REGISTRATION_HOST";
const PORT_VAR: &str = "REGISTRATION_PORT";
const DEBUG_VAR: &str = "REGISTRATION_DEBUG";

#[derive(Debug, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            debug: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from `lookup`, falling back to defaults for unset keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(host) = lookup(HOST_VAR) {
            config.host = host;
        }

        if let Some(port) = lookup(PORT_VAR) {
            config.port = port
                .trim()
                .parse::<u16>()
                .with_context(|| format!("{} must be a port number, got {:?}", PORT_VAR, port))?;
        }

        if let Some(debug) = lookup(DEBUG_VAR) {
            config.debug = parse_flag(&debug)
                .with_context(|| format!("{} must be a boolean, got {:?}", DEBUG_VAR, debug))?;
        }

        Ok(config)
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => anyhow::bail!("unrecognized flag value {:?}", other),
    }
}
