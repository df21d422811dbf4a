use std::{env, str::FromStr};

use anyhow::{bail, Context};

/// How the MCP server talks to its client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    /// JSON-RPC over HTTP alongside the REST API
    Http,
    /// Newline-delimited JSON-RPC on stdin/stdout
    Stdio,
}

impl FromStr for Transport {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "http" => Ok(Transport::Http),
            "stdio" => Ok(Transport::Stdio),
            other => bail!("unknown MCP_TRANSPORT '{}', expected 'http' or 'stdio'", other),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub transport: Transport,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            transport: Transport::Http,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let host = lookup("APP_HOST").unwrap_or(defaults.host);
        let port = match lookup("APP_PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("invalid APP_PORT '{}'", raw))?,
            None => defaults.port,
        };
        let transport = match lookup("MCP_TRANSPORT") {
            Some(raw) => raw.parse()?,
            None => defaults.transport,
        };

        Ok(Self {
            host,
            port,
            transport,
        })
    }
}
