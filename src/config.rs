// ⚙️ Server configuration - read from CATALOG_* environment variables

use anyhow::{bail, Context, Result};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 3000;

/// How POST/PATCH/DELETE on /cars behave
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CarWriteMode {
    /// Mutations go through the car registry
    #[default]
    Registry,

    /// Legacy behaviour: echo the request back, persist nothing
    Echo,
}

impl CarWriteMode {
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "registry" => Ok(CarWriteMode::Registry),
            "echo" => Ok(CarWriteMode::Echo),
            other => bail!("unknown car write mode '{}' (expected 'registry' or 'echo')", other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub car_writes: CarWriteMode,
    pub seed_on_start: bool,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; missing keys fall back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = match lookup("CATALOG_HOST") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("CATALOG_HOST is not an IP address: {}", raw))?,
            None => DEFAULT_HOST,
        };

        let port = match lookup("CATALOG_PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("CATALOG_PORT is not a port number: {}", raw))?,
            None => DEFAULT_PORT,
        };

        let car_writes = match lookup("CATALOG_CAR_WRITES") {
            Some(raw) => CarWriteMode::parse(&raw).context("invalid CATALOG_CAR_WRITES")?,
            None => CarWriteMode::default(),
        };

        let seed_on_start = match lookup("CATALOG_SEED_ON_START") {
            Some(raw) => parse_bool(&raw).context("invalid CATALOG_SEED_ON_START")?,
            None => false,
        };

        Ok(ServerConfig {
            host,
            port,
            car_writes,
            seed_on_start,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
            car_writes: CarWriteMode::Registry,
            seed_on_start: false,
        }
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("not a boolean: '{}'", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.addr().to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("CATALOG_HOST", "127.0.0.1"),
            ("CATALOG_PORT", "8080"),
            ("CATALOG_CAR_WRITES", "Echo"),
            ("CATALOG_SEED_ON_START", "yes"),
        ]))
        .unwrap();

        assert_eq!(config.addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.car_writes, CarWriteMode::Echo);
        assert!(config.seed_on_start);
    }

    #[test]
    fn test_invalid_values_name_the_variable() {
        let err = ServerConfig::from_lookup(lookup(&[("CATALOG_PORT", "http")])).unwrap_err();
        assert!(err.to_string().contains("CATALOG_PORT"));

        let err =
            ServerConfig::from_lookup(lookup(&[("CATALOG_CAR_WRITES", "stub")])).unwrap_err();
        assert!(err.to_string().contains("CATALOG_CAR_WRITES"));

        let err =
            ServerConfig::from_lookup(lookup(&[("CATALOG_SEED_ON_START", "maybe")])).unwrap_err();
        assert!(err.to_string().contains("CATALOG_SEED_ON_START"));
    }
}
