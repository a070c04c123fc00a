use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use crate::error::Error;

const DIST_CANDIDATES: [&str; 2] = ["frontend/dist", "../frontend/dist"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub dist_dir: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from `MERGE128_HOST`, `MERGE128_PORT` and
    /// `MERGE128_DIST` as returned by `lookup`, falling back to defaults for
    /// unset keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let host = match lookup("MERGE128_HOST") {
            Some(raw) => raw
                .parse()
                .map_err(|_| Error::Config(format!("MERGE128_HOST is not an IP address: {:?}", raw)))?,
            None => IpAddr::V4(Ipv4Addr::LOCALHOST),
        };
        let port = match lookup("MERGE128_PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|_| Error::Config(format!("MERGE128_PORT is not a port number: {:?}", raw)))?,
            None => 3000,
        };
        let dist_dir = match lookup("MERGE128_DIST") {
            Some(raw) if raw.trim().is_empty() => {
                return Err(Error::Config("MERGE128_DIST is empty".to_string()));
            }
            Some(raw) => PathBuf::from(raw),
            None => default_dist_dir(),
        };
        Ok(Self { host, port, dist_dir })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn default_dist_dir() -> PathBuf {
    DIST_CANDIDATES
        .iter()
        .map(Path::new)
        .find(|path| path.exists())
        .unwrap_or_else(|| Path::new(DIST_CANDIDATES[0]))
        .to_path_buf()
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
        assert_eq!(config.socket_addr(), "127.0.0.1:3000".parse().unwrap());
        assert!(config.dist_dir.ends_with("frontend/dist"));
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("MERGE128_HOST", "0.0.0.0"),
            ("MERGE128_PORT", "8080"),
            ("MERGE128_DIST", "/srv/merge128"),
        ]))
        .unwrap();
        assert_eq!(config.socket_addr(), "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.dist_dir, PathBuf::from("/srv/merge128"));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        for pairs in [
            [("MERGE128_HOST", "localhost")],
            [("MERGE128_PORT", "70000")],
            [("MERGE128_DIST", " ")],
        ] {
            let err = ServerConfig::from_lookup(lookup(&pairs)).unwrap_err();
            assert!(matches!(err, Error::Config(_)), "{:?}", pairs);
        }
    }
}
