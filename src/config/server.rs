//! Listener settings for the binary.

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: String,
    /// Maximum accepted request body in bytes.
    pub body_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind_addr: DEFAULT_BIND_ADDR.into(),
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// `BIND_ADDR` wins over `PORT`; unparsable `BODY_LIMIT_BYTES` falls back to the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let bind_addr = get("BIND_ADDR")
            .or_else(|| get("PORT").map(|p| format!("0.0.0.0:{}", p.trim())))
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let body_limit = get("BODY_LIMIT_BYTES")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_BODY_LIMIT);
        ServerConfig { bind_addr, body_limit }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        assert_eq!(ServerConfig::from_lookup(|_| None), ServerConfig::default());
    }

    #[test]
    fn port_and_bind_addr() {
        let cfg = ServerConfig::from_lookup(|k| (k == "PORT").then(|| "8080".to_string()));
        assert_eq!(cfg.bind_addr, "0.0.0.0:8080");
        let cfg = ServerConfig::from_lookup(|k| match k {
            "PORT" => Some("8080".into()),
            "BIND_ADDR" => Some("127.0.0.1:9000".into()),
            "BODY_LIMIT_BYTES" => Some("2048".into()),
            _ => None,
        });
        assert_eq!(cfg.bind_addr, "127.0.0.1:9000");
        assert_eq!(cfg.body_limit, 2048);
    }
}
