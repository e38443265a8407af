use clap::Parser;

/// Listener settings. Flags only: the service reads no env vars or config files.
#[derive(Debug, Clone, Parser)]
#[command(name = "demo-api", version, about = "Demo API target for chaos-testing runs")]
pub struct Config {
    /// Interface to bind.
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// TCP port to bind.
    #[arg(long, default_value_t = 9000)]
    pub port: u16,
}

impl Config {
    pub fn from_args() -> Self {
        Self::parse()
    }

    pub fn bind_addr(&self) -> String {
        if self.host.contains(':') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_all_interfaces_on_9000() {
        let config = Config::try_parse_from(["demo-api"]).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert_eq!(config.bind_addr(), "0.0.0.0:9000");
    }

    #[test]
    fn flags_override_defaults() {
        let config =
            Config::try_parse_from(["demo-api", "--host", "127.0.0.1", "--port", "8080"]).unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn ipv6_host_is_bracketed() {
        let config = Config::try_parse_from(["demo-api", "--host", "::1"]).unwrap();
        assert_eq!(config.bind_addr(), "[::1]:9000");
    }

    #[test]
    fn rejects_out_of_range_port() {
        assert!(Config::try_parse_from(["demo-api", "--port", "70000"]).is_err());
    }
}
