use std::env;
use std::time::Duration;

pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub fetch_timeout_secs: u64,
    pub user_agent: String,
}

impl Config {
    /// Read overrides from the environment. Missing or unparseable values
    /// fall back to the defaults.
    pub fn from_env() -> Self {
        Config {
            fetch_timeout_secs: env::var("SURF_FETCH_TIMEOUT_SECS")
                .unwrap_or_else(|_| DEFAULT_FETCH_TIMEOUT_SECS.to_string())
                .parse()
                .unwrap_or(DEFAULT_FETCH_TIMEOUT_SECS),
            user_agent: env::var("SURF_USER_AGENT")
                .ok()
                .filter(|ua| !ua.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        }
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        env::remove_var("SURF_FETCH_TIMEOUT_SECS");
        env::remove_var("SURF_USER_AGENT");
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();

        let config = Config::from_env();

        assert_eq!(config, Config::default());
        assert_eq!(config.fetch_timeout(), Duration::from_secs(30));
        assert_eq!(config.user_agent, "Mozilla/5.0");
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        env::set_var("SURF_FETCH_TIMEOUT_SECS", "5");
        env::set_var("SURF_USER_AGENT", "surf-bot/1.0");

        let config = Config::from_env();
        clear_env();

        assert_eq!(config.fetch_timeout_secs, 5);
        assert_eq!(config.user_agent, "surf-bot/1.0");
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_timeout_falls_back() {
        clear_env();
        env::set_var("SURF_FETCH_TIMEOUT_SECS", "soon");
        env::set_var("SURF_USER_AGENT", "   ");

        let config = Config::from_env();
        clear_env();

        assert_eq!(config, Config::default());
    }
}
