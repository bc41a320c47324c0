#[derive(Debug, Clone)]
pub struct CacheConfig {
    pub host: String,
    pub port: String,
    pub password: String,
}

impl CacheConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: env_or("REDIS_HOST", "localhost"),
            port: env_or("REDIS_PORT", "6379"),
            password: env_or("REDIS_PASSWORD", ""),
        }
    }

    pub fn new(host: String, port: String, password: String) -> Self {
        Self {
            host,
            port,
            password,
        }
    }

    /// Connection URL in the form the redis client accepts.
    pub fn url(&self) -> String {
        if self.password.is_empty() {
            format!("redis://{}:{}/", self.host, self.port)
        } else {
            format!("redis://:{}@{}:{}/", self.password, self.host, self.port)
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_without_password() {
        let config = CacheConfig::new("localhost".to_string(), "6379".to_string(), String::new());
        assert_eq!(config.url(), "redis://localhost:6379/");
    }

    #[test]
    fn test_url_with_password() {
        let config = CacheConfig::new(
            "cache.internal".to_string(),
            "6380".to_string(),
            "hunter2".to_string(),
        );
        assert_eq!(config.url(), "redis://:hunter2@cache.internal:6380/");
    }

    #[test]
    fn test_env_or_falls_back_on_missing_or_empty() {
        // Single test covers set/empty/unset so parallel tests never race on
        // the same variable.
        let key = "QOTD_CONFIG_TEST_VAR";

        std::env::remove_var(key);
        assert_eq!(env_or(key, "fallback"), "fallback");

        std::env::set_var(key, "");
        assert_eq!(env_or(key, "fallback"), "fallback");

        std::env::set_var(key, "value");
        assert_eq!(env_or(key, "fallback"), "value");

        std::env::remove_var(key);
    }
}
