use std::env;

use crate::clients::DEFAULT_ISS_URL;

#[derive(Clone, Debug)]
pub struct Config {
    pub iss_url: String,
    pub request_timeout_secs: u64,

    /// Poll interval for the tracker. Zero means fetch once and exit.
    pub refresh_interval_secs: u64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            iss_url: env::var("ISS_URL").unwrap_or_else(|_| DEFAULT_ISS_URL.to_string()),
            request_timeout_secs: Self::env_u64("REQUEST_TIMEOUT_SECS", 30),
            refresh_interval_secs: Self::env_u64("REFRESH_INTERVAL_SECS", 3),
        })
    }

    fn env_u64(key: &str, default: u64) -> u64 {
        env::var(key)
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        env::remove_var("ISS_URL");
        env::remove_var("REQUEST_TIMEOUT_SECS");
        env::remove_var("REFRESH_INTERVAL_SECS");

        let config = Config::from_env().unwrap();
        assert_eq!(config.iss_url, DEFAULT_ISS_URL);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.refresh_interval_secs, 3);
    }

    #[test]
    fn unparseable_numbers_fall_back_to_defaults() {
        assert_eq!(Config::env_u64("NO_SUCH_VAR_SET_ANYWHERE", 7), 7);

        env::set_var("ISS_TRACKER_TEST_BAD_U64", "not-a-number");
        assert_eq!(Config::env_u64("ISS_TRACKER_TEST_BAD_U64", 7), 7);
        env::remove_var("ISS_TRACKER_TEST_BAD_U64");
    }
}
