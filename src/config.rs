use std::env;
use std::time::Duration;

pub const APP_NAME: &str = "Emergency Resources";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_SNAPSHOT_TTL_SECS: u64 = 10;
const DEFAULT_MAX_RETRIES: u32 = 2;

/// Runtime configuration, loaded from environment variables (with `.env`
/// support via dotenvy in `main`).
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the hosted backend, without a trailing slash.
    pub gateway_url: String,
    /// Publishable API key sent with every gateway request.
    pub gateway_api_key: String,
    pub bind_addr: String,
    /// Freshness window for cached collection snapshots.
    pub snapshot_ttl: Duration,
    /// Retry budget per gateway fetch, on top of the initial attempt.
    pub max_retries: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let gateway_url = env::var("GATEWAY_URL")
            .map_err(|_| "GATEWAY_URL is not set".to_string())?
            .trim_end_matches('/')
            .to_string();
        let gateway_api_key =
            env::var("GATEWAY_API_KEY").map_err(|_| "GATEWAY_API_KEY is not set".to_string())?;

        let bind_addr =
            env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        let snapshot_ttl = Duration::from_secs(parse_or_default(
            "SNAPSHOT_TTL_SECS",
            DEFAULT_SNAPSHOT_TTL_SECS,
        ));
        let max_retries = parse_or_default("GATEWAY_MAX_RETRIES", DEFAULT_MAX_RETRIES);

        Ok(Self {
            gateway_url,
            gateway_api_key,
            bind_addr,
            snapshot_ttl,
            max_retries,
        })
    }
}

fn parse_or_default<T: std::str::FromStr + std::fmt::Display>(var: &str, default: T) -> T {
    match env::var(var) {
        Ok(raw) => match raw.parse() {
            Ok(value) => value,
            Err(_) => {
                log::warn!("Invalid {var}={raw}, using default {default}");
                default
            }
        },
        Err(_) => default,
    }
}
