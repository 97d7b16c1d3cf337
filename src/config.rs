#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize(base_url.into()),
            timeout_secs: 30,
        }
    }

    pub fn from_env() -> Result<Self, String> {
        let base_url = env_required("PROFILE_API_BASE_URL")?;

        let timeout_secs: u64 = env_or("PROFILE_API_TIMEOUT_SECS", "30")
            .parse()
            .map_err(|e| format!("Invalid PROFILE_API_TIMEOUT_SECS: {e}"))?;

        Ok(ClientConfig {
            base_url: normalize(base_url),
            timeout_secs,
        })
    }
}

// Path joins assume no trailing slash on the base URL.
fn normalize(mut base_url: String) -> String {
    while base_url.ends_with('/') {
        base_url.pop();
    }
    base_url
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
