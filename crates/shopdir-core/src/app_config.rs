#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Placeholder in [`AppConfig::proxy_template`] replaced by the encoded
/// primary URL.
pub const PROXY_URL_PLACEHOLDER: &str = "{url}";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Primary shop list endpoint.
    pub api_url: String,
    /// Fallback proxy URL template containing [`PROXY_URL_PLACEHOLDER`].
    /// `None` disables the fallback source.
    pub proxy_template: Option<String>,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}
