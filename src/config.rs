use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Base URL of the EventHub REST backend, e.g. `https://events.example.edu/api`.
    pub api_endpoint: String,
    /// User-Agent header sent on every request.
    pub user_agent: String,
}

impl Config {
    /// Config pointing at an explicit endpoint with default everything else.
    /// Used by the integration tests to target a mock server.
    pub fn for_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            api_endpoint: endpoint.into(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_user_agent() -> String {
    format!("EventHub-Notify/{}", env!("CARGO_PKG_VERSION"))
}

pub fn load() -> anyhow::Result<Config> {
    dotenvy::dotenv().ok();

    Ok(Config {
        api_endpoint: std::env::var("EVENTHUB_API_ENDPOINT")
            .unwrap_or_else(|_| "http://localhost:8080/api".into()),
        user_agent: std::env::var("EVENTHUB_USER_AGENT").unwrap_or_else(|_| default_user_agent()),
    })
}
