use serde::Deserialize;

fn default_scrape_api_url() -> String {
    "https://api.firecrawl.dev".into()
}

fn default_scheme_site_origin() -> String {
    "https://www.myscheme.gov.in".into()
}

fn default_news_api_url() -> String {
    "https://serpapi.com".into()
}

fn default_identity_base_url() -> String {
    "http://localhost:54321".into()
}

fn default_profile_base_url() -> String {
    "http://localhost:54321".into()
}

fn default_http_bind() -> String {
    "0.0.0.0".into()
}

fn default_scheme_http_port() -> u16 {
    8091
}

fn default_news_http_port() -> u16 {
    8092
}

fn default_upstream_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    #[serde(default = "default_scrape_api_url")]
    pub scrape_api_url: String,
    #[serde(default)]
    pub scrape_api_key: String,
    #[serde(default = "default_scheme_site_origin")]
    pub scheme_site_origin: String,
    #[serde(default = "default_news_api_url")]
    pub news_api_url: String,
    #[serde(default)]
    pub news_api_key: String,
    #[serde(default = "default_identity_base_url")]
    pub identity_base_url: String,
    #[serde(default = "default_profile_base_url")]
    pub profile_base_url: String,
    /// Service key sent as the `apikey` header to the identity provider and
    /// profile store.
    #[serde(default)]
    pub service_api_key: String,
    #[serde(default = "default_http_bind")]
    pub http_bind: String,
    #[serde(default = "default_scheme_http_port")]
    pub scheme_http_port: u16,
    #[serde(default = "default_news_http_port")]
    pub news_http_port: u16,
    #[serde(default = "default_upstream_timeout_secs")]
    pub upstream_timeout_secs: u64,
}

impl Settings {
    pub fn new() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::default())
            .build()?
            .try_deserialize()
    }

    pub fn upstream_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.upstream_timeout_secs)
    }
}
