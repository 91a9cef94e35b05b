/// Configuration for the HTTP transport.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    pub api_url: String,
}

impl Default for HttpClientConfig {
    fn default() -> HttpClientConfig {
        HttpClientConfig {
            api_url: "http://127.0.0.1:8080".to_string(),
        }
    }
}
