use crate::client::Client;
use crate::error::ClientError;
use crate::http::config::HttpClientConfig;
use reqwest::{Response, Url};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Paths which are reachable without an attached bearer credential.
const PUBLIC_PATHS: &[&str] = &["/api/v1/auth/login", "/api/v1/auth/register"];

/// HTTP transport for the Cargonaut API. Holds the base URL and the
/// bearer access token attached to authenticated requests.
#[derive(Debug)]
pub struct HttpClient {
    pub api_url: Url,
    client: reqwest::Client,
    access_token: RwLock<String>,
}

impl Client for HttpClient {}

impl Default for HttpClient {
    fn default() -> Self {
        HttpClient::create(Arc::new(HttpClientConfig::default())).unwrap()
    }
}

impl HttpClient {
    pub fn new(api_url: &str) -> Result<Self, ClientError> {
        Self::create(Arc::new(HttpClientConfig {
            api_url: api_url.to_string(),
        }))
    }

    pub fn create(config: Arc<HttpClientConfig>) -> Result<Self, ClientError> {
        let api_url = Url::parse(&config.api_url).map_err(|_| ClientError::CannotParseUrl)?;
        Ok(Self {
            api_url,
            client: reqwest::Client::new(),
            access_token: RwLock::new("".to_string()),
        })
    }

    pub async fn get(&self, path: &str) -> Result<Response, ClientError> {
        let url = self.get_url(path)?;
        self.fail_if_not_authenticated(path).await?;
        let token = self.access_token.read().await;
        let response = self.client.get(url).bearer_auth(&*token).send().await?;
        Self::handle_response(response).await
    }

    pub async fn post<T: Serialize + ?Sized>(
        &self,
        path: &str,
        payload: &T,
    ) -> Result<Response, ClientError> {
        let url = self.get_url(path)?;
        self.fail_if_not_authenticated(path).await?;
        let token = self.access_token.read().await;
        let response = self
            .client
            .post(url)
            .bearer_auth(&*token)
            .json(payload)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    pub async fn put<T: Serialize + ?Sized>(
        &self,
        path: &str,
        payload: &T,
    ) -> Result<Response, ClientError> {
        let url = self.get_url(path)?;
        self.fail_if_not_authenticated(path).await?;
        let token = self.access_token.read().await;
        let response = self
            .client
            .put(url)
            .bearer_auth(&*token)
            .json(payload)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    pub async fn patch<T: Serialize + ?Sized>(
        &self,
        path: &str,
        payload: &T,
    ) -> Result<Response, ClientError> {
        let url = self.get_url(path)?;
        self.fail_if_not_authenticated(path).await?;
        let token = self.access_token.read().await;
        let response = self
            .client
            .patch(url)
            .bearer_auth(&*token)
            .json(payload)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    pub async fn delete(&self, path: &str) -> Result<Response, ClientError> {
        let url = self.get_url(path)?;
        self.fail_if_not_authenticated(path).await?;
        let token = self.access_token.read().await;
        let response = self.client.delete(url).bearer_auth(&*token).send().await?;
        Self::handle_response(response).await
    }

    pub fn get_url(&self, path: &str) -> Result<Url, ClientError> {
        self.api_url
            .join(path)
            .map_err(|_| ClientError::CannotParseUrl)
    }

    pub async fn is_authenticated(&self) -> bool {
        let token = self.access_token.read().await;
        !token.is_empty()
    }

    pub async fn set_access_token(&self, token: Option<String>) {
        let mut current_token = self.access_token.write().await;
        match token {
            Some(token) => *current_token = token,
            None => current_token.clear(),
        }
    }

    async fn handle_response(response: Response) -> Result<Response, ClientError> {
        match response.status().is_success() {
            true => Ok(response),
            false => Err(ClientError::HttpResponseError(
                response.status().as_u16(),
                response.text().await.unwrap_or("error".to_string()),
            )),
        }
    }

    async fn fail_if_not_authenticated(&self, path: &str) -> Result<(), ClientError> {
        if PUBLIC_PATHS.contains(&path) {
            return Ok(());
        }
        if !self.is_authenticated().await {
            return Err(ClientError::Unauthenticated);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_join_paths_onto_the_api_url() {
        let client = HttpClient::new("http://localhost:8080").unwrap();
        let url = client.get_url("/api/v1/trips").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/v1/trips");
    }

    #[test]
    fn should_not_create_client_from_invalid_url() {
        let client = HttpClient::new("not a url");
        assert!(matches!(client, Err(ClientError::CannotParseUrl)));
    }

    #[tokio::test]
    async fn should_not_be_authenticated_without_token() {
        let client = HttpClient::default();
        assert!(!client.is_authenticated().await);

        client.set_access_token(Some("secret".to_string())).await;
        assert!(client.is_authenticated().await);

        client.set_access_token(None).await;
        assert!(!client.is_authenticated().await);
    }

    #[tokio::test]
    async fn should_reject_protected_requests_without_token() {
        let client = HttpClient::default();
        let result = client.get("/api/v1/trips").await;
        assert!(matches!(result, Err(ClientError::Unauthenticated)));
    }
}
