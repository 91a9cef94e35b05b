use crate::auth::login_user::LoginUser;
use crate::auth::logout_user::LogoutUser;
use crate::auth::refresh_token::RefreshToken;
use crate::auth::register_user::RegisterUser;
use crate::client::AuthClient;
use crate::error::ClientError;
use crate::http::client::HttpClient;
use crate::models::token::AuthToken;
use async_trait::async_trait;

const PATH: &str = "/api/v1/auth";

#[async_trait]
impl AuthClient for HttpClient {
    async fn login_user(&self, command: &LoginUser) -> Result<AuthToken, ClientError> {
        let response = self.post(&format!("{PATH}/login"), command).await?;
        Ok(response.json().await?)
    }

    async fn refresh_token(&self, command: &RefreshToken) -> Result<AuthToken, ClientError> {
        let response = self.patch(&format!("{PATH}/refresh"), command).await?;
        Ok(response.json().await?)
    }

    async fn logout_user(&self, command: &LogoutUser) -> Result<(), ClientError> {
        self.post(&format!("{PATH}/logout"), command).await?;
        Ok(())
    }

    async fn register_user(&self, command: &RegisterUser) -> Result<(), ClientError> {
        self.post(&format!("{PATH}/register"), command).await?;
        Ok(())
    }

    async fn set_access_token(&self, token: Option<String>) {
        HttpClient::set_access_token(self, token).await
    }
}
