use crate::error::ClientError;
use crate::http::client::HttpClient;
use crate::http::config::HttpClientConfig;
use crate::session::storage::{FileTokenStorage, TokenStorage};
use crate::session::SessionManager;
use crate::stores::alert::AlertChannel;
use crate::stores::tanks::FuelTankStore;
use crate::stores::trips::TripStore;
use crate::stores::trucks::TruckStore;
use crate::stores::users::UserStore;
use crate::stores::vehicles::VehicleStore;
use std::sync::Arc;

/// The main client struct, the single owner of the application state: the
/// shared HTTP transport, the session, every resource store, and the
/// alert channel.
///
/// # Example
///
/// ```rust,no_run
/// use cargonaut::clients::client::CargonautClient;
///
/// # async fn example() -> Result<(), cargonaut::error::ClientError> {
/// let client = CargonautClient::builder()
///     .with_api_url("https://my-cargonaut.com")
///     .build()?;
/// client.connect().await?;
///
/// client.session().login("jane@example.com", "secret").await?;
/// let trips = client.trips().list().await?;
/// # Ok(())
/// # }
/// ```
pub struct CargonautClient {
    transport: Arc<HttpClient>,
    alerts: AlertChannel,
    session: SessionManager,
    trips: TripStore,
    users: UserStore,
    vehicles: VehicleStore,
    trucks: TruckStore,
    tanks: FuelTankStore,
}

impl CargonautClient {
    /// Creates a client against the default API URL, persisting sessions
    /// in the user's data directory.
    pub fn new() -> Result<Self, ClientError> {
        Self::builder().build()
    }

    pub fn builder() -> CargonautClientBuilder {
        CargonautClientBuilder::default()
    }

    /// Restores a previously persisted session, if any.
    pub async fn connect(&self) -> Result<(), ClientError> {
        self.session.restore().await
    }

    /// Low-level access to the underlying HTTP transport.
    pub fn transport(&self) -> &HttpClient {
        &self.transport
    }

    pub fn alerts(&self) -> &AlertChannel {
        &self.alerts
    }

    pub fn session(&self) -> &SessionManager {
        &self.session
    }

    pub fn trips(&self) -> &TripStore {
        &self.trips
    }

    pub fn users(&self) -> &UserStore {
        &self.users
    }

    pub fn vehicles(&self) -> &VehicleStore {
        &self.vehicles
    }

    pub fn trucks(&self) -> &TruckStore {
        &self.trucks
    }

    pub fn tanks(&self) -> &FuelTankStore {
        &self.tanks
    }
}

#[derive(Default)]
pub struct CargonautClientBuilder {
    config: Option<HttpClientConfig>,
    storage: Option<Arc<dyn TokenStorage>>,
}

impl CargonautClientBuilder {
    pub fn with_api_url(mut self, api_url: &str) -> Self {
        self.config = Some(HttpClientConfig {
            api_url: api_url.to_string(),
        });
        self
    }

    pub fn with_config(mut self, config: HttpClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_token_storage(mut self, storage: Arc<dyn TokenStorage>) -> Self {
        self.storage = Some(storage);
        self
    }

    pub fn build(self) -> Result<CargonautClient, ClientError> {
        let config = self.config.unwrap_or_default();
        let transport = Arc::new(HttpClient::create(Arc::new(config))?);
        let storage = self
            .storage
            .unwrap_or_else(|| Arc::new(FileTokenStorage::new()));
        let alerts = AlertChannel::new();
        let session = SessionManager::new(transport.clone(), storage, alerts.clone());
        let trips = TripStore::new(transport.clone(), alerts.clone());
        let users = UserStore::new(transport.clone(), alerts.clone());
        let vehicles = VehicleStore::new(transport.clone(), alerts.clone());
        let trucks = TruckStore::new(transport.clone(), alerts.clone());
        let tanks = FuelTankStore::new(transport.clone(), alerts.clone());
        Ok(CargonautClient {
            transport,
            alerts,
            session,
            trips,
            users,
            vehicles,
            trucks,
            tanks,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::storage::MemoryTokenStorage;

    #[test]
    fn should_build_with_defaults() {
        let client = CargonautClient::new().unwrap();
        assert_eq!(client.transport().api_url.as_str(), "http://127.0.0.1:8080/");
    }

    #[test]
    fn should_build_against_a_custom_api_url() {
        let client = CargonautClient::builder()
            .with_api_url("https://my-cargonaut.com")
            .with_token_storage(Arc::new(MemoryTokenStorage::new()))
            .build()
            .unwrap();
        assert_eq!(client.transport().api_url.as_str(), "https://my-cargonaut.com/");
    }

    #[test]
    fn should_not_build_from_an_invalid_api_url() {
        let result = CargonautClient::builder().with_api_url("not a url").build();
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn should_start_logged_out_with_empty_stores() {
        let client = CargonautClient::builder()
            .with_token_storage(Arc::new(MemoryTokenStorage::new()))
            .build()
            .unwrap();
        client.connect().await.unwrap();

        assert!(!client.session().is_logged_in().await);
        assert!(client.trips().trips().await.is_empty());
        assert_eq!(client.users().user().await, None);
        assert_eq!(client.alerts().last(), None);
    }
}
