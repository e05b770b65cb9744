use reqwest::blocking::Client;

use crate::domain::errors::{FetchError, FetchResult};
use crate::domain::models::UserRecord;

/// The fixed public endpoint the listing is populated from.
pub const USERS_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";

/// Client for the users listing endpoint.
///
/// One blocking GET per dashboard mount, no retry, no timeout. The endpoint
/// is fixed in production use; tests construct the client against a local
/// listener instead.
pub struct UsersApi {
    client: Client,
    endpoint: String,
}

impl UsersApi {
    pub fn new() -> Self {
        Self::with_endpoint(USERS_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Fetches the full user list.
    ///
    /// A non-2xx status maps to [`FetchError::Http`]; a transport failure or
    /// an undecodable body maps to [`FetchError::Network`] carrying the
    /// underlying message. Individual records decode leniently, so a payload
    /// with unexpected fields comes back with defaults rather than an error.
    pub fn fetch_users(&self) -> FetchResult<Vec<UserRecord>> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
            });
        }

        response
            .json::<Vec<UserRecord>>()
            .map_err(|e| FetchError::Network(e.to_string()))
    }
}

impl Default for UsersApi {
    fn default() -> Self {
        Self::new()
    }
}
