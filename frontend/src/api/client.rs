use std::rc::Rc;

use reqwest::{header::HeaderMap, Client, Response, StatusCode};

use super::{
    session::{self, BrowserSessionStore, SessionStore},
    types::ApiError,
};
use crate::config;

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    session: Rc<dyn SessionStore>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            session: Rc::new(BrowserSessionStore),
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
            ..Self::new()
        }
    }

    pub fn with_session_store(mut self, store: Rc<dyn SessionStore>) -> Self {
        self.session = store;
        self
    }

    pub fn session(&self) -> &dyn SessionStore {
        self.session.as_ref()
    }

    pub(super) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(super) async fn resolved_base_url(&self) -> String {
        let base = match &self.base_url {
            Some(base) => base.clone(),
            None => config::await_api_base_url().await,
        };
        base.trim_end_matches('/').to_string()
    }

    pub(super) fn bearer_headers(&self) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        if let Some(token) = self.session.get(session::ACCESS_TOKEN_KEY) {
            headers.insert(
                reqwest::header::AUTHORIZATION,
                format!("Bearer {}", token)
                    .parse()
                    .map_err(|_| ApiError::unauthorized("Invalid token format"))?,
            );
        }
        Ok(headers)
    }

    pub(super) fn handle_unauthorized_status(&self, status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED {
            log::warn!("session rejected by the API; clearing stored credentials");
            session::clear_session(self.session());
        }
    }

    /// Turns a non-2xx response into the server's error body, or a generic
    /// request failure when the body is not an `ApiError`.
    pub(super) async fn error_from_response(response: Response) -> ApiError {
        let status = response.status();
        match response.json::<ApiError>().await {
            Ok(error) => error,
            Err(_) => ApiError::request_failed(format!("Request failed with status {}", status)),
        }
    }
}

pub(super) fn request_failed(err: reqwest::Error) -> ApiError {
    ApiError::request_failed(format!("Request failed: {}", err))
}

pub(super) fn parse_failed(err: reqwest::Error) -> ApiError {
    ApiError::unknown(format!("Failed to parse response: {}", err))
}
