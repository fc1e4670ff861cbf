use serde_json::json;

use super::{
    client::{parse_failed, request_failed, ApiClient},
    session,
    types::{ApiError, LoginRequest, LoginResponse, UserResponse},
};

impl ApiClient {
    pub async fn login(&self, mut request: LoginRequest) -> Result<LoginResponse, ApiError> {
        if request.device_label.is_none() {
            request.device_label = Some(session::ensure_device_label(self.session())?);
        }
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/auth/login", base_url))
            .json(&request)
            .send()
            .await
            .map_err(request_failed)?;

        let status = response.status();
        self.handle_unauthorized_status(status);
        if !status.is_success() {
            let error = Self::error_from_response(response).await;
            log::warn!("login rejected: {}", error.code);
            return Err(error);
        }

        let login_response: LoginResponse = response.json().await.map_err(parse_failed)?;
        session::persist_session(self.session(), &login_response)?;
        log::info!("signed in as {}", login_response.user.id);
        Ok(login_response)
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let body = match self.session().get(session::REFRESH_TOKEN_KEY) {
            Some(token) => json!({ "refresh_token": token }),
            None => json!({}),
        };

        let result: Result<reqwest::Response, ApiError> = async {
            let headers = self.bearer_headers()?;
            self.http_client()
                .post(format!("{}/auth/logout", base_url))
                .headers(headers)
                .json(&body)
                .send()
                .await
                .map_err(request_failed)
        }
        .await;

        session::clear_session(self.session());
        let response = result?;
        if response.status().is_success() {
            log::info!("signed out");
            Ok(())
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    pub async fn get_me(&self) -> Result<UserResponse, ApiError> {
        if self.session().get(session::ACCESS_TOKEN_KEY).is_none()
            && self.session().get(session::CURRENT_USER_KEY).is_none()
        {
            return Err(ApiError::unauthorized("Not signed in"));
        }
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .get(format!("{}/auth/me", base_url))
            .headers(self.bearer_headers()?)
            .send()
            .await
            .map_err(request_failed)?;

        let status = response.status();
        self.handle_unauthorized_status(status);
        if status.is_success() {
            response.json().await.map_err(parse_failed)
        } else {
            Err(Self::error_from_response(response).await)
        }
    }
}
