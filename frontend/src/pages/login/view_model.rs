use super::utils;
use crate::api::{ApiError, LoginRequest};
use crate::{config, state::auth, utils::navigation};
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
        }
    }
}

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub error: RwSignal<Option<ApiError>>,
    pub login_action: Action<LoginRequest, Result<(), ApiError>>,
}

impl LoginViewModel {
    /// Validates the current input and builds the request to dispatch.
    pub fn build_request(&self) -> Result<LoginRequest, ApiError> {
        let email = self.form.email.get_untracked();
        let password = self.form.password.get_untracked();
        utils::validate_credentials(&email, &password).map_err(ApiError::validation)?;
        Ok(LoginRequest {
            email: utils::normalize_email(&email),
            password,
            device_label: None,
        })
    }

    pub fn submit(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }
        match self.build_request() {
            Ok(request) => {
                self.error.set(None);
                self.login_action.dispatch(request);
            }
            Err(err) => self.error.set(Some(err)),
        }
    }

    /// Applies a finished login to the form. Returns `true` once signed in.
    pub fn apply_result(&self, result: &Result<(), ApiError>) -> bool {
        match result {
            Ok(()) => {
                self.error.set(None);
                self.form.password.set(String::new());
                true
            }
            Err(err) => {
                log::warn!("login failed: {}", err.code);
                self.error.set(Some(err.clone()));
                false
            }
        }
    }
}

pub async fn post_login_target() -> String {
    config::await_post_login_url().await
}

pub fn use_login_view_model() -> LoginViewModel {
    let vm = LoginViewModel {
        form: LoginFormState::default(),
        error: create_rw_signal(None::<ApiError>),
        login_action: auth::use_login_action(),
    };

    create_effect(move |_| {
        let Some(result) = vm.login_action.value().get() else {
            return;
        };
        if vm.apply_result(&result) {
            spawn_local(async move {
                navigation::redirect_to(&post_login_target().await);
            });
        }
    });

    vm
}
