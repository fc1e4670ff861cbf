use crate::{
    api::{ApiClient, ApiError, LoginRequest, UserResponse},
    pages::login::repository::LoginRepository,
};
use leptos::*;
use std::rc::Rc;

type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

/// Who is signed in, as far as this page knows.
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub user: Option<UserResponse>,
    pub is_authenticated: bool,
    pub loading: bool,
}

impl AuthState {
    fn checking() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    fn sign_in(&mut self, user: UserResponse) {
        self.user = Some(user);
        self.is_authenticated = true;
        self.loading = false;
    }

    fn sign_out(&mut self) {
        *self = Self::default();
    }
}

/// Provides [`AuthState`] and restores an existing session on mount.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let (state, set_state) = create_signal(AuthState::checking());
    provide_context::<AuthContext>((state, set_state));

    let repo = use_login_repository();
    spawn_local(async move {
        let restored = repo.current_user().await;
        set_state.update(|auth| match restored {
            Ok(user) => auth.sign_in(user),
            Err(err) => {
                log::debug!("no session to restore: {}", err);
                auth.sign_out();
            }
        });
    });

    children()
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

fn use_login_repository() -> LoginRepository {
    let api = use_context::<ApiClient>().unwrap_or_default();
    LoginRepository::new_with_client(Rc::new(api))
}

pub async fn login_request(
    request: LoginRequest,
    repo: &LoginRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    set_auth_state.update(|auth| auth.loading = true);
    let outcome = repo.login(request).await;
    set_auth_state.update(|auth| match &outcome {
        Ok(response) => auth.sign_in(response.user.clone()),
        Err(_) => auth.loading = false,
    });
    outcome.map(|_| ())
}

/// Signs out remotely; local state is reset even when the server call fails.
pub async fn logout(
    repo: &LoginRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    let outcome = repo.logout().await;
    set_auth_state.update(AuthState::sign_out);
    outcome
}

pub fn use_login_action() -> Action<LoginRequest, Result<(), ApiError>> {
    let (_, set_auth) = use_auth();
    let repo = use_login_repository();

    create_action(move |request: &LoginRequest| {
        let (request, repo) = (request.clone(), repo.clone());
        async move { login_request(request, &repo, set_auth).await }
    })
}

pub fn use_logout_action() -> Action<(), Result<(), ApiError>> {
    let (_, set_auth) = use_auth();
    let repo = use_login_repository();

    create_action(move |_: &()| {
        let repo = repo.clone();
        async move { logout(&repo, set_auth).await }
    })
}
