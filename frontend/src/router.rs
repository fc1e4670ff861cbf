use crate::{
    pages::{NotFound, PageLogin},
    state::auth::AuthProvider,
};
use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

pub const LOGIN_PATH: &str = "/login";

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Cogoport CMS" />
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes>
                <Route path="/" view=|| view! { <Redirect path=LOGIN_PATH /> } />
                <Route path=LOGIN_PATH view=PageLogin />
                <Route path="/*any" view=NotFound />
            </Routes>
        </Router>
    }
}
