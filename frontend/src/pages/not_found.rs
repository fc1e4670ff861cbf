use leptos::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <main class="not-found">
            <h1>{"Page not found"}</h1>
            <a href="/login">{"Go to sign in"}</a>
        </main>
    }
}
