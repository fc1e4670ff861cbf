use crate::{
    components::error::InlineErrorMessage,
    pages::login::view_model::use_login_view_model,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginForm() -> impl IntoView {
    let vm = use_login_view_model();
    let form = vm.form;
    let pending = vm.login_action.pending();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <form class="login-form" novalidate=true on:submit=on_submit>
            <h2>{"Sign in"}</h2>
            <div class="login-form__field">
                <label for="email">{"Email"}</label>
                <input
                    id="email"
                    name="email"
                    type="email"
                    autocomplete="username"
                    class="login-form__input"
                    placeholder="name@cogoport.com"
                    prop:value=move || form.email.get()
                    on:input=move |ev| form.email.set(event_target_value(&ev))
                />
            </div>
            <div class="login-form__field">
                <label for="password">{"Password"}</label>
                <input
                    id="password"
                    name="password"
                    type="password"
                    autocomplete="current-password"
                    class="login-form__input"
                    placeholder="Password"
                    prop:value=move || form.password.get()
                    on:input=move |ev| form.password.set(event_target_value(&ev))
                />
            </div>

            <InlineErrorMessage error=vm.error />

            <button type="submit" class="login-form__submit" disabled=move || pending.get()>
                {move || if pending.get() { "Signing in..." } else { "Sign in" }}
            </button>
        </form>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::{render_to_string, strip_hydration_markers};

    #[test]
    fn renders_credential_fields_and_submit() {
        let html = strip_hydration_markers(&render_to_string(|| view! { <LoginForm /> }));
        assert_eq!(html.matches("<form").count(), 1);
        assert!(html.contains("id=\"email\""));
        assert!(html.contains("id=\"password\""));
        assert!(html.contains("type=\"password\""));
        assert!(html.contains("type=\"submit\""));
        assert!(html.contains("Sign in"));
        assert!(!html.contains("Signing in..."));
        assert!(!html.contains("role=\"alert\""));
    }
}
