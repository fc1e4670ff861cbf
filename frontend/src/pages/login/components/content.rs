use leptos::*;

const HIGHLIGHTS: [&str; 3] = [
    "Publish pages and blog posts to the public site",
    "Keep images and documents in one asset vault",
    "Preview every change before it goes live",
];

#[component]
pub fn LoginContent() -> impl IntoView {
    view! {
        <section class="login-content">
            <h1 class="login-content__title">{"Cogoport CMS"}</h1>
            <p class="login-content__tagline">
                {"Manage the content of the Cogoport website from a single console."}
            </p>
            <ul class="login-content__highlights">
                {HIGHLIGHTS
                    .iter()
                    .map(|item| view! { <li>{*item}</li> })
                    .collect_view()}
            </ul>
        </section>
    }
}
