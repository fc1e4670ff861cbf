use leptos::*;

pub mod assets;
pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;

use crate::styles::LoginStyle;
use components::{content::LoginContent, form::LoginForm};

/// Login screen layout: logo, informational panel, form panel and backdrop.
#[component]
pub fn PageLogin() -> impl IntoView {
    view! {
        <div class=LoginStyle::Container.class()>
            <img class=LoginStyle::CmsLogo.class() src=assets::LOGO_SRC alt=assets::LOGO_ALT />
            <div class=LoginStyle::ContentSide.class()>
                <LoginContent />
            </div>
            <div class=LoginStyle::LoginSide.class()>
                <LoginForm />
            </div>

            <img
                class=LoginStyle::Background.class()
                src=assets::BACKGROUND_SRC
                alt=assets::BACKGROUND_ALT
            />
        </div>
    }
}
