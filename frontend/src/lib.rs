pub mod api;
mod components;
pub mod config;
pub mod pages;
mod router;
pub mod state;
pub mod styles;
mod utils;

#[cfg(test)]
mod test_support;

pub use pages::PageLogin;
pub use router::{App, LOGIN_PATH};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }
    log::info!("Starting CMS frontend (wasm)");

    // Resolve runtime config early; requests await the same cached value.
    wasm_bindgen_futures::spawn_local(async move {
        config::init().await;
    });

    leptos::mount_to_body(App);
}
