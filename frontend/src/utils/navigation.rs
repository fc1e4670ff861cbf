use super::storage::window;

/// Full page navigation; the post-login target lives outside this app's router.
pub fn redirect_to(url: &str) {
    match window() {
        Ok(window) => {
            if let Err(err) = window.location().set_href(url) {
                log::warn!("navigation to {} failed: {:?}", url, err);
            }
        }
        Err(err) => log::warn!("cannot navigate to {}: {}", url, err),
    }
}
