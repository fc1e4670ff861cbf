use crate::api::ApiError;
use web_sys::{Storage, Window};

pub fn window() -> Result<Window, ApiError> {
    web_sys::window().ok_or_else(|| ApiError::unknown("No window object"))
}

pub fn local_storage() -> Result<Storage, ApiError> {
    window()?
        .local_storage()
        .ok()
        .flatten()
        .ok_or_else(|| ApiError::unknown("localStorage is unavailable"))
}
