pub mod login;
pub mod not_found;

pub use login::PageLogin;
pub use not_found::NotFound;
