mod auth;
pub mod client;
pub mod session;
pub mod types;

pub use client::*;
pub use session::{BrowserSessionStore, MemorySessionStore, SessionStore};
pub use types::*;
