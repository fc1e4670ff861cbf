//! Logical style names used by the login page, resolved to the classes in
//! `style/page_login.css`.

/// Stylesheet bundled next to the crate by the CSS toolchain.
pub const STYLESHEET: &str = include_str!("../style/page_login.css");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoginStyle {
    Container,
    CmsLogo,
    ContentSide,
    LoginSide,
    Background,
}

impl LoginStyle {
    pub const ALL: [LoginStyle; 5] = [
        LoginStyle::Container,
        LoginStyle::CmsLogo,
        LoginStyle::ContentSide,
        LoginStyle::LoginSide,
        LoginStyle::Background,
    ];

    /// Name the design system uses for this slot.
    pub const fn key(self) -> &'static str {
        match self {
            LoginStyle::Container => "container",
            LoginStyle::CmsLogo => "cmslogo",
            LoginStyle::ContentSide => "content_side",
            LoginStyle::LoginSide => "login_side",
            LoginStyle::Background => "background",
        }
    }

    pub const fn class(self) -> &'static str {
        match self {
            LoginStyle::Container => "page-login__container",
            LoginStyle::CmsLogo => "page-login__cmslogo",
            LoginStyle::ContentSide => "page-login__content-side",
            LoginStyle::LoginSide => "page-login__login-side",
            LoginStyle::Background => "page-login__background",
        }
    }
}
