pub const LOGO_SRC: &str = "https://cdn.cogoport.io/cms-prod/cogo_public/vault/original/H4.png";
pub const LOGO_ALT: &str = "logo";

pub const BACKGROUND_SRC: &str =
    "https://cdn.cogoport.io/cms-prod/cogo_public/vault/original/cms-back.png";
pub const BACKGROUND_ALT: &str = "cms-background";
