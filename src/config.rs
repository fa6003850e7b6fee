use log::Level;

pub const HUBSPOT_SUBMIT_URL: &str =
    "https://api.hsforms.com/submissions/v3/integration/submit/147115643/74ac6d15-1778-4c05-bb55-6f3929ab1137";

/// Host element the subscribe form is rendered into.
pub const SUBSCRIBE_ROOT_ID: &str = "newsletter-signup";

/// Inline JSON catalog, checked before `window.MC.smsPhoneData`.
pub const SMS_CATALOG_SCRIPT_ID: &str = "sms-program-data";
pub const SMS_DEFAULT_COUNTRY: &str = "IE";

pub const DESKTOP_MEDIA_QUERY: &str = "(min-width: 1024px)";
pub const LOGO_SRC_WHITE: &str = "/assets/img/logo/white-logo/m-b-logo-124w.avif";
pub const LOGO_SRC_BLACK: &str = "/assets/img/logo/black-logo/M(2).png";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
