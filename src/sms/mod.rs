//! Country-aware SMS opt-in dropdown for the embedded Mailchimp form.

pub mod catalog;
pub mod controller;
pub mod format;
pub mod legal;
pub mod placeholders;
pub mod selection;

pub use controller::install;
