use log::{debug, warn};
use serde::{Deserialize, Deserializer, Serialize};
use wasm_bindgen::JsValue;
use web_sys::{Document, Window};

use crate::config;
use crate::error::Result;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    pub country_code: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub country_calling_code: String,
    #[serde(default)]
    pub required_template: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CountryName {
    pub code: String,
    pub name: String,
}

/// Programs offered by the Mailchimp SMS field, shared read-only by every
/// controller on the page.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProgramCatalog {
    #[serde(default = "default_country_code")]
    pub default_country_code: String,
    #[serde(default)]
    pub programs: Vec<Program>,
    #[serde(default, rename = "smsProgramDataCountryNames")]
    pub country_names: Vec<CountryName>,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn default_country_code() -> String {
    config::SMS_DEFAULT_COUNTRY.to_string()
}

impl Default for ProgramCatalog {
    fn default() -> Self {
        Self {
            default_country_code: default_country_code(),
            programs: Vec::new(),
            country_names: Vec::new(),
        }
    }
}

impl ProgramCatalog {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_js(value: JsValue) -> Result<Self> {
        Ok(serde_wasm_bindgen::from_value(value)?)
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }

    pub fn program(&self, country_code: &str) -> Option<&Program> {
        self.programs.iter().find(|p| p.country_code == country_code)
    }

    /// Display name for a code, the code itself when unnamed.
    pub fn country_name<'a>(&'a self, country_code: &'a str) -> &'a str {
        self.country_names
            .iter()
            .find(|c| c.code == country_code)
            .map(|c| c.name.as_str())
            .unwrap_or(country_code)
    }

    /// Inline JSON script first, then `window.MC.smsPhoneData`, then the
    /// empty default. A source that fails to parse is skipped.
    pub fn load(window: &Window, document: &Document) -> Self {
        if let Some(script) = document.get_element_by_id(config::SMS_CATALOG_SCRIPT_ID) {
            let json = script.text_content().unwrap_or_default();
            match Self::from_json(&json) {
                Ok(catalog) => {
                    debug!("Loaded {} SMS programs from inline JSON", catalog.programs.len());
                    return catalog;
                }
                Err(e) => warn!("Ignoring inline SMS catalog: {}", e),
            }
        }

        if let Some(value) = mc_sms_phone_data(window) {
            match Self::from_js(value) {
                Ok(catalog) => {
                    debug!("Loaded {} SMS programs from window.MC", catalog.programs.len());
                    return catalog;
                }
                Err(e) => warn!("Ignoring window.MC.smsPhoneData: {}", e),
            }
        }

        debug!("No SMS catalog on page, dropdowns stay empty");
        Self::default()
    }
}

fn mc_sms_phone_data(window: &Window) -> Option<JsValue> {
    let mc = js_sys::Reflect::get(window, &JsValue::from_str("MC")).ok()?;
    if mc.is_undefined() || mc.is_null() {
        return None;
    }
    let data = js_sys::Reflect::get(&mc, &JsValue::from_str("smsPhoneData")).ok()?;
    if data.is_undefined() || data.is_null() {
        None
    } else {
        Some(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"{
        "defaultCountryCode": "US",
        "programs": [
            { "countryCode": "IE", "countryCallingCode": "+353", "requiredTemplate": "<div>Hi</div>." },
            { "countryCode": "US", "countryCallingCode": "+1", "requiredTemplate": null },
            { "countryCode": "GB" }
        ],
        "smsProgramDataCountryNames": [
            { "code": "IE", "name": "Ireland" }
        ]
    }"#;

    #[test]
    fn parses_mailchimp_shape() {
        let catalog = ProgramCatalog::from_json(CATALOG).unwrap();
        assert_eq!(catalog.default_country_code, "US");
        assert_eq!(catalog.programs.len(), 3);
        assert_eq!(catalog.program("IE").unwrap().country_calling_code, "+353");
        assert_eq!(catalog.program("US").unwrap().required_template, None);
        assert_eq!(catalog.program("GB").unwrap().country_calling_code, "");
        assert!(catalog.program("FR").is_none());
    }

    #[test]
    fn country_name_falls_back_to_code() {
        let catalog = ProgramCatalog::from_json(CATALOG).unwrap();
        assert_eq!(catalog.country_name("IE"), "Ireland");
        assert_eq!(catalog.country_name("US"), "US");
    }

    #[test]
    fn missing_fields_use_defaults() {
        let catalog = ProgramCatalog::from_json("{}").unwrap();
        assert_eq!(catalog, ProgramCatalog::default());
        assert_eq!(catalog.default_country_code, "IE");
        assert!(catalog.is_empty());
    }

    #[test]
    fn null_calling_code_keeps_the_rest_of_the_catalog() {
        let catalog = ProgramCatalog::from_json(
            r#"{
                "programs": [
                    { "countryCode": "IE", "countryCallingCode": "+353" },
                    { "countryCode": "XK", "countryCallingCode": null }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(catalog.programs.len(), 2);
        assert_eq!(catalog.program("IE").unwrap().country_calling_code, "+353");
        assert_eq!(catalog.program("XK").unwrap().country_calling_code, "");
    }

    #[test]
    fn malformed_programs_are_rejected() {
        assert!(ProgramCatalog::from_json(r#"{ "programs": "nope" }"#).is_err());
    }
}
