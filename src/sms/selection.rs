use super::catalog::{Program, ProgramCatalog};
use super::format::browser_region;

/// Program preselected for a visitor: browser region, then the catalog
/// default, then the first program. `None` only for an empty catalog.
pub fn default_program<'a>(catalog: &'a ProgramCatalog, language: Option<&str>) -> Option<&'a Program> {
    if catalog.is_empty() {
        return None;
    }

    if let Some(region) = language.and_then(browser_region) {
        if let Some(program) = catalog.program(&region) {
            return Some(program);
        }
    }

    if !catalog.default_country_code.is_empty() {
        if let Some(program) = catalog.program(&catalog.default_country_code) {
            return Some(program);
        }
    }

    catalog.programs.first()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(default: &str, codes: &[&str]) -> ProgramCatalog {
        ProgramCatalog {
            default_country_code: default.to_string(),
            programs: codes
                .iter()
                .map(|code| Program {
                    country_code: code.to_string(),
                    country_calling_code: String::new(),
                    required_template: None,
                })
                .collect(),
            country_names: Vec::new(),
        }
    }

    fn selected(catalog: &ProgramCatalog, language: Option<&str>) -> Option<String> {
        default_program(catalog, language).map(|p| p.country_code.clone())
    }

    #[test]
    fn browser_language_beats_catalog_default() {
        let catalog = catalog("US", &["IE", "US"]);
        assert_eq!(selected(&catalog, Some("en-IE")).as_deref(), Some("IE"));
    }

    #[test]
    fn unknown_region_uses_catalog_default() {
        let catalog = catalog("IE", &["IE", "US"]);
        assert_eq!(selected(&catalog, Some("en-ZZ")).as_deref(), Some("IE"));
    }

    #[test]
    fn falls_back_to_first_program() {
        let catalog = catalog("ZZ", &["US", "IE"]);
        assert_eq!(selected(&catalog, Some("en-ZZ")).as_deref(), Some("US"));
        assert_eq!(selected(&catalog, None).as_deref(), Some("US"));
    }

    #[test]
    fn bare_language_tag_is_matched_uppercased() {
        let catalog = catalog("US", &["US", "DE"]);
        assert_eq!(selected(&catalog, Some("de")).as_deref(), Some("DE"));
    }

    #[test]
    fn empty_catalog_selects_nothing() {
        let catalog = catalog("IE", &[]);
        assert_eq!(selected(&catalog, Some("en-IE")), None);
    }
}
