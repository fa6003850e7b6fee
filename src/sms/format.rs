//! String helpers for the SMS country dropdown.

const REGIONAL_INDICATOR_OFFSET: u32 = 127_397;

/// Regional-indicator rendering of a country code, `"IE"` becomes 🇮🇪.
pub fn country_flag(country_code: &str) -> String {
    country_code
        .to_uppercase()
        .chars()
        .filter_map(|c| char::from_u32(c as u32 + REGIONAL_INDICATOR_OFFSET))
        .collect()
}

/// Single-pass escape of `& < > " ' /`.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '/' => out.push_str("&#x2F;"),
            _ => out.push(c),
        }
    }
    out
}

/// Replaces script-capable URLs with `#`, anything else is returned as is.
pub fn sanitize_url(url: &str) -> String {
    let normalized = url.trim().to_lowercase();
    let dangerous = ["javascript:", "data:", "vbscript:"]
        .iter()
        .any(|scheme| normalized.starts_with(scheme));
    if dangerous {
        "#".to_string()
    } else {
        url.to_string()
    }
}

/// Country candidate from a browser language tag: `en-IE` gives `IE`,
/// a tag without region gives the whole tag uppercased.
pub fn browser_region(language: &str) -> Option<String> {
    if language.is_empty() {
        return None;
    }
    match language.split('-').nth(1) {
        Some(region) => Some(region.to_uppercase()),
        None => Some(language.to_uppercase()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_is_two_regional_indicators() {
        for code in ["IE", "US", "de", "Gb"] {
            let flag = country_flag(code);
            let points: Vec<u32> = flag.chars().map(|c| c as u32).collect();
            let expected: Vec<u32> = code
                .to_uppercase()
                .chars()
                .map(|c| c as u32 + 127_397)
                .collect();
            assert_eq!(points.len(), 2);
            assert_eq!(points, expected);
            assert!(points.iter().all(|p| (0x1F1E6..=0x1F1FF).contains(p)));
        }
    }

    #[test]
    fn flag_of_ireland() {
        assert_eq!(country_flag("IE"), "\u{1F1EE}\u{1F1EA}");
        assert_eq!(country_flag(""), "");
    }

    #[test]
    fn escape_removes_raw_markup_characters() {
        let escaped = escape_html(r#"<a href="x">Tom & 'Jerry'/</a>"#);
        for raw in ['<', '>', '"', '\'', '/'] {
            assert!(!escaped.contains(raw), "raw {raw} left in {escaped}");
        }
        assert_eq!(
            escaped,
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#x27;Jerry&#x27;&#x2F;&lt;&#x2F;a&gt;"
        );
    }

    #[test]
    fn escape_is_single_pass() {
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn dangerous_urls_become_hash() {
        assert_eq!(sanitize_url("javascript:alert(1)"), "#");
        assert_eq!(sanitize_url("  JavaScript:alert(1)"), "#");
        assert_eq!(sanitize_url("DATA:text/html,hi"), "#");
        assert_eq!(sanitize_url("vbscript:msgbox"), "#");
    }

    #[test]
    fn safe_urls_pass_through_untouched() {
        assert_eq!(sanitize_url("https://x.com"), "https://x.com");
        assert_eq!(sanitize_url(" /terms "), " /terms ");
        assert_eq!(sanitize_url("mailto:a@b.c"), "mailto:a@b.c");
    }

    #[test]
    fn region_from_language_tag() {
        assert_eq!(browser_region("en-IE").as_deref(), Some("IE"));
        assert_eq!(browser_region("de-at").as_deref(), Some("AT"));
        assert_eq!(browser_region("zh-Hant-TW").as_deref(), Some("HANT"));
        assert_eq!(browser_region("fr").as_deref(), Some("FR"));
        assert_eq!(browser_region(""), None);
    }
}
