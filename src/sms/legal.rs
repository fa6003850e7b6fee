//! Country-specific SMS consent text.
//!
//! Mailchimp ships the consent text as a small HTML fragment such as
//! `<div>By subscribing you agree to the</div><a href="…" target="_blank">Terms</a>.`
//! Only two things are kept from it: the plain text around the markup and
//! the first link. Everything is rendered with text nodes, never `innerHTML`.

use super::format::{escape_html, sanitize_url};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegalLink {
    /// Already passed through [`sanitize_url`].
    pub href: String,
    /// Already HTML-escaped.
    pub target: Option<String>,
    /// Already HTML-escaped.
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegalText {
    pub text: String,
    pub link: Option<LegalLink>,
}

impl LegalText {
    pub fn parse(template: &str) -> Self {
        let lower = template.to_ascii_lowercase();
        let mut text = String::with_capacity(template.len());
        let mut link = None;
        let mut pos = 0;

        while let Some(offset) = template[pos..].find('<') {
            let start = pos + offset;
            text.push_str(&template[pos..start]);

            let Some(close) = template[start..].find('>').map(|i| start + i) else {
                pos = start;
                break;
            };
            let body = &template[start + 1..close];

            if is_tag(body, "div") {
                pos = close + 1;
                continue;
            }

            if is_opening(body, "a") {
                if let Some(end) = lower[close + 1..].find("</a>").map(|i| close + 1 + i) {
                    if link.is_none() {
                        link = anchor(&body[1..], &template[close + 1..end]);
                    }
                    pos = end + "</a>".len();
                    continue;
                }
            }

            text.push_str(&template[start..=close]);
            pos = close + 1;
        }
        text.push_str(&template[pos..]);

        // the template ends with its own punctuation, a period is added back on render
        text.pop();

        Self { text, link }
    }
}

fn is_tag(body: &str, name: &str) -> bool {
    is_opening(body, name) || body.strip_prefix('/').map_or(false, |rest| is_opening(rest, name))
}

fn is_opening(body: &str, name: &str) -> bool {
    let Some(prefix) = body.get(..name.len()) else {
        return false;
    };
    prefix.eq_ignore_ascii_case(name)
        && body[name.len()..]
            .chars()
            .next()
            .map_or(true, |c| c.is_ascii_whitespace() || c == '/')
}

fn anchor(attrs: &str, inner: &str) -> Option<LegalLink> {
    let attrs = attributes(attrs);
    let href = attrs.iter().find(|(name, _)| name == "href")?.1.as_str();
    let target = attrs
        .iter()
        .find(|(name, _)| name == "target")
        .map(|(_, value)| escape_html(value));
    Some(LegalLink {
        href: sanitize_url(href),
        target,
        text: escape_html(inner),
    })
}

/// `name="value"`, `name='value'` and bare `name=value` pairs; names lowercased.
fn attributes(input: &str) -> Vec<(String, String)> {
    let mut attrs = Vec::new();
    let mut rest = input.trim_start();

    while !rest.is_empty() {
        let name_end = rest
            .find(|c: char| c == '=' || c.is_ascii_whitespace() || c == '/')
            .unwrap_or(rest.len());
        let name = rest[..name_end].to_ascii_lowercase();
        rest = rest[name_end..].trim_start();

        let value = if let Some(after_eq) = rest.strip_prefix('=') {
            let after_eq = after_eq.trim_start();
            match after_eq.chars().next() {
                Some(quote @ ('"' | '\'')) => {
                    let inner = &after_eq[1..];
                    let end = inner.find(quote).unwrap_or(inner.len());
                    rest = inner.get(end + 1..).unwrap_or("");
                    inner[..end].to_string()
                }
                _ => {
                    let end = after_eq
                        .find(|c: char| c.is_ascii_whitespace())
                        .unwrap_or(after_eq.len());
                    rest = &after_eq[end..];
                    after_eq[..end].to_string()
                }
            }
        } else {
            if name.is_empty() {
                // stray '/'
                rest = &rest[1..];
                rest = rest.trim_start();
                continue;
            }
            String::new()
        };

        if !name.is_empty() {
            attrs.push((name, value));
        }
        rest = rest.trim_start();
    }
    attrs
}
