use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, HtmlInputElement, HtmlSelectElement, Window};

use super::catalog::ProgramCatalog;
use super::format::{country_flag, escape_html};
use super::legal::LegalText;
use super::placeholders::{phone_hint, PhoneHint};
use super::selection::default_program;
use crate::dom;
use crate::error::Result;

const DROPDOWN_PREFIX: &str = "country-select-";

/// `<option>` markup for every program, labels escaped.
pub fn render_options(catalog: &ProgramCatalog) -> String {
    catalog
        .programs
        .iter()
        .map(|program| {
            let code = &program.country_code;
            format!(
                "<option value=\"{}\">{} {} {}</option>",
                escape_html(code),
                country_flag(code),
                escape_html(catalog.country_name(code)),
                escape_html(&program.country_calling_code),
            )
        })
        .collect()
}

/// Everything the widget shows for one selected country. Built from a single
/// code so the dropdown, flag, phone prefix and legal text cannot disagree.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionUpdate {
    pub country_code: String,
    pub flag: String,
    pub aria_label: String,
    pub calling_code: Option<String>,
    pub hint: &'static PhoneHint,
    pub legal: Option<LegalText>,
}

impl SelectionUpdate {
    pub fn for_country(catalog: &ProgramCatalog, country_code: &str) -> Self {
        let program = catalog.program(country_code);
        Self {
            country_code: country_code.to_string(),
            flag: country_flag(country_code),
            aria_label: format!("{} flag", escape_html(country_code)),
            calling_code: program
                .map(|p| p.country_calling_code.clone())
                .filter(|code| !code.is_empty()),
            hint: phone_hint(country_code),
            legal: program
                .and_then(|p| p.required_template.as_deref())
                .map(LegalText::parse),
        }
    }
}

/// DOM nodes of one SMS phone field, resolved once by id.
pub struct SmsFieldNodes {
    pub dropdown: HtmlSelectElement,
    pub flag_display: HtmlElement,
    pub flag_emoji: Option<HtmlElement>,
    pub phone_input: Option<HtmlInputElement>,
    pub legal_text: Option<HtmlElement>,
    pub help_text: Option<HtmlElement>,
}

impl SmsFieldNodes {
    /// `None` when the dropdown or the flag display is missing.
    pub fn resolve(document: &Document, field: &str) -> Option<Self> {
        let dropdown = dom::by_id(document, &format!("{}{}", DROPDOWN_PREFIX, field))?;
        let flag_display: HtmlElement = dom::by_id(document, &format!("flag-display-{}", field))?;
        let flag_emoji = flag_display
            .query_selector(&format!("#flag-emoji-{}", field))
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());

        Some(Self {
            dropdown,
            flag_display,
            flag_emoji,
            phone_input: dom::by_id(document, &format!("mce-{}", field)),
            legal_text: dom::by_id(document, &format!("legal-text-{}", field)),
            help_text: dom::by_id(document, &format!("help-text-{}", field))
                .or_else(|| dom::by_id(document, "help-text")),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldState {
    Uninitialized,
    Ready { selected: Option<String> },
}

pub struct SmsFieldController {
    field: String,
    catalog: Rc<ProgramCatalog>,
    nodes: SmsFieldNodes,
    state: FieldState,
}

impl SmsFieldController {
    pub fn new(field: impl Into<String>, catalog: Rc<ProgramCatalog>, nodes: SmsFieldNodes) -> Self {
        Self {
            field: field.into(),
            catalog,
            nodes,
            state: FieldState::Uninitialized,
        }
    }

    /// Renders the options, applies the default country and wires the
    /// listeners. The controller lives as long as the page.
    pub fn attach(mut self, language: Option<&str>) -> Result<Rc<RefCell<Self>>> {
        self.nodes.dropdown.set_inner_html(&render_options(&self.catalog));

        let default = default_program(&self.catalog, language).map(|p| p.country_code.clone());
        match default {
            Some(code) => {
                debug!("SMS field {} defaults to {}", self.field, code);
                self.select(&code)?;
            }
            None => {
                debug!("SMS field {} has no programs", self.field);
                self.state = FieldState::Ready { selected: None };
            }
        }

        let dropdown = self.nodes.dropdown.clone();
        let flag_display = self.nodes.flag_display.clone();
        let controller = Rc::new(RefCell::new(self));

        {
            let dropdown = dropdown.clone();
            dom::listen(&flag_display, "click", move |_: Event| {
                let _ = dropdown.focus();
            })?;
        }

        {
            let controller = controller.clone();
            let source = dropdown.clone();
            dom::listen(&dropdown, "change", move |_: Event| {
                let selected = source.value();
                if selected.is_empty() {
                    return;
                }
                let mut controller = controller.borrow_mut();
                if let Err(e) = controller.select(&selected) {
                    warn!("SMS field {}: {}", controller.field, e);
                }
            })?;
        }

        Ok(controller)
    }

    /// Applies `country_code` to every dependent node.
    pub fn select(&mut self, country_code: &str) -> Result<()> {
        if let FieldState::Ready { selected: Some(previous) } = &self.state {
            debug!("SMS field {}: {} -> {}", self.field, previous, country_code);
        }
        let update = SelectionUpdate::for_country(&self.catalog, country_code);
        self.apply(&update)?;
        self.state = FieldState::Ready {
            selected: Some(update.country_code),
        };
        Ok(())
    }

    fn apply(&self, update: &SelectionUpdate) -> Result<()> {
        let nodes = &self.nodes;
        nodes.dropdown.set_value(&update.country_code);

        if let Some(flag) = &nodes.flag_emoji {
            flag.set_text_content(Some(&update.flag));
            flag.set_attribute("aria-label", &update.aria_label)?;
        }

        if let Some(input) = &nodes.phone_input {
            if let Some(calling_code) = &update.calling_code {
                input.set_value(calling_code);
            }
            input.set_placeholder(update.hint.placeholder);
        }

        if let Some(help) = &nodes.help_text {
            help.set_text_content(Some(update.hint.help_text));
        }

        if let (Some(container), Some(legal)) = (&nodes.legal_text, &update.legal) {
            render_legal_text(container, legal)?;
        }
        Ok(())
    }
}

fn render_legal_text(container: &Element, legal: &LegalText) -> Result<()> {
    let Some(link) = &legal.link else {
        container.set_text_content(Some(&format!("{}.", legal.text)));
        return Ok(());
    };

    let Some(document) = container.owner_document() else {
        return Ok(());
    };
    container.set_text_content(Some(&format!("{} ", legal.text)));

    let anchor = document.create_element("a")?;
    anchor.set_attribute("href", &link.href)?;
    if let Some(target) = &link.target {
        anchor.set_attribute("target", target)?;
    }
    anchor.set_text_content(Some(&link.text));
    container.append_child(&anchor)?;
    container.append_child(&document.create_text_node("."))?;
    Ok(())
}

/// Builds one controller per `#country-select-{field}` on the page.
pub fn install(window: &Window, document: &Document) -> Result<usize> {
    let fields = document.query_selector_all(&format!("[id^=\"{}\"]", DROPDOWN_PREFIX))?;
    if fields.length() == 0 {
        return Ok(0);
    }

    let catalog = Rc::new(ProgramCatalog::load(window, document));
    let language = window.navigator().language();
    let mut attached = 0;

    for i in 0..fields.length() {
        let Some(element) = fields.get(i).and_then(|node| node.dyn_into::<Element>().ok()) else {
            continue;
        };
        let id = element.id();
        let Some(field) = id.strip_prefix(DROPDOWN_PREFIX).filter(|f| !f.is_empty()) else {
            continue;
        };
        let Some(nodes) = SmsFieldNodes::resolve(document, field) else {
            debug!("Skipping SMS field {}: markup incomplete", field);
            continue;
        };
        if let Err(e) = SmsFieldController::new(field, catalog.clone(), nodes).attach(language.as_deref()) {
            warn!("SMS field {} not attached: {}", field, e);
            continue;
        }
        attached += 1;
    }

    info!("Attached {} SMS country dropdown(s)", attached);
    Ok(attached)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sms::catalog::{CountryName, Program};

    fn catalog() -> ProgramCatalog {
        ProgramCatalog {
            default_country_code: "IE".to_string(),
            programs: vec![
                Program {
                    country_code: "IE".to_string(),
                    country_calling_code: "+353".to_string(),
                    required_template: Some(
                        r#"<div>Text</div><a href="https://x.com" target="_blank">Terms</a>!"#.to_string(),
                    ),
                },
                Program {
                    country_code: "DE".to_string(),
                    country_calling_code: String::new(),
                    required_template: None,
                },
            ],
            country_names: vec![CountryName {
                code: "IE".to_string(),
                name: "Ireland <& Co>".to_string(),
            }],
        }
    }

    #[test]
    fn options_carry_flag_name_and_calling_code() {
        let html = render_options(&catalog());
        assert_eq!(
            html,
            "<option value=\"IE\">\u{1F1EE}\u{1F1EA} Ireland &lt;&amp; Co&gt; +353</option>\
             <option value=\"DE\">\u{1F1E9}\u{1F1EA} DE </option>"
        );
    }

    #[test]
    fn empty_catalog_renders_no_options() {
        assert_eq!(render_options(&ProgramCatalog::default()), "");
    }

    #[test]
    fn update_is_derived_from_one_code() {
        let update = SelectionUpdate::for_country(&catalog(), "IE");
        assert_eq!(update.country_code, "IE");
        assert_eq!(update.flag, country_flag("IE"));
        assert_eq!(update.aria_label, "IE flag");
        assert_eq!(update.calling_code.as_deref(), Some("+353"));
        assert_eq!(update.hint.country_code, "IE");
        let legal = update.legal.unwrap();
        assert_eq!(legal.text, "Text");
        assert_eq!(legal.link.unwrap().href, "https://x.com");
    }

    #[test]
    fn update_without_calling_code_or_template() {
        let update = SelectionUpdate::for_country(&catalog(), "DE");
        assert_eq!(update.calling_code, None);
        assert_eq!(update.legal, None);
        assert!(update.hint.help_text.starts_with("Fügen Sie"));
    }

    #[test]
    fn unknown_country_still_gets_flag_and_us_hint() {
        let update = SelectionUpdate::for_country(&catalog(), "XX");
        assert_eq!(update.flag.chars().count(), 2);
        assert_eq!(update.hint.country_code, "US");
        assert_eq!(update.calling_code, None);
        assert_eq!(update.legal, None);
    }
}
