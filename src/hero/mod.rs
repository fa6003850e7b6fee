//! Hero headline reveal, nav height tracking and the desktop scroll overlay.

pub mod letters;
pub mod overlay;
pub mod timing;

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, HtmlElement, HtmlImageElement, MediaQueryList, MediaQueryListEvent,
    WheelEvent, Window,
};

use crate::config;
use crate::dom;
use crate::error::Result;
use letters::wrap_letters;
use overlay::ScrollOverlay;
use timing::{parse_css_time, RevealGate};

struct Hero {
    root: HtmlElement,
    nav: Option<HtmlElement>,
    desktop_logo: Option<Element>,
}

impl Hero {
    fn reveal(&self) {
        let classes = self.root.class_list();
        if classes.contains("is-visible") {
            return;
        }
        // force a reflow so the transition starts from the hidden state
        let _ = self.root.offset_width();
        let _ = classes.add_1("is-visible");
    }

    fn paint_overlay(&self, overlay: &ScrollOverlay) {
        let _ = self
            .root
            .style()
            .set_property("--hero-scroll-overlay", &overlay.overlay_value().to_string());

        let Some(nav) = &self.nav else {
            return;
        };
        let _ = nav.class_list().toggle_with_force("is-solid", overlay.nav_solid());
        if let Some(logo) = &self.desktop_logo {
            let target = overlay.logo_src();
            if logo.get_attribute("src").as_deref() != Some(target) {
                let _ = logo.set_attribute("src", target);
            }
        }
    }
}

/// Returns `false` when the page has no `#hero`.
pub fn install(window: &Window, document: &Document) -> Result<bool> {
    let Some(root) = dom::by_id::<HtmlElement>(document, "hero") else {
        return Ok(false);
    };
    let nav = document
        .query_selector("nav")?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    let desktop_logo = match &nav {
        Some(nav) => nav.query_selector(".logo-desktop img")?,
        None => None,
    };

    let headlines = root.query_selector_all(".hero-text h1")?;
    for i in 0..headlines.length() {
        if let Some(h1) = headlines.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            let text = h1.text_content().unwrap_or_default();
            h1.set_inner_html(&wrap_letters(text.trim()));
        }
    }

    let hero = Rc::new(Hero {
        root,
        nav,
        desktop_logo,
    });

    install_reveal(window, &hero)?;

    let desktop = window.match_media(config::DESKTOP_MEDIA_QUERY)?;
    install_nav_overlap(window, document, &hero, desktop.as_ref())?;
    install_scroll_overlay(window, &hero, desktop.as_ref())?;

    debug!("Hero effects installed");
    Ok(true)
}

fn install_reveal(window: &Window, hero: &Rc<Hero>) -> Result<()> {
    let image = hero
        .root
        .query_selector("img")?
        .and_then(|el| el.dyn_into::<HtmlImageElement>().ok());

    let fade_ms = match window.get_computed_style(&hero.root)? {
        Some(styles) => {
            let delay = styles.get_property_value("--hero-fade-delay").unwrap_or_default();
            let duration = styles.get_property_value("--hero-fade-duration").unwrap_or_default();
            parse_css_time(&delay) + parse_css_time(&duration)
        }
        None => 0.0,
    };

    let gate = Rc::new(RefCell::new(RevealGate::new(image.is_none(), fade_ms <= 0.0)));

    if fade_ms > 0.0 {
        let gate = gate.clone();
        let hero = hero.clone();
        Timeout::new(fade_ms.ceil() as u32, move || {
            if gate.borrow_mut().fade_ready() {
                hero.reveal();
            }
        })
        .forget();
    }

    if let Some(image) = image {
        if image.complete() && image.natural_width() > 0 {
            gate.borrow_mut().image_ready();
        } else {
            for event in ["load", "error"] {
                let gate = gate.clone();
                let hero = hero.clone();
                dom::listen(&image, event, move |_: Event| {
                    if gate.borrow_mut().image_ready() {
                        hero.reveal();
                    }
                })?;
            }
        }
    }

    if gate.borrow_mut().try_reveal() {
        hero.reveal();
    }
    Ok(())
}

/// Keeps `--nav-desktop-height` in sync so the hero can sit under the nav.
fn install_nav_overlap(
    window: &Window,
    document: &Document,
    hero: &Rc<Hero>,
    desktop: Option<&MediaQueryList>,
) -> Result<()> {
    let Some(doc_el) = document
        .document_element()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return Ok(());
    };

    let update = {
        let hero = hero.clone();
        let desktop = desktop.cloned();
        Closure::wrap(Box::new(move || {
            let height = match (&desktop, &hero.nav) {
                (Some(query), Some(nav)) if query.matches() => nav.offset_height().max(0),
                _ => 0,
            };
            let _ = doc_el
                .style()
                .set_property("--nav-desktop-height", &format!("{}px", height));
        }) as Box<dyn FnMut()>)
    };
    let update: js_sys::Function = update.into_js_value().unchecked_into();

    let schedule = {
        let window = window.clone();
        move || {
            let _ = window.request_animation_frame(&update);
        }
    };

    schedule();
    for event in ["resize", "load"] {
        let schedule = schedule.clone();
        dom::listen(window, event, move |_: Event| schedule())?;
    }
    if let Some(query) = desktop {
        dom::listen(query, "change", move |_: Event| schedule())?;
    }
    Ok(())
}

fn install_scroll_overlay(window: &Window, hero: &Rc<Hero>, desktop: Option<&MediaQueryList>) -> Result<()> {
    let enabled = desktop.map_or(false, |q| q.matches());
    let overlay = Rc::new(RefCell::new(ScrollOverlay::new(enabled)));
    hero.paint_overlay(&overlay.borrow());

    if let Some(query) = desktop {
        let overlay = overlay.clone();
        let hero = hero.clone();
        dom::listen(query, "change", move |event: MediaQueryListEvent| {
            let mut overlay = overlay.borrow_mut();
            overlay.media_changed(event.matches());
            hero.paint_overlay(&overlay);
        })?;
    }

    {
        let overlay = overlay.clone();
        let hero = hero.clone();
        dom::listen_passive(window, "wheel", move |event: WheelEvent| {
            let mut overlay = overlay.borrow_mut();
            if overlay.wheel(event.delta_y()) {
                hero.paint_overlay(&overlay);
            }
        })?;
    }

    {
        let hero = hero.clone();
        let source = window.clone();
        dom::listen_passive(window, "scroll", move |_: Event| {
            let scroll_y = source.scroll_y().unwrap_or(0.0);
            let mut overlay = overlay.borrow_mut();
            if overlay.scrolled(scroll_y) {
                hero.paint_overlay(&overlay);
            }
        })?;
    }
    Ok(())
}
