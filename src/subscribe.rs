use gloo_net::http::Request;
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, HtmlInputElement};
use yew::prelude::*;

use crate::config;
use crate::dom;
use crate::error::Result;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct HubSpotField {
    pub name: String,
    pub value: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HubSpotContext {
    pub page_uri: String,
    pub page_name: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct HubSpotSubmission {
    pub fields: Vec<HubSpotField>,
    pub context: HubSpotContext,
}

impl HubSpotSubmission {
    pub fn email(email: &str, page_uri: String, page_name: String) -> Self {
        Self {
            fields: vec![HubSpotField {
                name: "email".to_string(),
                value: email.to_string(),
            }],
            context: HubSpotContext { page_uri, page_name },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMessage {
    Joined,
    Rejected,
    NetworkError,
}

impl FormMessage {
    pub fn text(&self) -> &'static str {
        match self {
            FormMessage::Joined => "Thank you for joining! Check your inbox soon 🎶",
            FormMessage::Rejected => "Something went wrong. Please try again later.",
            FormMessage::NetworkError => "Network error. Please try again.",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            FormMessage::Joined => "#c6a87d",
            _ => "#ff8a8a",
        }
    }
}

/// Posts the address to HubSpot; `Ok(false)` when HubSpot answers non-2xx.
async fn submit(email: String) -> Result<bool> {
    let window = dom::window()?;
    let document = dom::document()?;
    let payload = HubSpotSubmission::email(
        &email,
        window.location().href().unwrap_or_default(),
        document.title(),
    );

    let response = Request::post(config::HUBSPOT_SUBMIT_URL)
        .json(&payload)?
        .send()
        .await?;
    if !response.ok() {
        log::warn!("HubSpot rejected subscription with status {}", response.status());
    }
    Ok(response.ok())
}

#[function_component(SubscribeForm)]
pub fn subscribe_form() -> Html {
    let email = use_state(String::new);
    let message = use_state(|| None::<FormMessage>);

    let oninput = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let onsubmit = {
        let email = email.clone();
        let message = message.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let value = email.trim().to_string();
            if value.is_empty() {
                return;
            }

            let email = email.clone();
            let message = message.clone();
            spawn_local(async move {
                match submit(value).await {
                    Ok(true) => {
                        message.set(Some(FormMessage::Joined));
                        email.set(String::new());
                    }
                    Ok(false) => message.set(Some(FormMessage::Rejected)),
                    Err(e) => {
                        gloo_console::error!("HubSpot form error:", e.to_string());
                        message.set(Some(FormMessage::NetworkError));
                    }
                }
            });
        })
    };

    let (text, style) = match *message {
        Some(m) => (m.text(), format!("color: {};", m.color())),
        None => ("", String::new()),
    };

    html! {
        <form id="hubspotCustomForm" class="subscribe-form" {onsubmit}>
            <input
                id="email"
                type="email"
                name="email"
                placeholder="Your email address"
                required=true
                value={(*email).clone()}
                {oninput}
            />
            <button type="submit">{"Subscribe"}</button>
            <p id="formMessage" {style} hidden={message.is_none()}>{text}</p>
        </form>
    }
}

/// Renders the form into its host element; `false` when the page has none.
pub fn mount(document: &Document) -> bool {
    match dom::by_id::<Element>(document, config::SUBSCRIBE_ROOT_ID) {
        Some(root) => {
            yew::Renderer::<SubscribeForm>::with_root(root).render();
            true
        }
        None => false,
    }
}
