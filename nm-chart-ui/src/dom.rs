//! `web_sys` implementations of the dialog and page capabilities.

use crate::js_bridge::describe_js_error;
use crate::registry::FormRegistry;
use crate::services::{Confirmer, DashboardPage, FormHandle, Notifier};
use nm_data::EntityKind;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement, Window,
};

/// `window.alert` / `window.confirm`.
pub struct BrowserDialogs {
    window: Window,
}

impl BrowserDialogs {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Notifier for BrowserDialogs {
    fn notify(&self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            log::warn!("alert failed: {}", describe_js_error(&e));
        }
    }
}

impl Confirmer for BrowserDialogs {
    fn confirm(&self, message: &str) -> bool {
        self.window.confirm_with_message(message).unwrap_or(false)
    }
}

pub struct DomForm(HtmlFormElement);

impl FormHandle for DomForm {
    fn submit(&self) -> Result<(), String> {
        self.0.submit().map_err(|e| describe_js_error(&e))
    }
}

/// The server-rendered document.
pub struct DomPage {
    document: Document,
}

impl DomPage {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn element(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    /// Collect every keyword and platform delete form on the page.
    pub fn collect_delete_forms(&self) -> FormRegistry<DomForm> {
        let mut registry = FormRegistry::new();
        for kind in EntityKind::ALL {
            let selector = format!(r#"form[id^="{}"]"#, kind.delete_form_prefix());
            let Ok(nodes) = self.document.query_selector_all(&selector) else {
                continue;
            };
            for index in 0..nodes.length() {
                let Some(form) = nodes
                    .get(index)
                    .and_then(|n| n.dyn_into::<HtmlFormElement>().ok())
                else {
                    continue;
                };
                let element_id = form.id();
                if !registry.insert_element(kind, &element_id, DomForm(form)) {
                    log::debug!("ignoring form #{element_id}: no row id");
                }
            }
        }
        registry
    }
}

impl DashboardPage for DomPage {
    type Form = DomForm;

    fn field_value(&self, id: &str) -> Option<String> {
        let element = self.element(id)?;
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            return Some(input.value());
        }
        if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            return Some(select.value());
        }
        if let Some(text) = element.dyn_ref::<HtmlTextAreaElement>() {
            return Some(text.value());
        }
        log::warn!("#{id} is not a form control");
        None
    }

    fn checked_count(&self, name: &str) -> usize {
        let selector = format!(r#"input[name="{name}"]:checked"#);
        match self.document.query_selector_all(&selector) {
            Ok(nodes) => nodes.length() as usize,
            Err(e) => {
                log::warn!("bad checkbox name {name:?}: {}", describe_js_error(&e));
                0
            }
        }
    }

    fn form(&self, id: &str) -> Option<DomForm> {
        self.element(id)?
            .dyn_into::<HtmlFormElement>()
            .ok()
            .map(DomForm)
    }

    fn reveal(&self, id: &str) -> bool {
        let Some(element) = self.element(id).and_then(|e| e.dyn_into::<HtmlElement>().ok()) else {
            return false;
        };
        element.style().set_property("display", "block").is_ok()
    }

    fn has_element(&self, id: &str) -> bool {
        self.element(id).is_some()
    }
}
