//! Typed wrappers around the page's Chart.js and Bootstrap globals.
//!
//! Both libraries are loaded by the page as plain `<script>` tags. The
//! constructors are imported with `catch`, so a missing or throwing library
//! comes back as an `Err` instead of aborting the wasm module.

use crate::chart_config::ChartConfig;
use crate::services::{ChartRenderer, RenderStatus, TooltipActivator};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlCanvasElement};

#[wasm_bindgen]
extern "C" {
    /// `window.Chart`
    #[wasm_bindgen(js_name = Chart)]
    pub type ChartJs;

    #[wasm_bindgen(constructor, js_class = "Chart", catch)]
    fn new(context: &JsValue, config: &JsValue) -> Result<ChartJs, JsValue>;
}

#[wasm_bindgen]
extern "C" {
    /// `window.bootstrap.Tooltip`
    #[wasm_bindgen(js_namespace = bootstrap, js_name = Tooltip)]
    pub type BootstrapTooltip;

    #[wasm_bindgen(constructor, js_namespace = bootstrap, js_class = "Tooltip", catch)]
    fn new(element: &Element) -> Result<BootstrapTooltip, JsValue>;
}

/// Whether a global (`Chart`, `bootstrap`) has been defined by the page.
pub fn library_loaded(global: &str) -> bool {
    js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str(global)).unwrap_or(false)
}

/// Best-effort text for a thrown JS value.
pub fn describe_js_error(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Renders charts with `new Chart(canvas.getContext('2d'), config)`.
pub struct BrowserCharts {
    document: Document,
}

impl BrowserCharts {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl ChartRenderer for BrowserCharts {
    fn render(&self, container_id: &str, config: &ChartConfig) -> RenderStatus {
        let Some(element) = self.document.get_element_by_id(container_id) else {
            return RenderStatus::Absent;
        };
        let Ok(canvas) = element.dyn_into::<HtmlCanvasElement>() else {
            log::warn!("#{container_id} is not a canvas; skipping chart");
            return RenderStatus::Absent;
        };
        let context = match canvas.get_context("2d") {
            Ok(Some(context)) => context,
            Ok(None) => return RenderStatus::Absent,
            Err(e) => return RenderStatus::Failed(describe_js_error(&e)),
        };
        if !library_loaded("Chart") {
            return RenderStatus::Failed("Chart.js is not loaded".to_string());
        }

        let json = match config.to_json() {
            Ok(json) => json,
            Err(e) => return RenderStatus::Failed(e.to_string()),
        };
        let js_config = match js_sys::JSON::parse(&json) {
            Ok(value) => value,
            Err(e) => return RenderStatus::Failed(describe_js_error(&e)),
        };

        match ChartJs::new(&context, &js_config) {
            Ok(_) => RenderStatus::Rendered,
            Err(e) => RenderStatus::Failed(describe_js_error(&e)),
        }
    }
}

/// Attaches `new bootstrap.Tooltip(el)` to every matching element.
pub struct BrowserTooltips {
    document: Document,
}

impl BrowserTooltips {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl TooltipActivator for BrowserTooltips {
    fn activate(&self, selector: &str) -> usize {
        if !library_loaded("bootstrap") {
            log::warn!("bootstrap is not loaded; tooltips disabled");
            return 0;
        }
        let nodes = match self.document.query_selector_all(selector) {
            Ok(nodes) => nodes,
            Err(e) => {
                log::warn!("bad tooltip selector {selector:?}: {}", describe_js_error(&e));
                return 0;
            }
        };

        let mut activated = 0;
        for index in 0..nodes.length() {
            let Some(element) = nodes.get(index).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            match BootstrapTooltip::new(&element) {
                Ok(_) => activated += 1,
                Err(e) => log::warn!("tooltip activation failed: {}", describe_js_error(&e)),
            }
        }
        activated
    }
}
