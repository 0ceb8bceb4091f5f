//! News monitor dashboard, compiled to WebAssembly.
//!
//! On load this module reads the page's chart data, activates tooltips,
//! renders the charts and collects the per-row delete forms. The button
//! handlers are exported under the names the templates' `onclick` attributes
//! already use (`addKeyword()`, `deleteKeyword(id)`, ...) and installed on
//! `window`, since inline handlers only see globals.

pub mod page_data;

use log::LevelFilter;
use nm_chart_ui::console_log;
use nm_chart_ui::dom::{BrowserDialogs, DomPage};
use nm_chart_ui::js_bridge::{BrowserCharts, BrowserTooltips};
use nm_chart_ui::{ActionError, ActionOutcome, Dashboard, DashboardActions};
use nm_data::EntityId;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

type PageDashboard = Dashboard<DomPage, BrowserDialogs>;

thread_local! {
    static DASHBOARD: RefCell<Option<PageDashboard>> = const { RefCell::new(None) };
}

/// Handlers the templates call from `onclick` attributes.
pub const WINDOW_HANDLERS: [&str; 5] = [
    "addKeyword",
    "deleteKeyword",
    "addPlatform",
    "deletePlatform",
    "startCrawling",
];

fn handler(name: &str) -> Option<JsValue> {
    let handler = match name {
        "addKeyword" => Closure::<dyn Fn()>::new(add_keyword).into_js_value(),
        "deleteKeyword" => Closure::<dyn Fn(JsValue)>::new(delete_keyword).into_js_value(),
        "addPlatform" => Closure::<dyn Fn()>::new(add_platform).into_js_value(),
        "deletePlatform" => Closure::<dyn Fn(JsValue)>::new(delete_platform).into_js_value(),
        "startCrawling" => Closure::<dyn Fn()>::new(start_crawling).into_js_value(),
        _ => return None,
    };
    Some(handler)
}

/// Put every handler on `window` so `onclick="deleteKeyword(42)"` resolves.
fn install_window_handlers(window: &web_sys::Window) {
    for name in WINDOW_HANDLERS {
        let Some(handler) = handler(name) else {
            log::error!("no handler behind window.{name}");
            continue;
        };
        if let Err(e) = js_sys::Reflect::set(window, &JsValue::from_str(name), &handler) {
            log::error!("could not install window.{name}: {e:?}");
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    if console_log::init(LevelFilter::Info).is_err() {
        log::debug!("logger already installed");
    }
    let Some(window) = web_sys::window() else {
        return;
    };
    install_window_handlers(&window);
    let Some(document) = window.document() else {
        return;
    };

    if document.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(init_dashboard);
        if let Err(e) =
            document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
        {
            log::error!("could not wait for DOMContentLoaded: {e:?}");
        }
    } else {
        init_dashboard();
    }
}

fn init_dashboard() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let (data, config) = page_data::load(&document);
    let page = DomPage::new(document.clone());
    let delete_forms = page.collect_delete_forms();

    let dashboard = Dashboard::start(
        page,
        BrowserDialogs::new(window),
        delete_forms,
        &BrowserCharts::new(document.clone()),
        &BrowserTooltips::new(document),
        &data,
        &config,
    );
    DASHBOARD.with(|slot| *slot.borrow_mut() = Some(dashboard));
}

fn run_action<F>(name: &str, action: F)
where
    F: FnOnce(&DashboardActions<DomPage, BrowserDialogs>) -> Result<ActionOutcome, ActionError>,
{
    DASHBOARD.with(|slot| match slot.borrow().as_ref() {
        None => log::warn!("{name}() called before the dashboard finished loading"),
        Some(dashboard) => match action(dashboard.actions()) {
            Ok(outcome) => log::debug!("{name}(): {outcome:?}"),
            Err(e) => log::error!("{name}(): {e}"),
        },
    });
}

/// Row ids arrive as whatever the template wrote: `deleteKeyword(42)` or
/// `deleteKeyword('kw_42')`.
fn entity_id(value: &JsValue) -> Option<EntityId> {
    if let Some(id) = value.as_string() {
        return Some(EntityId::from(id));
    }
    let number = value.as_f64()?;
    if number >= 0.0 && number.fract() == 0.0 && number <= u64::MAX as f64 {
        Some(EntityId::from(number as u64))
    } else {
        Some(EntityId::from(number.to_string()))
    }
}

fn run_delete<F>(name: &str, id: JsValue, action: F)
where
    F: FnOnce(&DashboardActions<DomPage, BrowserDialogs>, &EntityId) -> Result<ActionOutcome, ActionError>,
{
    match entity_id(&id) {
        Some(id) => run_action(name, |actions| action(actions, &id)),
        None => log::warn!("{name}() needs a row id, got {id:?}"),
    }
}

#[wasm_bindgen(js_name = addKeyword)]
pub fn add_keyword() {
    run_action("addKeyword", |actions| actions.add_keyword());
}

#[wasm_bindgen(js_name = deleteKeyword)]
pub fn delete_keyword(id: JsValue) {
    run_delete("deleteKeyword", id, |actions, id| actions.delete_keyword(id));
}

#[wasm_bindgen(js_name = addPlatform)]
pub fn add_platform() {
    run_action("addPlatform", |actions| actions.add_platform());
}

#[wasm_bindgen(js_name = deletePlatform)]
pub fn delete_platform(id: JsValue) {
    run_delete("deletePlatform", id, |actions, id| actions.delete_platform(id));
}

#[wasm_bindgen(js_name = startCrawling)]
pub fn start_crawling() {
    run_action("startCrawling", |actions| actions.start_crawling());
}
