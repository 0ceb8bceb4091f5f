//! Reads the server-provided chart data out of the page, once.
//!
//! Newer templates embed a JSON `<script>` block; older ones declare four
//! top-level bindings (`var`, `let` or `const`). Whatever is found becomes an explicit `DashboardData` value and
//! nothing downstream touches the globals again.

use nm_chart_ui::DashboardConfig;
use nm_data::DashboardData;
use serde_json::{Map, Value};
use wasm_bindgen::JsValue;
use web_sys::Document;

/// Globals assigned by pages that predate the JSON data block.
pub const LEGACY_GLOBALS: [&str; 4] = [
    "trendChartData",
    "sentimentData",
    "platformData",
    "interactionData",
];

/// Split a page payload into chart data and an optional `"config"` override.
pub fn parse_payload(json: &str) -> anyhow::Result<(DashboardData, DashboardConfig)> {
    let mut value: Value = serde_json::from_str(json)?;
    let config = match value.as_object_mut().and_then(|o| o.remove("config")) {
        Some(config) => serde_json::from_value(config)?,
        None => DashboardConfig::default(),
    };
    Ok((DashboardData::from_value(value)?, config))
}

/// Assemble a payload object from the globals that were found.
pub fn payload_from_globals<I>(globals: I) -> Value
where
    I: IntoIterator<Item = (&'static str, Value)>,
{
    let map: Map<String, Value> = globals
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect();
    Value::Object(map)
}

/// Body of a function that returns the binding `name`, or `undefined` when
/// the page never declared it. Top-level `let`/`const` bindings are not
/// properties of `window`, so they can only be reached by name.
pub fn binding_lookup_source(name: &str) -> String {
    format!("return typeof {name} === 'undefined' ? undefined : {name};")
}

fn read_global(name: &'static str) -> Option<(&'static str, Value)> {
    let lookup = js_sys::Function::new_no_args(&binding_lookup_source(name));
    let value = lookup.call0(&JsValue::UNDEFINED).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    let json = js_sys::JSON::stringify(&value).ok()?.as_string()?;
    match serde_json::from_str(&json) {
        Ok(parsed) => Some((name, parsed)),
        Err(e) => {
            log::warn!("ignoring global {name}: {e}");
            None
        }
    }
}

/// Load chart data and config for this page. Data that cannot be parsed is
/// logged and replaced by empty data so the page still initializes.
pub fn load(document: &Document) -> (DashboardData, DashboardConfig) {
    let script_id = DashboardConfig::default().data_script;
    if let Some(json) = document
        .get_element_by_id(&script_id)
        .and_then(|script| script.text_content())
    {
        return match parse_payload(&json) {
            Ok(loaded) => loaded,
            Err(e) => {
                log::error!("#{script_id} holds invalid dashboard data: {e}");
                (DashboardData::default(), DashboardConfig::default())
            }
        };
    }

    let payload = payload_from_globals(LEGACY_GLOBALS.into_iter().filter_map(read_global));
    let data = DashboardData::from_value(payload).unwrap_or_else(|e| {
        log::error!("page globals hold invalid dashboard data: {e}");
        DashboardData::default()
    });
    (data, DashboardConfig::default())
}
