//! Capabilities the dashboard needs from its host page.
//!
//! The browser implementations live in `dom` and `js_bridge`; tests drive the
//! same logic through in-memory fakes.

use crate::chart_config::ChartConfig;

/// User-facing message, shown blocking (`window.alert`).
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Yes/no question, shown blocking (`window.confirm`).
pub trait Confirmer {
    fn confirm(&self, message: &str) -> bool;
}

/// A form that can be submitted, handing navigation over to the browser.
pub trait FormHandle {
    fn submit(&self) -> Result<(), String>;
}

/// Read access to the controls the actions validate, plus the few writes
/// they make.
pub trait DashboardPage {
    type Form: FormHandle;

    /// Current value of an input or select, `None` when the element is absent.
    fn field_value(&self, id: &str) -> Option<String>;

    /// Number of checked checkboxes with the given `name`.
    fn checked_count(&self, name: &str) -> usize;

    fn form(&self, id: &str) -> Option<Self::Form>;

    /// Make a hidden element visible. Returns `false` when it is absent.
    fn reveal(&self, id: &str) -> bool;

    fn has_element(&self, id: &str) -> bool;
}

/// What happened to a chart container during initialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderStatus {
    Rendered,
    /// No drawable canvas with that id on this page
    Absent,
    Failed(String),
}

/// Constructs a chart inside a container.
pub trait ChartRenderer {
    fn render(&self, container_id: &str, config: &ChartConfig) -> RenderStatus;
}

/// Attaches tooltips to every element matching a selector and returns how
/// many were activated.
pub trait TooltipActivator {
    fn activate(&self, selector: &str) -> usize;
}
