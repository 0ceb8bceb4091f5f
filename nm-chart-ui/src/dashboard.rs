//! Page-ready initialization: tooltips, charts, the date range stub, and the
//! action handlers that live for the rest of the page view.

use crate::actions::DashboardActions;
use crate::chart_config::ChartId;
use crate::config::{ChartIds, DashboardConfig};
use crate::registry::FormRegistry;
use crate::services::{
    ChartRenderer, Confirmer, DashboardPage, Notifier, RenderStatus, TooltipActivator,
};
use nm_data::DashboardData;

/// Which charts made it onto the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartReport {
    pub rendered: Vec<ChartId>,
    pub absent: Vec<ChartId>,
    pub failed: Vec<(ChartId, String)>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitReport {
    pub tooltips: usize,
    pub charts: ChartReport,
    pub date_range: bool,
}

/// Build and render every chart whose container is on the page.
///
/// A chart that fails is logged and skipped; the rest still render.
pub fn initialize_charts<R: ChartRenderer>(
    renderer: &R,
    data: &DashboardData,
    ids: &ChartIds,
) -> ChartReport {
    let mut report = ChartReport::default();
    for chart in ChartId::ALL {
        let container = chart.container_id(ids);
        let config = chart.build(data);
        match renderer.render(container, &config) {
            RenderStatus::Rendered => {
                log::debug!("rendered {chart} chart into #{container}");
                report.rendered.push(chart);
            }
            RenderStatus::Absent => report.absent.push(chart),
            RenderStatus::Failed(reason) => {
                log::error!("{chart} chart failed to render: {reason}");
                report.failed.push((chart, reason));
            }
        }
    }
    report
}

/// Date ranges use the browser's native date inputs, so there is nothing to
/// set up. Returns whether the element exists.
pub fn init_date_range_picker<P: DashboardPage>(page: &P, id: &str) -> bool {
    let present = page.has_element(id);
    if present {
        log::debug!("#{id} uses native date inputs");
    }
    present
}

/// A dashboard page after initialization.
pub struct Dashboard<P: DashboardPage, D> {
    actions: DashboardActions<P, D>,
    report: InitReport,
}

impl<P, D> Dashboard<P, D>
where
    P: DashboardPage,
    D: Notifier + Confirmer,
{
    /// Run the page-ready sequence and keep the handlers for later clicks.
    pub fn start<R, T>(
        page: P,
        dialogs: D,
        delete_forms: FormRegistry<P::Form>,
        renderer: &R,
        tooltips: &T,
        data: &DashboardData,
        config: &DashboardConfig,
    ) -> Self
    where
        R: ChartRenderer,
        T: TooltipActivator,
    {
        let tooltip_count = tooltips.activate(&config.tooltip_selector);
        log::debug!("activated {tooltip_count} tooltip(s)");

        let charts = initialize_charts(renderer, data, &config.charts);
        let date_range = init_date_range_picker(&page, &config.date_range);

        log::info!(
            "dashboard ready: {} chart(s), {} delete form(s)",
            charts.rendered.len(),
            delete_forms.len()
        );

        let report = InitReport {
            tooltips: tooltip_count,
            charts,
            date_range,
        };
        Self {
            actions: DashboardActions::new(page, dialogs, config.forms.clone(), delete_forms),
            report,
        }
    }

    pub fn actions(&self) -> &DashboardActions<P, D> {
        &self.actions
    }

    pub fn report(&self) -> &InitReport {
        &self.report
    }
}
