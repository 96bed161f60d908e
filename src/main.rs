//! Launch dashboard entry point using Yew.
//! Loads the launch table once, wires the controls to the two charts.

use launch_dashboard::{
    figure::{pie_figure, scatter_figure},
    outcome_series, payload_series, read_launches_from_csv_str, Dataset, DatasetError,
    PayloadRange, SiteSelection,
};
use log::{debug, error, info};
use once_cell::sync::Lazy;
use yew::prelude::*;

mod chart;
mod components;
mod config;
mod hooks;
mod utils;

use components::{render_header, ChartPanel, FatalError, PayloadSlider, SiteDropdown};
use config::*;
use hooks::use_debounced;
use utils::merge_site_options;

/// Launch table shared read-only by every render and effect.
static DATASET: Lazy<Result<Dataset, DatasetError>> =
    Lazy::new(|| read_launches_from_csv_str(include_str!("spacex_launch_dash.csv")));

#[derive(Properties)]
struct DashboardProps {
    dataset: &'static Dataset,
}

impl PartialEq for DashboardProps {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.dataset, other.dataset)
    }
}

/// Dashboard component: owns the control state and redraws each chart when
/// the controls it depends on change.
#[function_component(Dashboard)]
fn dashboard(props: &DashboardProps) -> Html {
    let dataset = props.dataset;
    let (min_payload, max_payload) = dataset.payload_bounds();

    let options = use_memo((), |_| merge_site_options(&SITE_OPTIONS, &dataset.sites()));
    let site = use_state(|| SiteSelection::All);
    let payload = use_debounced(PayloadRange::new(min_payload, max_payload), DEBOUNCE_MS);

    // pie chart follows the dropdown only
    use_effect_with((*site).clone(), move |site| {
        chart::redraw(PIE_CHART_ID, || pie_figure(&outcome_series(dataset, site)));
        || ()
    });

    // scatter chart follows the dropdown and the committed payload range
    use_effect_with(((*site).clone(), payload.committed), move |(site, range)| {
        chart::redraw(SCATTER_CHART_ID, || {
            let series = payload_series(dataset, site, *range);
            if range.is_inverted() {
                debug!("Payload range {:?} is inverted, nothing to plot", range);
            } else {
                debug!(
                    "{} launch(es) within {:?} for {}",
                    series.points.len(),
                    range,
                    site.value()
                );
            }
            scatter_figure(&series)
        });
        || ()
    });

    let on_site_change = {
        let site = site.clone();
        Callback::from(move |value: String| {
            let next = SiteSelection::from_value(&value);
            debug!("Site selection changed to {}", next.value());
            site.set(next);
        })
    };

    html! {
        <div class="container">
            { render_header() }
            <SiteDropdown
                options={options.clone()}
                selected={site.value().to_string()}
                onchange={on_site_change}
            />
            <br />
            <ChartPanel id={PIE_CHART_ID} />
            <br />
            <PayloadSlider range={payload.live} onchange={payload.set.clone()} />
            <ChartPanel id={SCATTER_CHART_ID} />
        </div>
    }
}

/// Renders the dashboard, or the startup error if the launch data is unusable.
#[function_component]
fn App() -> Html {
    match DATASET.as_ref() {
        Ok(dataset) => html! { <Dashboard {dataset} /> },
        Err(e) => html! { <FatalError message={e.to_string()} /> },
    }
}

/// Entry point: loads the data, then initializes the Yew renderer.
fn main() {
    console_error_panic_hook::set_once();
    // a logger already being set is harmless; keep whichever came first
    let _ = console_log::init_with_level(LOG_LEVEL);

    match DATASET.as_ref() {
        Ok(dataset) => info!(
            "Serving {} launches across sites {:?}",
            dataset.len(),
            dataset.sites()
        ),
        Err(e) => error!("Launch data failed to load, dashboard disabled: {}", e),
    }

    yew::Renderer::<App>::new().render();
}

