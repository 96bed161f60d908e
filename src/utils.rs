use crate::config::{SiteOption, SLIDER_MAX, SLIDER_MIN, SLIDER_STEP};
use launch_dashboard::{PayloadRange, ALL_SITES};
use log::warn;

/// A dropdown entry whose label and value may come from the loaded data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

impl From<&SiteOption> for DropdownOption {
    fn from(o: &SiteOption) -> Self {
        Self {
            label: o.label.to_string(),
            value: o.value.to_string(),
        }
    }
}

/// Cross-check the configured dropdown options against the sites present in
/// the data. Configured sites are kept in order; sites only found in the
/// data are appended so every site stays selectable.
pub fn merge_site_options(configured: &[SiteOption], data_sites: &[&str]) -> Vec<DropdownOption> {
    let mut out: Vec<DropdownOption> = configured.iter().map(DropdownOption::from).collect();

    for o in configured.iter().filter(|o| o.value != ALL_SITES) {
        if !data_sites.contains(&o.value) {
            warn!("Configured launch site '{}' has no records", o.value);
        }
    }

    for site in data_sites {
        if !out.iter().any(|o| o.value == *site) {
            warn!("Launch site '{}' is not in the configured options, adding it", site);
            out.push(DropdownOption {
                label: site.to_string(),
                value: site.to_string(),
            });
        }
    }
    out
}

/// Options whose label contains `query` (case-insensitive). `ALL` always
/// survives so the user can get back to the overview.
pub fn filter_site_options<'a>(options: &'a [DropdownOption], query: &str) -> Vec<&'a DropdownOption> {
    let needle = query.trim().to_lowercase();
    options
        .iter()
        .filter(|o| {
            o.value == ALL_SITES || needle.is_empty() || o.label.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Slider tick positions, `SLIDER_MIN..=SLIDER_MAX` every `SLIDER_STEP`.
pub fn slider_marks() -> Vec<u32> {
    (SLIDER_MIN..=SLIDER_MAX).step_by(SLIDER_STEP as usize).collect()
}

/// Parse a range input's value, ignoring anything that isn't a finite number.
pub fn parse_handle_value(input: &str) -> Option<f64> {
    input.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Position a handle can actually take: nearest step within the slider bounds.
pub fn snap_to_step(v: f64) -> u32 {
    let steps = (v / SLIDER_STEP as f64).round().max(0.0) as u32;
    (steps * SLIDER_STEP).clamp(SLIDER_MIN, SLIDER_MAX)
}

/// Render a range as the slider readout. When the filtered range sits off
/// the step grid, the snapped handle positions are shown too.
pub fn format_payload_range(range: &PayloadRange) -> String {
    let exact = format!("[{}, {}] kg", format_kg(range.low), format_kg(range.high));
    let (low, high) = (snap_to_step(range.low), snap_to_step(range.high));
    if low as f64 == range.low && high as f64 == range.high {
        exact
    } else {
        format!("{} (handles at {}, {})", exact, low, high)
    }
}

fn format_kg(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{:.0}", v)
    } else {
        format!("{:.2}", v)
    }
}
