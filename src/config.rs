//! Application-level configuration constants.

use launch_dashboard::ALL_SITES;
use log::Level;

/// A `{label, value}` entry of the site dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteOption {
    pub label: &'static str,
    pub value: &'static str,
}

// Logging
pub const LOG_LEVEL: Level = Level::Debug;

// UI Behavior
pub const DEBOUNCE_MS: u32 = 250;

// Page heading
pub const PAGE_TITLE: &str = "SpaceX Launch Records Dashboard";
pub const PAGE_TITLE_STYLE: &str = "text-align: center; color: #503D36; font-size: 40px;";

// Element ids
pub const SITE_DROPDOWN_ID: &str = "site-dropdown";
pub const PAYLOAD_SLIDER_ID: &str = "payload-slider";
pub const PIE_CHART_ID: &str = "success-pie-chart";
pub const SCATTER_CHART_ID: &str = "success-payload-scatter-chart";

// Site dropdown
pub const SITE_PLACEHOLDER: &str = "Select a launch site here";
pub const ALL_SITES_OPTION: SiteOption = SiteOption {
    label: "All Sites",
    value: ALL_SITES,
};
pub const SITE_OPTIONS: [SiteOption; 5] = [
    ALL_SITES_OPTION,
    SiteOption { label: "CCAFS LC-40", value: "CCAFS LC-40" },
    SiteOption { label: "CCAFS SLC-40", value: "CCAFS SLC-40" },
    SiteOption { label: "KSC LC-39A", value: "KSC LC-39A" },
    SiteOption { label: "VAFB SLC-4E", value: "VAFB SLC-4E" },
];

// Payload slider
pub const PAYLOAD_LABEL: &str = "Payload range (Kg):";
pub const SLIDER_MIN: u32 = 0;
pub const SLIDER_MAX: u32 = 10_000;
pub const SLIDER_STEP: u32 = 1_000;
