//! JavaScript interop for Plotly visualization.
//! Draws the figures built by `launch_dashboard::figure` into their page regions.

use launch_dashboard::figure::Figure;
use log::{debug, warn};
use std::fmt;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly, js_name = react, catch)]
    fn plotly_react(div_id: &str, data: JsValue, layout: JsValue) -> Result<JsValue, JsValue>;
}

#[derive(Debug)]
pub enum ChartError {
    Serialize(String),
    Plotly(String),
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartError::Serialize(msg) => write!(f, "Failed to serialize figure: {}", msg),
            ChartError::Plotly(msg) => write!(f, "Plotly rejected figure: {}", msg),
        }
    }
}

impl std::error::Error for ChartError {}

/// Replace whatever is drawn in `div_id` with `figure`.
pub fn render_figure(div_id: &str, figure: &Figure) -> Result<(), ChartError> {
    let data = serde_wasm_bindgen::to_value(&figure.data)
        .map_err(|e| ChartError::Serialize(e.to_string()))?;
    let layout = serde_wasm_bindgen::to_value(&figure.layout)
        .map_err(|e| ChartError::Serialize(e.to_string()))?;
    plotly_react(div_id, data, layout)
        .map(|_| ())
        .map_err(|e| ChartError::Plotly(format!("{:?}", e)))
}

/// Build a figure, draw it, and log how long the round took. Drawing
/// failures are logged and swallowed: the previous chart stays on screen.
pub fn redraw(div_id: &str, build: impl FnOnce() -> Figure) {
    let start = now_ms();
    let figure = build();
    if let Err(e) = render_figure(div_id, &figure) {
        warn!("Chart '{}' not updated: {}", div_id, e);
        return;
    }
    debug!(
        "Chart '{}' redrawn with {} trace(s) in {:.1} ms",
        div_id,
        figure.data.len(),
        now_ms() - start
    );
}

#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs_f64() * 1000.0)
        .unwrap_or(0.0)
}
