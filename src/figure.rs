//! Plotly figure descriptions for the two dashboard charts.
//!
//! The builders only reshape a prepared series; layout math and drawing are
//! left to Plotly on the page.

use crate::{OutcomeSeries, PayloadSeries};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Pie {
        labels: Vec<String>,
        values: Vec<usize>,
    },
    Scatter {
        name: String,
        mode: &'static str,
        x: Vec<f64>,
        y: Vec<u8>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: Title,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub title: Title,
}

fn title(text: &str) -> Title {
    Title {
        text: text.to_string(),
    }
}

/// Pie chart of success counts. An empty series still gives a valid,
/// titled figure with an empty trace.
pub fn pie_figure(series: &OutcomeSeries) -> Figure {
    let (labels, values) = series
        .slices
        .iter()
        .map(|s| (s.label.clone(), s.value))
        .unzip();

    Figure {
        data: vec![Trace::Pie { labels, values }],
        layout: Layout {
            title: title(&series.title),
            xaxis: None,
            yaxis: None,
            legend: None,
        },
    }
}

/// Payload vs. class scatter with one marker trace per booster version
/// category, so Plotly assigns each category its own color.
pub fn scatter_figure(series: &PayloadSeries) -> Figure {
    let mut traces: Vec<(String, Vec<f64>, Vec<u8>)> = Vec::new();
    for p in &series.points {
        let idx = match traces
            .iter()
            .position(|(name, _, _)| *name == p.booster_version_category)
        {
            Some(idx) => idx,
            None => {
                traces.push((p.booster_version_category.clone(), Vec::new(), Vec::new()));
                traces.len() - 1
            }
        };
        traces[idx].1.push(p.payload_mass_kg);
        traces[idx].2.push(p.outcome_class);
    }

    Figure {
        data: traces
            .into_iter()
            .map(|(name, x, y)| Trace::Scatter {
                name,
                mode: "markers",
                x,
                y,
            })
            .collect(),
        layout: Layout {
            title: title(&series.title),
            xaxis: Some(Axis {
                title: title(crate::columns::PAYLOAD_MASS),
            }),
            yaxis: Some(Axis {
                title: title(crate::columns::CLASS),
            }),
            legend: Some(Legend {
                title: title(crate::columns::BOOSTER_CATEGORY),
            }),
        },
    }
}
