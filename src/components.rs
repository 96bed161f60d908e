//! Yew view components for the launch dashboard.
//!
//! These render from props only; the dashboard component owns all state.

use crate::config::{
    PAGE_TITLE, PAGE_TITLE_STYLE, PAYLOAD_LABEL, PAYLOAD_SLIDER_ID, SITE_DROPDOWN_ID,
    SITE_PLACEHOLDER, SLIDER_MAX, SLIDER_MIN, SLIDER_STEP,
};
use crate::utils::{
    filter_site_options, format_payload_range, parse_handle_value, slider_marks, snap_to_step,
    DropdownOption,
};
use launch_dashboard::PayloadRange;
use std::rc::Rc;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

pub fn render_header() -> Html {
    html! {
        <h1 style={PAGE_TITLE_STYLE}>{ PAGE_TITLE }</h1>
    }
}

/// Searchable launch-site dropdown.
#[derive(Properties, PartialEq)]
pub struct SiteDropdownProps {
    pub options: Rc<Vec<DropdownOption>>,
    pub selected: AttrValue,
    pub onchange: Callback<String>,
}

#[function_component(SiteDropdown)]
pub fn site_dropdown(props: &SiteDropdownProps) -> Html {
    let query = use_state(String::new);

    let mut visible = filter_site_options(&props.options, &query);
    // the current selection stays listed so the select never shows a stale value
    if !visible.iter().any(|o| o.value == props.selected.as_str()) {
        if let Some(current) = props.options.iter().find(|o| o.value == props.selected.as_str()) {
            visible.push(current);
        }
    }

    let on_search = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    let on_select = {
        let onchange = props.onchange.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            onchange.emit(select.value());
        })
    };

    html! {
        <div class="form-group site-picker">
            <input type="search"
                class="site-search"
                placeholder={SITE_PLACEHOLDER}
                value={(*query).clone()}
                oninput={on_search}
            />
            <select id={SITE_DROPDOWN_ID} onchange={on_select}>
                { visible.iter().map(|o| html! {
                    <option value={o.value.clone()} selected={o.value == props.selected.as_str()}>
                        { o.label.clone() }
                    </option>
                }).collect::<Html>() }
            </select>
        </div>
    }
}

/// Dual-handle payload range made of two range inputs sharing one scale.
#[derive(Properties, PartialEq)]
pub struct PayloadSliderProps {
    pub range: PayloadRange,
    pub onchange: Callback<PayloadRange>,
}

#[function_component(PayloadSlider)]
pub fn payload_slider(props: &PayloadSliderProps) -> Html {
    let marks_id = format!("{}-marks", PAYLOAD_SLIDER_ID);

    let handle = |low_handle: bool| {
        let onchange = props.onchange.clone();
        let range = props.range;
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(v) = parse_handle_value(&input.value()) {
                let next = if low_handle {
                    PayloadRange::new(v, range.high)
                } else {
                    PayloadRange::new(range.low, v)
                };
                onchange.emit(next);
            }
        })
    };

    html! {
        <div class="form-group payload-range">
            <p>{ PAYLOAD_LABEL }</p>
            <div id={PAYLOAD_SLIDER_ID} class="range-slider">
                <input type="range"
                    class="range-low"
                    min={SLIDER_MIN.to_string()}
                    max={SLIDER_MAX.to_string()}
                    step={SLIDER_STEP.to_string()}
                    list={marks_id.clone()}
                    value={snap_to_step(props.range.low).to_string()}
                    oninput={handle(true)}
                />
                <input type="range"
                    class="range-high"
                    min={SLIDER_MIN.to_string()}
                    max={SLIDER_MAX.to_string()}
                    step={SLIDER_STEP.to_string()}
                    list={marks_id.clone()}
                    value={snap_to_step(props.range.high).to_string()}
                    oninput={handle(false)}
                />
                <datalist id={marks_id}>
                    { slider_marks().into_iter().map(|m| html! {
                        <option value={m.to_string()} label={m.to_string()} />
                    }).collect::<Html>() }
                </datalist>
                <div class="range-marks">
                    { slider_marks().into_iter().map(|m| html! {
                        <span class="range-mark">{ m }</span>
                    }).collect::<Html>() }
                </div>
            </div>
            <span class="slider-value">{ format_payload_range(&props.range) }</span>
        </div>
    }
}

/// Region that Plotly draws into.
#[derive(Properties, PartialEq)]
pub struct ChartPanelProps {
    pub id: AttrValue,
}

#[function_component(ChartPanel)]
pub fn chart_panel(props: &ChartPanelProps) -> Html {
    html! {
        <div class="chart-panel">
            <div id={props.id.clone()}></div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FatalErrorProps {
    pub message: AttrValue,
}

/// Shown instead of the dashboard when the launch data cannot be loaded.
#[function_component(FatalError)]
pub fn fatal_error(props: &FatalErrorProps) -> Html {
    html! {
        <div class="container">
            { render_header() }
            <div class="current-error">
                <p>{ "The dashboard could not start." }</p>
                <p>{ props.message.to_string() }</p>
            </div>
        </div>
    }
}
