//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js bar chart lives in `assets/js/*.js` and is loaded at runtime.
//! Scripts are evaluated as globals (no ES modules) and exposed via `window.*`.
//! Data and config are passed as JSON literals, so site names with quotes
//! need no escaping.

use lulc_data::models::ChartSeries;
use serde::Serialize;

// Embed the chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");

/// Display options for the grouped bar chart.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BarChartConfig {
    pub title: String,
    pub y_axis_label: String,
    /// Values below this are not labelled on the bars.
    pub label_threshold: f64,
}

impl BarChartConfig {
    pub fn for_site(site_name: &str) -> Self {
        Self {
            title: format!("Land Use Composition: {}", site_name),
            y_axis_label: "Share of site area (%)".to_string(),
            label_threshold: 0.1,
        }
    }
}

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('LULC JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The scripts are stored on `window` and evaluated at global scope once D3
/// is present, then each function is promoted to `window.*`.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, BAR_CHART_JS].join("\n");

    let store_js = format!(
        "window.__lulcChartScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__lulcChartScripts);
                    delete window.__lulcChartScripts;
                    if (typeof renderBarChart !== 'undefined') window.renderBarChart = renderBarChart;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__lulcChartsReady = true;
                    console.log('LULC charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// JSON literal handed to `renderBarChart` for the data argument.
pub fn bar_chart_data_json(series: &[ChartSeries]) -> String {
    serde_json::to_string(series).unwrap_or_else(|_| "[]".to_string())
}

/// JS snippet that waits for the chart scripts and the container, then renders.
pub fn bar_chart_script(container_id: &str, series: &[ChartSeries], config: &BarChartConfig) -> String {
    let data_json = bar_chart_data_json(series);
    let config_json = serde_json::to_string(config).unwrap_or_else(|_| "{}".to_string());
    let id_json = serde_json::to_string(container_id).unwrap_or_else(|_| "''".to_string());
    format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__lulcChartsReady &&
                    typeof window.renderBarChart !== 'undefined' &&
                    document.getElementById({id_json})) {{
                    clearInterval(poll);
                    try {{
                        window.renderBarChart({id_json}, {data_json}, {config_json});
                    }} catch(e) {{ console.error('[LULC] renderBarChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    )
}

/// Render the grouped bar chart: years on the x axis, one bar per series.
pub fn render_bar_chart(container_id: &str, series: &[ChartSeries], config: &BarChartConfig) {
    log::debug!(
        "[LULC] rendering {} series into #{}",
        series.len(),
        container_id
    );
    call_js(&bar_chart_script(container_id, series, config));
}

/// Clear the chart in the given container.
pub fn destroy_chart(container_id: &str) {
    let element = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(container_id));
    if let Some(element) = element {
        element.set_inner_html("");
    }
}
