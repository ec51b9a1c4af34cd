//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions live in `assets/js/*.js` and are loaded at runtime.
//! They are evaluated as globals (no ES modules) and exposed via `window.*`.
//! Calls made before D3 has loaded are queued and flushed in order once the
//! scripts are ready, so a layer update can never overtake the mount.

// Embed all D3 chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static MEDAL_CHART_JS: &str = include_str!("../assets/js/medal-line-chart.js");

/// Functions promoted to `window.*` once the scripts are evaluated.
const EXPORTED_FUNCTIONS: [&str; 6] = [
    "mountMedalChart",
    "applyMedalLayer",
    "clearMedalLayer",
    "initTooltip",
    "showTooltip",
    "hideTooltip",
];

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('OLY JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The chart JS files define functions via `function` declarations. To make
/// them globally accessible (not block-scoped inside the setInterval
/// callback), they are evaluated at global scope through an indirect `eval`
/// once D3 is ready, then promoted to `window.*` explicitly.
///
/// Safe to call more than once; only the first call installs the loop.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, MEDAL_CHART_JS].join("\n");

    // Store the scripts on window so the polling callback can eval them
    // at global scope.
    let store_js = format!(
        "if (!window.__olyChartsInit) {{ window.__olyChartScripts = {}; }}",
        js_string(&all_js)
    );
    let _ = js_sys::eval(&store_js);

    let promote: String = EXPORTED_FUNCTIONS
        .iter()
        .map(|f| format!("if (typeof {f} !== 'undefined') window.{f} = {f};\n"))
        .collect();

    let init_js = format!(
        r#"
        (function() {{
            if (window.__olyChartsInit) return;
            window.__olyChartsInit = true;
            var waitForD3 = setInterval(function() {{
                if (typeof d3 !== 'undefined') {{
                    clearInterval(waitForD3);
                    (0, eval)(window.__olyChartScripts);
                    delete window.__olyChartScripts;
                    {promote}
                    window.__olyChartsReady = true;
                    console.log('OLY charts initialized');
                    var pending = window.__olyPending || [];
                    window.__olyPending = [];
                    pending.forEach(function(run) {{ run(); }});
                }}
            }}, 100);
        }})();
        "#
    );
    let _ = js_sys::eval(&init_js);
}

/// Quote a Rust string as a JS string literal.
pub fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

/// Build the JS that calls `window.<function>(args...)` now if the chart
/// scripts are ready, or queues the call until they are.
///
/// `args` must already be JS expressions (JSON values are).
fn ready_call(function: &str, args: &[&str]) -> String {
    let args = args.join(", ");
    format!(
        r#"
        (function() {{
            var run = function() {{
                try {{
                    window.{function}({args});
                }} catch(e) {{ console.error('[OLY] {function} error:', e); }}
            }};
            if (window.__olyChartsReady) {{
                run();
            }} else {{
                (window.__olyPending = window.__olyPending || []).push(run);
            }}
        }})();
        "#
    )
}

/// Set up axes, title and legend of a medal chart in `container_id`.
pub fn mount_chart(container_id: &str, frame_json: &str) {
    call_js(&ready_call(
        "mountMedalChart",
        &[&js_string(container_id), frame_json],
    ));
}

/// Redraw one lens of a mounted chart from a serialized `LayerUpdate`.
pub fn apply_layer(container_id: &str, update_json: &str) {
    call_js(&ready_call(
        "applyMedalLayer",
        &[&js_string(container_id), update_json],
    ));
}

/// Remove every element of the lens with the given class prefix.
pub fn clear_layer(container_id: &str, class_prefix: &str) {
    call_js(&ready_call(
        "clearMedalLayer",
        &[&js_string(container_id), &js_string(class_prefix)],
    ));
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById({}); if (el) el.innerHTML = '';",
        js_string(container_id)
    ));
}
