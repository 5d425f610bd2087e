//! WASM bindings for flowlayout.
//!
//! Exposes `compile` and `compileWithOptions` to JavaScript via wasm-bindgen.
//! Both return the compiled diagram as a JSON string.

use wasm_bindgen::prelude::*;

use crate::config::LayoutConfig;
use crate::syntax::types::Direction;

/// Compile diagram text with default settings.
#[wasm_bindgen]
pub fn compile(src: &str) -> Result<String, JsError> {
    let diagram = crate::compile_diagram(src);
    serde_json::to_string(&diagram).map_err(|e| JsError::new(&e.to_string()))
}

/// Compile diagram text with spacing and direction control.
///
/// - `direction`: "TD", "TB", "LR", "BT", "RL", or empty string for the header's
#[wasm_bindgen(js_name = "compileWithOptions")]
pub fn compile_with_options(
    src: &str,
    h_spacing: f64,
    v_spacing: f64,
    direction: &str,
) -> Result<String, JsError> {
    let direction_override = if direction.is_empty() {
        None
    } else {
        let d = Direction::from_keyword(direction).ok_or_else(|| {
            JsError::new(&format!(
                "Unknown direction '{direction}'; use TD, LR, BT, or RL"
            ))
        })?;
        Some(d)
    };
    let config = LayoutConfig {
        h_spacing,
        v_spacing,
        direction_override,
        ..LayoutConfig::default()
    };
    let diagram = crate::compile_diagram_with_config(src, &config);
    serde_json::to_string(&diagram).map_err(|e| JsError::new(&e.to_string()))
}
