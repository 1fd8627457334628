//! Browser bindings
//!
//! Records cross the boundary in their 44-character hex form; the page
//! supplies `now` and the frame counter.

use crate::genome::{describe_traits, TraitRecord};
use crate::render::render;
use wasm_bindgen::prelude::*;

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen(js_name = renderSvg)]
pub fn render_svg(record_hex: &str, now: u64, frame: u64) -> Result<String, JsValue> {
    let record = TraitRecord::from_hex(record_hex).map_err(to_js)?;
    Ok(render(&record, now, frame).map_err(to_js)?.into_string())
}

#[wasm_bindgen(js_name = describeJson)]
pub fn describe_json(record_hex: &str, now: u64) -> Result<String, JsValue> {
    let record = TraitRecord::from_hex(record_hex).map_err(to_js)?;
    let attributes = describe_traits(&record, now).map_err(to_js)?;
    serde_json::to_string(&attributes).map_err(to_js)
}

#[wasm_bindgen(js_name = evolutionStage)]
pub fn evolution_stage(record_hex: &str, now: u64) -> Result<u8, JsValue> {
    let record = TraitRecord::from_hex(record_hex).map_err(to_js)?;
    Ok(crate::evolution::evolution_stage(&record, now).map_err(to_js)?.number())
}
