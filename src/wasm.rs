use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn pack_layout(json: &str) -> Result<String, JsValue> {
    crate::pack_json(json).map_err(|e| JsValue::from_str(&format!("{}", e)))
}
