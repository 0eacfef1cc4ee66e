pub mod cup_types;
pub mod document;
pub mod error;
pub mod format;
pub mod options;
pub mod writer;

use wasm_bindgen::prelude::*;

use crate::cup_types::CupDocument;

/// Write a waypoint/task document given as a JS object to CUP text.
#[wasm_bindgen(js_name = writeCup)]
pub fn write_cup(value: JsValue) -> Result<String, JsValue> {
    console_error_panic_hook::set_once();

    let doc = parse_document(value)?;
    Ok(document::to_cup_string(&doc)?)
}

/// Write a waypoint/task document given as a JSON string to CUP text.
#[wasm_bindgen(js_name = writeCupFromJson)]
pub fn write_cup_from_json(json: &str) -> Result<String, JsValue> {
    console_error_panic_hook::set_once();

    document::json_to_cup_string(json).map_err(JsValue::from)
}

fn parse_document(value: JsValue) -> Result<CupDocument, JsValue> {
    if value.is_undefined() || value.is_null() {
        Ok(CupDocument::default())
    } else {
        serde_wasm_bindgen::from_value(value)
            .map_err(|e| JsValue::from(js_sys::Error::new(&e.to_string())))
    }
}
