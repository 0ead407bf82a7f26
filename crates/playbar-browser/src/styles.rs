//! One-time stylesheet installation.

use std::cell::Cell;

use playbar_core::style::{STYLE_ELEMENT_ID, STYLESHEET};
use wasm_bindgen::JsValue;
use web_sys::Document;

thread_local! {
    static INSTALLED: Cell<bool> = const { Cell::new(false) };
}

/// Install the shared stylesheet into `document` unless it is already there.
///
/// A `<style>` the page already carries under the same id counts as installed.
pub fn ensure_stylesheet(document: &Document) -> Result<(), JsValue> {
    if INSTALLED.get() {
        return Ok(());
    }
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_none() {
        let style = document.create_element("style")?;
        style.set_id(STYLE_ELEMENT_ID);
        style.set_text_content(Some(STYLESHEET));
        let head = document
            .head()
            .ok_or_else(|| JsValue::from_str("document has no <head>"))?;
        head.append_child(&style)?;
        tracing::debug!("installed player stylesheet");
    }
    INSTALLED.set(true);
    Ok(())
}
