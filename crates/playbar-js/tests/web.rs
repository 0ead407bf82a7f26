//! WASM browser tests for the JavaScript surface.
//!
//! Run with: `wasm-pack test --headless --firefox` or `--chrome`

use std::cell::RefCell;
use std::rc::Rc;

use playbar_js::JsVideoPlayer;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_test::*;
use web_sys::{Event, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

/// A fresh `<div><video></video></div>` attached to the body.
fn make_container() -> HtmlElement {
    let doc = web_sys::window().unwrap().document().unwrap();
    let container: HtmlElement = doc.create_element("div").unwrap().dyn_into().unwrap();
    container
        .append_child(&doc.create_element("video").unwrap())
        .unwrap();
    doc.body().unwrap().append_child(&container).unwrap();
    container
}

#[wasm_bindgen_test]
fn test_on_passes_the_dom_event() {
    let container = make_container();
    let player = JsVideoPlayer::new(container.clone().into(), None).unwrap();

    let seen = Rc::new(RefCell::new(None));
    let log = seen.clone();
    let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        *log.borrow_mut() = Some(event.type_());
    });
    player
        .on("volumechange", callback.as_ref().unchecked_ref::<js_sys::Function>().clone())
        .unwrap();

    let video = container.query_selector("video").unwrap().unwrap();
    video
        .dispatch_event(&Event::new("volumechange").unwrap())
        .unwrap();
    assert_eq!(seen.borrow().as_deref(), Some("volumechange"));
}

#[wasm_bindgen_test]
fn test_constructor_rejects_non_elements() {
    let err = JsVideoPlayer::new(JsValue::from_str("#player"), None).err().unwrap();
    let err: js_sys::Error = err.dyn_into().unwrap();
    assert_eq!(err.name(), "InvalidElementError");
}
