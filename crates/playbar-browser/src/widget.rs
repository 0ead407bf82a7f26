//! Control-surface elements as [`Widget`]s.

use playbar_core::{Span, Widget};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement};

#[derive(Debug, Clone)]
pub struct WebWidget(pub HtmlElement);

impl WebWidget {
    pub fn element(&self) -> &HtmlElement {
        &self.0
    }

    fn input(&self) -> Option<&HtmlInputElement> {
        self.0.dyn_ref::<HtmlInputElement>()
    }
}

impl Widget for WebWidget {
    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn set_fill_percent(&self, percent: f64) {
        let width = format!("{percent}%");
        if let Err(e) = self.0.style().set_property("width", &width) {
            tracing::debug!("failed to set fill width: {:?}", e);
        }
    }

    fn set_value(&self, value: &str) {
        match self.input() {
            Some(input) => input.set_value(value),
            None => tracing::debug!("set_value on a non-input widget"),
        }
    }

    fn value(&self) -> Option<f64> {
        self.input()?.value().parse().ok()
    }

    fn span(&self) -> Option<Span> {
        let rect = self.0.get_bounding_client_rect();
        Some(Span {
            left: rect.left(),
            width: rect.width(),
        })
    }
}
