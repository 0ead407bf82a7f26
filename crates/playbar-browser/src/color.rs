//! Color validation against the browser's CSS parser.

use playbar_core::ColorValidator;

/// Accepts exactly what `CSS.supports("color", value)` accepts.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserColors;

impl ColorValidator for BrowserColors {
    fn is_valid_color(&self, value: &str) -> bool {
        match web_sys::css::supports_with_value("color", value) {
            Ok(supported) => supported,
            Err(e) => {
                tracing::debug!("CSS.supports failed: {:?}", e);
                false
            }
        }
    }
}
