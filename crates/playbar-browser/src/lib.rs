//! Browser DOM layer for playbar.
//!
//! This crate provides the web-sys implementation of the core platform
//! traits. It assumes a `wasm32-unknown-unknown` target environment.
//!
//! # Architecture
//!
//! - `platform`: `WebPlatform`, the per-container host (listeners, fullscreen)
//! - `surface`: renders the control layout and resolves handles by class
//! - `media` / `widget`: element wrappers implementing the core traits
//! - `styles`: one-time stylesheet installation
//! - `color`: `CSS.supports`-backed color validation
//!
//! # Re-exports
//!
//! This crate re-exports `playbar-core` for convenience, so consumers
//! only need to depend on `playbar-browser`.

// Re-export core crate
pub use playbar_core;
pub use playbar_core::*;

pub mod color;
pub mod media;
pub mod platform;
pub mod styles;
pub mod surface;
pub mod widget;

pub use color::BrowserColors;
pub use media::WebMedia;
pub use platform::{WebPlatform, container_from};
pub use widget::WebWidget;

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// A player running in the browser.
pub type WebPlayer = Player<WebPlatform>;

/// Attach a player to `container`.
pub fn attach(container: HtmlElement, config: &PartialConfig) -> Result<WebPlayer, PlayerError> {
    Player::new(WebPlatform::new()?, container, config)
}

/// Attach one player to every element matching `selector`.
///
/// Matches that are not HTML elements are skipped. If any attach fails,
/// the players built so far are destroyed and the error is returned.
pub fn init_all(selector: &str, config: &PartialConfig) -> Result<Vec<WebPlayer>, PlayerError> {
    let document = platform::current_document()?;
    let nodes = document
        .query_selector_all(selector)
        .map_err(|e| PlayerError::InvalidConfig(format!("bad selector {selector:?}: {e:?}")))?;

    let mut containers = Vec::with_capacity(nodes.length() as usize);
    for index in 0..nodes.length() {
        let Some(node) = nodes.item(index) else {
            continue;
        };
        match node.dyn_into::<HtmlElement>() {
            Ok(container) => containers.push(container),
            Err(_) => tracing::warn!(selector, "skipping non-HTML match"),
        }
    }

    let targets = containers
        .into_iter()
        .map(|container| (WebPlatform::with_document(document.clone()), container));
    let players = attach_all(targets, config)?;
    tracing::debug!(selector, count = players.len(), "players initialized");
    Ok(players)
}
