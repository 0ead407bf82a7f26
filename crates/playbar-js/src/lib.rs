//! WASM bindings for playbar.
//!
//! Exposes `VideoPlayer` to JavaScript/TypeScript:
//!
//! ```js
//! import init, { VideoPlayer } from "playbar-js";
//!
//! await init();
//! const players = VideoPlayer.init(".video-player", { skipSeconds: 5 });
//! ```

mod player;
mod types;

pub use player::*;
pub use types::*;

use wasm_bindgen::prelude::*;

/// Initialize panic hook and console logging.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    use tracing::Level;
    use tracing::subscriber::set_global_default;
    use tracing_subscriber::Registry;
    use tracing_subscriber::layer::SubscriberExt;

    let console_level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let wasm_layer = tracing_wasm::WASMLayer::new(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(console_level)
            .build(),
    );

    // Another module may have installed a subscriber already.
    let _ = set_global_default(Registry::default().with(wasm_layer));
}
