//! JsVideoPlayer - the player wrapper for JavaScript.

use playbar_browser::{MediaEvent, WebPlayer, attach, container_from, init_all};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::types::{
    JsConfig, JsResolvedConfig, JsVideoPlayerArray, config_to_js, partial_from_js, player_error,
};

/// Playback controls attached to one container element.
#[wasm_bindgen(js_name = VideoPlayer)]
pub struct JsVideoPlayer {
    inner: WebPlayer,
}

#[wasm_bindgen(js_class = VideoPlayer)]
impl JsVideoPlayer {
    /// Attach controls to `element`.
    ///
    /// Throws `InvalidElementError` if `element` is not an `HTMLElement`.
    #[wasm_bindgen(constructor)]
    pub fn new(element: JsValue, config: Option<JsConfig>) -> Result<JsVideoPlayer, JsValue> {
        let container = container_from(element).map_err(player_error)?;
        let partial = partial_from_js(config)?;
        let inner = attach(container, &partial).map_err(player_error)?;
        Ok(Self { inner })
    }

    /// Attach a player to every element matching `selector`.
    pub fn init(
        selector: &str,
        config: Option<JsConfig>,
    ) -> Result<JsVideoPlayerArray, JsValue> {
        let partial = partial_from_js(config)?;
        let players = init_all(selector, &partial).map_err(player_error)?;

        let array = js_sys::Array::new();
        for inner in players {
            array.push(&JsValue::from(JsVideoPlayer { inner }));
        }
        Ok(array.unchecked_into())
    }

    #[wasm_bindgen(js_name = togglePlay)]
    pub fn toggle_play(&self) {
        self.inner.toggle_play();
    }

    /// Set the volume from a slider value in `[0, 100]`.
    #[wasm_bindgen(js_name = setVolume)]
    pub fn set_volume(&self, value: f64) {
        self.inner.set_volume(value);
    }

    #[wasm_bindgen(js_name = toggleMute)]
    pub fn toggle_mute(&self) {
        self.inner.toggle_mute();
    }

    /// Move the playhead by `seconds`; negative rewinds.
    pub fn skip(&self, seconds: f64) {
        self.inner.skip(seconds);
    }

    #[wasm_bindgen(js_name = toggleFullscreen)]
    pub fn toggle_fullscreen(&self) {
        self.inner.toggle_fullscreen();
    }

    /// Merge `config` over the current configuration and rebuild the controls.
    #[wasm_bindgen(js_name = setConfig)]
    pub fn set_config(&self, config: Option<JsConfig>) -> Result<(), JsValue> {
        let partial = partial_from_js(config)?;
        self.inner.set_config(&partial).map_err(player_error)
    }

    /// A fresh copy of the resolved configuration.
    #[wasm_bindgen(js_name = getConfig)]
    pub fn get_config(&self) -> Result<JsResolvedConfig, JsValue> {
        config_to_js(&self.inner.config())
    }

    /// Remove the controls and every listener. Safe to call more than once.
    pub fn destroy(&self) {
        self.inner.destroy();
    }

    /// Subscribe to a native event on the media element.
    ///
    /// The callback receives the DOM `Event`. It keeps firing across
    /// `setConfig` and stops on `destroy`.
    pub fn on(&self, event_name: &str, callback: js_sys::Function) -> Result<(), JsValue> {
        self.inner
            .on(MediaEvent::parse(event_name), move |event| {
                if let Err(e) = callback.call1(&JsValue::NULL, event) {
                    tracing::warn!("event callback threw: {:?}", e);
                }
            })
            .map_err(player_error)
    }
}
