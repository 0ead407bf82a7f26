//! Types exposed to JavaScript via wasm-bindgen.

use playbar_core::{Configuration, PartialConfig, PlayerError};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(typescript_custom_section)]
const TS_CONFIG: &'static str = r#"
export interface VideoPlayerIcons {
  play?: string;
  pause?: string;
  volumeUp?: string;
  volumeDown?: string;
  volumeOff?: string;
  fullscreen?: string;
  rewind?: string;
  forward?: string;
}

export interface VideoPlayerControls {
  showRewind?: boolean;
  showForward?: boolean;
  showVolume?: boolean;
  showFullscreen?: boolean;
  showProgress?: boolean;
  showDuration?: boolean;
}

export interface VideoPlayerConfig {
  progressColor?: string;
  controlsBackground?: string;
  volumeSliderColor?: string;
  textColor?: string;
  showControls?: boolean;
  skipSeconds?: number;
  autoPlay?: boolean;
  loop?: boolean;
  muted?: boolean;
  volume?: number;
  icons?: VideoPlayerIcons;
  controls?: VideoPlayerControls;
}

export interface ResolvedVideoPlayerConfig extends Required<Omit<VideoPlayerConfig, "icons" | "controls">> {
  icons: Required<VideoPlayerIcons>;
  controls: Required<VideoPlayerControls>;
}
"#;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(typescript_type = "VideoPlayerConfig")]
    pub type JsConfig;

    #[wasm_bindgen(typescript_type = "ResolvedVideoPlayerConfig")]
    pub type JsResolvedConfig;

    #[wasm_bindgen(typescript_type = "VideoPlayer[]")]
    pub type JsVideoPlayerArray;
}

/// Read a caller config. `undefined` and `null` mean "all defaults".
pub(crate) fn partial_from_js(config: Option<JsConfig>) -> Result<PartialConfig, JsValue> {
    let Some(config) = config else {
        return Ok(PartialConfig::default());
    };
    let value: JsValue = config.into();
    if value.is_null() || value.is_undefined() {
        return Ok(PartialConfig::default());
    }
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| player_error(PlayerError::InvalidConfig(e.to_string())))
}

pub(crate) fn config_to_js(config: &Configuration) -> Result<JsResolvedConfig, JsValue> {
    serde_wasm_bindgen::to_value(config)
        .map(JsCast::unchecked_into)
        .map_err(|e| JsError::new(&format!("Failed to serialize config: {}", e)).into())
}

/// Convert a player error into a thrown JS `Error`.
///
/// The invalid-container case carries the name `InvalidElementError` so
/// callers can tell it apart from other failures.
pub(crate) fn player_error(err: PlayerError) -> JsValue {
    let error = js_sys::Error::new(&err.to_string());
    match err {
        PlayerError::InvalidElement => error.set_name("InvalidElementError"),
        PlayerError::InvalidConfig(_) => error.set_name("InvalidConfigError"),
        _ => {}
    }
    error.into()
}
