//! Player configuration: the canonical record and the caller-facing partial.
//!
//! `Configuration` is what the player runs on. Every field is concrete.
//! `PartialConfig` is what callers hand in; every field is optional and the
//! nested `icons`/`controls` tables merge key by key, so overriding one icon
//! keeps the rest.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// Canonical, fully-defaulted player configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    pub progress_color: SmolStr,
    pub controls_background: SmolStr,
    pub volume_slider_color: SmolStr,
    pub text_color: SmolStr,
    pub show_controls: bool,
    /// Seconds moved by the rewind/forward buttons. Never below 1.
    pub skip_seconds: f64,
    pub auto_play: bool,
    #[serde(rename = "loop")]
    pub loop_playback: bool,
    pub muted: bool,
    /// Initial media volume in `[0, 1]`.
    pub volume: f64,
    pub icons: Icons,
    pub controls: ControlFlags,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            progress_color: SmolStr::new_static("#ffa600"),
            controls_background: SmolStr::new_static("rgba(0, 0, 0, 0.7)"),
            volume_slider_color: SmolStr::new_static("#ffffff"),
            text_color: SmolStr::new_static("#ffffff"),
            show_controls: true,
            skip_seconds: 10.0,
            auto_play: false,
            loop_playback: false,
            muted: false,
            volume: 1.0,
            icons: Icons::default(),
            controls: ControlFlags::default(),
        }
    }
}

impl Configuration {
    /// Read a color field by name.
    pub fn color(&self, field: ColorField) -> &SmolStr {
        match field {
            ColorField::Progress => &self.progress_color,
            ColorField::ControlsBackground => &self.controls_background,
            ColorField::VolumeSlider => &self.volume_slider_color,
            ColorField::Text => &self.text_color,
        }
    }

    pub(crate) fn color_mut(&mut self, field: ColorField) -> &mut SmolStr {
        match field {
            ColorField::Progress => &mut self.progress_color,
            ColorField::ControlsBackground => &mut self.controls_background,
            ColorField::VolumeSlider => &mut self.volume_slider_color,
            ColorField::Text => &mut self.text_color,
        }
    }

    /// A partial with every field populated from this configuration.
    ///
    /// Merging any partial over this one is how reconfiguration starts from
    /// the current state rather than from the defaults.
    pub fn to_partial(&self) -> PartialConfig {
        PartialConfig {
            progress_color: Some(self.progress_color.clone()),
            controls_background: Some(self.controls_background.clone()),
            volume_slider_color: Some(self.volume_slider_color.clone()),
            text_color: Some(self.text_color.clone()),
            show_controls: Some(self.show_controls),
            skip_seconds: Some(self.skip_seconds),
            auto_play: Some(self.auto_play),
            loop_playback: Some(self.loop_playback),
            muted: Some(self.muted),
            volume: Some(self.volume),
            icons: Some(PartialIcons {
                play: Some(self.icons.play.clone()),
                pause: Some(self.icons.pause.clone()),
                volume_up: Some(self.icons.volume_up.clone()),
                volume_down: Some(self.icons.volume_down.clone()),
                volume_off: Some(self.icons.volume_off.clone()),
                fullscreen: Some(self.icons.fullscreen.clone()),
                rewind: Some(self.icons.rewind.clone()),
                forward: Some(self.icons.forward.clone()),
            }),
            controls: Some(PartialControls {
                show_rewind: Some(self.controls.show_rewind),
                show_forward: Some(self.controls.show_forward),
                show_volume: Some(self.controls.show_volume),
                show_fullscreen: Some(self.controls.show_fullscreen),
                show_progress: Some(self.controls.show_progress),
                show_duration: Some(self.controls.show_duration),
            }),
        }
    }
}

/// Display tokens for each control icon (Material Icons ligature names by default).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Icons {
    pub play: SmolStr,
    pub pause: SmolStr,
    pub volume_up: SmolStr,
    pub volume_down: SmolStr,
    pub volume_off: SmolStr,
    pub fullscreen: SmolStr,
    pub rewind: SmolStr,
    pub forward: SmolStr,
}

impl Default for Icons {
    fn default() -> Self {
        Self {
            play: SmolStr::new_static("play_arrow"),
            pause: SmolStr::new_static("pause"),
            volume_up: SmolStr::new_static("volume_up"),
            volume_down: SmolStr::new_static("volume_down"),
            volume_off: SmolStr::new_static("volume_off"),
            fullscreen: SmolStr::new_static("fullscreen"),
            rewind: SmolStr::new_static("replay_10"),
            forward: SmolStr::new_static("forward_10"),
        }
    }
}

/// Which optional controls the surface renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlFlags {
    pub show_rewind: bool,
    pub show_forward: bool,
    pub show_volume: bool,
    pub show_fullscreen: bool,
    pub show_progress: bool,
    pub show_duration: bool,
}

impl Default for ControlFlags {
    fn default() -> Self {
        Self {
            show_rewind: true,
            show_forward: true,
            show_volume: true,
            show_fullscreen: true,
            show_progress: true,
            show_duration: true,
        }
    }
}

/// The four themeable colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorField {
    Progress,
    ControlsBackground,
    VolumeSlider,
    Text,
}

impl ColorField {
    pub const ALL: [ColorField; 4] = [
        ColorField::Progress,
        ColorField::ControlsBackground,
        ColorField::VolumeSlider,
        ColorField::Text,
    ];

    /// Configuration key as callers spell it.
    pub fn as_str(self) -> &'static str {
        match self {
            ColorField::Progress => "progressColor",
            ColorField::ControlsBackground => "controlsBackground",
            ColorField::VolumeSlider => "volumeSliderColor",
            ColorField::Text => "textColor",
        }
    }

    /// CSS custom property the color is published under on the container.
    pub fn custom_property(self) -> &'static str {
        match self {
            ColorField::Progress => "--progress-color",
            ColorField::ControlsBackground => "--controls-bg",
            ColorField::VolumeSlider => "--volume-slider",
            ColorField::Text => "--text-color",
        }
    }
}

impl std::fmt::Display for ColorField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller-supplied configuration. Unset fields fall back during normalization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress_color: Option<SmolStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub controls_background: Option<SmolStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_slider_color: Option<SmolStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<SmolStr>,
    #[serde(
        deserialize_with = "truthy::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub show_controls: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_seconds: Option<f64>,
    #[serde(
        deserialize_with = "truthy::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub auto_play: Option<bool>,
    #[serde(
        rename = "loop",
        deserialize_with = "truthy::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub loop_playback: Option<bool>,
    #[serde(
        deserialize_with = "truthy::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub muted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icons: Option<PartialIcons>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub controls: Option<PartialControls>,
}

impl PartialConfig {
    /// Layer `self` over `base`: every field set here wins, nested tables
    /// merge per key.
    pub fn merged_over(&self, base: &PartialConfig) -> PartialConfig {
        PartialConfig {
            progress_color: self.progress_color.clone().or_else(|| base.progress_color.clone()),
            controls_background: self
                .controls_background
                .clone()
                .or_else(|| base.controls_background.clone()),
            volume_slider_color: self
                .volume_slider_color
                .clone()
                .or_else(|| base.volume_slider_color.clone()),
            text_color: self.text_color.clone().or_else(|| base.text_color.clone()),
            show_controls: self.show_controls.or(base.show_controls),
            skip_seconds: self.skip_seconds.or(base.skip_seconds),
            auto_play: self.auto_play.or(base.auto_play),
            loop_playback: self.loop_playback.or(base.loop_playback),
            muted: self.muted.or(base.muted),
            volume: self.volume.or(base.volume),
            icons: merge_nested(&self.icons, &base.icons, PartialIcons::merged_over),
            controls: merge_nested(&self.controls, &base.controls, PartialControls::merged_over),
        }
    }
}

fn merge_nested<T: Clone>(over: &Option<T>, base: &Option<T>, merge: fn(&T, &T) -> T) -> Option<T> {
    match (over, base) {
        (Some(over), Some(base)) => Some(merge(over, base)),
        (Some(only), None) | (None, Some(only)) => Some(only.clone()),
        (None, None) => None,
    }
}

/// Per-key icon overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialIcons {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub play: Option<SmolStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pause: Option<SmolStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_up: Option<SmolStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_down: Option<SmolStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_off: Option<SmolStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fullscreen: Option<SmolStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rewind: Option<SmolStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forward: Option<SmolStr>,
}

impl PartialIcons {
    pub fn merged_over(&self, base: &PartialIcons) -> PartialIcons {
        PartialIcons {
            play: self.play.clone().or_else(|| base.play.clone()),
            pause: self.pause.clone().or_else(|| base.pause.clone()),
            volume_up: self.volume_up.clone().or_else(|| base.volume_up.clone()),
            volume_down: self.volume_down.clone().or_else(|| base.volume_down.clone()),
            volume_off: self.volume_off.clone().or_else(|| base.volume_off.clone()),
            fullscreen: self.fullscreen.clone().or_else(|| base.fullscreen.clone()),
            rewind: self.rewind.clone().or_else(|| base.rewind.clone()),
            forward: self.forward.clone().or_else(|| base.forward.clone()),
        }
    }

    /// Fill unset keys from `defaults`.
    pub fn resolve(&self, defaults: &Icons) -> Icons {
        Icons {
            play: self.play.clone().unwrap_or_else(|| defaults.play.clone()),
            pause: self.pause.clone().unwrap_or_else(|| defaults.pause.clone()),
            volume_up: self.volume_up.clone().unwrap_or_else(|| defaults.volume_up.clone()),
            volume_down: self
                .volume_down
                .clone()
                .unwrap_or_else(|| defaults.volume_down.clone()),
            volume_off: self
                .volume_off
                .clone()
                .unwrap_or_else(|| defaults.volume_off.clone()),
            fullscreen: self
                .fullscreen
                .clone()
                .unwrap_or_else(|| defaults.fullscreen.clone()),
            rewind: self.rewind.clone().unwrap_or_else(|| defaults.rewind.clone()),
            forward: self.forward.clone().unwrap_or_else(|| defaults.forward.clone()),
        }
    }
}

/// Per-key control visibility overrides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialControls {
    #[serde(
        deserialize_with = "truthy::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub show_rewind: Option<bool>,
    #[serde(
        deserialize_with = "truthy::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub show_forward: Option<bool>,
    #[serde(
        deserialize_with = "truthy::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub show_volume: Option<bool>,
    #[serde(
        deserialize_with = "truthy::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub show_fullscreen: Option<bool>,
    #[serde(
        deserialize_with = "truthy::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub show_progress: Option<bool>,
    #[serde(
        deserialize_with = "truthy::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub show_duration: Option<bool>,
}

impl PartialControls {
    pub fn merged_over(&self, base: &PartialControls) -> PartialControls {
        PartialControls {
            show_rewind: self.show_rewind.or(base.show_rewind),
            show_forward: self.show_forward.or(base.show_forward),
            show_volume: self.show_volume.or(base.show_volume),
            show_fullscreen: self.show_fullscreen.or(base.show_fullscreen),
            show_progress: self.show_progress.or(base.show_progress),
            show_duration: self.show_duration.or(base.show_duration),
        }
    }

    /// Fill unset keys from `defaults`.
    pub fn resolve(&self, defaults: &ControlFlags) -> ControlFlags {
        ControlFlags {
            show_rewind: self.show_rewind.unwrap_or(defaults.show_rewind),
            show_forward: self.show_forward.unwrap_or(defaults.show_forward),
            show_volume: self.show_volume.unwrap_or(defaults.show_volume),
            show_fullscreen: self.show_fullscreen.unwrap_or(defaults.show_fullscreen),
            show_progress: self.show_progress.unwrap_or(defaults.show_progress),
            show_duration: self.show_duration.unwrap_or(defaults.show_duration),
        }
    }
}

/// Boolean fields accept any JSON/JS value and collapse it by truthiness.
///
/// `null` and absent leave the field unset. `0`, `NaN`, `""` and `false`
/// are false; any other number, string, array or object is true.
mod truthy {
    use std::fmt;

    use serde::Deserializer;
    use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(TruthyVisitor)
    }

    struct TruthyVisitor;

    impl<'de> Visitor<'de> for TruthyVisitor {
        type Value = Option<bool>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("any value (collapsed by truthiness)")
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
            Ok(Some(v))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(Some(v != 0))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(Some(v != 0))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
            Ok(Some(v != 0.0 && !v.is_nan()))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok(Some(!v.is_empty()))
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
            d.deserialize_any(TruthyVisitor)
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            while seq.next_element::<IgnoredAny>()?.is_some() {}
            Ok(Some(true))
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
            Ok(Some(true))
        }
    }
}
