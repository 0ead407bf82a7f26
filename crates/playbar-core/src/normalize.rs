//! Configuration normalization.
//!
//! Turns a caller's `PartialConfig` into a canonical `Configuration`:
//! merge over the defaults, clamp numeric ranges, and replace colors the
//! host rejects. Pure and idempotent.

use smol_str::SmolStr;
use thiserror::Error;

use crate::config::{ColorField, Configuration, PartialConfig};

pub const DEFAULT_SKIP_SECONDS: f64 = 10.0;
pub const MIN_SKIP_SECONDS: f64 = 1.0;
pub const DEFAULT_VOLUME: f64 = 1.0;

/// Host predicate deciding whether a string is a usable CSS color.
pub trait ColorValidator {
    fn is_valid_color(&self, value: &str) -> bool;
}

impl<F> ColorValidator for F
where
    F: Fn(&str) -> bool,
{
    fn is_valid_color(&self, value: &str) -> bool {
        self(value)
    }
}

/// Color predicate backed by the lightningcss color parser.
///
/// Accepts the same syntax a browser's `CSS.supports("color", ..)` does for
/// the common cases (hex, functional notations, named colors).
#[cfg(feature = "css-colors")]
#[derive(Debug, Clone, Copy, Default)]
pub struct CssColorSyntax;

#[cfg(feature = "css-colors")]
impl ColorValidator for CssColorSyntax {
    fn is_valid_color(&self, value: &str) -> bool {
        use lightningcss::traits::Parse;
        use lightningcss::values::color::CssColor;

        CssColor::parse_string(value.trim()).is_ok()
    }
}

/// A configuration value that was recovered from rather than accepted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigWarning {
    #[error("Invalid color value for {field}, using default: {value:?}")]
    InvalidColor { field: ColorField, value: SmolStr },
}

/// Result of normalization: the canonical config plus anything that was replaced.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    pub config: Configuration,
    pub warnings: Vec<ConfigWarning>,
}

/// Merge `raw` over `defaults` and validate.
///
/// Each rejected color produces exactly one warning, logged and returned.
pub fn normalize(
    raw: &PartialConfig,
    defaults: &Configuration,
    colors: &impl ColorValidator,
) -> Normalized {
    let icons = raw
        .icons
        .as_ref()
        .map(|icons| icons.resolve(&defaults.icons))
        .unwrap_or_else(|| defaults.icons.clone());
    let controls = raw
        .controls
        .as_ref()
        .map(|controls| controls.resolve(&defaults.controls))
        .unwrap_or(defaults.controls);

    let mut config = Configuration {
        progress_color: raw
            .progress_color
            .clone()
            .unwrap_or_else(|| defaults.progress_color.clone()),
        controls_background: raw
            .controls_background
            .clone()
            .unwrap_or_else(|| defaults.controls_background.clone()),
        volume_slider_color: raw
            .volume_slider_color
            .clone()
            .unwrap_or_else(|| defaults.volume_slider_color.clone()),
        text_color: raw
            .text_color
            .clone()
            .unwrap_or_else(|| defaults.text_color.clone()),
        show_controls: raw.show_controls.unwrap_or(defaults.show_controls),
        skip_seconds: clamp_skip_seconds(raw.skip_seconds),
        auto_play: raw.auto_play.unwrap_or(defaults.auto_play),
        loop_playback: raw.loop_playback.unwrap_or(defaults.loop_playback),
        muted: raw.muted.unwrap_or(defaults.muted),
        volume: clamp_volume(raw.volume),
        icons,
        controls,
    };

    let mut warnings = Vec::new();
    for field in ColorField::ALL {
        let value = config.color(field);
        // An empty string counts as unset and silently takes the default.
        if value.is_empty() {
            *config.color_mut(field) = defaults.color(field).clone();
            continue;
        }
        if !colors.is_valid_color(value) {
            let warning = ConfigWarning::InvalidColor {
                field,
                value: value.clone(),
            };
            tracing::warn!("{}", warning);
            warnings.push(warning);
            *config.color_mut(field) = defaults.color(field).clone();
        }
    }

    Normalized { config, warnings }
}

/// Volume clamped to `[0, 1]`; unset or NaN means full volume.
pub fn clamp_volume(volume: Option<f64>) -> f64 {
    match volume {
        Some(v) if !v.is_nan() => v.clamp(0.0, 1.0),
        _ => DEFAULT_VOLUME,
    }
}

/// Skip interval floored at one second; unset or NaN means ten seconds.
pub fn clamp_skip_seconds(seconds: Option<f64>) -> f64 {
    match seconds {
        Some(s) if !s.is_nan() => s.max(MIN_SKIP_SECONDS),
        _ => DEFAULT_SKIP_SECONDS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PartialControls;

    fn accept_all(_: &str) -> bool {
        true
    }

    fn hex_only(value: &str) -> bool {
        value.starts_with('#') || value.starts_with("rgba(")
    }

    #[test]
    fn test_empty_partial_yields_defaults() {
        let out = normalize(&PartialConfig::default(), &Configuration::default(), &accept_all);
        assert_eq!(out.config, Configuration::default());
        assert!(out.warnings.is_empty());
    }

    #[test]
    fn test_volume_clamped() {
        assert_eq!(clamp_volume(Some(1.7)), 1.0);
        assert_eq!(clamp_volume(Some(-0.2)), 0.0);
        assert_eq!(clamp_volume(Some(0.35)), 0.35);
        assert_eq!(clamp_volume(None), 1.0);
        assert_eq!(clamp_volume(Some(f64::NAN)), 1.0);
        assert_eq!(clamp_volume(Some(f64::INFINITY)), 1.0);
    }

    #[test]
    fn test_skip_seconds_floor() {
        assert_eq!(clamp_skip_seconds(Some(0.25)), 1.0);
        assert_eq!(clamp_skip_seconds(Some(-5.0)), 1.0);
        assert_eq!(clamp_skip_seconds(Some(30.0)), 30.0);
        assert_eq!(clamp_skip_seconds(None), 10.0);
    }

    #[test]
    fn test_invalid_color_falls_back_with_one_warning() {
        let raw = PartialConfig {
            progress_color: Some("not-a-color".into()),
            text_color: Some("#000".into()),
            ..Default::default()
        };
        let out = normalize(&raw, &Configuration::default(), &hex_only);

        assert_eq!(out.config.progress_color, "#ffa600");
        assert_eq!(out.config.text_color, "#000");
        assert_eq!(
            out.warnings,
            vec![ConfigWarning::InvalidColor {
                field: ColorField::Progress,
                value: "not-a-color".into(),
            }]
        );
    }

    #[test]
    fn test_nested_controls_override_one_key() {
        let raw = PartialConfig {
            controls: Some(PartialControls {
                show_volume: Some(false),
                ..Default::default()
            }),
            ..Default::default()
        };
        let out = normalize(&raw, &Configuration::default(), &accept_all);
        assert!(!out.config.controls.show_volume);
        assert!(out.config.controls.show_rewind);
        assert!(out.config.controls.show_duration);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let raw = PartialConfig {
            volume: Some(4.0),
            skip_seconds: Some(0.1),
            volume_slider_color: Some("bogus".into()),
            muted: Some(true),
            ..Default::default()
        };
        let defaults = Configuration::default();
        let once = normalize(&raw, &defaults, &hex_only).config;
        let twice = normalize(&once.to_partial(), &defaults, &hex_only);
        assert_eq!(once, twice.config);
        assert!(twice.warnings.is_empty());
    }

    #[cfg(feature = "css-colors")]
    #[test]
    fn test_css_color_syntax() {
        let colors = CssColorSyntax;
        assert!(colors.is_valid_color("#ffa600"));
        assert!(colors.is_valid_color("rgba(0, 0, 0, 0.7)"));
        assert!(colors.is_valid_color("red"));
        assert!(colors.is_valid_color("hsl(120deg 50% 50%)"));
        assert!(!colors.is_valid_color("not-a-color"));
        assert!(!colors.is_valid_color("#12"));
    }
}
