//! The control surface as data.
//!
//! Surfaces render this model instead of interpolating markup, and resolve
//! their handles by the class names in [`class`]. Those names are the
//! contract between any surface implementation and the binder.

use smol_str::SmolStr;

use crate::config::Configuration;
use crate::sync::volume_icon;

/// Class names the binder resolves handles by.
pub mod class {
    pub const CONTAINER: &str = "video-player-container";
    pub const CONTROLS: &str = "controls";
    pub const PROGRESS_AREA: &str = "progress-area";
    pub const PROGRESS_BAR: &str = "progress-bar";
    pub const CONTROLS_LIST: &str = "controls-list";
    pub const CONTROLS_LEFT: &str = "controls-left";
    pub const CONTROLS_RIGHT: &str = "controls-right";
    pub const ICON: &str = "icon";
    pub const ICON_FONT: &str = "material-icons";
    pub const PLAY_PAUSE: &str = "play-pause";
    pub const REWIND: &str = "rewind";
    pub const FORWARD: &str = "forward";
    pub const VOLUME_CONTAINER: &str = "volume-container";
    pub const VOLUME: &str = "volume";
    pub const VOLUME_RANGE: &str = "volume-range";
    pub const TIMER: &str = "timer";
    pub const CURRENT: &str = "current";
    pub const DURATION: &str = "duration";
    pub const FULLSCREEN: &str = "fullscreen";
}

/// One item in a control row.
#[derive(Debug, Clone, PartialEq)]
pub enum Control {
    /// Clickable icon. `class` is the handle class name.
    Button { class: &'static str, icon: SmolStr },
    /// Mute icon plus a 0..=100 range slider.
    Volume { icon: SmolStr, value: u8 },
    /// `current / duration` labels, both starting at `0:00`.
    Timer,
}

/// Ordered control layout for one configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceLayout {
    /// Progress track with its fill bar above the rows.
    pub progress: bool,
    pub left: Vec<Control>,
    pub right: Vec<Control>,
}

impl SurfaceLayout {
    /// Layout for `config`, or None when controls are hidden altogether.
    pub fn from_config(config: &Configuration) -> Option<SurfaceLayout> {
        if !config.show_controls {
            return None;
        }
        let flags = &config.controls;
        let icons = &config.icons;

        let mut left = Vec::with_capacity(5);
        if flags.show_rewind {
            left.push(Control::Button {
                class: class::REWIND,
                icon: icons.rewind.clone(),
            });
        }
        left.push(Control::Button {
            class: class::PLAY_PAUSE,
            icon: icons.play.clone(),
        });
        if flags.show_forward {
            left.push(Control::Button {
                class: class::FORWARD,
                icon: icons.forward.clone(),
            });
        }
        if flags.show_volume {
            let level = if config.muted { 0.0 } else { config.volume };
            left.push(Control::Volume {
                icon: SmolStr::new(volume_icon(level, icons)),
                value: slider_position(level),
            });
        }
        if flags.show_duration {
            left.push(Control::Timer);
        }

        let mut right = Vec::with_capacity(1);
        if flags.show_fullscreen {
            right.push(Control::Button {
                class: class::FULLSCREEN,
                icon: icons.fullscreen.clone(),
            });
        }

        Some(SurfaceLayout {
            progress: flags.show_progress,
            left,
            right,
        })
    }
}

/// Slider position for a volume in `[0, 1]`, rounded down.
pub fn slider_position(volume: f64) -> u8 {
    // 0.29 * 100 is 28.999...; the nudge keeps whole percentages whole.
    (volume.clamp(0.0, 1.0) * 100.0 + 1e-9).floor() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_order() {
        let layout = SurfaceLayout::from_config(&Configuration::default()).unwrap();
        assert!(layout.progress);
        assert_eq!(
            layout.left,
            vec![
                Control::Button {
                    class: class::REWIND,
                    icon: "replay_10".into()
                },
                Control::Button {
                    class: class::PLAY_PAUSE,
                    icon: "play_arrow".into()
                },
                Control::Button {
                    class: class::FORWARD,
                    icon: "forward_10".into()
                },
                Control::Volume {
                    icon: "volume_up".into(),
                    value: 100
                },
                Control::Timer,
            ]
        );
        assert_eq!(layout.right.len(), 1);
    }

    #[test]
    fn test_hidden_controls_have_no_layout() {
        let config = Configuration {
            show_controls: false,
            ..Default::default()
        };
        assert!(SurfaceLayout::from_config(&config).is_none());
    }

    #[test]
    fn test_disabled_features_are_omitted() {
        let mut config = Configuration::default();
        config.controls.show_volume = false;
        config.controls.show_fullscreen = false;
        config.controls.show_progress = false;

        let layout = SurfaceLayout::from_config(&config).unwrap();
        assert!(!layout.progress);
        assert!(layout.right.is_empty());
        assert!(
            !layout
                .left
                .iter()
                .any(|c| matches!(c, Control::Volume { .. }))
        );
    }

    #[test]
    fn test_slider_position_from_volume() {
        assert_eq!(slider_position(0.8), 80);
        assert_eq!(slider_position(0.0), 0);
        assert_eq!(slider_position(1.0), 100);
        assert_eq!(slider_position(0.29), 29);
        assert_eq!(slider_position(0.555), 55);
    }

    #[test]
    fn test_muted_layout_starts_at_zero() {
        let config = Configuration {
            muted: true,
            volume: 0.2,
            ..Default::default()
        };
        let layout = SurfaceLayout::from_config(&config).unwrap();
        assert!(layout.left.contains(&Control::Volume {
            icon: "volume_off".into(),
            value: 0
        }));
    }
}
