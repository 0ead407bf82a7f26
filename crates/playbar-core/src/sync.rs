//! Playback sync rules.
//!
//! Each rule runs in one direction only: a widget interaction mutates the
//! media element, or a media notification mutates widgets. No rule does
//! both, so a rule can never trigger itself through the other side.
//!
//! Every rule checks the handles it needs at entry and quietly does nothing
//! when one is absent or when the media has no usable duration yet.

use crate::config::{Configuration, Icons};
use crate::handles::{HandleSet, element};
use crate::layout::slider_position;
use crate::platform::{MediaElement, Platform, Widget};

/// Slider range upper bound.
pub const SLIDER_MAX: f64 = 100.0;

/// Volume below which the "down" icon is shown.
pub const LOW_VOLUME: f64 = 0.4;

/// Render seconds as `M:SS`. Minutes are not padded and never roll into hours.
///
/// Negative and non-finite inputs render as `0:00`.
pub fn format_time(seconds: f64) -> String {
    let seconds = if seconds.is_finite() && seconds > 0.0 {
        seconds
    } else {
        0.0
    };
    let minutes = (seconds / 60.0).floor() as u64;
    let remainder = (seconds % 60.0).floor() as u64;
    format!("{minutes}:{remainder:02}")
}

/// Volume icon for a level in `[0, 1]`.
pub fn volume_icon(volume: f64, icons: &Icons) -> &str {
    if volume <= 0.0 {
        &icons.volume_off
    } else if volume < LOW_VOLUME {
        &icons.volume_down
    } else {
        &icons.volume_up
    }
}

/// Slider text for a value already clamped to `[0, 100]`.
fn slider_text(value: f64) -> String {
    // f64 Display prints integral values without a fraction.
    format!("{value}")
}

/// Widget → media: flip play state and set the toggle icon eagerly.
///
/// Works without a toggle widget (the media surface itself is clickable);
/// only the icon update is skipped then.
pub fn toggle_play<M: MediaElement, W: Widget>(config: &Configuration, handles: &HandleSet<M, W>) {
    let Some(media) = handles.video() else {
        return;
    };
    let icon = if media.paused() {
        media.play();
        &config.icons.pause
    } else {
        media.pause();
        &config.icons.play
    };
    if let Some(toggle) = element(&handles.play_pause) {
        toggle.set_text(icon);
    }
}

/// Widget → media: apply a slider value in `[0, 100]`.
///
/// A no-op without a volume slider. A positive value while muted unmutes.
pub fn set_volume<M: MediaElement, W: Widget>(
    config: &Configuration,
    handles: &HandleSet<M, W>,
    value: f64,
) {
    let (Some(media), Some(slider)) = (handles.video(), element(&handles.volume_slider)) else {
        return;
    };
    if value.is_nan() {
        return;
    }
    let value = value.clamp(0.0, SLIDER_MAX);
    let volume = value / SLIDER_MAX;

    media.set_volume(volume);
    if volume > 0.0 && media.muted() {
        media.set_muted(false);
    }
    slider.set_value(&slider_text(value));

    if let Some(icon) = element(&handles.volume_icon) {
        icon.set_text(volume_icon(volume, &config.icons));
    }
}

/// Widget → media: flip mute without touching the stored volume.
pub fn toggle_mute<M: MediaElement, W: Widget>(config: &Configuration, handles: &HandleSet<M, W>) {
    let Some(media) = handles.video() else {
        return;
    };
    media.set_muted(!media.muted());
    reflect_volume(config, handles);
}

/// Media → widget: slider and icon follow the effective level.
///
/// Muted reads as 0 with the off icon; otherwise the slider shows
/// `floor(volume * 100)` and the icon follows the thresholds.
pub fn reflect_volume<M: MediaElement, W: Widget>(
    config: &Configuration,
    handles: &HandleSet<M, W>,
) {
    let Some(media) = handles.video() else {
        return;
    };
    let level = if media.muted() { 0.0 } else { media.volume() };
    if let Some(slider) = element(&handles.volume_slider) {
        slider.set_value(&slider_text(f64::from(slider_position(level))));
    }
    if let Some(icon) = element(&handles.volume_icon) {
        icon.set_text(volume_icon(level, &config.icons));
    }
}

/// Widget → media: seek to the pointer position on the progress track.
pub fn seek_to_pointer<M: MediaElement, W: Widget>(handles: &HandleSet<M, W>, client_x: f64) {
    let (Some(media), Some(track)) = (handles.video(), element(&handles.progress_track)) else {
        return;
    };
    let Some(duration) = media.known_duration() else {
        return;
    };
    let Some(fraction) = track.span().and_then(|span| span.fraction_at(client_x)) else {
        return;
    };
    media.set_current_time(fraction * duration);
}

/// Widget → media: move the playhead by `seconds`, saturating at both ends.
pub fn skip<M: MediaElement, W: Widget>(handles: &HandleSet<M, W>, seconds: f64) {
    let Some(media) = handles.video() else {
        return;
    };
    let Some(duration) = media.known_duration() else {
        return;
    };
    if seconds.is_nan() {
        return;
    }
    let target = (media.current_time() + seconds).clamp(0.0, duration);
    media.set_current_time(target);
}

/// Media → widget: fill width and current-time label.
pub fn reflect_progress<M: MediaElement, W: Widget>(handles: &HandleSet<M, W>) {
    let Some(media) = handles.video() else {
        return;
    };
    let Some(duration) = media.known_duration() else {
        return;
    };
    let current = media.current_time();
    if let Some(fill) = element(&handles.progress_fill) {
        fill.set_fill_percent((current / duration * 100.0).clamp(0.0, 100.0));
    }
    if let Some(label) = element(&handles.current_time) {
        label.set_text(&format_time(current));
    }
}

/// Media → widget: duration label, once metadata is known.
pub fn reflect_duration<M: MediaElement, W: Widget>(handles: &HandleSet<M, W>) {
    let (Some(media), Some(label)) = (handles.video(), element(&handles.duration)) else {
        return;
    };
    if let Some(duration) = media.known_duration() {
        label.set_text(&format_time(duration));
    }
}

/// Media → widget: toggle icon follows the native play state.
pub fn reflect_play_state<M: MediaElement, W: Widget>(
    config: &Configuration,
    handles: &HandleSet<M, W>,
) {
    let (Some(media), Some(toggle)) = (handles.video(), element(&handles.play_pause)) else {
        return;
    };
    let icon = if media.paused() {
        &config.icons.play
    } else {
        &config.icons.pause
    };
    toggle.set_text(icon);
}

/// Widget → environment: enter fullscreen on the container, or leave it.
pub fn toggle_fullscreen<P: Platform>(platform: &P, container: &P::Container) {
    if platform.is_fullscreen() {
        platform.exit_fullscreen();
    } else {
        platform.request_fullscreen(container);
    }
}

/// Apply the configured initial state to the media element.
pub fn install_media_state<M: MediaElement>(config: &Configuration, media: &M) {
    media.set_autoplay(config.auto_play);
    media.set_loop(config.loop_playback);
    media.set_muted(config.muted);
    media.set_volume(config.volume);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(65.0), "1:05");
        assert_eq!(format_time(3600.0), "60:00");
        assert_eq!(format_time(59.9), "0:59");
        assert_eq!(format_time(600.5), "10:00");
    }

    #[test]
    fn test_format_time_degenerate_inputs() {
        assert_eq!(format_time(f64::NAN), "0:00");
        assert_eq!(format_time(-3.0), "0:00");
        assert_eq!(format_time(f64::INFINITY), "0:00");
    }

    #[test]
    fn test_volume_icon_thresholds() {
        let icons = Icons::default();
        assert_eq!(volume_icon(0.0, &icons), "volume_off");
        assert_eq!(volume_icon(0.1, &icons), "volume_down");
        assert_eq!(volume_icon(0.39, &icons), "volume_down");
        assert_eq!(volume_icon(0.4, &icons), "volume_up");
        assert_eq!(volume_icon(1.0, &icons), "volume_up");
    }

    #[test]
    fn test_slider_text_is_integral_for_whole_values() {
        assert_eq!(slider_text(80.0), "80");
        assert_eq!(slider_text(0.0), "0");
        assert_eq!(slider_text(12.5), "12.5");
    }
}
