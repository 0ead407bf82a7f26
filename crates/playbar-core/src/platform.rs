//! Platform abstraction traits for the player.
//!
//! These traits define the interface between the playback sync logic and the
//! host UI (browser DOM, a native toolkit, or an in-memory fake in tests).
//! The core never touches elements directly; it only sees handles through
//! these traits.

use thiserror::Error;

use crate::config::Configuration;
use crate::events::{Handler, MediaEvent, Observer, WidgetEvent};
use crate::normalize::ColorValidator;

/// A host DOM or listener operation failed, in the host's own words.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{0}")]
pub struct PlatformError(pub String);

impl From<&str> for PlatformError {
    fn from(message: &str) -> Self {
        Self(message.to_owned())
    }
}

impl From<String> for PlatformError {
    fn from(message: String) -> Self {
        Self(message)
    }
}

/// The media element as an opaque capability.
///
/// Methods take `&self`: host elements are shared handles with their own
/// interior state.
pub trait MediaElement {
    fn paused(&self) -> bool;

    /// Start playback. Asynchronous failures are the implementation's to report.
    fn play(&self);

    fn pause(&self);

    fn current_time(&self) -> f64;

    fn set_current_time(&self, seconds: f64);

    /// Total length in seconds; NaN until metadata has loaded.
    fn duration(&self) -> f64;

    fn volume(&self) -> f64;

    fn set_volume(&self, volume: f64);

    fn muted(&self) -> bool;

    fn set_muted(&self, muted: bool);

    fn set_autoplay(&self, autoplay: bool);

    fn set_loop(&self, looping: bool);

    /// Duration, if metadata has loaded and it is usable as a divisor.
    fn known_duration(&self) -> Option<f64> {
        let duration = self.duration();
        (duration.is_finite() && duration > 0.0).then_some(duration)
    }
}

/// Horizontal extent of an element in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub left: f64,
    pub width: f64,
}

impl Span {
    /// Fractional position of `x` within the span, clamped to `[0, 1]`.
    ///
    /// Returns None for a collapsed span.
    pub fn fraction_at(&self, x: f64) -> Option<f64> {
        if !(self.width > 0.0) || !x.is_finite() {
            return None;
        }
        Some(((x - self.left) / self.width).clamp(0.0, 1.0))
    }
}

/// One control-surface element.
pub trait Widget {
    /// Replace the visible text (labels, icon tokens).
    fn set_text(&self, text: &str);

    /// Set the fill width of a progress bar, in percent.
    fn set_fill_percent(&self, percent: f64);

    /// Set the value of an input widget.
    fn set_value(&self, value: &str);

    /// Numeric value of an input widget.
    fn value(&self) -> Option<f64>;

    /// Horizontal extent, for pointer hit math.
    fn span(&self) -> Option<Span>;
}

/// Raw elements produced by one surface build.
///
/// Absent features are `None`, never placeholders.
#[derive(Debug, Clone)]
pub struct SurfaceParts<M, W> {
    pub video: Option<M>,
    pub controls: Option<W>,
    pub progress_track: Option<W>,
    pub progress_fill: Option<W>,
    pub play_pause: Option<W>,
    pub volume_slider: Option<W>,
    pub volume_icon: Option<W>,
    pub current_time: Option<W>,
    pub duration: Option<W>,
    pub rewind: Option<W>,
    pub forward: Option<W>,
    pub fullscreen: Option<W>,
}

impl<M, W> Default for SurfaceParts<M, W> {
    fn default() -> Self {
        Self {
            video: None,
            controls: None,
            progress_track: None,
            progress_fill: None,
            play_pause: None,
            volume_slider: None,
            volume_icon: None,
            current_time: None,
            duration: None,
            rewind: None,
            forward: None,
            fullscreen: None,
        }
    }
}

/// Builds and removes the control markup inside a container.
///
/// Implementations own the elements. `teardown` must restore the container
/// to its pre-`build` state and be safe to call repeatedly.
pub trait ControlSurface {
    type Container;
    type Media: MediaElement + Clone + 'static;
    type Widget: Widget + Clone + 'static;

    fn build(
        &self,
        container: &Self::Container,
        config: &Configuration,
    ) -> Result<SurfaceParts<Self::Media, Self::Widget>, PlatformError>;

    fn teardown(&self, container: &Self::Container);
}

/// Everything else the player needs from its host.
///
/// Listener guards detach their callback when dropped, which is what makes
/// registry teardown symmetric.
pub trait Platform: ControlSurface + ColorValidator + 'static {
    type Listener;

    /// Native event object handed to consumer subscriptions.
    type Event: 'static;

    fn listen_widget(
        &self,
        widget: &Self::Widget,
        event: WidgetEvent,
        handler: Handler,
    ) -> Result<Self::Listener, PlatformError>;

    fn listen_media(
        &self,
        media: &Self::Media,
        event: &MediaEvent,
        handler: Handler,
    ) -> Result<Self::Listener, PlatformError>;

    /// Attach a consumer observer that sees the native event unchanged.
    fn observe_media(
        &self,
        media: &Self::Media,
        event: &MediaEvent,
        observer: Observer<Self::Event>,
    ) -> Result<Self::Listener, PlatformError>;

    /// Whether any element is currently fullscreen.
    fn is_fullscreen(&self) -> bool;

    /// Ask the host to make `container` fullscreen. Fire-and-forget: a
    /// rejection is logged by the implementation and never retried.
    fn request_fullscreen(&self, container: &Self::Container);

    fn exit_fullscreen(&self);
}
