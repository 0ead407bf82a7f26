//! Event vocabulary shared by the binding registry and the platforms.

use smol_str::SmolStr;

/// User interaction on a control-surface widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetEvent {
    Click,
    Input,
}

impl WidgetEvent {
    pub fn as_str(self) -> &'static str {
        match self {
            WidgetEvent::Click => "click",
            WidgetEvent::Input => "input",
        }
    }
}

/// Native notification emitted by the media element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MediaEvent {
    Abort,
    CanPlay,
    CanPlayThrough,
    DurationChange,
    Emptied,
    Ended,
    Error,
    LoadedData,
    LoadedMetadata,
    LoadStart,
    Pause,
    Play,
    Playing,
    Progress,
    RateChange,
    Seeked,
    Seeking,
    Stalled,
    Suspend,
    TimeUpdate,
    VolumeChange,
    Waiting,
    /// Any other event name the host dispatches on the element (including `click`).
    Other(SmolStr),
}

impl MediaEvent {
    /// Parse a DOM event name.
    pub fn parse(name: &str) -> MediaEvent {
        match name {
            "abort" => MediaEvent::Abort,
            "canplay" => MediaEvent::CanPlay,
            "canplaythrough" => MediaEvent::CanPlayThrough,
            "durationchange" => MediaEvent::DurationChange,
            "emptied" => MediaEvent::Emptied,
            "ended" => MediaEvent::Ended,
            "error" => MediaEvent::Error,
            "loadeddata" => MediaEvent::LoadedData,
            "loadedmetadata" => MediaEvent::LoadedMetadata,
            "loadstart" => MediaEvent::LoadStart,
            "pause" => MediaEvent::Pause,
            "play" => MediaEvent::Play,
            "playing" => MediaEvent::Playing,
            "progress" => MediaEvent::Progress,
            "ratechange" => MediaEvent::RateChange,
            "seeked" => MediaEvent::Seeked,
            "seeking" => MediaEvent::Seeking,
            "stalled" => MediaEvent::Stalled,
            "suspend" => MediaEvent::Suspend,
            "timeupdate" => MediaEvent::TimeUpdate,
            "volumechange" => MediaEvent::VolumeChange,
            "waiting" => MediaEvent::Waiting,
            other => MediaEvent::Other(SmolStr::new(other)),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            MediaEvent::Abort => "abort",
            MediaEvent::CanPlay => "canplay",
            MediaEvent::CanPlayThrough => "canplaythrough",
            MediaEvent::DurationChange => "durationchange",
            MediaEvent::Emptied => "emptied",
            MediaEvent::Ended => "ended",
            MediaEvent::Error => "error",
            MediaEvent::LoadedData => "loadeddata",
            MediaEvent::LoadedMetadata => "loadedmetadata",
            MediaEvent::LoadStart => "loadstart",
            MediaEvent::Pause => "pause",
            MediaEvent::Play => "play",
            MediaEvent::Playing => "playing",
            MediaEvent::Progress => "progress",
            MediaEvent::RateChange => "ratechange",
            MediaEvent::Seeked => "seeked",
            MediaEvent::Seeking => "seeking",
            MediaEvent::Stalled => "stalled",
            MediaEvent::Suspend => "suspend",
            MediaEvent::TimeUpdate => "timeupdate",
            MediaEvent::VolumeChange => "volumechange",
            MediaEvent::Waiting => "waiting",
            MediaEvent::Other(name) => name.as_str(),
        }
    }
}

impl std::fmt::Display for MediaEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Either side of a binding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventKind {
    Widget(WidgetEvent),
    Media(MediaEvent),
}

impl EventKind {
    pub fn as_str(&self) -> &str {
        match self {
            EventKind::Widget(event) => event.as_str(),
            EventKind::Media(event) => event.as_str(),
        }
    }
}

impl From<WidgetEvent> for EventKind {
    fn from(event: WidgetEvent) -> Self {
        EventKind::Widget(event)
    }
}

impl From<MediaEvent> for EventKind {
    fn from(event: MediaEvent) -> Self {
        EventKind::Media(event)
    }
}

/// What a handler gets to see of the triggering event.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EventInfo {
    /// Pointer x in viewport coordinates, for mouse events.
    pub client_x: Option<f64>,
}

impl EventInfo {
    pub fn at(client_x: f64) -> Self {
        Self {
            client_x: Some(client_x),
        }
    }
}

/// Callback attached to a platform event.
pub type Handler = Box<dyn FnMut(&EventInfo)>;

/// Consumer callback that receives the host's own event object.
pub type Observer<E> = Box<dyn FnMut(&E)>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_media_events() {
        assert_eq!(MediaEvent::parse("timeupdate"), MediaEvent::TimeUpdate);
        assert_eq!(MediaEvent::parse("loadedmetadata"), MediaEvent::LoadedMetadata);
        assert_eq!(MediaEvent::TimeUpdate.as_str(), "timeupdate");
    }

    #[test]
    fn test_parse_unknown_media_event() {
        match MediaEvent::parse("webkitbeginfullscreen") {
            MediaEvent::Other(name) => assert_eq!(name, "webkitbeginfullscreen"),
            other => panic!("Expected Other variant, got {other:?}"),
        }
    }
}
