//! playbar-core: platform-agnostic playback control logic.
//!
//! This crate provides:
//! - `Configuration` / `PartialConfig` and `normalize` for option handling
//! - `SurfaceLayout` and the class-name contract for control surfaces
//! - `BindingRegistry` for symmetric listener bookkeeping
//! - `sync` rules tying widgets to the media element's native state
//! - `Player<P>`, generic over a host `Platform`
//!
//! Hosts implement the traits in [`platform`]; see `playbar-browser` for
//! the DOM implementation.

pub mod binding;
pub mod config;
pub mod error;
pub mod events;
pub mod handles;
pub mod layout;
pub mod normalize;
pub mod platform;
pub mod player;
pub mod style;
pub mod sync;

pub use binding::{BindingError, BindingKey, BindingRegistry, HandleId, IdSource};
pub use config::{
    ColorField, Configuration, ControlFlags, Icons, PartialConfig, PartialControls, PartialIcons,
};
pub use error::PlayerError;
pub use events::{EventInfo, EventKind, Handler, MediaEvent, Observer, WidgetEvent};
pub use handles::{Handle, HandleSet};
pub use layout::{Control, SurfaceLayout, class};
pub use normalize::{ColorValidator, ConfigWarning, Normalized, normalize};
pub use platform::{
    ControlSurface, MediaElement, Platform, PlatformError, Span, SurfaceParts, Widget,
};
pub use player::{Player, attach_all};
pub use smol_str::SmolStr;
pub use sync::format_time;

#[cfg(feature = "css-colors")]
pub use normalize::CssColorSyntax;
