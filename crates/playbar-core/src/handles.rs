//! The current generation of control-surface handles.

use crate::binding::{HandleId, IdSource};
use crate::platform::SurfaceParts;

/// A non-owning reference to one surface element, tagged with its identity.
#[derive(Debug, Clone)]
pub struct Handle<T> {
    pub id: HandleId,
    pub element: T,
}

/// Handles resolved from one surface build. Stale sets are dropped on rebuild.
#[derive(Debug, Clone)]
pub struct HandleSet<M, W> {
    pub video: Option<Handle<M>>,
    pub controls: Option<Handle<W>>,
    pub progress_track: Option<Handle<W>>,
    pub progress_fill: Option<Handle<W>>,
    pub play_pause: Option<Handle<W>>,
    pub volume_slider: Option<Handle<W>>,
    pub volume_icon: Option<Handle<W>>,
    pub current_time: Option<Handle<W>>,
    pub duration: Option<Handle<W>>,
    pub rewind: Option<Handle<W>>,
    pub forward: Option<Handle<W>>,
    pub fullscreen: Option<Handle<W>>,
}

impl<M, W> Default for HandleSet<M, W> {
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

impl<M, W> HandleSet<M, W> {
    /// Tag every present part with a fresh id.
    pub fn resolve(parts: SurfaceParts<M, W>, ids: &mut IdSource) -> Self {
        let mut tag = |element: Option<W>| {
            element.map(|element| Handle {
                id: ids.next_id(),
                element,
            })
        };
        let controls = tag(parts.controls);
        let progress_track = tag(parts.progress_track);
        let progress_fill = tag(parts.progress_fill);
        let play_pause = tag(parts.play_pause);
        let volume_slider = tag(parts.volume_slider);
        let volume_icon = tag(parts.volume_icon);
        let current_time = tag(parts.current_time);
        let duration = tag(parts.duration);
        let rewind = tag(parts.rewind);
        let forward = tag(parts.forward);
        let fullscreen = tag(parts.fullscreen);
        let video = parts.video.map(|element| Handle {
            id: ids.next_id(),
            element,
        });

        Self {
            video,
            controls,
            progress_track,
            progress_fill,
            play_pause,
            volume_slider,
            volume_icon,
            current_time,
            duration,
            rewind,
            forward,
            fullscreen,
        }
    }

    pub fn video(&self) -> Option<&M> {
        self.video.as_ref().map(|h| &h.element)
    }

    /// Number of present handles, video included.
    pub fn present(&self) -> usize {
        let widgets = [
            &self.controls,
            &self.progress_track,
            &self.progress_fill,
            &self.play_pause,
            &self.volume_slider,
            &self.volume_icon,
            &self.current_time,
            &self.duration,
            &self.rewind,
            &self.forward,
            &self.fullscreen,
        ];
        widgets.iter().filter(|h| h.is_some()).count() + usize::from(self.video.is_some())
    }
}

/// Element of an optional handle.
pub(crate) fn element<T>(handle: &Option<Handle<T>>) -> Option<&T> {
    handle.as_ref().map(|h| &h.element)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_skips_absent_parts() {
        let parts: SurfaceParts<&str, &str> = SurfaceParts {
            video: Some("video"),
            play_pause: Some("toggle"),
            ..Default::default()
        };
        let mut ids = IdSource::new();
        let set = HandleSet::resolve(parts, &mut ids);

        assert!(set.volume_slider.is_none());
        assert_eq!(set.video(), Some(&"video"));
        assert_eq!(set.present(), 2);
    }

    #[test]
    fn test_rebuild_issues_fresh_ids() {
        let mut ids = IdSource::new();
        let parts = || SurfaceParts::<(), ()> {
            video: Some(()),
            ..Default::default()
        };
        let first = HandleSet::resolve(parts(), &mut ids);
        let second = HandleSet::resolve(parts(), &mut ids);
        assert_ne!(first.video.unwrap().id, second.video.unwrap().id);
    }
}
