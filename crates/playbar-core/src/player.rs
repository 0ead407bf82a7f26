//! The player facade.
//!
//! A `Player` owns one canonical configuration, the current handle
//! generation and the binding registry for one container. Reconfiguration
//! is always a full teardown followed by a full rebuild.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use smol_str::SmolStr;

use crate::binding::{BindingKey, BindingRegistry, HandleId, IdSource};
use crate::config::{Configuration, PartialConfig};
use crate::error::PlayerError;
use crate::events::{EventInfo, Handler, MediaEvent, Observer, WidgetEvent};
use crate::handles::{Handle, HandleSet, element};
use crate::normalize::{ConfigWarning, Normalized, normalize};
use crate::platform::{Platform, Widget};
use crate::sync;

type Callback<E> = Rc<RefCell<dyn FnMut(&E)>>;

/// Consumer subscription to a native media event.
///
/// Survives rebuilds: it is re-attached to each new media handle.
struct Subscription<E> {
    id: HandleId,
    event: MediaEvent,
    callback: Callback<E>,
}

struct State<P: Platform> {
    config: Configuration,
    warnings: Vec<ConfigWarning>,
    handles: HandleSet<P::Media, P::Widget>,
    ids: IdSource,
    destroyed: bool,
}

struct Inner<P: Platform> {
    platform: P,
    container: P::Container,
    state: RefCell<State<P>>,
    registry: RefCell<BindingRegistry<P::Listener>>,
    subscriptions: RefCell<Vec<Subscription<P::Event>>>,
}

/// Playback controls attached to one container.
pub struct Player<P: Platform> {
    inner: Rc<Inner<P>>,
}

impl<P: Platform> Player<P> {
    /// Normalize `config`, build the surface inside `container` and bind it.
    ///
    /// On failure the container is restored and no listener stays attached.
    pub fn new(
        platform: P,
        container: P::Container,
        config: &PartialConfig,
    ) -> Result<Self, PlayerError> {
        let Normalized { config, warnings } =
            normalize(config, &Configuration::default(), &platform);
        let inner = Rc::new(Inner {
            platform,
            container,
            state: RefCell::new(State {
                config: config.clone(),
                warnings,
                handles: HandleSet::default(),
                ids: IdSource::new(),
                destroyed: false,
            }),
            registry: RefCell::new(BindingRegistry::new()),
            subscriptions: RefCell::new(Vec::new()),
        });

        if let Err(err) = Inner::rebuild(&inner, config) {
            inner.teardown();
            return Err(err);
        }
        Ok(Self { inner })
    }

    pub fn toggle_play(&self) {
        self.inner.toggle_play();
    }

    /// Set the volume from a slider value in `[0, 100]`.
    pub fn set_volume(&self, value: f64) {
        let state = self.inner.state.borrow();
        sync::set_volume(&state.config, &state.handles, value);
    }

    pub fn toggle_mute(&self) {
        self.inner.toggle_mute();
    }

    /// Move the playhead by `seconds` (negative rewinds).
    pub fn skip(&self, seconds: f64) {
        let state = self.inner.state.borrow();
        sync::skip(&state.handles, seconds);
    }

    pub fn toggle_fullscreen(&self) {
        self.inner.toggle_fullscreen();
    }

    /// Merge `partial` over the current configuration and rebuild.
    ///
    /// An empty partial rebuilds with an identical configuration. Ignored
    /// once the player is destroyed.
    pub fn set_config(&self, partial: &PartialConfig) -> Result<(), PlayerError> {
        let merged = {
            let state = self.inner.state.borrow();
            if state.destroyed {
                tracing::debug!("set_config on a destroyed player ignored");
                return Ok(());
            }
            partial.merged_over(&state.config.to_partial())
        };
        let Normalized { config, warnings } =
            normalize(&merged, &Configuration::default(), &self.inner.platform);

        self.inner.teardown();
        self.inner.state.borrow_mut().warnings = warnings;
        let rebuilt = Inner::rebuild(&self.inner, config);
        if rebuilt.is_err() {
            self.inner.teardown();
        }
        rebuilt
    }

    /// A copy of the canonical configuration.
    pub fn config(&self) -> Configuration {
        self.inner.state.borrow().config.clone()
    }

    /// Warnings from the most recent normalization.
    pub fn warnings(&self) -> Vec<ConfigWarning> {
        self.inner.state.borrow().warnings.clone()
    }

    /// Unbind everything and remove the surface. Safe to call repeatedly.
    pub fn destroy(&self) {
        let already = std::mem::replace(&mut self.inner.state.borrow_mut().destroyed, true);
        self.inner.teardown();
        self.inner.subscriptions.borrow_mut().clear();
        if !already {
            tracing::debug!("player destroyed");
        }
    }

    pub fn is_destroyed(&self) -> bool {
        self.inner.state.borrow().destroyed
    }

    /// Subscribe to a native event on the media element.
    ///
    /// The callback receives the host's event object as dispatched and stays
    /// subscribed across `set_config` rebuilds.
    pub fn on(
        &self,
        event: MediaEvent,
        callback: impl FnMut(&P::Event) + 'static,
    ) -> Result<(), PlayerError> {
        let subscription = {
            let mut state = self.inner.state.borrow_mut();
            if state.destroyed {
                return Ok(());
            }
            Subscription {
                id: state.ids.next_id(),
                event,
                callback: Rc::new(RefCell::new(callback)),
            }
        };

        {
            let state = self.inner.state.borrow();
            if let Some(video) = &state.handles.video {
                let mut registry = self.inner.registry.borrow_mut();
                self.inner.subscribe(&mut registry, video, &subscription)?;
            }
        }
        self.inner.subscriptions.borrow_mut().push(subscription);
        Ok(())
    }

    /// Number of listeners currently attached.
    pub fn binding_count(&self) -> usize {
        self.inner.registry.borrow().len()
    }
}

/// Attach one player per `(platform, container)` pair, all or nothing.
///
/// When a build fails, the players already attached are destroyed before
/// the error is returned, so no container is left with inert markup.
pub fn attach_all<P: Platform>(
    targets: impl IntoIterator<Item = (P, P::Container)>,
    config: &PartialConfig,
) -> Result<Vec<Player<P>>, PlayerError> {
    let mut players = Vec::new();
    for (platform, container) in targets {
        match Player::new(platform, container, config) {
            Ok(player) => players.push(player),
            Err(err) => {
                tracing::debug!(built = players.len(), "attach failed, rolling back");
                for player in &players {
                    player.destroy();
                }
                return Err(err);
            }
        }
    }
    Ok(players)
}

impl<P: Platform> std::fmt::Debug for Player<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.inner.state.borrow();
        f.debug_struct("Player")
            .field("config", &state.config)
            .field("handles", &state.handles.present())
            .field("bindings", &self.inner.registry.borrow().len())
            .field("destroyed", &state.destroyed)
            .finish()
    }
}

impl<P: Platform> Inner<P> {
    /// Build the surface for `config`, bind it and reflect current media state.
    ///
    /// The registry must be empty when this runs.
    fn rebuild(this: &Rc<Self>, config: Configuration) -> Result<(), PlayerError> {
        debug_assert!(this.registry.borrow().is_empty());

        let parts = this.platform.build(&this.container, &config)?;
        {
            let mut state = this.state.borrow_mut();
            let handles = HandleSet::resolve(parts, &mut state.ids);
            match handles.video() {
                Some(video) => sync::install_media_state(&config, video),
                None => tracing::warn!("no media element in container, controls are inert"),
            }
            state.handles = handles;
            state.config = config;
        }

        Self::bind_all(this)?;

        let state = this.state.borrow();
        sync::reflect_progress(&state.handles);
        sync::reflect_duration(&state.handles);
        sync::reflect_play_state(&state.config, &state.handles);
        sync::reflect_volume(&state.config, &state.handles);
        Ok(())
    }

    /// Unbind every listener, then remove the surface.
    fn teardown(&self) {
        let removed = self.registry.borrow_mut().unbind_all();
        self.platform.teardown(&self.container);
        self.state.borrow_mut().handles = HandleSet::default();
        tracing::debug!(removed, "player unbound");
    }

    fn bind_all(this: &Rc<Self>) -> Result<(), PlayerError> {
        let weak = Rc::downgrade(this);
        let state = this.state.borrow();
        let handles = &state.handles;
        let mut registry = this.registry.borrow_mut();
        let registry = &mut *registry;

        if let Some(video) = &handles.video {
            // Clicking the picture toggles playback even with controls hidden.
            let click = MediaEvent::Other(SmolStr::new_static("click"));
            this.bind_media(registry, video, click, rule(&weak, |inner, _| inner.toggle_play()))?;
            this.bind_media(
                registry,
                video,
                MediaEvent::TimeUpdate,
                rule(&weak, |inner, _| {
                    sync::reflect_progress(&inner.state.borrow().handles);
                }),
            )?;
            this.bind_media(
                registry,
                video,
                MediaEvent::LoadedMetadata,
                rule(&weak, |inner, _| {
                    sync::reflect_duration(&inner.state.borrow().handles);
                }),
            )?;
            for event in [
                MediaEvent::Play,
                MediaEvent::Playing,
                MediaEvent::Pause,
                MediaEvent::Ended,
            ] {
                this.bind_media(
                    registry,
                    video,
                    event,
                    rule(&weak, |inner, _| {
                        let state = inner.state.borrow();
                        sync::reflect_play_state(&state.config, &state.handles);
                    }),
                )?;
            }
        }

        this.bind_widget(
            registry,
            &handles.play_pause,
            WidgetEvent::Click,
            rule(&weak, |inner, _| inner.toggle_play()),
        )?;
        this.bind_widget(
            registry,
            &handles.volume_slider,
            WidgetEvent::Input,
            rule(&weak, |inner, _| inner.volume_input()),
        )?;
        this.bind_widget(
            registry,
            &handles.volume_icon,
            WidgetEvent::Click,
            rule(&weak, |inner, _| inner.toggle_mute()),
        )?;
        this.bind_widget(
            registry,
            &handles.progress_track,
            WidgetEvent::Click,
            rule(&weak, |inner, info| {
                if let Some(x) = info.client_x {
                    sync::seek_to_pointer(&inner.state.borrow().handles, x);
                }
            }),
        )?;
        this.bind_widget(
            registry,
            &handles.rewind,
            WidgetEvent::Click,
            rule(&weak, |inner, _| inner.skip_by_config(-1.0)),
        )?;
        this.bind_widget(
            registry,
            &handles.forward,
            WidgetEvent::Click,
            rule(&weak, |inner, _| inner.skip_by_config(1.0)),
        )?;
        this.bind_widget(
            registry,
            &handles.fullscreen,
            WidgetEvent::Click,
            rule(&weak, |inner, _| inner.toggle_fullscreen()),
        )?;

        if let Some(video) = &handles.video {
            for subscription in this.subscriptions.borrow().iter() {
                this.subscribe(registry, video, subscription)?;
            }
        }

        tracing::debug!(
            bound = registry.len(),
            handles = handles.present(),
            "player bound"
        );
        Ok(())
    }

    fn bind_widget(
        &self,
        registry: &mut BindingRegistry<P::Listener>,
        handle: &Option<Handle<P::Widget>>,
        event: WidgetEvent,
        handler: Handler,
    ) -> Result<(), PlayerError> {
        let Some(handle) = handle else {
            return Ok(());
        };
        registry.bind(BindingKey::new(event, handle.id), || {
            self.platform
                .listen_widget(&handle.element, event, handler)
                .map_err(PlayerError::from)
        })
    }

    fn bind_media(
        &self,
        registry: &mut BindingRegistry<P::Listener>,
        handle: &Handle<P::Media>,
        event: MediaEvent,
        handler: Handler,
    ) -> Result<(), PlayerError> {
        let key = BindingKey::new(event.clone(), handle.id);
        registry.bind(key, || {
            self.platform
                .listen_media(&handle.element, &event, handler)
                .map_err(PlayerError::from)
        })
    }

    /// Attach a consumer subscription. Keyed by the subscription's own id so
    /// several consumers can observe the same event.
    fn subscribe(
        &self,
        registry: &mut BindingRegistry<P::Listener>,
        video: &Handle<P::Media>,
        subscription: &Subscription<P::Event>,
    ) -> Result<(), PlayerError> {
        let callback = subscription.callback.clone();
        let observer: Observer<P::Event> = Box::new(move |event| {
            // A callback that re-enters its own event is skipped, not nested.
            if let Ok(mut callback) = callback.try_borrow_mut() {
                (&mut *callback)(event);
            }
        });
        let event = &subscription.event;
        registry.bind(BindingKey::new(event.clone(), subscription.id), || {
            self.platform
                .observe_media(&video.element, event, observer)
                .map_err(PlayerError::from)
        })
    }

    fn toggle_play(&self) {
        let state = self.state.borrow();
        sync::toggle_play(&state.config, &state.handles);
    }

    fn toggle_mute(&self) {
        let state = self.state.borrow();
        sync::toggle_mute(&state.config, &state.handles);
    }

    fn toggle_fullscreen(&self) {
        sync::toggle_fullscreen(&self.platform, &self.container);
    }

    fn volume_input(&self) {
        let state = self.state.borrow();
        if let Some(value) = element(&state.handles.volume_slider).and_then(Widget::value) {
            sync::set_volume(&state.config, &state.handles, value);
        }
    }

    /// Skip by the configured step in `direction` (`-1.0` or `1.0`).
    fn skip_by_config(&self, direction: f64) {
        let state = self.state.borrow();
        sync::skip(&state.handles, direction * state.config.skip_seconds);
    }
}

/// Wrap a rule so it holds the player weakly and does nothing once it is gone.
fn rule<P: Platform>(
    weak: &Weak<Inner<P>>,
    body: impl Fn(&Inner<P>, &EventInfo) + 'static,
) -> Handler {
    let weak = weak.clone();
    Box::new(move |info| {
        if let Some(inner) = weak.upgrade() {
            body(&inner, info);
        }
    })
}
