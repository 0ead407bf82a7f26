//! The browser [`Platform`]: DOM surface, gloo listeners, Fullscreen API.
//!
//! One `WebPlatform` serves one container. It remembers what its `build`
//! added so `teardown` can put back exactly what was there before.

use std::cell::{Cell, RefCell};

use gloo_events::EventListener;
use js_sys::{Function, Promise, Reflect};
use playbar_core::{
    ColorValidator, Configuration, ControlSurface, EventInfo, Handler, MediaEvent, Observer,
    Platform, PlatformError, PlayerError, SurfaceLayout, SurfaceParts, WidgetEvent, class,
};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, Event, HtmlElement, MouseEvent};

use crate::color::BrowserColors;
use crate::media::WebMedia;
use crate::styles::ensure_stylesheet;
use crate::surface;
use crate::widget::WebWidget;

pub struct WebPlatform {
    document: Document,
    colors: BrowserColors,
    surface: RefCell<Option<HtmlElement>>,
    added_class: Cell<bool>,
}

impl WebPlatform {
    /// Platform bound to the current window's document.
    pub fn new() -> Result<Self, PlatformError> {
        Ok(Self::with_document(current_document()?))
    }

    pub fn with_document(document: Document) -> Self {
        Self {
            document,
            colors: BrowserColors,
            surface: RefCell::new(None),
            added_class: Cell::new(false),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

pub(crate) fn current_document() -> Result<Document, PlatformError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| PlatformError::from("no window document"))
}

/// Accept `value` as a container only if it is an `HTMLElement`.
pub fn container_from(value: JsValue) -> Result<HtmlElement, PlayerError> {
    value
        .dyn_into::<HtmlElement>()
        .map_err(|_| PlayerError::InvalidElement)
}

fn js_error(context: &str, e: JsValue) -> PlatformError {
    PlatformError(format!("{context}: {e:?}"))
}

fn event_info(event: &Event) -> EventInfo {
    event
        .dyn_ref::<MouseEvent>()
        .map(|mouse| EventInfo::at(f64::from(mouse.client_x())))
        .unwrap_or_default()
}

impl ColorValidator for WebPlatform {
    fn is_valid_color(&self, value: &str) -> bool {
        self.colors.is_valid_color(value)
    }
}

impl ControlSurface for WebPlatform {
    type Container = HtmlElement;
    type Media = WebMedia;
    type Widget = WebWidget;

    fn build(
        &self,
        container: &HtmlElement,
        config: &Configuration,
    ) -> Result<SurfaceParts<WebMedia, WebWidget>, PlatformError> {
        ensure_stylesheet(&self.document).map_err(|e| js_error("stylesheet", e))?;

        let controls = match SurfaceLayout::from_config(config) {
            Some(layout) => {
                let classes = container.class_list();
                if !classes.contains(class::CONTAINER) {
                    classes
                        .add_1(class::CONTAINER)
                        .map_err(|e| js_error("container class", e))?;
                    self.added_class.set(true);
                }
                surface::apply_theme(container, config).map_err(|e| js_error("theme", e))?;

                let controls = surface::render(&self.document, &layout)
                    .map_err(|e| js_error("render controls", e))?;
                container
                    .append_child(&controls)
                    .map_err(|e| js_error("attach controls", e))?;
                Some(controls)
            }
            // Hidden controls leave the container untouched.
            None => None,
        };

        let parts = surface::resolve(container, controls.as_ref());
        *self.surface.borrow_mut() = controls;
        Ok(parts)
    }

    fn teardown(&self, container: &HtmlElement) {
        if let Some(controls) = self.surface.borrow_mut().take() {
            controls.remove();
        }
        surface::clear_theme(container);
        if self.added_class.replace(false) {
            let _ = container.class_list().remove_1(class::CONTAINER);
        }
    }
}

impl Platform for WebPlatform {
    type Listener = EventListener;
    type Event = Event;

    fn listen_widget(
        &self,
        widget: &WebWidget,
        event: WidgetEvent,
        mut handler: Handler,
    ) -> Result<EventListener, PlatformError> {
        Ok(EventListener::new(
            widget.element(),
            event.as_str(),
            move |event| handler(&event_info(event)),
        ))
    }

    fn listen_media(
        &self,
        media: &WebMedia,
        event: &MediaEvent,
        mut handler: Handler,
    ) -> Result<EventListener, PlatformError> {
        let name = event.as_str().to_owned();
        Ok(EventListener::new(media.element(), name, move |event| {
            tracing::trace!(event = %event.type_(), "media event");
            handler(&event_info(event))
        }))
    }

    fn observe_media(
        &self,
        media: &WebMedia,
        event: &MediaEvent,
        mut observer: Observer<Event>,
    ) -> Result<EventListener, PlatformError> {
        let name = event.as_str().to_owned();
        Ok(EventListener::new(media.element(), name, move |event| {
            observer(event)
        }))
    }

    fn is_fullscreen(&self) -> bool {
        self.document.fullscreen_element().is_some()
    }

    fn request_fullscreen(&self, container: &HtmlElement) {
        match call_request_fullscreen(container) {
            Ok(Some(promise)) => {
                wasm_bindgen_futures::spawn_local(async move {
                    if let Err(e) = JsFuture::from(promise).await {
                        tracing::error!("Error attempting to enable fullscreen: {:?}", e);
                    }
                });
            }
            Ok(None) => {}
            Err(e) => tracing::error!("Error attempting to enable fullscreen: {:?}", e),
        }
    }

    fn exit_fullscreen(&self) {
        self.document.exit_fullscreen();
    }
}

/// `element.requestFullscreen()`, keeping the promise web-sys discards.
fn call_request_fullscreen(element: &Element) -> Result<Option<Promise>, JsValue> {
    let request = Reflect::get(element, &JsValue::from_str("requestFullscreen"))?
        .dyn_into::<Function>()?;
    let result = request.call0(element)?;
    Ok(result.dyn_into::<Promise>().ok())
}
