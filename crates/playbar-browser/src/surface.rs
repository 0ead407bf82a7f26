//! DOM rendering of a [`SurfaceLayout`] and handle resolution by class name.

use playbar_core::style::custom_properties;
use playbar_core::{ColorField, Configuration, Control, SurfaceLayout, SurfaceParts, class};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use crate::media::WebMedia;
use crate::widget::WebWidget;

/// Render `layout` as a detached `.controls` subtree.
pub fn render(document: &Document, layout: &SurfaceLayout) -> Result<HtmlElement, JsValue> {
    let controls = element(document, "div", &[class::CONTROLS])?;

    if layout.progress {
        let area = element(document, "div", &[class::PROGRESS_AREA])?;
        let fill = element(document, "div", &[class::PROGRESS_BAR])?;
        area.append_child(&fill)?;
        controls.append_child(&area)?;
    }

    let list = element(document, "div", &[class::CONTROLS_LIST])?;
    for (row_class, row) in [
        (class::CONTROLS_LEFT, &layout.left),
        (class::CONTROLS_RIGHT, &layout.right),
    ] {
        let row_el = element(document, "div", &[row_class])?;
        for control in row {
            let child = render_control(document, control)?;
            row_el.append_child(&child)?;
        }
        list.append_child(&row_el)?;
    }
    controls.append_child(&list)?;

    Ok(controls)
}

fn render_control(document: &Document, control: &Control) -> Result<HtmlElement, JsValue> {
    match control {
        Control::Button { class: name, icon } => icon_button(document, name, icon),
        Control::Volume { icon, value } => {
            let wrapper = element(document, "div", &[class::VOLUME_CONTAINER])?;
            let button = icon_button(document, class::VOLUME, icon)?;
            wrapper.append_child(&button)?;

            let slider = document
                .create_element("input")?
                .dyn_into::<HtmlInputElement>()
                .map_err(JsValue::from)?;
            slider.set_type("range");
            slider.set_class_name(class::VOLUME_RANGE);
            slider.set_min("0");
            slider.set_max("100");
            slider.set_value(&value.to_string());
            wrapper.append_child(&slider)?;
            Ok(wrapper)
        }
        Control::Timer => {
            let timer = element(document, "div", &[class::TIMER])?;
            let current = element(document, "span", &[class::CURRENT])?;
            current.set_text_content(Some("0:00"));
            let duration = element(document, "span", &[class::DURATION])?;
            duration.set_text_content(Some("0:00"));

            timer.append_child(&current)?;
            let separator = document.create_text_node(" / ");
            timer.append_child(&separator)?;
            timer.append_child(&duration)?;
            Ok(timer)
        }
    }
}

/// `<span class="icon"><i class="material-icons {name}">{icon}</i></span>`
fn icon_button(document: &Document, name: &str, icon: &str) -> Result<HtmlElement, JsValue> {
    let wrapper = element(document, "span", &[class::ICON])?;
    let glyph = element(document, "i", &[class::ICON_FONT, name])?;
    glyph.set_text_content(Some(icon));
    wrapper.append_child(&glyph)?;
    Ok(wrapper)
}

fn element(document: &Document, tag: &str, classes: &[&str]) -> Result<HtmlElement, JsValue> {
    let el = document.create_element(tag)?;
    el.set_class_name(&classes.join(" "));
    el.dyn_into::<HtmlElement>().map_err(JsValue::from)
}

/// Look up every handle by its class name.
///
/// The media element is searched in the whole container; widgets only
/// inside `controls`, so page markup that happens to reuse a class name is
/// never picked up.
pub fn resolve(
    container: &HtmlElement,
    controls: Option<&HtmlElement>,
) -> SurfaceParts<WebMedia, WebWidget> {
    let find = |name: &str| controls.and_then(|root| find_widget(root, name));
    SurfaceParts {
        video: WebMedia::find_in(container),
        controls: controls.cloned().map(WebWidget),
        progress_track: find(class::PROGRESS_AREA),
        progress_fill: find(class::PROGRESS_BAR),
        play_pause: find(class::PLAY_PAUSE),
        volume_slider: find(class::VOLUME_RANGE),
        volume_icon: find(class::VOLUME),
        current_time: find(class::CURRENT),
        duration: find(class::DURATION),
        rewind: find(class::REWIND),
        forward: find(class::FORWARD),
        fullscreen: find(class::FULLSCREEN),
    }
}

fn find_widget(root: &Element, name: &str) -> Option<WebWidget> {
    root.query_selector(&format!(".{name}"))
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(WebWidget)
}

/// Publish the theme colors as custom properties on the container.
pub fn apply_theme(container: &HtmlElement, config: &Configuration) -> Result<(), JsValue> {
    let style = container.style();
    for (property, value) in custom_properties(config) {
        style.set_property(property, value)?;
    }
    Ok(())
}

pub fn clear_theme(container: &HtmlElement) {
    let style = container.style();
    for field in ColorField::ALL {
        let _ = style.remove_property(field.custom_property());
    }
}
