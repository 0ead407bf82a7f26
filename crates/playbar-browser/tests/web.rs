//! WASM browser tests for playbar-browser.
//!
//! Run with: `wasm-pack test --headless --firefox` or `--chrome`

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

use playbar_browser::{
    BrowserColors, ColorValidator, MediaEvent, PartialConfig, PartialControls, PlayerError,
    WebPlayer, attach, class, container_from, init_all, style::STYLE_ELEMENT_ID,
};
use web_sys::{Document, Event, HtmlElement, HtmlInputElement, HtmlMediaElement};

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// A fresh `<div><video></video></div>` attached to the body.
fn make_container(extra_class: Option<&str>) -> HtmlElement {
    let doc = document();
    let container: HtmlElement = doc.create_element("div").unwrap().dyn_into().unwrap();
    if let Some(name) = extra_class {
        container.set_class_name(name);
    }
    container
        .append_child(&doc.create_element("video").unwrap())
        .unwrap();
    doc.body().unwrap().append_child(&container).unwrap();
    container
}

fn find(container: &HtmlElement, name: &str) -> Option<HtmlElement> {
    container
        .query_selector(&format!(".{name}"))
        .unwrap()
        .map(|el| el.dyn_into().unwrap())
}

fn video(container: &HtmlElement) -> HtmlMediaElement {
    container
        .query_selector("video")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap()
}

fn player(config: PartialConfig) -> (HtmlElement, WebPlayer) {
    let container = make_container(None);
    let player = attach(container.clone(), &config).unwrap();
    (container, player)
}

// === Colors ===

#[wasm_bindgen_test]
fn test_browser_colors() {
    assert!(BrowserColors.is_valid_color("#ffa600"));
    assert!(BrowserColors.is_valid_color("rgba(0, 0, 0, 0.7)"));
    assert!(BrowserColors.is_valid_color("rebeccapurple"));
    assert!(!BrowserColors.is_valid_color("not-a-color"));
}

// === Surface ===

#[wasm_bindgen_test]
fn test_build_renders_every_control() {
    let (container, _player) = player(PartialConfig::default());

    assert!(container.class_list().contains(class::CONTAINER));
    for name in [
        class::CONTROLS,
        class::PROGRESS_AREA,
        class::PROGRESS_BAR,
        class::PLAY_PAUSE,
        class::REWIND,
        class::FORWARD,
        class::VOLUME,
        class::VOLUME_RANGE,
        class::CURRENT,
        class::DURATION,
        class::FULLSCREEN,
    ] {
        assert!(find(&container, name).is_some(), "missing .{name}");
    }
    assert_eq!(
        find(&container, class::CURRENT).unwrap().text_content(),
        Some("0:00".to_string())
    );
}

#[wasm_bindgen_test]
fn test_stylesheet_installed_once() {
    let (_a, _first) = player(PartialConfig::default());
    let (_b, _second) = player(PartialConfig::default());

    let styles = document()
        .query_selector_all(&format!("#{STYLE_ELEMENT_ID}"))
        .unwrap();
    assert_eq!(styles.length(), 1);
}

#[wasm_bindgen_test]
fn test_theme_is_per_container() {
    let (a, _first) = player(PartialConfig {
        progress_color: Some("red".into()),
        ..Default::default()
    });
    let (b, _second) = player(PartialConfig::default());

    assert_eq!(
        a.style().get_property_value("--progress-color").unwrap(),
        "red"
    );
    assert_eq!(
        b.style().get_property_value("--progress-color").unwrap(),
        "#ffa600"
    );
}

#[wasm_bindgen_test]
fn test_disabled_volume_has_no_slider() {
    let (container, player) = player(PartialConfig {
        controls: Some(PartialControls {
            show_volume: Some(false),
            ..Default::default()
        }),
        ..Default::default()
    });
    assert!(find(&container, class::VOLUME_RANGE).is_none());

    player.set_volume(50.0);
    assert_eq!(video(&container).volume(), 1.0);
}

// === Sync ===

#[wasm_bindgen_test]
fn test_set_volume_updates_slider_and_media() {
    let (container, player) = player(PartialConfig::default());
    player.set_volume(30.0);

    let slider: HtmlInputElement = find(&container, class::VOLUME_RANGE)
        .unwrap()
        .dyn_into()
        .unwrap();
    assert_eq!(slider.value(), "30");
    assert!((video(&container).volume() - 0.3).abs() < 1e-9);
    assert_eq!(
        find(&container, class::VOLUME).unwrap().text_content(),
        Some("volume_down".to_string())
    );
}

#[wasm_bindgen_test]
fn test_initial_media_state() {
    let (container, _player) = player(PartialConfig {
        muted: Some(true),
        loop_playback: Some(true),
        volume: Some(0.5),
        ..Default::default()
    });
    let media = video(&container);
    assert!(media.muted());
    assert!(media.loop_());
    assert_eq!(media.volume(), 0.5);
}

#[wasm_bindgen_test]
fn test_muted_start_shows_silent_volume() {
    let (container, _player) = player(PartialConfig {
        muted: Some(true),
        volume: Some(0.2),
        ..Default::default()
    });
    let slider: HtmlInputElement = find(&container, class::VOLUME_RANGE)
        .unwrap()
        .dyn_into()
        .unwrap();
    assert_eq!(slider.value(), "0");
    assert_eq!(
        find(&container, class::VOLUME).unwrap().text_content(),
        Some("volume_off".to_string())
    );
}

#[wasm_bindgen_test]
fn test_mute_click_flips_muted() {
    let (container, _player) = player(PartialConfig::default());
    find(&container, class::VOLUME).unwrap().click();
    assert!(video(&container).muted());
    find(&container, class::VOLUME).unwrap().click();
    assert!(!video(&container).muted());
}

// === Subscriptions ===

#[wasm_bindgen_test]
fn test_on_receives_native_event() {
    let (container, player) = player(PartialConfig::default());
    let seen = Rc::new(RefCell::new(Vec::new()));
    let log = seen.clone();
    player
        .on(MediaEvent::parse("seeked"), move |event: &Event| {
            log.borrow_mut().push(event.type_());
        })
        .unwrap();

    let event = Event::new("seeked").unwrap();
    video(&container).dispatch_event(&event).unwrap();
    assert_eq!(*seen.borrow(), vec!["seeked".to_string()]);

    player.destroy();
    video(&container).dispatch_event(&event).unwrap();
    assert_eq!(seen.borrow().len(), 1);
}

// === Lifecycle ===

#[wasm_bindgen_test]
fn test_destroy_restores_container() {
    let (container, player) = player(PartialConfig::default());
    player.destroy();
    player.destroy();

    assert!(find(&container, class::CONTROLS).is_none());
    assert!(!container.class_list().contains(class::CONTAINER));
    assert_eq!(
        container
            .style()
            .get_property_value("--progress-color")
            .unwrap(),
        ""
    );
    assert_eq!(player.binding_count(), 0);
}

#[wasm_bindgen_test]
fn test_destroy_keeps_page_class() {
    let container = make_container(Some(class::CONTAINER));
    let player = attach(container.clone(), &PartialConfig::default()).unwrap();
    player.destroy();
    assert!(container.class_list().contains(class::CONTAINER));
}

#[wasm_bindgen_test]
fn test_set_config_rebuilds_one_surface() {
    let (container, player) = player(PartialConfig::default());
    let bound = player.binding_count();

    player.set_config(&PartialConfig::default()).unwrap();
    player
        .set_config(&PartialConfig {
            show_controls: Some(false),
            ..Default::default()
        })
        .unwrap();
    assert!(find(&container, class::CONTROLS).is_none());

    player
        .set_config(&PartialConfig {
            show_controls: Some(true),
            ..Default::default()
        })
        .unwrap();
    let controls = container
        .query_selector_all(&format!(".{}", class::CONTROLS))
        .unwrap();
    assert_eq!(controls.length(), 1);
    assert_eq!(player.binding_count(), bound);
}

#[wasm_bindgen_test]
fn test_container_from_rejects_non_elements() {
    assert!(matches!(
        container_from(wasm_bindgen::JsValue::from_str("#player")),
        Err(PlayerError::InvalidElement)
    ));
    let div = make_container(None);
    assert!(container_from(div.into()).is_ok());
}

#[wasm_bindgen_test]
fn test_init_all_attaches_each_match() {
    make_container(Some("init-all-target"));
    make_container(Some("init-all-target"));

    let players = init_all(".init-all-target", &PartialConfig::default()).unwrap();
    assert_eq!(players.len(), 2);

    assert!(init_all(".no-such-player", &PartialConfig::default())
        .unwrap()
        .is_empty());
    assert!(matches!(
        init_all("[[", &PartialConfig::default()),
        Err(PlayerError::InvalidConfig(_))
    ));
}
