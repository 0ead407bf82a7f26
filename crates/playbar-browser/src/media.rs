//! `HTMLMediaElement` as a [`MediaElement`].

use playbar_core::MediaElement;
use wasm_bindgen::JsCast;
use web_sys::HtmlMediaElement;

#[derive(Debug, Clone)]
pub struct WebMedia(pub HtmlMediaElement);

impl WebMedia {
    /// The first `<video>` (or `<audio>`) inside `container`.
    pub fn find_in(container: &web_sys::Element) -> Option<WebMedia> {
        container
            .query_selector("video, audio")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlMediaElement>().ok())
            .map(WebMedia)
    }

    pub fn element(&self) -> &HtmlMediaElement {
        &self.0
    }
}

impl MediaElement for WebMedia {
    fn paused(&self) -> bool {
        self.0.paused()
    }

    fn play(&self) {
        let promise = match self.0.play() {
            Ok(promise) => promise,
            Err(e) => {
                tracing::debug!("play() threw: {:?}", e);
                return;
            }
        };
        // Autoplay policy rejections land here. Nothing to retry.
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
                tracing::debug!("play() rejected: {:?}", e);
            }
        });
    }

    fn pause(&self) {
        if let Err(e) = self.0.pause() {
            tracing::debug!("pause() threw: {:?}", e);
        }
    }

    fn current_time(&self) -> f64 {
        self.0.current_time()
    }

    fn set_current_time(&self, seconds: f64) {
        self.0.set_current_time(seconds);
    }

    fn duration(&self) -> f64 {
        self.0.duration()
    }

    fn volume(&self) -> f64 {
        self.0.volume()
    }

    fn set_volume(&self, volume: f64) {
        self.0.set_volume(volume);
    }

    fn muted(&self) -> bool {
        self.0.muted()
    }

    fn set_muted(&self, muted: bool) {
        self.0.set_muted(muted);
    }

    fn set_autoplay(&self, autoplay: bool) {
        self.0.set_autoplay(autoplay);
    }

    fn set_loop(&self, looping: bool) {
        self.0.set_loop(looping);
    }
}
