//! `Media` backend driving a live `HtmlMediaElement`.

use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlMediaElement;

use crate::controller::Media;
use crate::timeline::TimeRange;

#[derive(Clone)]
pub struct DomMedia {
    element: HtmlMediaElement,
}

impl DomMedia {
    pub fn new(element: HtmlMediaElement) -> Self {
        Self { element }
    }

    pub fn element(&self) -> &HtmlMediaElement {
        &self.element
    }
}

impl Media for DomMedia {
    fn play(&self) {
        // play() returns a promise; settle it off-handler so an autoplay
        // rejection never surfaces as an uncaught error.
        if let Ok(promise) = self.element.play() {
            wasm_bindgen_futures::spawn_local(async move {
                let _ = JsFuture::from(promise).await;
            });
        }
    }

    fn pause(&self) {
        let _ = self.element.pause();
    }

    fn seek(&self, seconds: f64) {
        self.element.set_current_time(seconds);
    }

    fn current_time(&self) -> f64 {
        self.element.current_time()
    }

    fn duration(&self) -> f64 {
        self.element.duration()
    }

    fn buffered(&self) -> Vec<TimeRange> {
        let ranges = self.element.buffered();
        let mut out = Vec::with_capacity(ranges.length() as usize);
        for index in 0..ranges.length() {
            if let (Ok(start), Ok(end)) = (ranges.start(index), ranges.end(index)) {
                out.push(TimeRange { start, end });
            }
        }
        out
    }
}
