//! One-shot construction of the toolbar DOM and in-place fragment updates.
//!
//! The fragment tree is built exactly once per widget and owned for its
//! lifetime; `ControlSurface` writes mutate individual nodes directly. There
//! is no diffing and no virtual tree. All visual appearance comes from an
//! external stylesheet keyed on the structural class names below; the only
//! styles written here are the two fill widths.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, HtmlImageElement, HtmlMediaElement};

use crate::config::PlayerConfig;
use crate::controller::{ControlSurface, Glyph};

const CLASS_MEDIA: &str = "cinema-media";
const CLASS_CONTAINER: &str = "cinema-container";
const CLASS_FULLSCREEN: &str = "cinema-fullscreen";
const CLASS_TOOLBAR: &str = "cinema-toolbar";
const CLASS_TOOLBAR_ACTIVE: &str = "cinema-toolbar-active";
const CLASS_TOOLBAR_LEFT: &str = "cinema-toolbar-left";
const CLASS_TOOLBAR_RIGHT: &str = "cinema-toolbar-right";
const CLASS_BTN_PLAY: &str = "cinema-btn cinema-btn-play";
const CLASS_BTN_FULLSCREEN: &str = "cinema-btn cinema-btn-fullscreen";
const CLASS_BTN_REPLAY: &str = "cinema-btn-replay";
const CLASS_TIMES: &str = "cinema-times";
// Kept with the stylesheet's historical spelling.
const CLASS_TIMES_ELAPSED: &str = "cinema-times-elasped";
const CLASS_TIMES_SEPARATOR: &str = "cinema-times-separator";
const CLASS_TIMES_DURATION: &str = "cinema-times-duration";
const CLASS_PROGRESS_TRACK: &str = "cinema-progress-bar-container";
const CLASS_PROGRESS_PLAYED: &str = "cinema-progress-bar-inner";
const CLASS_PROGRESS_BUFFERED: &str = "cinema-progress-bar-buffer";

const ICON_PLAY: &str = "icons/play.svg";
const ICON_PAUSE: &str = "icons/pause.svg";
const ICON_FULLSCREEN: &str = "icons/fullscreen.svg";

/// The widget's view fragments. Optional fragments exist only when their
/// display toggle is on; the duration label is a lazy slot filled on the
/// first duration report, since the duration is unknown until the element
/// loads metadata.
pub struct DomSurface {
    document: Document,
    container: HtmlElement,
    toolbar: HtmlElement,
    play_btn: HtmlElement,
    play_btn_img: HtmlImageElement,
    full_screen_btn: Option<HtmlElement>,
    time_container: Option<HtmlElement>,
    elapsed_span: Option<HtmlElement>,
    duration_span: Option<HtmlElement>,
    progress_track: Option<HtmlElement>,
    played_fill: Option<HtmlElement>,
    buffered_fill: Option<HtmlElement>,
}

fn create(document: &Document, tag: &str, class_name: &str) -> Result<HtmlElement, JsValue> {
    let element: HtmlElement = document.create_element(tag)?.dyn_into()?;
    element.set_class_name(class_name);
    Ok(element)
}

impl DomSurface {
    /// Wraps the media element in a new container inserted at its old
    /// position and builds the enabled toolbar fragments inside it. The
    /// media element must already have a parent node; a detached element is
    /// a caller precondition violation and surfaces as the platform error.
    pub fn build(media: &HtmlMediaElement, config: &PlayerConfig) -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| JsValue::from_str("no document available"))?;

        media.set_class_name(CLASS_MEDIA);

        let container = create(&document, "div", CLASS_CONTAINER)?;
        let parent = media
            .parent_node()
            .ok_or_else(|| JsValue::from_str("media element has no parent node"))?;
        parent.insert_before(&container, media.next_sibling().as_ref())?;
        container.append_child(media)?;

        let toolbar = create(&document, "div", CLASS_TOOLBAR)?;
        container.append_child(&toolbar)?;

        let left_toolbar = create(&document, "div", CLASS_TOOLBAR_LEFT)?;
        toolbar.append_child(&left_toolbar)?;
        let right_toolbar = create(&document, "div", CLASS_TOOLBAR_RIGHT)?;
        toolbar.append_child(&right_toolbar)?;

        let play_btn = create(&document, "button", CLASS_BTN_PLAY)?;
        let play_btn_img: HtmlImageElement = document.create_element("img")?.dyn_into()?;
        play_btn.append_child(&play_btn_img)?;
        left_toolbar.append_child(&play_btn)?;

        let full_screen_btn = if config.display.full_screen_btn {
            let btn = create(&document, "button", CLASS_BTN_FULLSCREEN)?;
            let img: HtmlImageElement = document.create_element("img")?.dyn_into()?;
            img.set_src(ICON_FULLSCREEN);
            btn.append_child(&img)?;
            right_toolbar.append_child(&btn)?;
            Some(btn)
        } else {
            None
        };

        let (time_container, elapsed_span) = if config.display.times {
            let times = create(&document, "span", CLASS_TIMES)?;

            let elapsed = create(&document, "span", CLASS_TIMES_ELAPSED)?;
            elapsed.set_text_content(Some("0:00"));
            times.append_child(&elapsed)?;

            let separator = create(&document, "span", CLASS_TIMES_SEPARATOR)?;
            separator.set_text_content(Some(" / "));
            times.append_child(&separator)?;

            left_toolbar.append_child(&times)?;
            (Some(times), Some(elapsed))
        } else {
            (None, None)
        };

        let (progress_track, played_fill, buffered_fill) = if config.display.progress_bar {
            let track = create(&document, "div", CLASS_PROGRESS_TRACK)?;
            container.append_child(&track)?;

            let buffered = create(&document, "span", CLASS_PROGRESS_BUFFERED)?;
            let played = create(&document, "span", CLASS_PROGRESS_PLAYED)?;
            // Buffered fill is layered beneath the played fill.
            track.append_child(&buffered)?;
            track.append_child(&played)?;

            (Some(track), Some(played), Some(buffered))
        } else {
            (None, None, None)
        };

        Ok(Self {
            document,
            container,
            toolbar,
            play_btn,
            play_btn_img,
            full_screen_btn,
            time_container,
            elapsed_span,
            duration_span: None,
            progress_track,
            played_fill,
            buffered_fill,
        })
    }

    pub(crate) fn container(&self) -> &HtmlElement {
        &self.container
    }

    pub(crate) fn play_button(&self) -> &HtmlElement {
        &self.play_btn
    }

    pub(crate) fn full_screen_button(&self) -> Option<&HtmlElement> {
        self.full_screen_btn.as_ref()
    }

    pub(crate) fn progress_track(&self) -> Option<&HtmlElement> {
        self.progress_track.as_ref()
    }
}

impl ControlSurface for DomSurface {
    fn set_play_glyph(&mut self, glyph: Glyph) {
        self.play_btn_img.set_src(match glyph {
            Glyph::Play => ICON_PLAY,
            Glyph::Pause => ICON_PAUSE,
        });
    }

    fn set_replay_hint(&mut self, on: bool) {
        let classes = self.play_btn.class_list();
        if on {
            let _ = classes.add_1(CLASS_BTN_REPLAY);
            let _ = self.play_btn.set_attribute("title", "Replay");
        } else {
            let _ = classes.remove_1(CLASS_BTN_REPLAY);
            let _ = self.play_btn.remove_attribute("title");
        }
    }

    fn set_elapsed_text(&mut self, text: &str) {
        if let Some(span) = &self.elapsed_span {
            span.set_text_content(Some(text));
        }
    }

    fn set_duration_text(&mut self, text: &str) {
        if self.duration_span.is_none() {
            let Some(times) = &self.time_container else {
                return;
            };
            let Ok(span) = create(&self.document, "span", CLASS_TIMES_DURATION) else {
                return;
            };
            if times.append_child(&span).is_ok() {
                self.duration_span = Some(span);
            }
        }
        if let Some(span) = &self.duration_span {
            span.set_text_content(Some(text));
        }
    }

    fn set_played_width(&mut self, width: &str) {
        if let Some(fill) = &self.played_fill {
            let _ = fill.style().set_property("width", width);
        }
    }

    fn set_buffered_width(&mut self, width: &str) {
        if let Some(fill) = &self.buffered_fill {
            let _ = fill.style().set_property("width", width);
        }
    }

    fn set_fullscreen(&mut self, on: bool) {
        let classes = self.container.class_list();
        if on {
            let _ = classes.add_1(CLASS_FULLSCREEN);
        } else {
            let _ = classes.remove_1(CLASS_FULLSCREEN);
        }
    }

    fn set_toolbar_active(&mut self, on: bool) {
        let classes = self.toolbar.class_list();
        if on {
            let _ = classes.add_1(CLASS_TOOLBAR_ACTIVE);
        } else {
            let _ = classes.remove_1(CLASS_TOOLBAR_ACTIVE);
        }
    }
}
