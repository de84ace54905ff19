//! The exported widget: resolves configuration, builds the view, and bridges
//! DOM events into controller calls.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::HtmlMediaElement;

use super::events::EventBinding;
use super::media::DomMedia;
use super::view::DomSurface;
use crate::config::{self, PlayerConfig, PlayerOptions};
use crate::controller::Controller;

type SharedController = Rc<RefCell<Controller<DomMedia, DomSurface>>>;

/// Playback-control overlay bound 1:1 to one media element.
///
/// ```js
/// const overlay = new PlayerOverlay(video, { autoplay: false, animate: { toolbar: true } });
/// overlay.playPause();
/// overlay.dispose();
/// ```
#[wasm_bindgen]
pub struct PlayerOverlay {
    media: HtmlMediaElement,
    config: PlayerConfig,
    controller: Option<SharedController>,
    bindings: Vec<EventBinding>,
}

#[wasm_bindgen]
impl PlayerOverlay {
    /// Creates the overlay and renders it immediately. `options` may be
    /// `undefined`, `null`, or a plain object carrying the recognized keys;
    /// anything that does not stringify to valid JSON is a construction
    /// error.
    #[wasm_bindgen(constructor)]
    pub fn new(media: HtmlMediaElement, options: JsValue) -> Result<PlayerOverlay, JsValue> {
        let options = parse_options(&options)?;
        let config = config::resolve(PlayerConfig::default(), options);
        let mut overlay = PlayerOverlay {
            media,
            config,
            controller: None,
            bindings: Vec::new(),
        };
        overlay.render()?;
        Ok(overlay)
    }

    /// Builds the toolbar fragments, attaches every listener, and runs the
    /// initial play/pause sync. Invoked once by the constructor; later calls
    /// are no-ops because the fragment tree is created once per widget.
    pub fn render(&mut self) -> Result<(), JsValue> {
        if self.controller.is_some() {
            return Ok(());
        }

        let surface = DomSurface::build(&self.media, &self.config)?;
        let container = surface.container().clone();
        let play_btn = surface.play_button().clone();
        let full_screen_btn = surface.full_screen_button().cloned();
        let progress_track = surface.progress_track().cloned();

        let media = self.media.clone();
        let controller = Rc::new(RefCell::new(Controller::new(
            DomMedia::new(media.clone()),
            surface,
            self.config,
        )));

        // Media lifecycle events.
        {
            let controller = controller.clone();
            self.bindings.push(EventBinding::listen(
                media.as_ref(),
                "timeupdate",
                move || controller.borrow_mut().time_update(),
            )?);
        }
        {
            let controller = controller.clone();
            self.bindings
                .push(EventBinding::listen(media.as_ref(), "ended", move || {
                    controller.borrow_mut().media_ended()
                })?);
        }
        {
            let controller = controller.clone();
            self.bindings
                .push(EventBinding::listen(media.as_ref(), "progress", move || {
                    controller.borrow_mut().media_progress()
                })?);
        }
        if self.config.display.times {
            let controller = controller.clone();
            self.bindings.push(EventBinding::listen(
                media.as_ref(),
                "durationchange",
                move || controller.borrow_mut().duration_change(),
            )?);
        }

        // Pointer input.
        {
            let controller = controller.clone();
            self.bindings.push(EventBinding::listen(
                play_btn.as_ref(),
                "click",
                move || controller.borrow_mut().play_pause(),
            )?);
        }
        if let Some(btn) = full_screen_btn {
            let controller = controller.clone();
            self.bindings
                .push(EventBinding::listen(btn.as_ref(), "click", move || {
                    controller.borrow_mut().full_screen()
                })?);
        }
        if let Some(track) = progress_track {
            let controller = controller.clone();
            let track_element = track.clone();
            self.bindings.push(EventBinding::listen_mouse(
                track.as_ref(),
                "click",
                move |event| {
                    let width = f64::from(track_element.client_width());
                    controller
                        .borrow_mut()
                        .seek_click(f64::from(event.offset_x()), width);
                },
            )?);
        }
        if self.config.animate.toolbar {
            {
                let controller = controller.clone();
                self.bindings.push(EventBinding::listen(
                    container.as_ref(),
                    "mouseover",
                    move || controller.borrow_mut().pointer_enter(),
                )?);
            }
            {
                let controller = controller.clone();
                self.bindings.push(EventBinding::listen(
                    container.as_ref(),
                    "mouseout",
                    move || controller.borrow_mut().pointer_leave(),
                )?);
            }
        }

        controller.borrow_mut().start();
        self.controller = Some(controller);
        Ok(())
    }

    /// Toggles between play and pause based on the widget's own state.
    #[wasm_bindgen(js_name = playPause)]
    pub fn play_pause(&self) {
        if let Some(controller) = &self.controller {
            controller.borrow_mut().play_pause();
        }
    }

    pub fn play(&self) {
        if let Some(controller) = &self.controller {
            controller.borrow_mut().play();
        }
    }

    pub fn pause(&self) {
        if let Some(controller) = &self.controller {
            controller.borrow_mut().pause();
        }
    }

    #[wasm_bindgen(js_name = fullScreen)]
    pub fn full_screen(&self) {
        if let Some(controller) = &self.controller {
            controller.borrow_mut().full_screen();
        }
    }

    /// Unregisters every listener registered during `render`. The fragment
    /// tree stays in the document; the widget simply stops reacting. Also
    /// runs when the widget is dropped.
    pub fn dispose(&mut self) {
        self.bindings.clear();
    }
}

fn parse_options(raw: &JsValue) -> Result<PlayerOptions, JsValue> {
    if raw.is_undefined() || raw.is_null() {
        return Ok(PlayerOptions::default());
    }
    let json = js_sys::JSON::stringify(raw)
        .map_err(|_| JsValue::from_str("options are not a plain object"))?;
    PlayerOptions::from_json(&String::from(json))
        .map_err(|err| JsValue::from_str(&format!("invalid options: {err}")))
}
