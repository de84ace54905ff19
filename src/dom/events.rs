//! Listener registration that retains its closures so they can be removed
//! again. Dropping a binding detaches the callback from its target, which is
//! what makes an explicit `dispose` possible for long-lived host pages.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, EventTarget, MouseEvent};

pub struct EventBinding {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventBinding {
    pub fn listen<F>(target: &EventTarget, kind: &'static str, mut handler: F) -> Result<Self, JsValue>
    where
        F: FnMut() + 'static,
    {
        let callback = Closure::wrap(Box::new(move |_: Event| handler()) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            kind,
            callback,
        })
    }

    /// Like [`EventBinding::listen`], for handlers that need the pointer
    /// coordinates of a mouse event.
    pub fn listen_mouse<F>(
        target: &EventTarget,
        kind: &'static str,
        mut handler: F,
    ) -> Result<Self, JsValue>
    where
        F: FnMut(MouseEvent) + 'static,
    {
        let callback = Closure::wrap(Box::new(move |event: Event| {
            if let Ok(event) = event.dyn_into::<MouseEvent>() {
                handler(event);
            }
        }) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            kind,
            callback,
        })
    }
}

impl Drop for EventBinding {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
    }
}
