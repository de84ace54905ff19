//! Cinema — a playback-control toolbar overlay for a single HTML audio or
//! video element.
//!
//! The widget wraps an existing, already-attached media element, renders a
//! toolbar next to it (play/pause, fullscreen, elapsed/duration labels, a
//! click-to-seek progress bar with a buffered fill), and keeps the two in
//! sync: user input issues play/pause/seek commands, and the element's own
//! lifecycle events drive targeted updates of individual view fragments.
//!
//! The control logic is platform-agnostic: [`Controller`] is generic over a
//! [`Media`] backend and a [`ControlSurface`], so the whole state machine
//! runs under native tests. The browser layer in [`dom`] supplies the real
//! `HtmlMediaElement` backend, the one-shot DOM view, and the exported
//! [`dom::PlayerOverlay`] widget.

pub mod config;
pub mod controller;
pub mod format;
pub mod state;
pub mod timeline;

#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use config::{resolve, AnimateConfig, DisplayConfig, PlayerConfig, PlayerOptions};
pub use controller::{ControlSurface, Controller, Glyph, Media, DURATION_FALLBACK};
pub use format::seconds_to_display;
pub use state::PlaybackState;
pub use timeline::TimeRange;

#[cfg(target_arch = "wasm32")]
pub use dom::PlayerOverlay;
