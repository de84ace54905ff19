//! Browser layer: the media element backend, one-shot DOM view construction,
//! the listener bridge, and the exported widget tying them together.

mod events;
mod media;
mod overlay;
mod view;

pub use media::DomMedia;
pub use overlay::PlayerOverlay;
pub use view::DomSurface;
