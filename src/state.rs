//! The widget's own mutable state. Everything else (current time, duration,
//! buffered ranges) is read from the media element on demand, never cached.

/// `playing` mirrors, but never drives, the media element's actual condition;
/// the two can disagree transiently until the element's own events fire.
/// `full_screen` is a local CSS-class toggle, not tied to any platform
/// fullscreen API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackState {
    pub playing: bool,
    pub full_screen: bool,
}

impl PlaybackState {
    /// Seeds the state to the opposite of what the construction-time toggle
    /// will produce: the controller runs one unconditional toggle at the end
    /// of construction, so `autoplay` lands on `Playing` and the default
    /// lands on `Paused` after a no-op pause command.
    pub fn seed(autoplay: bool) -> Self {
        Self {
            playing: !autoplay,
            full_screen: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_inverts_the_autoplay_flag() {
        assert!(PlaybackState::seed(false).playing);
        assert!(!PlaybackState::seed(true).playing);
    }

    #[test]
    fn seed_never_starts_fullscreen() {
        assert!(!PlaybackState::seed(true).full_screen);
        assert!(!PlaybackState::seed(false).full_screen);
    }
}
