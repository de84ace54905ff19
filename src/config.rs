//! Player configuration: typed defaults plus a shallow-replace overrides merge.
//!
//! Options arrive either as Rust structures or as a camelCase JSON object from
//! the embedding page. A supplied top-level group replaces the corresponding
//! default group entirely; toggles missing from a supplied group come out
//! `false`, not as their defaults. Partial groups therefore silently drop the
//! unmentioned toggles, which callers relying on the defaults must not do.

use serde::{Deserialize, Serialize};

/// Which toolbar fragments get built. `volume_bar` is accepted and carried but
/// no component consumes it yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayConfig {
    #[serde(default)]
    pub full_screen_btn: bool,
    #[serde(default)]
    pub times: bool,
    #[serde(default)]
    pub progress_bar: bool,
    #[serde(default)]
    pub volume_bar: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            full_screen_btn: true,
            times: true,
            progress_bar: true,
            volume_bar: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimateConfig {
    /// Show the toolbar only while the pointer is over the player. When off,
    /// the toolbar is marked active once at construction instead.
    #[serde(default)]
    pub toolbar: bool,
}

impl Default for AnimateConfig {
    fn default() -> Self {
        Self { toolbar: true }
    }
}

/// Resolved configuration, immutable after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerConfig {
    #[serde(default)]
    pub autoplay: bool,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub animate: AnimateConfig,
}

/// Caller-supplied partial configuration. `None` keeps the default group.
/// Unrecognized keys are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerOptions {
    pub autoplay: Option<bool>,
    pub display: Option<DisplayConfig>,
    pub animate: Option<AnimateConfig>,
}

impl PlayerOptions {
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }
}

/// Merges `overrides` over `defaults`, replacing each supplied top-level
/// group wholesale.
pub fn resolve(defaults: PlayerConfig, overrides: PlayerOptions) -> PlayerConfig {
    PlayerConfig {
        autoplay: overrides.autoplay.unwrap_or(defaults.autoplay),
        display: overrides.display.unwrap_or(defaults.display),
        animate: overrides.animate.unwrap_or(defaults.animate),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_options_keep_every_default() {
        let config = resolve(PlayerConfig::default(), PlayerOptions::default());
        assert!(!config.autoplay);
        assert!(config.display.full_screen_btn);
        assert!(config.display.times);
        assert!(config.display.progress_bar);
        assert!(config.display.volume_bar);
        assert!(config.animate.toolbar);
    }

    #[test]
    fn partial_display_group_replaces_the_whole_group() {
        let options = PlayerOptions::from_json(r#"{"display":{"progressBar":true}}"#).unwrap();
        let config = resolve(PlayerConfig::default(), options);
        assert!(config.display.progress_bar);
        // Unmentioned toggles are dropped, not defaulted.
        assert!(!config.display.full_screen_btn);
        assert!(!config.display.times);
        assert!(!config.display.volume_bar);
        // Untouched groups keep their defaults.
        assert!(!config.autoplay);
        assert!(config.animate.toolbar);
    }

    #[test]
    fn autoplay_override_applies() {
        let options = PlayerOptions::from_json(r#"{"autoplay":true}"#).unwrap();
        assert!(resolve(PlayerConfig::default(), options).autoplay);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let options =
            PlayerOptions::from_json(r#"{"autoplay":true,"theme":"dark","speed":2}"#).unwrap();
        let config = resolve(PlayerConfig::default(), options);
        assert!(config.autoplay);
        assert_eq!(config.display, DisplayConfig::default());
    }

    #[test]
    fn empty_animate_group_turns_animation_off() {
        let options = PlayerOptions::from_json(r#"{"animate":{}}"#).unwrap();
        assert!(!resolve(PlayerConfig::default(), options).animate.toolbar);
    }
}
