//! Presentation timing and geometry configuration.
//!
//! Every field has a default from `consts`, so a JSON override only needs
//! to name the values it changes.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    ANCHOR_HEADER_OFFSET_PX, BACK_TO_TOP_THRESHOLD_PX, LOADING_COMPLETE_DELAY_MS, LOADING_MAX_DURATION_MS,
    LOADING_MAX_INCREMENT, LOADING_TICK_MS, MAX_FILTER_TAGS, MENU_SETTLE_DELAY_MS, NAV_HEADER_OFFSET_PX,
    SCROLL_THRESHOLD_PX, THEME_STORAGE_KEY, TYPING_DELETE_MS, TYPING_PAUSE_MS, TYPING_TYPE_MS,
};
use crate::error::PresentationError;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PresentationConfig {
    pub scroll_threshold_px: f64,
    pub nav_header_offset_px: f64,
    pub anchor_header_offset_px: f64,
    pub back_to_top_threshold_px: f64,
    pub menu_settle_delay_ms: u32,
    pub loading: LoadingSettings,
    pub typing: TypingSettings,
    pub max_filter_tags: usize,
    pub theme_storage_key: String,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            scroll_threshold_px: SCROLL_THRESHOLD_PX,
            nav_header_offset_px: NAV_HEADER_OFFSET_PX,
            anchor_header_offset_px: ANCHOR_HEADER_OFFSET_PX,
            back_to_top_threshold_px: BACK_TO_TOP_THRESHOLD_PX,
            menu_settle_delay_ms: MENU_SETTLE_DELAY_MS,
            loading: LoadingSettings::default(),
            typing: TypingSettings::default(),
            max_filter_tags: MAX_FILTER_TAGS,
            theme_storage_key: THEME_STORAGE_KEY.to_owned(),
        }
    }
}

impl PresentationConfig {
    /// Parse a (possibly partial) JSON override on top of the defaults.
    pub fn from_json(raw: &str) -> Result<Self, PresentationError> {
        serde_json::from_str(raw).map_err(PresentationError::InvalidConfig)
    }
}

/// Timing of the simulated loading sequence.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoadingSettings {
    pub tick_ms: u32,
    pub max_increment: f64,
    pub complete_delay_ms: u32,
    pub max_duration_ms: u32,
}

impl Default for LoadingSettings {
    fn default() -> Self {
        Self {
            tick_ms: LOADING_TICK_MS,
            max_increment: LOADING_MAX_INCREMENT,
            complete_delay_ms: LOADING_COMPLETE_DELAY_MS,
            max_duration_ms: LOADING_MAX_DURATION_MS,
        }
    }
}

/// Timing of the headline typing animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TypingSettings {
    pub type_ms: u32,
    pub delete_ms: u32,
    pub pause_ms: u32,
}

impl Default for TypingSettings {
    fn default() -> Self {
        Self { type_ms: TYPING_TYPE_MS, delete_ms: TYPING_DELETE_MS, pause_ms: TYPING_PAUSE_MS }
    }
}
