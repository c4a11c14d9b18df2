use log::Level;
use serde::Deserialize;
use web_sys::Document;

use crate::error::Result;

pub const CONFIG_ELEMENT_ID: &str = "page-fx-config";
pub const ROOT_ELEMENT_ID: &str = "page-fx-root";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Where each feature finds its elements.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Selectors {
    pub header: String,
    pub menu_toggle: String,
    pub nav_links: String,
    pub anchors: String,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub reveal: String,
    pub buttons: String,
    pub news_cards: String,
    pub card_items: String,
    pub loading_screen: String,
    pub current_year: String,
    pub hero: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            header: "#header".to_string(),
            menu_toggle: ".menu-toggle".to_string(),
            nav_links: "#nav-links".to_string(),
            anchors: "a[href^=\"#\"]".to_string(),
            hero_title: ".hero-title".to_string(),
            hero_subtitle: ".hero-subtitle".to_string(),
            reveal: ".news-card, .grid-item, .safety, .section-title".to_string(),
            buttons: ".btn".to_string(),
            news_cards: ".news-card".to_string(),
            card_items: ".card-item".to_string(),
            loading_screen: "#loadingScreen".to_string(),
            current_year: "#currentYear".to_string(),
            hero: ".hero".to_string(),
        }
    }
}

/// Tunables for every binding. Times are milliseconds, distances CSS pixels.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    pub selectors: Selectors,
    pub header_threshold: f64,
    pub header_throttle_ms: u32,
    pub nav_breakpoint: f64,
    pub resize_throttle_ms: u32,
    pub anchor_offset: f64,
    pub hero_title_delay_ms: u32,
    pub hero_subtitle_delay_ms: u32,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub reveal_stagger_ms: u32,
    pub loading_hide_delay_ms: u32,
    pub loading_remove_delay_ms: u32,
    pub body_fade_delay_ms: u32,
    pub parallax_factor: f64,
    pub parallax_throttle_ms: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            header_threshold: 10.0,
            header_throttle_ms: 100,
            nav_breakpoint: 768.0,
            resize_throttle_ms: 250,
            anchor_offset: 100.0,
            hero_title_delay_ms: 200,
            hero_subtitle_delay_ms: 600,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".to_string(),
            reveal_stagger_ms: 100,
            loading_hide_delay_ms: 1500,
            loading_remove_delay_ms: 500,
            body_fade_delay_ms: 100,
            parallax_factor: 0.5,
            parallax_throttle_ms: 10,
        }
    }
}

impl PageConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// Reads the optional `<script type="application/json" id="page-fx-config">` block.
    pub fn from_document(document: &Document) -> Result<Self> {
        match document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        {
            Some(raw) => Self::from_json(&raw),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FxError;

    #[test]
    fn empty_block_yields_defaults() {
        let config = PageConfig::from_json("  \n").unwrap();
        assert_eq!(config, PageConfig::default());
        let config = PageConfig::from_json("{}").unwrap();
        assert_eq!(config, PageConfig::default());
    }

    #[test]
    fn partial_block_overrides_only_named_fields() {
        let config = PageConfig::from_json(
            r#"{"anchorOffset": 80, "selectors": {"header": "header.site"}}"#,
        )
        .unwrap();
        assert_eq!(config.anchor_offset, 80.0);
        assert_eq!(config.selectors.header, "header.site");
        assert_eq!(config.selectors.nav_links, "#nav-links");
        assert_eq!(config.nav_breakpoint, 768.0);
        assert_eq!(config.reveal_root_margin, "0px 0px -50px 0px");
    }

    #[test]
    fn malformed_block_is_a_config_error() {
        let err = PageConfig::from_json("{\"anchorOffset\": ").unwrap_err();
        assert!(matches!(err, FxError::Config(_)));
    }

    #[test]
    fn wrong_field_type_is_a_config_error() {
        let err = PageConfig::from_json(r#"{"headerThrottleMs": "fast"}"#).unwrap_err();
        assert!(matches!(err, FxError::Config(_)));
    }
}
