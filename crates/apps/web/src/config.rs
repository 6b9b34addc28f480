use std::str::FromStr;

use log::LevelFilter;
use serde::Deserialize;

use crate::error::MountError;

/// Mount options, passed from the page as JSON. Every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    /// Id of the `<canvas>` element to draw into.
    pub canvas_id: String,
    /// Class on `document.documentElement` that selects the dark palette.
    pub dark_class: String,
    pub log_level: String,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            canvas_id: "blueprint-background".to_string(),
            dark_class: "dark".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl BackgroundConfig {
    pub fn from_json(json: &str) -> Result<Self, MountError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Unknown level names fall back to `Info`.
    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(self.log_level.trim()).unwrap_or(LevelFilter::Info)
    }

    /// Whether a `class` attribute value carries the dark marker.
    pub fn is_dark(&self, class_name: &str) -> bool {
        class_name.split_ascii_whitespace().any(|c| c == self.dark_class)
    }
}

#[cfg(test)]
mod tests {
    use super::BackgroundConfig;
    use crate::error::MountError;
    use log::LevelFilter;

    #[test]
    fn empty_object_uses_defaults() {
        let cfg = BackgroundConfig::from_json("{}").unwrap();
        assert_eq!(cfg, BackgroundConfig::default());
        assert_eq!(cfg.canvas_id, "blueprint-background");
        assert_eq!(cfg.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let cfg = BackgroundConfig::from_json(r#"{"canvas_id":"bg","log_level":"debug"}"#).unwrap();
        assert_eq!(cfg.canvas_id, "bg");
        assert_eq!(cfg.dark_class, "dark");
        assert_eq!(cfg.level_filter(), LevelFilter::Debug);
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = BackgroundConfig::from_json("{canvas_id:").unwrap_err();
        assert!(matches!(err, MountError::Config(_)));
        assert!(!err.is_surface_unavailable());
    }

    #[test]
    fn unknown_level_falls_back_to_info() {
        let cfg = BackgroundConfig {
            log_level: "chatty".into(),
            ..Default::default()
        };
        assert_eq!(cfg.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn dark_marker_matches_whole_class_names() {
        let cfg = BackgroundConfig::default();
        assert!(cfg.is_dark("antialiased dark"));
        assert!(cfg.is_dark("dark"));
        assert!(!cfg.is_dark("darkish theme"));
        assert!(!cfg.is_dark(""));
    }
}
