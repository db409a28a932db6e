//! Framework strategy selection.

use serde::{Deserialize, Serialize};

/// Configuration for framework strategy pack filtering.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FrameworkConfig {
    /// If set, only these pack names are loaded.
    pub enabled_only: Option<Vec<String>>,
    /// Pack names to disable (excluded from loading).
    pub disabled_packs: Vec<String>,
    /// Directory holding additional TOML strategy packs.
    pub custom_dir: Option<String>,
}

impl FrameworkConfig {
    /// Whether a pack with this name should be skipped.
    pub fn is_pack_disabled(&self, name: &str) -> bool {
        if let Some(ref enabled) = self.enabled_only {
            return !enabled.iter().any(|e| e == name);
        }
        self.disabled_packs.iter().any(|d| d == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enabled_only_takes_precedence() {
        let cfg = FrameworkConfig {
            enabled_only: Some(vec!["tornadofx".into()]),
            disabled_packs: vec!["tornadofx".into()],
            custom_dir: None,
        };
        assert!(!cfg.is_pack_disabled("tornadofx"));
        assert!(cfg.is_pack_disabled("compose"));
    }

    #[test]
    fn disabled_list_applies_without_allow_list() {
        let cfg = FrameworkConfig {
            disabled_packs: vec!["tornadofx".into()],
            ..Default::default()
        };
        assert!(cfg.is_pack_disabled("tornadofx"));
        assert!(!cfg.is_pack_disabled("other"));
    }
}
