//! Strategy pack loading: TOML → `PackStrategy`.

use std::path::Path;

use scaffold_core::errors::StrategyError;

use super::strategy::PackStrategy;
use super::types::StrategySpec;

/// Parse and validate a pack from TOML text.
pub fn load_from_str(toml_str: &str) -> Result<PackStrategy, StrategyError> {
    let spec: StrategySpec = toml::from_str(toml_str).map_err(|e| StrategyError::InvalidPack {
        pack: "<unknown>".to_string(),
        message: e.to_string(),
    })?;
    validate(&spec)?;
    Ok(PackStrategy::new(spec))
}

pub fn load_from_file(path: &Path) -> Result<PackStrategy, StrategyError> {
    let content = std::fs::read_to_string(path).map_err(|e| StrategyError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    load_from_str(&content)
}

fn validate(spec: &StrategySpec) -> Result<(), StrategyError> {
    let name = spec.strategy.name.trim();
    let invalid = |message: &str| StrategyError::InvalidPack {
        pack: name.to_string(),
        message: message.to_string(),
    };
    if name.is_empty() {
        return Err(invalid("strategy.name must not be empty"));
    }
    let hooks = &spec.hooks;
    if hooks.component_supertypes.iter().any(|s| s.trim().is_empty()) {
        return Err(invalid("hooks.component_supertypes contains an empty name"));
    }
    if hooks.input_controls.iter().any(|s| s.trim().is_empty()) {
        return Err(invalid("hooks.input_controls contains an empty name"));
    }
    for (key, value) in [
        ("scope_property", &hooks.scope_property),
        ("root_property", &hooks.root_property),
    ] {
        if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
            return Err(invalid(&format!("hooks.{key} must not be empty when set")));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frameworks::strategy::FrameworkStrategy;
    use crate::frameworks::types::ScopeSource;

    #[test]
    fn minimal_pack_loads_with_defaults() {
        let pack = load_from_str("[strategy]\nname = \"bare\"\n").unwrap();
        assert_eq!(pack.name(), "bare");
        assert!(pack.spec().hooks.component_supertypes.is_empty());
        assert_eq!(pack.spec().hooks.scope_source, ScopeSource::CastTarget);
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = load_from_str("[strategy]\nname = \"  \"\n").unwrap_err();
        assert!(matches!(err, StrategyError::InvalidPack { .. }));
    }

    #[test]
    fn blank_root_property_is_rejected() {
        let toml = "[strategy]\nname = \"x\"\n[hooks]\nroot_property = \"\"\n";
        let err = load_from_str(toml).unwrap_err();
        assert!(err.to_string().contains("root_property"));
    }

    #[test]
    fn malformed_toml_is_an_invalid_pack() {
        assert!(matches!(
            load_from_str("[strategy\nname="),
            Err(StrategyError::InvalidPack { .. })
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_from_file(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, StrategyError::Io { .. }));
    }
}
