//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for building a
//! [`RuleRegistry`] from a YAML rule file.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::pricing::{Category, RuleRegistry};

use super::types::PricingConfig;

/// Loads pricing rules from configuration files.
///
/// # File Format
///
/// ```text
/// rules:
///   REGULAR:
///     base_price: "2"
///     discount_price: "1.5"
///     included_days: 2
///   NEW_RELEASE:
///     base_price: "3"
///     bonus_points: { points: 1, min_days: 2 }
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads and validates the rule file at `path`.
    ///
    /// # Returns
    ///
    /// Returns the populated registry, or an error if:
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The file is not valid YAML for the expected shape (`ConfigParseError`)
    /// - Any rule is malformed or two entries name the same category
    ///   (`InvalidRuleDefinition`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use rental_engine::config::ConfigLoader;
    ///
    /// let registry = ConfigLoader::load("./config/pricing.yaml")?;
    /// # Ok::<(), rental_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<RuleRegistry> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let registry = Self::parse(&content, &path_str)?;

        info!(path = %path_str, rules = registry.len(), "Loaded pricing rules");
        Ok(registry)
    }

    /// Builds a registry from YAML text.
    pub fn from_yaml_str(content: &str) -> EngineResult<RuleRegistry> {
        Self::parse(content, "<inline>")
    }

    fn parse(content: &str, path: &str) -> EngineResult<RuleRegistry> {
        let config: PricingConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        let rules = config
            .rules
            .into_iter()
            .map(|(category, rule)| rule.into_rule(Category::new(category)))
            .collect::<EngineResult<Vec<_>>>()?;

        RuleRegistry::from_rules(rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/pricing.yaml"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_shipped_configuration_matches_standard_rules() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loaded = result.unwrap();
        let standard = RuleRegistry::standard();
        assert_eq!(loaded.rules(), standard.rules());
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        match ConfigLoader::load("/nonexistent/pricing.yaml") {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("pricing.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_parse_tiered_rule_with_bonus() {
        let yaml = r#"
rules:
  weekend_special:
    base_price: "2.5"
    discount_price: "0.75"
    included_days: 2
    bonus_points:
      points: 2
      min_days: 3
"#;

        let registry = ConfigLoader::from_yaml_str(yaml).unwrap();
        let rule = registry.lookup(&Category::new("WEEKEND_SPECIAL")).unwrap();
        assert_eq!(rule.cost(4).unwrap(), dec("4.0"));
        assert_eq!(rule.points(2).unwrap(), 1);
        assert_eq!(rule.points(3).unwrap(), 3);
    }

    #[test]
    fn test_oversized_bonus_points_fail_fast() {
        let yaml = r#"
rules:
  NEW_RELEASE:
    base_price: "3"
    bonus_points:
      points: 4294967295
      min_days: 1
"#;

        match ConfigLoader::from_yaml_str(yaml) {
            Err(EngineError::InvalidRuleDefinition { category, .. }) => {
                assert_eq!(category, "NEW_RELEASE");
            }
            _ => panic!("Expected InvalidRuleDefinition error"),
        }
    }

    #[test]
    fn test_discount_without_included_days_fails_fast() {
        let yaml = r#"
rules:
  REGULAR:
    base_price: "2"
    discount_price: "1.5"
"#;

        match ConfigLoader::from_yaml_str(yaml) {
            Err(EngineError::InvalidRuleDefinition { category, .. }) => {
                assert_eq!(category, "REGULAR");
            }
            _ => panic!("Expected InvalidRuleDefinition error"),
        }
    }

    #[test]
    fn test_spellings_of_same_category_rejected() {
        let yaml = r#"
rules:
  classic:
    base_price: "1"
  CLASSIC:
    base_price: "2"
"#;

        assert!(matches!(
            ConfigLoader::from_yaml_str(yaml),
            Err(EngineError::InvalidRuleDefinition { .. })
        ));
    }

    #[test]
    fn test_empty_category_key_rejected() {
        let yaml = r#"
rules:
  "":
    base_price: "1"
"#;

        assert!(matches!(
            ConfigLoader::from_yaml_str(yaml),
            Err(EngineError::InvalidRuleDefinition { .. })
        ));
    }

    #[test]
    fn test_unknown_field_is_parse_error() {
        let yaml = r#"
rules:
  CLASSIC:
    base_price: "1"
    weekly_cap: "5"
"#;

        assert!(matches!(
            ConfigLoader::from_yaml_str(yaml),
            Err(EngineError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        assert!(matches!(
            ConfigLoader::from_yaml_str("rules: [unterminated"),
            Err(EngineError::ConfigParseError { .. })
        ));
    }
}
