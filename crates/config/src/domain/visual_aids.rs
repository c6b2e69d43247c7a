//! Visual Aid Configuration
//!
//! Media references per term. The list order is the priority order: when a
//! text contains several terms with media, the earliest entry wins.

use medlingo_core::Term;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisualAidEntry {
    pub term: Term,
    /// Media reference (URL)
    pub url: String,
}

/// Visual aids configuration loaded from visual_aids.yaml
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct VisualAidsConfig {
    #[serde(default)]
    pub visual_aids: Vec<VisualAidEntry>,
}

impl VisualAidsConfig {
    /// Load from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        super::read_yaml(path.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_is_preserved() {
        let yaml = r#"
visual_aids:
  - term: stroke
    url: https://example.org/stroke.png
  - term: fever
    url: https://example.org/fever.png
"#;
        let config: VisualAidsConfig = serde_yaml::from_str(yaml).unwrap();
        let order: Vec<&str> = config.visual_aids.iter().map(|v| v.term.as_str()).collect();
        assert_eq!(order, vec!["stroke", "fever"]);
    }
}
