//! YAML configuration file support.
//!
//! ```yaml
//! version: "1"
//!
//! compare:
//!   max_fragments: 5
//!   autojunk: false
//!   parallel: true
//!   worker_threads: 8
//!
//! source:
//!   extension: "txt"
//!
//! report:
//!   file_name: "detailed_report.txt"
//!   save: true
//! ```
//!
//! Every section and field is optional; missing values take their defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use sim_compare::CompareConfig;
use sim_core::{Result, SimError};

const SUPPORTED_VERSION: &str = "1";

/// Top-level configuration for the `simcheck` binary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Configuration format version
    pub version: String,
    pub compare: CompareConfig,
    pub source: SourceConfig,
    pub report: ReportConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: SUPPORTED_VERSION.to_string(),
            compare: CompareConfig::default(),
            source: SourceConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

/// Which files in a folder count as documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Extension without the leading dot; matching is case-sensitive.
    pub extension: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            extension: "txt".to_string(),
        }
    }
}

/// Where the folder report is saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// File name inside the scanned folder.
    pub file_name: String,
    pub save: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            file_name: "detailed_report.txt".to_string(),
            save: true,
        }
    }
}

impl AppConfig {
    /// Load and validate a YAML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|err| SimError::Config(format!("cannot read {}: {}", path.display(), err)))?;
        Self::from_yaml(&text)
    }

    pub fn from_yaml(text: &str) -> Result<Self> {
        let mut config: Self = serde_yaml::from_str(text)?;
        config.source.extension = config.source.extension.trim_start_matches('.').to_string();
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.version != SUPPORTED_VERSION {
            return Err(SimError::Config(format!(
                "unsupported config version {:?} (expected {:?})",
                self.version, SUPPORTED_VERSION
            )));
        }
        if self.source.extension.is_empty() {
            return Err(SimError::Config("source.extension must not be empty".to_string()));
        }
        if self.report.file_name.is_empty() || self.report.file_name.contains(&['/', '\\'][..]) {
            return Err(SimError::Config(format!(
                "report.file_name must be a bare file name, got {:?}",
                self.report.file_name
            )));
        }
        self.compare.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AppConfig::default();
        assert_eq!(config.version, "1");
        assert_eq!(config.source.extension, "txt");
        assert_eq!(config.report.file_name, "detailed_report.txt");
        assert!(config.report.save);
        assert_eq!(config.compare.max_fragments, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_document_is_default() {
        let config = AppConfig::from_yaml("{}").expect("parse");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn partial_sections() {
        let yaml = r#"
version: "1"
compare:
  max_fragments: 3
  parallel: false
source:
  extension: ".md"
"#;
        let config = AppConfig::from_yaml(yaml).expect("parse");
        assert_eq!(config.compare.max_fragments, 3);
        assert!(!config.compare.parallel);
        assert!(!config.compare.autojunk);
        assert_eq!(config.source.extension, "md");
        assert_eq!(config.report.file_name, "detailed_report.txt");
    }

    #[test]
    fn rejects_unknown_version() {
        let err = AppConfig::from_yaml("version: \"2\"").unwrap_err();
        assert!(matches!(err, SimError::Config(_)));
    }

    #[test]
    fn rejects_empty_extension() {
        let err = AppConfig::from_yaml("source:\n  extension: \"\"").unwrap_err();
        assert!(matches!(err, SimError::Config(_)));
    }

    #[test]
    fn rejects_report_path() {
        let err = AppConfig::from_yaml("report:\n  file_name: \"../out.txt\"").unwrap_err();
        assert!(matches!(err, SimError::Config(_)));
    }

    #[test]
    fn rejects_zero_workers() {
        let err = AppConfig::from_yaml("compare:\n  worker_threads: 0").unwrap_err();
        assert!(matches!(err, SimError::Config(_)));
    }

    #[test]
    fn malformed_yaml_is_a_yaml_error() {
        let err = AppConfig::from_yaml("compare: [unclosed").unwrap_err();
        assert!(matches!(err, SimError::Yaml(_)));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("simcheck.yaml");
        fs::write(&path, "report:\n  save: false\n").expect("write");
        let config = AppConfig::load(&path).expect("load");
        assert!(!config.report.save);
    }

    #[test]
    fn load_missing_file_is_config_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = AppConfig::load(&dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(err, SimError::Config(_)));
    }
}
