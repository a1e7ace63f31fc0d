//! Replay configuration, loaded from a JSON file.

use crate::error::AppResult;
use cadinput_core::SessionConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub session: SessionConfig,
    /// Pretty-print the report.
    pub pretty: bool,
}

impl AppConfig {
    pub fn load(path: &Path) -> AppResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&text)?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_partial() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "pretty": true, "session": {{ "snap_tolerance": 4.0 }} }}"#).unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert!(config.pretty);
        assert_eq!(config.session.snap_tolerance, 4.0);
        assert!(config.session.unlock_after_commit);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, crate::error::AppError::Io(_)));
    }
}
