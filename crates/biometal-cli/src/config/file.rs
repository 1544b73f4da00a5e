use crate::error::{CliError, Result};
use biometal::workflows::config::ProfileTarget;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FileTarget {
    Metals,
    Residues,
}

impl From<FileTarget> for ProfileTarget {
    fn from(target: FileTarget) -> Self {
        match target {
            FileTarget::Metals => ProfileTarget::Metals,
            FileTarget::Residues => ProfileTarget::Residues,
        }
    }
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileSphereConfig {
    pub radius: Option<f64>,
    pub partial_charges: Option<bool>,
    pub include_het: Option<bool>,
    pub include_metals: Option<bool>,
    pub charge_table: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileProfileConfig {
    pub target: Option<FileTarget>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileConfig {
    pub sphere: Option<FileSphereConfig>,
    pub profile: Option<FileProfileConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn full_file_is_parsed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
            [sphere]
            radius = 8.0
            partial-charges = true
            include-het = false
            include-metals = true
            charge-table = "charges.toml"

            [profile]
            target = "residues"
            "#,
        )
        .unwrap();

        let config = FileConfig::from_file(&path).unwrap();
        let sphere = config.sphere.unwrap();
        assert_eq!(sphere.radius, Some(8.0));
        assert_eq!(sphere.partial_charges, Some(true));
        assert_eq!(sphere.include_het, Some(false));
        assert_eq!(sphere.include_metals, Some(true));
        assert_eq!(sphere.charge_table, Some(PathBuf::from("charges.toml")));
        assert_eq!(config.profile.unwrap().target, Some(FileTarget::Residues));
    }

    #[test]
    fn empty_file_leaves_everything_unset() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert!(config.sphere.is_none());
        assert!(config.profile.is_none());
    }

    #[test]
    fn unknown_keys_are_rejected_with_the_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[sphere]\nradious = 8.0\n").unwrap();

        match FileConfig::from_file(&path) {
            Err(CliError::FileParsing { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected FileParsing error, got {:?}", other),
        }
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        let result = FileConfig::from_file(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(CliError::Io(_))));
    }

    #[test]
    fn file_target_converts_to_profile_target() {
        assert_eq!(ProfileTarget::from(FileTarget::Metals), ProfileTarget::Metals);
        assert_eq!(ProfileTarget::from(FileTarget::Residues), ProfileTarget::Residues);
    }
}
