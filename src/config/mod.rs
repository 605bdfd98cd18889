#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::model::{FilterPolicy, RunMode, DEFAULT_LIBRARY_NAME};
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use std::path::{Path, PathBuf};
use toml_config::TomlConfig;

pub const DEFAULT_BUILD_FILE: &str = "app/build.gradle";
pub const DEFAULT_OUTPUT_FILE: &str = "GodotPlayGamesServices.gdap";

/// Fully resolved run settings. Built from defaults, then an optional config
/// file, then command-line overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub library_name: String,
    pub filter_policy: FilterPolicy,
    pub mode: RunMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_BUILD_FILE),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            library_name: DEFAULT_LIBRARY_NAME.to_string(),
            filter_policy: FilterPolicy::default(),
            mode: RunMode::default(),
        }
    }
}

impl Settings {
    pub fn apply_file(mut self, file: &TomlConfig) -> Self {
        if let Some(build_file) = &file.paths.build_file {
            self.input_path = PathBuf::from(build_file);
        }
        if let Some(output_file) = &file.paths.output_file {
            self.output_path = PathBuf::from(output_file);
        }
        if let Some(library_name) = &file.descriptor.library_name {
            self.library_name = library_name.clone();
        }
        self.filter_policy = self
            .filter_policy
            .with_extra(&file.filters.exclude_keywords, &file.filters.exclude_prefixes);
        self
    }
}

impl ConfigProvider for Settings {
    fn input_path(&self) -> &Path {
        &self.input_path
    }

    fn output_path(&self) -> &Path {
        &self.output_path
    }

    fn library_name(&self) -> &str {
        &self.library_name
    }

    fn filter_policy(&self) -> &FilterPolicy {
        &self.filter_policy
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_path("build_file", &self.input_path.to_string_lossy())?;
        validate_path("output_file", &self.output_path.to_string_lossy())?;
        validate_non_empty_string("library_name", &self.library_name)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.input_path, PathBuf::from("app/build.gradle"));
        assert_eq!(
            settings.output_path,
            PathBuf::from("GodotPlayGamesServices.gdap")
        );
        assert_eq!(settings.library_name, "GodotPlayGamesServices");
        assert_eq!(settings.mode, RunMode::Write);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_apply_file_overrides_defaults() {
        let file = TomlConfig::from_toml_str(
            r#"
[paths]
build_file = "plugin/build.gradle"

[descriptor]
library_name = "MyPlugin"

[filters]
exclude_keywords = ["leakcanary"]
"#,
        )
        .unwrap();

        let settings = Settings::default().apply_file(&file);
        assert_eq!(settings.input_path, PathBuf::from("plugin/build.gradle"));
        assert_eq!(
            settings.output_path,
            PathBuf::from("GodotPlayGamesServices.gdap")
        );
        assert_eq!(settings.library_name, "MyPlugin");
        assert!(!settings
            .filter_policy
            .allows("com.squareup.leakcanary:leakcanary-android:2.12"));
    }

    #[test]
    fn test_blank_library_name_is_invalid() {
        let settings = Settings {
            library_name: "  ".to_string(),
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }
}
