use crate::config::toml_config::TomlConfig;
use crate::config::Settings;
use crate::domain::model::RunMode;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "gdap-sync")]
#[command(about = "Generate a Godot .gdap plugin descriptor from build.gradle dependencies")]
pub struct CliConfig {
    /// Build file to read [default: app/build.gradle]
    pub build_file: Option<String>,

    /// Descriptor file to write [default: GodotPlayGamesServices.gdap]
    pub output_file: Option<String>,

    /// Library name written to the descriptor [default: GodotPlayGamesServices]
    #[arg(short, long)]
    pub library_name: Option<String>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the descriptor without writing it
    #[arg(long, conflicts_with = "check")]
    pub dry_run: bool,

    /// Fail when the descriptor on disk is out of date
    #[arg(long)]
    pub check: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliConfig {
    pub fn mode(&self) -> RunMode {
        if self.check {
            RunMode::Check
        } else if self.dry_run {
            RunMode::DryRun
        } else {
            RunMode::Write
        }
    }

    /// Defaults, then the config file (if any), then command-line values.
    pub fn into_settings(self) -> Result<Settings> {
        let mut settings = Settings::default();

        if let Some(path) = &self.config {
            tracing::debug!("Loading configuration from: {}", path.display());
            let file = TomlConfig::from_file(path)?;
            file.validate()?;
            settings = settings.apply_file(&file);
        }

        settings.mode = self.mode();
        if let Some(build_file) = self.build_file {
            settings.input_path = PathBuf::from(build_file);
        }
        if let Some(output_file) = self.output_file {
            settings.output_path = PathBuf::from(output_file);
        }
        if let Some(library_name) = self.library_name {
            settings.library_name = library_name;
        }

        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_positional_arguments() {
        let cli = CliConfig::parse_from(["gdap-sync", "plugin/build.gradle", "out/Plugin.gdap"]);
        let settings = cli.into_settings().unwrap();

        assert_eq!(settings.input_path, PathBuf::from("plugin/build.gradle"));
        assert_eq!(settings.output_path, PathBuf::from("out/Plugin.gdap"));
        assert_eq!(settings.library_name, "GodotPlayGamesServices");
        assert_eq!(settings.mode, RunMode::Write);
    }

    #[test]
    fn test_no_arguments_uses_defaults() {
        let settings = CliConfig::parse_from(["gdap-sync"]).into_settings().unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_mode_flags() {
        assert_eq!(
            CliConfig::parse_from(["gdap-sync", "--dry-run"]).mode(),
            RunMode::DryRun
        );
        assert_eq!(
            CliConfig::parse_from(["gdap-sync", "--check"]).mode(),
            RunMode::Check
        );
        assert!(CliConfig::try_parse_from(["gdap-sync", "--check", "--dry-run"]).is_err());
    }

    #[test]
    fn test_command_line_beats_config_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(
                br#"
[paths]
build_file = "from-file/build.gradle"
output_file = "from-file/Plugin.gdap"

[descriptor]
library_name = "FilePlugin"
"#,
            )
            .unwrap();

        let config_path = temp_file.path().to_str().unwrap();
        let cli = CliConfig::parse_from([
            "gdap-sync",
            "cli/build.gradle",
            "--config",
            config_path,
            "--library-name",
            "CliPlugin",
        ]);
        let settings = cli.into_settings().unwrap();

        assert_eq!(settings.input_path, PathBuf::from("cli/build.gradle"));
        assert_eq!(settings.output_path, PathBuf::from("from-file/Plugin.gdap"));
        assert_eq!(settings.library_name, "CliPlugin");
    }

    #[test]
    fn test_empty_library_name_is_rejected() {
        let cli = CliConfig::parse_from(["gdap-sync", "--library-name", ""]);
        assert!(cli.into_settings().is_err());
    }
}
