use crate::utils::error::{GdapError, Result};
use crate::utils::validation::{
    validate_non_empty_entries, validate_non_empty_string, validate_path, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TomlConfig {
    pub paths: PathsConfig,
    pub descriptor: DescriptorConfig,
    pub filters: FiltersConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    pub build_file: Option<String>,
    pub output_file: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DescriptorConfig {
    pub library_name: Option<String>,
}

/// Extra exclusion rules, added on top of the built-in ones.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FiltersConfig {
    pub exclude_keywords: Vec<String>,
    pub exclude_prefixes: Vec<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| match source.kind() {
            std::io::ErrorKind::NotFound => GdapError::FileNotFound {
                path: path.to_path_buf(),
            },
            _ => GdapError::ReadError {
                path: path.to_path_buf(),
                source,
            },
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| GdapError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Expands `${VAR}` from the environment; unset variables stay verbatim.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(build_file) = &self.paths.build_file {
            validate_path("paths.build_file", build_file)?;
        }
        if let Some(output_file) = &self.paths.output_file {
            validate_path("paths.output_file", output_file)?;
        }
        if let Some(library_name) = &self.descriptor.library_name {
            validate_non_empty_string("descriptor.library_name", library_name)?;
        }
        validate_non_empty_entries("filters.exclude_keywords", &self.filters.exclude_keywords)?;
        validate_non_empty_entries("filters.exclude_prefixes", &self.filters.exclude_prefixes)?;
        Ok(())
    }
}
