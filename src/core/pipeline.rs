use crate::core::descriptor::render;
use crate::core::extractor::GradleExtractor;
use crate::core::{ConfigProvider, Descriptor, Pipeline, Result, Storage};
use crate::utils::error::GdapError;
use std::path::Path;

pub struct GdapPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    extractor: GradleExtractor,
}

impl<S: Storage, C: ConfigProvider> GdapPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Result<Self> {
        Ok(Self {
            storage,
            config,
            extractor: GradleExtractor::new()?,
        })
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for GdapPipeline<S, C> {
    fn extract(&self) -> Result<Vec<String>> {
        let path = self.config.input_path();
        tracing::debug!("Reading build file: {}", path.display());
        let content = self.storage.read_to_string(path)?;

        match self.extractor.declared(&content) {
            Some(declared) => Ok(declared),
            None => {
                println!(
                    "Error: Could not find dependencies block in {}",
                    path.display()
                );
                Ok(Vec::new())
            }
        }
    }

    fn transform(&self, declared: Vec<String>) -> Result<Descriptor> {
        let declared_count = declared.len();
        let remote = self.config.filter_policy().apply(declared);
        tracing::debug!(
            "Kept {} of {} declared dependencies",
            remote.len(),
            declared_count
        );
        Ok(Descriptor::new(self.config.library_name(), remote))
    }

    fn load(&self, descriptor: &Descriptor) -> Result<String> {
        let path = self.config.output_path();
        let content = render(descriptor);
        self.storage.write_file(path, content.as_bytes())?;
        Ok(path.display().to_string())
    }

    fn check(&self, descriptor: &Descriptor) -> Result<bool> {
        let path = self.config.output_path();
        let existing = match self.storage.read_to_string(path) {
            Ok(existing) => existing,
            Err(GdapError::FileNotFound { .. }) => {
                tracing::debug!("{} does not exist yet", path.display());
                return Ok(false);
            }
            Err(e) => return Err(e),
        };
        Ok(existing == render(descriptor))
    }

    fn input_path(&self) -> &Path {
        self.config.input_path()
    }

    fn output_path(&self) -> &Path {
        self.config.output_path()
    }
}
