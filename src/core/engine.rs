use crate::core::descriptor::render;
use crate::core::{Descriptor, Pipeline, Result, RunMode};
use crate::utils::error::GdapError;

const RULE_WIDTH: usize = 50;

pub struct GenerationEngine<P: Pipeline> {
    pipeline: P,
    mode: RunMode,
}

impl<P: Pipeline> GenerationEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::with_mode(pipeline, RunMode::Write)
    }

    pub fn with_mode(pipeline: P, mode: RunMode) -> Self {
        Self { pipeline, mode }
    }

    pub fn run(&self) -> Result<Descriptor> {
        println!(
            "Reading dependencies from: {}",
            self.pipeline.input_path().display()
        );

        // An unreadable build file ends up exactly like an empty one.
        let declared = match self.pipeline.extract() {
            Ok(declared) => declared,
            Err(e) => {
                tracing::debug!("Extraction failed ({:?}): {}", e.category(), e);
                println!("{}", e.user_friendly_message());
                Vec::new()
            }
        };

        let descriptor = self.pipeline.transform(declared)?;
        if descriptor.remote.is_empty() {
            return Err(GdapError::NoDependencies);
        }

        println!("Found {} dependencies:", descriptor.remote.len());
        for dep in &descriptor.remote {
            println!("  - {}", dep);
        }

        match self.mode {
            RunMode::Write => {
                let output_path = self.pipeline.load(&descriptor)?;
                println!("\nSuccessfully generated: {}", output_path);
                println!("\nGenerated content:");
                println!("{}", "-".repeat(RULE_WIDTH));
                println!("{}", render(&descriptor));
            }
            RunMode::DryRun => {
                tracing::info!("Dry run, not writing {}", self.pipeline.output_path().display());
                println!("\nDry run, would write: {}", self.pipeline.output_path().display());
                println!("{}", "-".repeat(RULE_WIDTH));
                println!("{}", render(&descriptor));
            }
            RunMode::Check => {
                if !self.pipeline.check(&descriptor)? {
                    return Err(GdapError::OutOfSync {
                        path: self.pipeline.output_path().to_path_buf(),
                    });
                }
                println!(
                    "\n{} is up to date",
                    self.pipeline.output_path().display()
                );
            }
        }

        Ok(descriptor)
    }
}
