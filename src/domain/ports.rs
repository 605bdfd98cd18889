use crate::domain::model::{Descriptor, FilterPolicy};
use crate::utils::error::Result;
use std::path::Path;

pub trait Storage {
    fn read_to_string(&self, path: &Path) -> Result<String>;
    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &Path;
    fn output_path(&self) -> &Path;
    fn library_name(&self) -> &str;
    fn filter_policy(&self) -> &FilterPolicy;
}

pub trait Pipeline {
    /// Raw `implementation` literals found in the build file, unfiltered.
    fn extract(&self) -> Result<Vec<String>>;
    fn transform(&self, declared: Vec<String>) -> Result<Descriptor>;
    fn load(&self, descriptor: &Descriptor) -> Result<String>;
    /// True when the descriptor on disk already matches `descriptor`.
    fn check(&self, descriptor: &Descriptor) -> Result<bool>;

    fn input_path(&self) -> &Path;
    fn output_path(&self) -> &Path;
}
