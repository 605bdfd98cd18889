pub mod descriptor;
pub mod engine;
pub mod extractor;
pub mod pipeline;

pub use crate::domain::model::{Descriptor, FilterPolicy, RunMode};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
