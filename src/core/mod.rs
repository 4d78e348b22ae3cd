pub mod etl;
pub mod merge;
pub mod parser;
pub mod pipeline;

pub use crate::domain::model::{CatalogEntry, MergeResult, SourceTexts, TleRecord};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
