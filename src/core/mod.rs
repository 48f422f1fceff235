pub mod assembler;
pub mod engine;
pub mod etl;
pub mod extractors;
pub mod filter;
pub mod pipeline;
pub mod ranker;
pub mod rules;
pub mod sorter;
pub mod tables;

pub use crate::domain::model::{CourseRecord, RawItem, SearchResponse, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
pub use engine::{CourseEngine, EngineSettings};
