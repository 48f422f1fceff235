pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod report;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::{LocalStorage, SearchClient};
pub use core::{etl::EtlEngine, pipeline::SearchPipeline, CourseEngine, EngineSettings};
pub use domain::model::{CourseRecord, LocRank, RawItem, SearchResponse, Status};
pub use utils::error::{EtlError, Result};
