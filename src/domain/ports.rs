use crate::domain::model::{RawItem, TransformResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn search_endpoint(&self) -> &str;
    fn api_key(&self) -> &str;
    fn engine_id(&self) -> &str;
    fn query(&self) -> &str;
    fn max_results(&self) -> usize;
    fn exchange_rate(&self) -> f64;
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[String];
    /// Record ids to export in the CSV report; empty exports everything.
    fn report_selection(&self) -> &[String];
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<RawItem>>;
    async fn transform(&self, data: Vec<RawItem>) -> Result<TransformResult>;
    async fn load(&self, result: TransformResult) -> Result<String>;
}
