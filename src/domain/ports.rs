use crate::domain::model::{MergeResult, SourceTexts};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;
use std::time::Duration;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;

    /// Location a relative `path` ends up at, for reporting.
    fn resolve(&self, path: &str) -> PathBuf;
}

pub trait ConfigProvider: Send + Sync {
    fn bulk_url(&self) -> &str;
    fn single_url(&self) -> &str;
    fn output_path(&self) -> &str;
    fn timeout(&self) -> Duration;
    fn fallback_name(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<SourceTexts>;
    async fn transform(&self, sources: SourceTexts) -> Result<MergeResult>;
    async fn load(&self, result: MergeResult) -> Result<String>;
}
