use crate::core::Pipeline;
use crate::utils::error::Result;

/// Runs extract, transform and load once, in order. The first error ends the run.
pub struct MergeEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> MergeEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting merge");

        let sources = self.pipeline.extract().await?;
        tracing::debug!(
            "Extracted {} bytes of catalog and {} bytes of single record",
            sources.bulk.len(),
            sources.single.len()
        );

        let result = self.pipeline.transform(sources).await?;
        tracing::info!(
            "Merged catalog holds {} entries ({} replaced by NORAD {})",
            result.entries.len(),
            result.skipped.len(),
            result.single_id
        );

        let output_path = self.pipeline.load(result).await?;
        tracing::info!("Wrote merged file to {}", output_path);

        Ok(output_path)
    }
}
