use crate::adapters::http::HttpFetcher;
use crate::core::merge::{merge, render};
use crate::core::parser::{parse_catalog, parse_single};
use crate::core::{ConfigProvider, MergeResult, Pipeline, SourceTexts, Storage};
use crate::utils::error::Result;

/// Bulk catalog + single record → one deduplicated TLE file.
pub struct MergePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    fetcher: HttpFetcher,
}

impl<S: Storage, C: ConfigProvider> MergePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Result<Self> {
        let fetcher = HttpFetcher::new(config.timeout())?;
        Ok(Self {
            storage,
            config,
            fetcher,
        })
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for MergePipeline<S, C> {
    async fn extract(&self) -> Result<SourceTexts> {
        tracing::info!("Fetching bulk catalog from {}", self.config.bulk_url());
        let bulk = self.fetcher.fetch_text(self.config.bulk_url()).await?;

        tracing::info!("Fetching single record from {}", self.config.single_url());
        let single = self.fetcher.fetch_text(self.config.single_url()).await?;

        Ok(SourceTexts { bulk, single })
    }

    async fn transform(&self, sources: SourceTexts) -> Result<MergeResult> {
        let single = parse_single(&sources.single, self.config.fallback_name())?;
        let single_id = single.norad_id();
        tracing::info!("Detected single record NORAD ID: {}", single_id);

        let bulk = parse_catalog(&sources.bulk);
        tracing::debug!("Parsed {} catalog entries", bulk.len());

        let (entries, skipped) = merge(bulk, single);
        let output_text = render(&entries);

        Ok(MergeResult {
            entries,
            single_id,
            skipped,
            output_text,
        })
    }

    async fn load(&self, result: MergeResult) -> Result<String> {
        let path = self.config.output_path();

        tracing::debug!(
            "Writing {} entries ({} bytes) to {}",
            result.entries.len(),
            result.output_text.len(),
            path
        );
        self.storage
            .write_file(path, result.output_text.as_bytes())
            .await?;

        Ok(self.storage.resolve(path).display().to_string())
    }
}
