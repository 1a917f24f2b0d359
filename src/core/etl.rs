use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs extract, transform and load in order. Any error aborts before the report is written.
    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting conversion run");

        // Extract
        let tokens = self.pipeline.extract().await?;
        tracing::info!("Extracted {} tokens", tokens.len());

        // Transform
        let report = self.pipeline.transform(tokens).await?;
        tracing::info!(
            "Converted {} roman and {} decimal values ({} rejected)",
            report.roman_to_decimal.len(),
            report.decimal_to_roman.len(),
            report.rejections.len()
        );

        // Load
        let output_path = self.pipeline.load(report).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
