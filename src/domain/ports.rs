use crate::domain::model::{ConversionReport, InputToken, RangePolicy, RejectionPolicy};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn rejection_policy(&self) -> RejectionPolicy;
    fn range_policy(&self) -> RangePolicy;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<InputToken>>;
    async fn transform(&self, data: Vec<InputToken>) -> Result<ConversionReport>;
    async fn load(&self, report: ConversionReport) -> Result<String>;
}
