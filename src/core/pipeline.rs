use crate::core::{ConfigProvider, ConversionReport, InputToken, Pipeline, Storage};
use crate::domain::model::{Conversion, RangePolicy, Rejection, RejectionReason};
use crate::domain::services::{
    classify, decimal_to_roman, roman_to_decimal, ReportFormatter, Validator,
};
use crate::utils::error::{EtlError, Result};

pub struct NumeralPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> NumeralPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    /// 解析輸入內容，必須是 JSON 陣列
    pub fn parse_tokens(content: &[u8]) -> Result<Vec<InputToken>> {
        let json_data: serde_json::Value = serde_json::from_slice(content)?;

        match json_data {
            serde_json::Value::Array(items) => {
                Ok(items.into_iter().map(InputToken::from_json).collect())
            }
            other => Err(EtlError::ProcessingError {
                message: format!("expected a JSON array, found {}", json_kind(&other)),
            }),
        }
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for NumeralPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<InputToken>> {
        tracing::debug!("Reading input from: {}", self.config.input_path());
        let content = self.storage.read_file(self.config.input_path()).await?;
        tracing::debug!("Read {} bytes", content.len());

        Self::parse_tokens(&content)
    }

    async fn transform(&self, data: Vec<InputToken>) -> Result<ConversionReport> {
        let validator = Validator::new(self.config.rejection_policy());
        let validated = validator.validate(classify(data));

        let mut report = ConversionReport {
            rejections: validated.rejections,
            ..Default::default()
        };

        for roman in validated.roman {
            let value = roman_to_decimal(&roman)?;
            report.roman_to_decimal.push(Conversion {
                input: roman,
                output: value,
            });
        }

        for (number, position) in validated.arabic.into_iter().zip(validated.arabic_positions) {
            match decimal_to_roman(number) {
                Ok(roman) => report.decimal_to_roman.push(Conversion {
                    input: number,
                    output: roman,
                }),
                Err(EtlError::RangeError { .. })
                    if self.config.range_policy() == RangePolicy::Skip =>
                {
                    // 超出範圍視為拒絕，不中斷整個流程
                    let rejection = Rejection::new(
                        position,
                        InputToken::Decimal(number),
                        RejectionReason::OutOfRange,
                    );
                    validator.log_rejection(&rejection);
                    report.rejections.push(rejection);
                }
                Err(e) => return Err(e),
            }
        }

        report.rejections.sort_by_key(|r| r.position);
        Ok(report)
    }

    async fn load(&self, report: ConversionReport) -> Result<String> {
        let formatter = ReportFormatter::new(self.config.rejection_policy());
        let text = formatter.format(&report);

        tracing::info!("Creating report file");
        self.storage
            .write_file(self.config.output_path(), text.as_bytes())
            .await?;
        tracing::info!("Report file created");

        Ok(self.config.output_path().to_string())
    }
}
