use crate::errors::CatalogError;
use crate::table::ModelSummary;
use aws_sdk_bedrock::types::{FoundationModelSummary, InferenceType, ModelModality};
use aws_sdk_bedrock::Client;
use tracing::{error, info};

/// Optional request-side filters, mirroring the service parameters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogQuery {
    pub by_provider: Option<String>,
    pub by_output_modality: Option<String>,
    pub by_inference_type: Option<String>,
}

/// Issues one `ListFoundationModels` call and maps the response into our own
/// summary records. Faults are logged once and propagated unchanged; there is
/// no retry and no partial-result recovery.
pub async fn fetch_foundation_models(
    client: &Client,
    query: &CatalogQuery,
) -> Result<Vec<ModelSummary>, CatalogError> {
    let response = client
        .list_foundation_models()
        .set_by_provider(query.by_provider.clone())
        .set_by_output_modality(query.by_output_modality.as_deref().map(ModelModality::from))
        .set_by_inference_type(query.by_inference_type.as_deref().map(InferenceType::from))
        .send()
        .await
        .map_err(|err| {
            let err = CatalogError::from_sdk(err);
            error!("list_foundation_models failed: {err}");
            err
        })?;

    let summaries: Vec<ModelSummary> = response
        .model_summaries()
        .iter()
        .map(from_sdk_summary)
        .collect();
    info!("catalog returned {} model summaries", summaries.len());
    Ok(summaries)
}

fn from_sdk_summary(summary: &FoundationModelSummary) -> ModelSummary {
    ModelSummary {
        model_arn: summary.model_arn().to_string(),
        model_id: summary.model_id().to_string(),
        model_name: summary.model_name().unwrap_or_default().to_string(),
        provider_name: summary.provider_name().unwrap_or_default().to_string(),
        input_modalities: modality_names(summary.input_modalities()),
        output_modalities: modality_names(summary.output_modalities()),
        // Scalar wire fields become singleton lists; absent ones stay empty
        // and surface as empty cells after normalization.
        response_streaming_supported: summary.response_streaming_supported().into_iter().collect(),
        customizations_supported: summary
            .customizations_supported()
            .iter()
            .map(|c| c.as_str().to_string())
            .collect(),
        inference_types_supported: summary
            .inference_types_supported()
            .iter()
            .map(|t| t.as_str().to_string())
            .collect(),
        lifecycle_status: summary
            .model_lifecycle()
            .map(|lifecycle| vec![lifecycle.status().as_str().to_string()])
            .unwrap_or_default(),
    }
}

fn modality_names(values: &[ModelModality]) -> Vec<String> {
    values.iter().map(|m| m.as_str().to_string()).collect()
}
