use serde::{Deserialize, Serialize};

/// One foundation-model record as returned by the catalog service, with the
/// list-shaped fields kept list-shaped. The fetcher wraps the scalar
/// streaming flag and lifecycle status into singleton lists so the
/// normalizer sees four uniformly list-valued columns.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ModelSummary {
    pub model_arn: String,
    pub model_id: String,
    pub model_name: String,
    pub provider_name: String,
    pub input_modalities: Vec<String>,
    pub output_modalities: Vec<String>,
    pub response_streaming_supported: Vec<bool>,
    pub customizations_supported: Vec<String>,
    pub inference_types_supported: Vec<String>,
    pub lifecycle_status: Vec<String>,
}

/// The fixed ten-column header of the flattened table, in output order.
pub const HEADER: [&str; 10] = [
    "model_arn",
    "model_id",
    "model_name",
    "provider_name",
    "input_modalities",
    "output_modalities",
    "resp_streaming_supported",
    "customisations_supported",
    "inference_types_supported",
    "model_lifecycle_status",
];

/// Column reference used by filter predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Column {
    ModelArn,
    ModelId,
    ModelName,
    ProviderName,
    InputModalities,
    OutputModalities,
    RespStreamingSupported,
    CustomisationsSupported,
    InferenceTypesSupported,
    ModelLifecycleStatus,
}

impl Column {
    pub fn name(&self) -> &'static str {
        match self {
            Column::ModelArn => "model_arn",
            Column::ModelId => "model_id",
            Column::ModelName => "model_name",
            Column::ProviderName => "provider_name",
            Column::InputModalities => "input_modalities",
            Column::OutputModalities => "output_modalities",
            Column::RespStreamingSupported => "resp_streaming_supported",
            Column::CustomisationsSupported => "customisations_supported",
            Column::InferenceTypesSupported => "inference_types_supported",
            Column::ModelLifecycleStatus => "model_lifecycle_status",
        }
    }
}

/// One row of the flattened table. Every cell is a string: booleans render
/// as `true`/`false`, and the non-exploded list cells join their elements
/// with `,`. Field names double as the CSV header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatRow {
    pub model_arn: String,
    pub model_id: String,
    pub model_name: String,
    pub provider_name: String,
    pub input_modalities: String,
    pub output_modalities: String,
    pub resp_streaming_supported: String,
    pub customisations_supported: String,
    pub inference_types_supported: String,
    pub model_lifecycle_status: String,
}

impl FlatRow {
    pub fn get(&self, column: Column) -> &str {
        match column {
            Column::ModelArn => &self.model_arn,
            Column::ModelId => &self.model_id,
            Column::ModelName => &self.model_name,
            Column::ProviderName => &self.provider_name,
            Column::InputModalities => &self.input_modalities,
            Column::OutputModalities => &self.output_modalities,
            Column::RespStreamingSupported => &self.resp_streaming_supported,
            Column::CustomisationsSupported => &self.customisations_supported,
            Column::InferenceTypesSupported => &self.inference_types_supported,
            Column::ModelLifecycleStatus => &self.model_lifecycle_status,
        }
    }
}

/// The flattened catalog: ordered rows under the fixed header. Rows are
/// stored contiguously, so positions always run from zero without an index
/// column.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FlatTable {
    rows: Vec<FlatRow>,
}

impl FlatTable {
    pub fn new(rows: Vec<FlatRow>) -> Self {
        Self { rows }
    }

    pub fn header() -> &'static [&'static str; 10] {
        &HEADER
    }

    pub fn rows(&self) -> &[FlatRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
