use crate::table::{FlatRow, FlatTable, ModelSummary};

/// Flattens the nested catalog response into the ten-column table.
///
/// Four list-valued columns are unrolled per record: output modality,
/// streaming support, inference type and lifecycle status. Unrolling is the
/// full cross-product of the four lists, so a record with two output
/// modalities and one value everywhere else yields two rows. An empty list
/// still contributes one unrolled value (an empty cell) so no record ever
/// disappears during normalization. Rows come out in input order.
pub fn normalize(summaries: &[ModelSummary]) -> FlatTable {
    let mut rows = Vec::new();

    for summary in summaries {
        let output_modalities = unroll(&summary.output_modalities);
        let streaming = unroll_flags(&summary.response_streaming_supported);
        let inference_types = unroll(&summary.inference_types_supported);
        let statuses = unroll(&summary.lifecycle_status);

        let input_modalities = summary.input_modalities.join(",");
        let customizations = summary.customizations_supported.join(",");

        for output_modality in &output_modalities {
            for streaming_flag in &streaming {
                for inference_type in &inference_types {
                    for status in &statuses {
                        rows.push(FlatRow {
                            model_arn: summary.model_arn.clone(),
                            model_id: summary.model_id.clone(),
                            model_name: summary.model_name.clone(),
                            provider_name: summary.provider_name.clone(),
                            input_modalities: input_modalities.clone(),
                            output_modalities: output_modality.clone(),
                            resp_streaming_supported: streaming_flag.clone(),
                            customisations_supported: customizations.clone(),
                            inference_types_supported: inference_type.clone(),
                            model_lifecycle_status: status.clone(),
                        });
                    }
                }
            }
        }
    }

    FlatTable::new(rows)
}

fn unroll(values: &[String]) -> Vec<String> {
    if values.is_empty() {
        vec![String::new()]
    } else {
        values.to_vec()
    }
}

fn unroll_flags(values: &[bool]) -> Vec<String> {
    if values.is_empty() {
        vec![String::new()]
    } else {
        values.iter().map(|v| v.to_string()).collect()
    }
}
