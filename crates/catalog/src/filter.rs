use crate::table::{Column, FlatRow, FlatTable};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Op {
    Eq,
    Ne,
}

/// One comparison against a column value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub column: Column,
    pub op: Op,
    pub value: String,
}

impl Condition {
    pub fn matches(&self, row: &FlatRow) -> bool {
        let cell = row.get(self.column);
        match self.op {
            Op::Eq => cell == self.value,
            Op::Ne => cell != self.value,
        }
    }
}

/// Declarative row predicate: a single condition or a conjunction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Predicate {
    Cond(Condition),
    All(Vec<Predicate>),
}

impl Predicate {
    pub fn eq(column: Column, value: impl Into<String>) -> Self {
        Predicate::Cond(Condition {
            column,
            op: Op::Eq,
            value: value.into(),
        })
    }

    pub fn ne(column: Column, value: impl Into<String>) -> Self {
        Predicate::Cond(Condition {
            column,
            op: Op::Ne,
            value: value.into(),
        })
    }

    pub fn all(predicates: impl IntoIterator<Item = Predicate>) -> Self {
        Predicate::All(predicates.into_iter().collect())
    }

    pub fn matches(&self, row: &FlatRow) -> bool {
        match self {
            Predicate::Cond(condition) => condition.matches(row),
            Predicate::All(predicates) => predicates.iter().all(|p| p.matches(row)),
        }
    }
}

/// The fixed pipeline predicate: active models that produce text and support
/// on-demand inference.
pub fn active_text_on_demand() -> Predicate {
    Predicate::all([
        Predicate::eq(Column::ModelLifecycleStatus, "ACTIVE"),
        Predicate::eq(Column::OutputModalities, "TEXT"),
        Predicate::eq(Column::InferenceTypesSupported, "ON_DEMAND"),
    ])
}

impl FlatTable {
    /// Returns the rows satisfying `predicate`, in original order. The result
    /// is always a subset; filtering never adds or rewrites rows.
    pub fn filter(&self, predicate: &Predicate) -> FlatTable {
        FlatTable::new(
            self.rows()
                .iter()
                .filter(|row| predicate.matches(row))
                .cloned()
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(status: &str, output: &str, inference: &str) -> FlatRow {
        FlatRow {
            model_arn: "arn:aws:bedrock:us-west-2::foundation-model/test".to_string(),
            model_id: "test.model-v1".to_string(),
            model_name: "Test Model".to_string(),
            provider_name: "Test".to_string(),
            input_modalities: "TEXT".to_string(),
            output_modalities: output.to_string(),
            resp_streaming_supported: "true".to_string(),
            customisations_supported: String::new(),
            inference_types_supported: inference.to_string(),
            model_lifecycle_status: status.to_string(),
        }
    }

    #[test]
    fn should_keep_only_rows_matching_every_condition() {
        let table = FlatTable::new(vec![
            row("ACTIVE", "TEXT", "ON_DEMAND"),
            row("ACTIVE", "EMBEDDING", "ON_DEMAND"),
            row("LEGACY", "TEXT", "ON_DEMAND"),
            row("ACTIVE", "TEXT", "PROVISIONED"),
        ]);

        let filtered = table.filter(&active_text_on_demand());

        assert_eq!(filtered.len(), 1);
        let survivor = &filtered.rows()[0];
        assert_eq!(survivor.model_lifecycle_status, "ACTIVE");
        assert_eq!(survivor.output_modalities, "TEXT");
        assert_eq!(survivor.inference_types_supported, "ON_DEMAND");
    }

    #[test]
    fn should_return_a_strict_subset() {
        let table = FlatTable::new(vec![
            row("ACTIVE", "TEXT", "ON_DEMAND"),
            row("LEGACY", "TEXT", "ON_DEMAND"),
        ]);

        let filtered = table.filter(&active_text_on_demand());

        assert!(filtered.len() <= table.len());
        for kept in filtered.rows() {
            assert!(table.rows().contains(kept));
        }
    }

    #[test]
    fn should_preserve_row_order() {
        let mut first = row("ACTIVE", "TEXT", "ON_DEMAND");
        first.model_id = "first".to_string();
        let mut second = row("ACTIVE", "TEXT", "ON_DEMAND");
        second.model_id = "second".to_string();
        let table = FlatTable::new(vec![first, row("LEGACY", "TEXT", "ON_DEMAND"), second]);

        let filtered = table.filter(&active_text_on_demand());

        let ids: Vec<&str> = filtered.rows().iter().map(|r| r.model_id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second"]);
    }

    #[test]
    fn should_support_negated_conditions() {
        let table = FlatTable::new(vec![
            row("ACTIVE", "TEXT", "ON_DEMAND"),
            row("LEGACY", "TEXT", "ON_DEMAND"),
        ]);

        let filtered = table.filter(&Predicate::ne(Column::ModelLifecycleStatus, "LEGACY"));

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.rows()[0].model_lifecycle_status, "ACTIVE");
    }

    #[test]
    fn should_treat_an_empty_conjunction_as_match_all() {
        let table = FlatTable::new(vec![row("ACTIVE", "TEXT", "ON_DEMAND")]);
        let filtered = table.filter(&Predicate::all([]));
        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn should_return_an_empty_table_when_nothing_matches() {
        let table = FlatTable::new(vec![row("LEGACY", "IMAGE", "PROVISIONED")]);
        let filtered = table.filter(&active_text_on_demand());
        assert!(filtered.is_empty());
    }

    #[test]
    fn should_filter_an_empty_table_to_an_empty_table() {
        let table = FlatTable::default();
        let filtered = table.filter(&active_text_on_demand());
        assert!(filtered.is_empty());
    }
}
