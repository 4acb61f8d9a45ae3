//! The nested literal dataset declared by the walkthrough sample.
//!
//! The dataset exists for its shape: a record holding an ordered collection
//! of sub-records gives the editor under test a nesting depth to indent
//! against. It is constructed on every emission and never printed by the
//! walkthrough itself; `fpack data` exposes it as JSON.

use serde::{Deserialize, Serialize};

/// Top-level nested record.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Dataset {
    pub name: String,
    pub items: Vec<DatasetItem>,
}

/// One entry in the dataset's ordered collection.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DatasetItem {
    pub id: u32,
    pub value: String,
}

/// The canonical instance declared inline by the walkthrough.
pub fn sample_dataset() -> Dataset {
    Dataset {
        name: "Test".to_string(),
        items: vec![
            DatasetItem {
                id: 1,
                value: "first".to_string(),
            },
            DatasetItem {
                id: 2,
                value: "second".to_string(),
            },
        ],
    }
}

/// Validate dataset well-formedness, returning errors if any.
pub fn validate_dataset(dataset: &Dataset) -> Option<Vec<String>> {
    let mut errors = Vec::new();
    if dataset.name.trim().is_empty() {
        errors.push("name is required".to_string());
    }
    let mut last_id = None;
    for (idx, item) in dataset.items.iter().enumerate() {
        if item.value.trim().is_empty() {
            errors.push(format!("items[{idx}].value is required"));
        }
        if let Some(last_id) = last_id {
            if item.id <= last_id {
                errors.push(format!(
                    "items[{idx}].id must be greater than {last_id} (got {})",
                    item.id
                ));
            }
        }
        last_id = Some(item.id);
    }

    if errors.is_empty() {
        None
    } else {
        Some(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_dataset_is_well_formed() {
        let dataset = sample_dataset();
        assert_eq!(dataset.name, "Test");
        assert_eq!(dataset.items.len(), 2);
        assert!(validate_dataset(&dataset).is_none());
    }

    #[test]
    fn canonical_dataset_round_trips_through_json() {
        let dataset = sample_dataset();
        let json = serde_json::to_string_pretty(&dataset).expect("serialize dataset");
        let parsed: Dataset = serde_json::from_str(&json).expect("parse dataset");
        assert_eq!(parsed, dataset);
    }

    #[test]
    fn validation_reports_every_problem() {
        let dataset = Dataset {
            name: " ".to_string(),
            items: vec![
                DatasetItem {
                    id: 2,
                    value: String::new(),
                },
                DatasetItem {
                    id: 2,
                    value: "dup".to_string(),
                },
            ],
        };
        let errors = validate_dataset(&dataset).expect("expected errors");
        assert_eq!(errors.len(), 3);
        assert!(errors[0].contains("name"));
        assert!(errors[1].contains("items[0].value"));
        assert!(errors[2].contains("items[1].id"));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let json = r#"{"name":"Test","items":[],"extra":true}"#;
        assert!(serde_json::from_str::<Dataset>(json).is_err());
    }
}
