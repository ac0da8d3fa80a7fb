//! Filter category registry for the portal's data browser
//! Static key/label pairs plus flattening of nested workflow categories

use serde::{Deserialize, Serialize};

/// A filter category: the key used in requests and the label shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub key: &'static str,
    pub label: &'static str,
}

pub const ACCESSION: Category = Category {
    key: "accession",
    label: "Accession",
};
pub const ANNOTATION_STATUS: Category = Category {
    key: "annotationStatus",
    label: "Annotation Status",
};
pub const COVERAGE: Category = Category {
    key: "coverage",
    label: "Coverage",
};
pub const IS_REF: Category = Category {
    key: "isRef",
    label: "Is Ref",
};
pub const LEVEL: Category = Category {
    key: "level",
    label: "Level",
};
pub const SPECIES: Category = Category {
    key: "taxonomicLevelSpecies",
    label: "Species",
};
pub const STRAIN: Category = Category {
    key: "taxonomicLevelStrain",
    label: "Strain",
};
pub const TAXONOMIC_GROUP: Category = Category {
    key: "taxonomicGroup",
    label: "Taxonomic Group",
};
pub const TAXONOMY_ID: Category = Category {
    key: "ncbiTaxonomyId",
    label: "Taxonomy ID",
};

/// All filter categories, in display order.
pub const CATEGORIES: &[Category] = &[
    ACCESSION,
    ANNOTATION_STATUS,
    COVERAGE,
    IS_REF,
    LEVEL,
    SPECIES,
    STRAIN,
    TAXONOMIC_GROUP,
    TAXONOMY_ID,
];

/// Look up a category by its request key.
pub fn category_by_key(key: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.key == key)
}

/// A workflow as it appears in the catalog's nested category listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxonomy_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trs_id: Option<String>,
}

/// A named group of workflows from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowCategory {
    pub name: String,
    /// False marks the whole category as not yet launchable
    #[serde(default = "default_true")]
    pub show_coming_soon: bool,
    #[serde(default)]
    pub workflows: Vec<Workflow>,
}

fn default_true() -> bool {
    true
}

/// A workflow flattened out of its category, ready for tabular display.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowRow {
    pub name: String,
    pub category: String,
    pub taxonomy_id: String,
    pub disabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trs_id: Option<String>,
}

/// Flatten nested workflow categories into a single ordered list.
///
/// Each row carries the name of the category it came from. Workflows in a
/// category whose `show_coming_soon` is false are marked disabled, and a
/// missing taxonomy ID becomes "Unspecified".
pub fn flatten_workflows(categories: &[WorkflowCategory]) -> Vec<WorkflowRow> {
    let mut rows = Vec::new();

    for category in categories {
        for workflow in &category.workflows {
            rows.push(WorkflowRow {
                name: workflow.name.clone(),
                category: category.name.clone(),
                taxonomy_id: workflow
                    .taxonomy_id
                    .clone()
                    .unwrap_or_else(|| "Unspecified".to_string()),
                disabled: !category.show_coming_soon,
                trs_id: workflow.trs_id.clone(),
            });
        }
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workflow(name: &str, taxonomy_id: Option<&str>) -> Workflow {
        Workflow {
            name: name.to_string(),
            taxonomy_id: taxonomy_id.map(String::from),
            trs_id: None,
        }
    }

    #[test]
    fn test_category_lookup() {
        assert_eq!(category_by_key("accession"), Some(&ACCESSION));
        assert_eq!(category_by_key("ncbiTaxonomyId"), Some(&TAXONOMY_ID));
        assert_eq!(category_by_key("nope"), None);
    }

    #[test]
    fn test_category_keys_are_unique() {
        for (i, a) in CATEGORIES.iter().enumerate() {
            for b in &CATEGORIES[i + 1..] {
                assert_ne!(a.key, b.key);
            }
        }
    }

    #[test]
    fn test_flatten_tags_rows_with_category_name() {
        let categories = vec![
            WorkflowCategory {
                name: "Variant calling".to_string(),
                show_coming_soon: true,
                workflows: vec![workflow("A", Some("562")), workflow("B", None)],
            },
            WorkflowCategory {
                name: "Assembly".to_string(),
                show_coming_soon: true,
                workflows: vec![workflow("C", Some("9606"))],
            },
        ];

        let rows = flatten_workflows(&categories);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].category, "Variant calling");
        assert_eq!(rows[1].category, "Variant calling");
        assert_eq!(rows[2].category, "Assembly");
        assert_eq!(rows[0].taxonomy_id, "562");
        assert_eq!(rows[1].taxonomy_id, "Unspecified");
    }

    #[test]
    fn test_flatten_marks_coming_soon_categories_disabled() {
        let categories = vec![WorkflowCategory {
            name: "Transcriptomics".to_string(),
            show_coming_soon: false,
            workflows: vec![workflow("RNA-seq", None)],
        }];

        let rows = flatten_workflows(&categories);
        assert!(rows[0].disabled);
    }

    #[test]
    fn test_flatten_skips_empty_categories() {
        let categories = vec![WorkflowCategory {
            name: "Empty".to_string(),
            show_coming_soon: true,
            workflows: vec![],
        }];

        assert!(flatten_workflows(&categories).is_empty());
    }

    #[test]
    fn test_workflow_category_deserializes_with_defaults() {
        let json = r#"{ "name": "Variant calling" }"#;
        let category: WorkflowCategory = serde_json::from_str(json).unwrap();
        assert!(category.show_coming_soon);
        assert!(category.workflows.is_empty());
    }
}
