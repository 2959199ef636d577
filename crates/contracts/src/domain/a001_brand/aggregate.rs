use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::common::validation::require;
use crate::domain::common::{RecordId, ValidationError};
use crate::shared::list_state::{cmp_ci, contains_ci, Searchable, Sortable};
use crate::shared::resource::Resource;

/// Brand, linked to any number of categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub logo_url: String,
    #[serde(default)]
    pub website_url: String,
    #[serde(default)]
    pub category_ids: Vec<RecordId>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default, skip_serializing)]
    pub created_at: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Default for Brand {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            description: String::new(),
            logo_url: String::new(),
            website_url: String::new(),
            category_ids: Vec::new(),
            is_active: true,
            created_at: None,
        }
    }
}

impl Brand {
    pub fn toggle_category(&mut self, id: RecordId, checked: bool) {
        if checked {
            if !self.category_ids.contains(&id) {
                self.category_ids.push(id);
            }
        } else {
            self.category_ids.retain(|c| c != &id);
        }
    }
}

impl Resource for Brand {
    const ENDPOINT: &'static str = "/brands";
    const LABEL: &'static str = "brand";

    fn id(&self) -> Option<&RecordId> {
        self.id.as_ref()
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name, "Brand name")
    }
}

impl Searchable for Brand {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.name, filter) || contains_ci(&self.description, filter)
    }
}

impl Sortable for Brand {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "is_active" => self.is_active.cmp(&other.is_active),
            "created_at" => self.created_at.cmp(&other.created_at),
            "categories" => self.category_ids.len().cmp(&other.category_ids.len()),
            _ => cmp_ci(&self.name, &other.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name_is_rejected() {
        let brand = Brand {
            name: "  ".to_string(),
            ..Brand::default()
        };
        let err = brand.validate().unwrap_err();
        assert_eq!(err.field, "name");
    }

    #[test]
    fn test_toggle_category_has_no_duplicates() {
        let mut brand = Brand::default();
        brand.toggle_category(RecordId::Int(1), true);
        brand.toggle_category(RecordId::Int(1), true);
        brand.toggle_category(RecordId::Int(2), true);
        brand.toggle_category(RecordId::Int(1), false);
        assert_eq!(brand.category_ids, vec![RecordId::Int(2)]);
    }

    #[test]
    fn test_payload_shape() {
        let brand = Brand {
            name: "Acme".to_string(),
            category_ids: vec![RecordId::Int(3)],
            ..Brand::default()
        };
        let json = serde_json::to_value(&brand).unwrap();
        assert_eq!(json["name"], "Acme");
        assert_eq!(json["categoryIds"], serde_json::json!([3]));
        assert_eq!(json["isActive"], true);
        assert!(json.get("id").is_none());
    }
}
