use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::common::validation::require;
use crate::domain::common::{RecordId, ValidationError};
use crate::shared::list_state::{cmp_ci, contains_ci, Searchable, Sortable};
use crate::shared::resource::Resource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub display_order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Category {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            description: String::new(),
            image_url: String::new(),
            display_order: 0,
            is_active: true,
        }
    }
}

impl Resource for Category {
    const ENDPOINT: &'static str = "/categories";
    const LABEL: &'static str = "category";

    fn id(&self) -> Option<&RecordId> {
        self.id.as_ref()
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name, "Category name")?;
        if self.display_order < 0 {
            return Err(ValidationError::new(
                "display_order",
                "Display order cannot be negative",
            ));
        }
        Ok(())
    }
}

impl Searchable for Category {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.name, filter) || contains_ci(&self.description, filter)
    }
}

impl Sortable for Category {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => cmp_ci(&self.name, &other.name),
            "is_active" => self.is_active.cmp(&other.is_active),
            _ => self.display_order.cmp(&other.display_order),
        }
    }
}

/// Lookup helper for screens that show a category name next to an id.
pub fn category_name(categories: &[Category], id: Option<&RecordId>) -> String {
    id.and_then(|id| categories.iter().find(|c| c.id.as_ref() == Some(id)))
        .map(|c| c.name.clone())
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_display_order_is_rejected() {
        let category = Category {
            name: "Audio".to_string(),
            display_order: -1,
            ..Category::default()
        };
        assert_eq!(category.validate().unwrap_err().field, "display_order");
    }

    #[test]
    fn test_category_name_lookup() {
        let categories = vec![Category {
            id: Some(RecordId::Int(4)),
            name: "Audio".to_string(),
            ..Category::default()
        }];
        assert_eq!(category_name(&categories, Some(&RecordId::Int(4))), "Audio");
        assert_eq!(category_name(&categories, Some(&RecordId::Int(5))), "-");
        assert_eq!(category_name(&categories, None), "-");
    }
}
