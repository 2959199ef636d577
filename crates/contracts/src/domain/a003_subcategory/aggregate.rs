use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::common::images::GalleryImage;
use crate::domain::common::validation::require;
use crate::domain::common::{RecordId, ValidationError};
use crate::shared::list_state::{cmp_ci, contains_ci, Searchable, Sortable};
use crate::shared::resource::Resource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subcategory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub category_id: Option<RecordId>,
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
    #[serde(default, skip_serializing)]
    pub images: Vec<SubcategoryImage>,
}

fn default_true() -> bool {
    true
}

impl Default for Subcategory {
    fn default() -> Self {
        Self {
            id: None,
            category_id: None,
            name: String::new(),
            description: String::new(),
            image_url: String::new(),
            display_order: 0,
            is_active: true,
            images: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubcategoryImage {
    pub id: Option<RecordId>,
    #[serde(default)]
    pub subcategory_id: Option<RecordId>,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub alt_text: String,
    #[serde(default)]
    pub display_order: i32,
    #[serde(default)]
    pub is_primary: bool,
}

impl GalleryImage for SubcategoryImage {
    fn image_id(&self) -> Option<&RecordId> {
        self.id.as_ref()
    }
    fn display_order(&self) -> i32 {
        self.display_order
    }
    fn is_primary(&self) -> bool {
        self.is_primary
    }
    fn set_primary(&mut self, primary: bool) {
        self.is_primary = primary;
    }
}

impl Resource for Subcategory {
    const ENDPOINT: &'static str = "/subcategories";
    const LABEL: &'static str = "subcategory";

    fn id(&self) -> Option<&RecordId> {
        self.id.as_ref()
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name, "Subcategory name")?;
        if self.category_id.is_none() {
            return Err(ValidationError::new(
                "category_id",
                "Parent category is required",
            ));
        }
        if self.display_order < 0 {
            return Err(ValidationError::new(
                "display_order",
                "Display order cannot be negative",
            ));
        }
        Ok(())
    }
}

impl Searchable for Subcategory {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.name, filter) || contains_ci(&self.description, filter)
    }
}

impl Sortable for Subcategory {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => cmp_ci(&self.name, &other.name),
            "category" => self.category_id.cmp(&other.category_id),
            "is_active" => self.is_active.cmp(&other.is_active),
            _ => self.display_order.cmp(&other.display_order),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_category_is_required() {
        let sub = Subcategory {
            name: "Headphones".to_string(),
            ..Subcategory::default()
        };
        assert_eq!(sub.validate().unwrap_err().field, "category_id");
    }

    #[test]
    fn test_images_are_not_sent_back() {
        let sub = Subcategory {
            name: "Headphones".to_string(),
            category_id: Some(RecordId::Int(2)),
            images: vec![SubcategoryImage {
                id: Some(RecordId::Int(9)),
                subcategory_id: None,
                image_url: "/a.png".to_string(),
                alt_text: String::new(),
                display_order: 0,
                is_primary: true,
            }],
            ..Subcategory::default()
        };
        let json = serde_json::to_value(&sub).unwrap();
        assert!(json.get("images").is_none());
        assert_eq!(json["categoryId"], 2);
    }
}
