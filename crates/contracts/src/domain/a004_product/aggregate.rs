use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::specifications::Specifications;
use crate::domain::common::images::{normalize_gallery, GalleryImage};
use crate::domain::common::validation::require;
use crate::domain::common::{absolutize_url, RecordId, ValidationError};
use crate::shared::resource::Resource;

// ============================================================================
// Aggregate
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Pretty-printed JSON object text; see [`Specifications`].
    #[serde(default = "empty_object", deserialize_with = "coerce_specifications")]
    pub specifications: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub discount_price: Option<f64>,
    #[serde(default)]
    pub stock_quantity: i32,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_redemption: bool,
    #[serde(default)]
    pub brand_id: Option<RecordId>,
    #[serde(default)]
    pub subcategory_id: Option<RecordId>,
    #[serde(default, skip_serializing)]
    pub brand_name: Option<String>,
    #[serde(default, skip_serializing)]
    pub subcategory_name: Option<String>,
    #[serde(default, skip_serializing)]
    pub images: Vec<ProductImage>,
    #[serde(default)]
    pub variants: Vec<ProductVariant>,
}

fn empty_object() -> String {
    "{}".to_string()
}

fn default_true() -> bool {
    true
}

fn coerce_specifications<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(Specifications::coerce(&value.unwrap_or(Value::Null)))
}

impl Default for Product {
    fn default() -> Self {
        Self {
            id: None,
            sku: String::new(),
            name: String::new(),
            description: String::new(),
            specifications: empty_object(),
            price: 0.0,
            discount_price: None,
            stock_quantity: 0,
            is_featured: false,
            is_active: true,
            is_redemption: false,
            brand_id: None,
            subcategory_id: None,
            brand_name: None,
            subcategory_name: None,
            images: Vec::new(),
            variants: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductImage {
    pub id: Option<RecordId>,
    #[serde(default)]
    pub product_id: Option<RecordId>,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub alt_text: String,
    #[serde(default)]
    pub display_order: i32,
    #[serde(default)]
    pub is_primary: bool,
}

impl GalleryImage for ProductImage {
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

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub stock_quantity: i32,
}

impl Product {
    /// Shape a fetched product for display: absolute image URLs, images in
    /// display order with a single primary.
    pub fn normalized(mut self, asset_base: &str) -> Self {
        for img in self.images.iter_mut() {
            img.image_url = absolutize_url(asset_base, &img.image_url);
        }
        normalize_gallery(&mut self.images);
        self
    }

    pub fn primary_image(&self) -> Option<&ProductImage> {
        self.images
            .iter()
            .find(|img| img.is_primary)
            .or_else(|| self.images.first())
    }

    /// Price shown to shoppers.
    pub fn effective_price(&self) -> f64 {
        match self.discount_price {
            Some(d) if d > 0.0 && d < self.price => d,
            _ => self.price,
        }
    }

    /// Copy for submission with specifications re-serialised compactly.
    ///
    /// Fails with the parse error so the form can block the request.
    pub fn to_payload(&self) -> Result<Product, ValidationError> {
        self.validate()?;
        let spec = Specifications::parse(&self.specifications)
            .map_err(|e| ValidationError::new("specifications", e.to_string()))?;
        let mut payload = self.clone();
        payload.specifications = spec.to_compact();
        Ok(payload)
    }
}

impl Resource for Product {
    const ENDPOINT: &'static str = "/products";
    const LABEL: &'static str = "product";

    fn id(&self) -> Option<&RecordId> {
        self.id.as_ref()
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name, "Product name")?;
        if self.price < 0.0 {
            return Err(ValidationError::new("price", "Price cannot be negative"));
        }
        if let Some(discount) = self.discount_price {
            if discount < 0.0 {
                return Err(ValidationError::new(
                    "discount_price",
                    "Discount price cannot be negative",
                ));
            }
            if discount > self.price {
                return Err(ValidationError::new(
                    "discount_price",
                    "Discount price cannot exceed the regular price",
                ));
            }
        }
        if self.stock_quantity < 0 {
            return Err(ValidationError::new(
                "stock_quantity",
                "Stock quantity cannot be negative",
            ));
        }
        Specifications::parse(&self.specifications)
            .map(|_| ())
            .map_err(|e| ValidationError::new("specifications", e.to_string()))
    }
}

// ============================================================================
// Queries
// ============================================================================

/// Server-side list query for `GET /products`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductQuery {
    pub page: usize,
    pub limit: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::non_blank;
    use serde_json::json;

    fn product(name: &str, spec: &str) -> Product {
        Product {
            name: name.to_string(),
            specifications: spec.to_string(),
            price: 100.0,
            ..Product::default()
        }
    }

    #[test]
    fn test_invalid_specifications_block_submit() {
        let err = product("Amp", "{invalid}").to_payload().unwrap_err();
        assert_eq!(err.field, "specifications");
    }

    #[test]
    fn test_payload_is_compact_json() {
        let payload = product("Amp", "{\n  \"watts\": 50\n}").to_payload().unwrap();
        assert_eq!(payload.specifications, "{\"watts\":50}");
    }

    #[test]
    fn test_discount_cannot_exceed_price() {
        let mut p = product("Amp", "{}");
        p.discount_price = Some(150.0);
        assert_eq!(p.validate().unwrap_err().field, "discount_price");
        p.discount_price = Some(80.0);
        assert!(p.validate().is_ok());
        assert_eq!(p.effective_price(), 80.0);
    }

    #[test]
    fn test_malformed_specifications_coerced_on_load() {
        let raw = json!({
            "id": 5,
            "name": "Amp",
            "specifications": "{broken",
            "images": [
                {"id": 2, "imageUrl": "/uploads/b.png", "displayOrder": 1, "isPrimary": true},
                {"id": 1, "imageUrl": "uploads/a.png", "displayOrder": 0, "isPrimary": true}
            ]
        });
        let p: Product = serde_json::from_value(raw).unwrap();
        assert_eq!(p.specifications, "{}");

        let p = p.normalized("https://api.example.com");
        assert_eq!(p.images[0].image_url, "https://api.example.com/uploads/a.png");
        assert_eq!(p.images[1].image_url, "https://api.example.com/uploads/b.png");
        assert!(p.images[0].is_primary);
        assert!(!p.images[1].is_primary);
        assert_eq!(p.primary_image().unwrap().id, Some(RecordId::Int(1)));
    }

    #[test]
    fn test_missing_specifications_default_to_empty_object() {
        let p: Product = serde_json::from_value(json!({"name": "Amp"})).unwrap();
        assert_eq!(p.specifications, "{}");
    }

    #[test]
    fn test_query_skips_empty_filters() {
        let q = ProductQuery {
            page: 2,
            limit: 10,
            search: non_blank("  "),
            brand_id: non_blank("7"),
            ..ProductQuery::default()
        };
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json, json!({"page": 2, "limit": 10, "brandId": "7"}));
    }
}
