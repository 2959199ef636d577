//! Product representation of a claim.
//!
//! Older claims carry one product in flat `modelNumber` / `serialNumber` /
//! `faultDescription` fields; newer ones carry a `products` array. A claim
//! is always exactly one of the two.

use serde::{Deserialize, Serialize};

use crate::domain::common::{RecordId, ValidationError};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductClaim {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub model_number: String,
    #[serde(default)]
    pub serial_number: String,
    #[serde(default)]
    pub fault_description: String,
}

impl ProductClaim {
    pub fn is_blank(&self) -> bool {
        self.model_number.trim().is_empty()
            && self.serial_number.trim().is_empty()
            && self.fault_description.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClaimProducts {
    LegacySingle(ProductClaim),
    List(Vec<ProductClaim>),
}

impl Default for ClaimProducts {
    fn default() -> Self {
        ClaimProducts::LegacySingle(ProductClaim::default())
    }
}

impl ClaimProducts {
    /// A non-empty array wins; otherwise the flat fields are the product.
    pub fn from_wire(
        products: Vec<ProductClaim>,
        model_number: Option<String>,
        serial_number: Option<String>,
        fault_description: Option<String>,
    ) -> Self {
        if !products.is_empty() {
            return ClaimProducts::List(products);
        }
        ClaimProducts::LegacySingle(ProductClaim {
            id: None,
            model_number: model_number.unwrap_or_default(),
            serial_number: serial_number.unwrap_or_default(),
            fault_description: fault_description.unwrap_or_default(),
        })
    }

    pub fn is_multi(&self) -> bool {
        matches!(self, ClaimProducts::List(_))
    }

    pub fn as_slice(&self) -> &[ProductClaim] {
        match self {
            ClaimProducts::LegacySingle(p) => std::slice::from_ref(p),
            ClaimProducts::List(items) => items,
        }
    }

    /// One-way conversion: the single product becomes the first entry of the
    /// array and the flat fields are cleared. Returns false when the claim is
    /// already multi-product.
    pub fn convert_to_multi(&mut self) -> bool {
        match self {
            ClaimProducts::LegacySingle(p) => {
                let single = std::mem::take(p);
                *self = ClaimProducts::List(vec![single]);
                true
            }
            ClaimProducts::List(_) => false,
        }
    }

    /// Only multi-product claims can grow.
    pub fn add_product(&mut self) -> bool {
        match self {
            ClaimProducts::List(items) => {
                items.push(ProductClaim::default());
                true
            }
            ClaimProducts::LegacySingle(_) => false,
        }
    }

    /// Removing the last entry is refused so the array stays non-empty.
    pub fn remove_product(&mut self, index: usize) -> bool {
        match self {
            ClaimProducts::List(items) if items.len() > 1 && index < items.len() => {
                items.remove(index);
                true
            }
            _ => false,
        }
    }

    pub fn product_mut(&mut self, index: usize) -> Option<&mut ProductClaim> {
        match self {
            ClaimProducts::LegacySingle(p) if index == 0 => Some(p),
            ClaimProducts::LegacySingle(_) => None,
            ClaimProducts::List(items) => items.get_mut(index),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if let ClaimProducts::List(items) = self {
            if items.is_empty() {
                return Err(ValidationError::new("products", "Add at least one product"));
            }
            if let Some(pos) = items
                .iter()
                .position(|p| p.model_number.trim().is_empty())
            {
                return Err(ValidationError::new(
                    "products",
                    format!("Product {} needs a model number", pos + 1),
                ));
            }
        }
        Ok(())
    }

    /// Split into the wire fields: `(products, model, serial, fault)`.
    /// Exactly one side is populated.
    pub fn to_wire(
        &self,
    ) -> (
        Vec<ProductClaim>,
        Option<String>,
        Option<String>,
        Option<String>,
    ) {
        match self {
            ClaimProducts::List(items) => (items.clone(), None, None, None),
            ClaimProducts::LegacySingle(p) => (
                Vec::new(),
                Some(p.model_number.clone()),
                Some(p.serial_number.clone()),
                Some(p.fault_description.clone()),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn legacy() -> ClaimProducts {
        ClaimProducts::from_wire(
            Vec::new(),
            Some("AMP-50".to_string()),
            Some("SN123".to_string()),
            Some("No power".to_string()),
        )
    }

    #[test]
    fn test_products_array_wins_over_flat_fields() {
        let products = vec![ProductClaim {
            model_number: "X".to_string(),
            ..ProductClaim::default()
        }];
        let claim = ClaimProducts::from_wire(products, Some("IGNORED".to_string()), None, None);
        assert!(claim.is_multi());
        assert_eq!(claim.as_slice()[0].model_number, "X");
    }

    #[test]
    fn test_convert_to_multi_moves_fields() {
        let mut claim = legacy();
        assert!(claim.convert_to_multi());
        let (products, model, serial, fault) = claim.to_wire();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].model_number, "AMP-50");
        assert_eq!(products[0].serial_number, "SN123");
        assert_eq!(products[0].fault_description, "No power");
        assert!(model.is_none() && serial.is_none() && fault.is_none());

        assert!(!claim.convert_to_multi());
    }

    #[test]
    fn test_legacy_claim_never_sends_products() {
        let (products, model, _, _) = legacy().to_wire();
        assert!(products.is_empty());
        assert_eq!(model.as_deref(), Some("AMP-50"));
    }

    #[test]
    fn test_list_stays_non_empty() {
        let mut claim = legacy();
        assert!(!claim.add_product());
        claim.convert_to_multi();
        assert!(claim.add_product());
        assert_eq!(claim.as_slice().len(), 2);
        assert_eq!(claim.validate().unwrap_err().message, "Product 2 needs a model number");
        assert!(claim.remove_product(1));
        assert!(!claim.remove_product(0));
        assert!(claim.validate().is_ok());
    }

    #[test]
    fn test_product_mut() {
        let mut claim = legacy();
        claim.product_mut(0).unwrap().serial_number = "SN999".to_string();
        assert!(claim.product_mut(1).is_none());
        assert_eq!(claim.as_slice()[0].serial_number, "SN999");
    }
}
