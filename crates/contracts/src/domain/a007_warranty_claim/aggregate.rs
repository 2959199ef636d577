use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::products::{ClaimProducts, ProductClaim};
use super::proof::ProofOfPurchase;
use super::status::ClaimStatus;
use crate::domain::common::validation::{max_chars, require};
use crate::domain::common::{RecordId, ValidationError};
use crate::shared::list_state::{cmp_ci, contains_ci, Searchable, Sortable};

// ============================================================================
// Wire format
// ============================================================================

/// Claim exactly as the backend sends and accepts it.
///
/// Fields the console does not model are collected in `extra` and written
/// back untouched, because `PUT /warrantyclaims/:id` replaces the record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarrantyClaimDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub claim_number: String,
    #[serde(default)]
    pub claim_type: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub status: ClaimStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proof_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proof_of_purchase_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fault_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common_fault_description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub products: Vec<ProductClaim>,
    #[serde(default)]
    pub fault_images: Vec<WarrantyClaimImage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Fault image reference. Older claims store a bare path string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "FaultImageWire")]
#[serde(rename_all = "camelCase")]
pub struct WarrantyClaimImage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FaultImageWire {
    Path(String),
    #[serde(rename_all = "camelCase")]
    Object {
        #[serde(default)]
        id: Option<RecordId>,
        #[serde(default, alias = "url", alias = "imagePath")]
        image_url: String,
        #[serde(default)]
        file_name: Option<String>,
    },
}

impl From<FaultImageWire> for WarrantyClaimImage {
    fn from(value: FaultImageWire) -> Self {
        match value {
            FaultImageWire::Path(image_url) => Self {
                id: None,
                image_url,
                file_name: None,
            },
            FaultImageWire::Object {
                id,
                image_url,
                file_name,
            } => Self {
                id,
                image_url,
                file_name,
            },
        }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Customer block of a claim.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Customer {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// Typed claim used by the screens. Proof and product representation are
/// state machines rather than loose optional fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "WarrantyClaimDto", into = "WarrantyClaimDto")]
pub struct WarrantyClaim {
    pub id: Option<RecordId>,
    pub claim_number: String,
    pub claim_type: String,
    pub customer: Customer,
    pub status: ClaimStatus,
    pub status_notes: Option<String>,
    pub assigned_to: Option<String>,
    pub proof: ProofOfPurchase,
    pub products: ClaimProducts,
    pub common_fault_description: Option<String>,
    pub fault_images: Vec<WarrantyClaimImage>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub extra: Map<String, Value>,
}

impl From<WarrantyClaimDto> for WarrantyClaim {
    fn from(dto: WarrantyClaimDto) -> Self {
        Self {
            id: dto.id,
            claim_number: dto.claim_number,
            claim_type: dto.claim_type,
            customer: Customer {
                full_name: dto.full_name,
                email: dto.email,
                phone: dto.phone,
                address: dto.address,
            },
            status: dto.status,
            status_notes: dto.status_notes,
            assigned_to: dto.assigned_to,
            proof: ProofOfPurchase::from_wire(
                dto.proof_method.as_deref(),
                dto.proof_of_purchase_path,
                dto.invoice_number,
            ),
            products: ClaimProducts::from_wire(
                dto.products,
                dto.model_number,
                dto.serial_number,
                dto.fault_description,
            ),
            common_fault_description: dto.common_fault_description,
            fault_images: dto.fault_images,
            created_at: dto.created_at,
            updated_at: dto.updated_at,
            extra: dto.extra,
        }
    }
}

impl From<WarrantyClaim> for WarrantyClaimDto {
    fn from(claim: WarrantyClaim) -> Self {
        let (products, model_number, serial_number, fault_description) = claim.products.to_wire();
        Self {
            id: claim.id,
            claim_number: claim.claim_number,
            claim_type: claim.claim_type,
            full_name: claim.customer.full_name,
            email: claim.customer.email,
            phone: claim.customer.phone,
            address: claim.customer.address,
            status: claim.status,
            status_notes: claim.status_notes,
            assigned_to: claim.assigned_to,
            proof_method: claim.proof.method.map(|m| m.as_str().to_string()),
            proof_of_purchase_path: claim.proof.stored_path,
            invoice_number: claim.proof.invoice_number,
            model_number,
            serial_number,
            fault_description,
            common_fault_description: claim.common_fault_description,
            products,
            fault_images: claim.fault_images,
            created_at: claim.created_at,
            updated_at: claim.updated_at,
            extra: claim.extra,
        }
    }
}

impl WarrantyClaim {
    pub const ENDPOINT: &'static str = "/warrantyclaims";

    pub fn item_path(id: &RecordId) -> String {
        format!("{}/{}", Self::ENDPOINT, id)
    }

    /// Checks run before `PUT /warrantyclaims/:id`.
    pub fn validate(&self, pending_upload: bool) -> Result<(), ValidationError> {
        require("full_name", &self.customer.full_name, "Full name")?;
        require("email", &self.customer.email, "Email")?;
        if !self.customer.email.contains('@') {
            return Err(ValidationError::new("email", "Email address is not valid"));
        }
        if let Some(notes) = &self.status_notes {
            max_chars("status_notes", notes, 1000, "Status notes")?;
        }
        self.proof.validate(pending_upload)?;
        self.products.validate()
    }

    pub fn product_count(&self) -> usize {
        self.products.as_slice().len()
    }

    /// Short product summary for the list table.
    pub fn product_summary(&self) -> String {
        let models: Vec<&str> = self
            .products
            .as_slice()
            .iter()
            .map(|p| p.model_number.trim())
            .filter(|m| !m.is_empty())
            .collect();
        match models.len() {
            0 => "-".to_string(),
            1 => models[0].to_string(),
            n => format!("{} (+{} more)", models[0], n - 1),
        }
    }
}

impl Searchable for WarrantyClaim {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.claim_number, filter)
            || contains_ci(&self.customer.full_name, filter)
            || contains_ci(&self.customer.email, filter)
            || self
                .products
                .as_slice()
                .iter()
                .any(|p| contains_ci(&p.model_number, filter) || contains_ci(&p.serial_number, filter))
    }
}

impl Sortable for WarrantyClaim {
    fn compare_by_field(&self, other: &Self, field: &str) -> std::cmp::Ordering {
        match field {
            "claimNumber" => cmp_ci(&self.claim_number, &other.claim_number),
            "fullName" => cmp_ci(&self.customer.full_name, &other.customer.full_name),
            "status" => self.status.as_str().cmp(other.status.as_str()),
            _ => self.created_at.cmp(&other.created_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a007_warranty_claim::proof::{ProofMethod, ProofState};
    use serde_json::json;

    fn invoice_claim() -> Value {
        json!({
            "id": 17,
            "claimNumber": "WC-2024-0017",
            "claimType": "repair",
            "fullName": "Jane Doe",
            "email": "jane@example.com",
            "phone": "555-0100",
            "address": "1 Main St",
            "status": "picked_up",
            "proofMethod": "invoice",
            "invoiceNumber": "INV-445",
            "modelNumber": "AMP-50",
            "serialNumber": "SN1",
            "faultDescription": "No power",
            "commonFaultDescription": "Dead on arrival",
            "faultImages": ["uploads/fault/a.jpg", {"imageUrl": "uploads/fault/b.jpg"}],
            "dealerCode": "D-9"
        })
    }

    #[test]
    fn test_switch_invoice_to_upload_preserves_customer_fields() {
        let mut claim: WarrantyClaim = serde_json::from_value(invoice_claim()).unwrap();
        claim.proof.switch_to(ProofMethod::Upload);
        claim.proof.set_stored_path("proofs/receipt.pdf".to_string());

        let body = serde_json::to_value(&claim).unwrap();
        assert_eq!(body["fullName"], "Jane Doe");
        assert_eq!(body["email"], "jane@example.com");
        assert_eq!(body["claimType"], "repair");
        assert_eq!(body["commonFaultDescription"], "Dead on arrival");
        assert_eq!(body["proofMethod"], "upload");
        assert_eq!(body["proofOfPurchasePath"], "proofs/receipt.pdf");
        assert_eq!(body["invoiceNumber"], "INV-445");
        assert_eq!(body["dealerCode"], "D-9");
    }

    #[test]
    fn test_legacy_fields_and_products_are_exclusive() {
        let mut claim: WarrantyClaim = serde_json::from_value(invoice_claim()).unwrap();
        let body = serde_json::to_value(&claim).unwrap();
        assert_eq!(body["modelNumber"], "AMP-50");
        assert!(body.get("products").is_none());

        claim.products.convert_to_multi();
        let body = serde_json::to_value(&claim).unwrap();
        assert!(body.get("modelNumber").is_none());
        assert_eq!(body["products"][0]["modelNumber"], "AMP-50");
        assert_eq!(body["products"][0]["faultDescription"], "No power");
    }

    #[test]
    fn test_fault_images_accept_strings_and_objects() {
        let claim: WarrantyClaim = serde_json::from_value(invoice_claim()).unwrap();
        assert_eq!(claim.fault_images.len(), 2);
        assert_eq!(claim.fault_images[0].image_url, "uploads/fault/a.jpg");
        assert_eq!(claim.fault_images[1].image_url, "uploads/fault/b.jpg");
        assert_eq!(claim.status, ClaimStatus::PickedUp);
        assert_eq!(claim.proof.state(), ProofState::Invoice { number: "INV-445" });
    }

    #[test]
    fn test_validate() {
        let mut claim: WarrantyClaim = serde_json::from_value(invoice_claim()).unwrap();
        assert!(claim.validate(false).is_ok());
        claim.customer.email = "nope".to_string();
        assert_eq!(claim.validate(false).unwrap_err().field, "email");
        claim.customer.email = "jane@example.com".to_string();
        claim.proof.switch_to(ProofMethod::Upload);
        assert_eq!(claim.validate(false).unwrap_err().field, "proof_file");
        assert!(claim.validate(true).is_ok());
    }

    #[test]
    fn test_product_summary() {
        let mut claim: WarrantyClaim = serde_json::from_value(invoice_claim()).unwrap();
        assert_eq!(claim.product_summary(), "AMP-50");
        claim.products.convert_to_multi();
        claim.products.add_product();
        claim.products.product_mut(1).unwrap().model_number = "SUB-12".to_string();
        assert_eq!(claim.product_summary(), "AMP-50 (+1 more)");
        assert!(claim.matches_filter("sub-12"));
    }
}
