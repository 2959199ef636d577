//! Proof-of-purchase state machine.
//!
//! `Unset → Upload | Invoice` and `Upload ⇄ Invoice`. Switching only moves
//! the method; the artifact of the other method stays until it is replaced.

use serde::{Deserialize, Serialize};

use crate::domain::common::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProofMethod {
    Upload,
    Invoice,
}

impl ProofMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProofMethod::Upload => "upload",
            ProofMethod::Invoice => "invoice",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "upload" => Some(ProofMethod::Upload),
            "invoice" => Some(ProofMethod::Invoice),
            _ => None,
        }
    }
}

/// Read-only view of the current proof state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProofState<'a> {
    Unset,
    Upload { path: Option<&'a str> },
    Invoice { number: &'a str },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProofOfPurchase {
    pub method: Option<ProofMethod>,
    pub stored_path: Option<String>,
    pub invoice_number: Option<String>,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl ProofOfPurchase {
    /// Rebuild from wire fields. Claims created before `proofMethod` existed
    /// are classified by whichever artifact they carry.
    pub fn from_wire(
        method: Option<&str>,
        stored_path: Option<String>,
        invoice_number: Option<String>,
    ) -> Self {
        let mut proof = Self {
            method: method.and_then(ProofMethod::parse),
            stored_path,
            invoice_number,
        };
        if proof.method.is_none() {
            proof.method = if present(&proof.invoice_number).is_some() {
                Some(ProofMethod::Invoice)
            } else if present(&proof.stored_path).is_some() {
                Some(ProofMethod::Upload)
            } else {
                None
            };
        }
        proof
    }

    pub fn state(&self) -> ProofState<'_> {
        match self.method {
            None => ProofState::Unset,
            Some(ProofMethod::Upload) => ProofState::Upload {
                path: present(&self.stored_path),
            },
            Some(ProofMethod::Invoice) => ProofState::Invoice {
                number: present(&self.invoice_number).unwrap_or(""),
            },
        }
    }

    /// Explicit method switch. Returns whether the method changed.
    pub fn switch_to(&mut self, method: ProofMethod) -> bool {
        let changed = self.method != Some(method);
        self.method = Some(method);
        changed
    }

    pub fn set_invoice_number(&mut self, number: String) {
        self.invoice_number = Some(number);
    }

    /// Record a freshly uploaded file; this replaces the previous upload.
    pub fn set_stored_path(&mut self, path: String) {
        self.stored_path = Some(path);
    }

    /// Checks before saving. `pending_upload` is true when the form holds a
    /// file that will be posted right after the claim update.
    pub fn validate(&self, pending_upload: bool) -> Result<(), ValidationError> {
        match self.state() {
            ProofState::Unset => Ok(()),
            ProofState::Invoice { number } if number.is_empty() => Err(ValidationError::new(
                "invoice_number",
                "Invoice number is required when proof method is invoice",
            )),
            ProofState::Invoice { .. } => Ok(()),
            ProofState::Upload { path: None } if !pending_upload => Err(ValidationError::new(
                "proof_file",
                "Select a proof of purchase file to upload",
            )),
            ProofState::Upload { .. } => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_claims_are_classified_by_artifact() {
        let p = ProofOfPurchase::from_wire(None, None, Some("INV-1".to_string()));
        assert_eq!(p.state(), ProofState::Invoice { number: "INV-1" });
        let p = ProofOfPurchase::from_wire(None, Some("proofs/a.pdf".to_string()), None);
        assert_eq!(p.state(), ProofState::Upload { path: Some("proofs/a.pdf") });
        let p = ProofOfPurchase::from_wire(None, Some(" ".to_string()), None);
        assert_eq!(p.state(), ProofState::Unset);
    }

    #[test]
    fn test_explicit_method_wins() {
        let p = ProofOfPurchase::from_wire(
            Some("upload"),
            Some("proofs/a.pdf".to_string()),
            Some("INV-1".to_string()),
        );
        assert_eq!(p.state(), ProofState::Upload { path: Some("proofs/a.pdf") });
    }

    #[test]
    fn test_switching_keeps_other_artifact() {
        let mut p = ProofOfPurchase::from_wire(Some("invoice"), None, Some("INV-9".to_string()));
        assert!(p.switch_to(ProofMethod::Upload));
        assert_eq!(p.invoice_number.as_deref(), Some("INV-9"));
        assert_eq!(p.state(), ProofState::Upload { path: None });

        assert!(p.switch_to(ProofMethod::Invoice));
        assert_eq!(p.state(), ProofState::Invoice { number: "INV-9" });
        assert!(!p.switch_to(ProofMethod::Invoice));
    }

    #[test]
    fn test_validation_per_state() {
        let mut p = ProofOfPurchase::default();
        assert!(p.validate(false).is_ok());

        p.switch_to(ProofMethod::Invoice);
        assert_eq!(p.validate(false).unwrap_err().field, "invoice_number");
        p.set_invoice_number("INV-2".to_string());
        assert!(p.validate(false).is_ok());

        p.switch_to(ProofMethod::Upload);
        assert_eq!(p.validate(false).unwrap_err().field, "proof_file");
        assert!(p.validate(true).is_ok());
        p.set_stored_path("proofs/x.pdf".to_string());
        assert!(p.validate(false).is_ok());
    }
}
