use serde::{Deserialize, Serialize};
use std::fmt;

/// Claim status. The wire values are fixed by the backend, including the
/// capitalised `Sent`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ClaimStatus {
    Submitted,
    PickedUp,
    Sent,
    Rejected,
    Completed,
    /// Anything else the backend returns, kept verbatim.
    Other(String),
}

impl ClaimStatus {
    pub const ALL: [ClaimStatus; 5] = [
        ClaimStatus::Submitted,
        ClaimStatus::PickedUp,
        ClaimStatus::Sent,
        ClaimStatus::Rejected,
        ClaimStatus::Completed,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            ClaimStatus::Submitted => "submitted",
            ClaimStatus::PickedUp => "picked_up",
            ClaimStatus::Sent => "Sent",
            ClaimStatus::Rejected => "rejected",
            ClaimStatus::Completed => "completed",
            ClaimStatus::Other(s) => s,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ClaimStatus::Submitted => "Submitted",
            ClaimStatus::PickedUp => "Picked Up",
            ClaimStatus::Sent => "Sent",
            ClaimStatus::Rejected => "Rejected",
            ClaimStatus::Completed => "Completed",
            ClaimStatus::Other(s) => s,
        }
    }

    /// There is no transition graph: any status may follow any other.
    pub fn can_transition_to(&self, _next: &ClaimStatus) -> bool {
        true
    }
}

impl Default for ClaimStatus {
    fn default() -> Self {
        ClaimStatus::Submitted
    }
}

impl From<String> for ClaimStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "submitted" => ClaimStatus::Submitted,
            "picked_up" => ClaimStatus::PickedUp,
            "Sent" => ClaimStatus::Sent,
            "rejected" => ClaimStatus::Rejected,
            "completed" => ClaimStatus::Completed,
            _ => ClaimStatus::Other(value),
        }
    }
}

impl From<ClaimStatus> for String {
    fn from(value: ClaimStatus) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Body of `PUT /warrantyclaims/:id/status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdateRequest {
    pub status: ClaimStatus,
    #[serde(default)]
    pub status_notes: String,
    #[serde(default)]
    pub assigned_to: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_values() {
        let values: Vec<String> = ClaimStatus::ALL.iter().map(|s| s.as_str().to_string()).collect();
        assert_eq!(values, vec!["submitted", "picked_up", "Sent", "rejected", "completed"]);
        let parsed: ClaimStatus = serde_json::from_value(json!("picked_up")).unwrap();
        assert_eq!(parsed, ClaimStatus::PickedUp);
    }

    #[test]
    fn test_status_is_case_sensitive_and_lossless() {
        let parsed: ClaimStatus = serde_json::from_value(json!("sent")).unwrap();
        assert_eq!(parsed, ClaimStatus::Other("sent".to_string()));
        assert_eq!(serde_json::to_value(&parsed).unwrap(), json!("sent"));
    }

    #[test]
    fn test_any_transition_is_allowed() {
        for from in ClaimStatus::ALL.iter() {
            for to in ClaimStatus::ALL.iter() {
                assert!(from.can_transition_to(to));
            }
        }
    }

    #[test]
    fn test_status_request_shape() {
        let req = StatusUpdateRequest {
            status: ClaimStatus::Sent,
            status_notes: "Courier booked".to_string(),
            assigned_to: "tech-2".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"status": "Sent", "statusNotes": "Courier booked", "assignedTo": "tech-2"})
        );
    }
}
