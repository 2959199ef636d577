use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::domain::common::RecordId;
use crate::shared::list_state::{cmp_ci, contains_ci, Searchable, Sortable};

// ============================================================================
// Status
// ============================================================================

/// Order lifecycle status. Values the console does not know are kept
/// verbatim so they display and round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    Other(String),
}

impl OrderStatus {
    pub const SELECTABLE: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Other(s) => s,
        }
    }
}

impl From<String> for OrderStatus {
    fn from(value: String) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "pending" => OrderStatus::Pending,
            "processing" => OrderStatus::Processing,
            "shipped" => OrderStatus::Shipped,
            "delivered" => OrderStatus::Delivered,
            "cancelled" | "canceled" => OrderStatus::Cancelled,
            _ => OrderStatus::Other(value),
        }
    }
}

impl From<OrderStatus> for String {
    fn from(value: OrderStatus) -> Self {
        value.as_str().to_string()
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Aggregate
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: RecordId,
    #[serde(default)]
    pub order_number: String,
    #[serde(default)]
    pub user_id: Option<RecordId>,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub payment_status: Option<String>,
    #[serde(default)]
    pub transaction_id: Option<String>,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub shipping_address: Option<ShippingAddress>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address_line1: String,
    #[serde(default)]
    pub address_line2: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default)]
    pub country: String,
}

impl ShippingAddress {
    /// Non-empty address lines for display.
    pub fn lines(&self) -> Vec<String> {
        let city_line = [self.city.as_str(), self.state.as_str(), self.postal_code.as_str()]
            .iter()
            .filter(|s| !s.trim().is_empty())
            .cloned()
            .collect::<Vec<_>>()
            .join(", ");
        [
            self.full_name.clone(),
            self.address_line1.clone(),
            self.address_line2.clone(),
            city_line,
            self.country.clone(),
            self.phone.clone(),
        ]
        .into_iter()
        .filter(|l| !l.trim().is_empty())
        .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(default)]
    pub product_id: Option<RecordId>,
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub unit_price: f64,
}

impl OrderItem {
    pub fn line_total(&self) -> f64 {
        self.unit_price * self.quantity as f64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatus,
}

impl Order {
    pub fn matches_status(&self, filter: Option<&OrderStatus>) -> bool {
        filter.map(|s| &self.status == s).unwrap_or(true)
    }
}

/// Apply a successful status PATCH to the local list and to the order open
/// in the detail view, if it is the same one.
pub fn apply_status(
    orders: &mut [Order],
    open: Option<&mut Order>,
    id: &RecordId,
    status: &OrderStatus,
) {
    if let Some(order) = orders.iter_mut().find(|o| &o.id == id) {
        order.status = status.clone();
    }
    if let Some(open) = open {
        if &open.id == id {
            open.status = status.clone();
        }
    }
}

impl Searchable for Order {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.order_number, filter)
            || self
                .user_id
                .as_ref()
                .map(|u| contains_ci(&u.to_string(), filter))
                .unwrap_or(false)
            || self
                .transaction_id
                .as_deref()
                .map(|t| contains_ci(t, filter))
                .unwrap_or(false)
    }
}

impl Sortable for Order {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "order_number" => cmp_ci(&self.order_number, &other.order_number),
            "status" => cmp_ci(self.status.as_str(), other.status.as_str()),
            "total_amount" => self
                .total_amount
                .partial_cmp(&other.total_amount)
                .unwrap_or(Ordering::Equal),
            _ => self.created_at.cmp(&other.created_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn order(id: i64, number: &str, status: &str) -> Order {
        serde_json::from_value(json!({
            "id": id,
            "orderNumber": number,
            "userId": 77,
            "status": status,
            "transactionId": format!("TX-{}", id),
            "totalAmount": 10.5
        }))
        .unwrap()
    }

    #[test]
    fn test_status_parsing_keeps_unknown_values() {
        assert_eq!(order(1, "A", "shipped").status, OrderStatus::Shipped);
        let odd = order(2, "B", "OnHold");
        assert_eq!(odd.status, OrderStatus::Other("OnHold".to_string()));
        assert_eq!(serde_json::to_value(&odd.status).unwrap(), json!("OnHold"));
    }

    #[test]
    fn test_search_by_number_user_or_transaction() {
        let o = order(5, "ORD-1005", "Pending");
        assert!(o.matches_filter("ord-10"));
        assert!(o.matches_filter("77"));
        assert!(o.matches_filter("tx-5"));
        assert!(!o.matches_filter("zzz"));
    }

    #[test]
    fn test_apply_status_patches_list_and_open_detail() {
        let mut orders = vec![order(1, "A", "Pending"), order(2, "B", "Pending")];
        let mut open = orders[1].clone();
        apply_status(&mut orders, Some(&mut open), &RecordId::Int(2), &OrderStatus::Shipped);
        assert_eq!(orders[1].status, OrderStatus::Shipped);
        assert_eq!(orders[0].status, OrderStatus::Pending);
        assert_eq!(open.status, OrderStatus::Shipped);

        let mut other_open = orders[0].clone();
        apply_status(&mut orders, Some(&mut other_open), &RecordId::Int(2), &OrderStatus::Delivered);
        assert_eq!(other_open.status, OrderStatus::Pending);
    }

    #[test]
    fn test_line_totals_and_address() {
        let item = OrderItem {
            product_id: None,
            product_name: "Amp".to_string(),
            quantity: 3,
            unit_price: 2.5,
        };
        assert_eq!(item.line_total(), 7.5);
        let addr = ShippingAddress {
            full_name: "Jo".to_string(),
            city: "Perth".to_string(),
            postal_code: "6000".to_string(),
            ..ShippingAddress::default()
        };
        assert_eq!(addr.lines(), vec!["Jo".to_string(), "Perth, 6000".to_string()]);
    }
}
