use crate::shared::{http, resource_api};
use contracts::domain::a006_order::aggregate::{Order, OrderStatus, UpdateOrderStatusRequest};
use contracts::domain::common::RecordId;

pub async fn fetch_orders() -> Result<Vec<Order>, String> {
    resource_api::fetch_list("/orders/user").await
}

pub async fn update_status(id: &RecordId, status: &OrderStatus) -> Result<(), String> {
    let body = UpdateOrderStatusRequest {
        status: status.clone(),
    };
    http::send_json("PATCH", &format!("/orders/{}/status", id), &body).await
}
