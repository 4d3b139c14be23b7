use serde::{Deserialize, Serialize};

/// Delivery order row (`/order/list`, `/order/detail`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub order_no: String,
    #[serde(default)]
    pub order_time: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub consignee: String,
    #[serde(default)]
    pub deliver_address: String,
    #[serde(default)]
    pub delivery_time: String,
    #[serde(default)]
    pub remarks: String,
    #[serde(default)]
    pub order_amount: f64,
    #[serde(default)]
    pub order_state: String,
}

/// Editable subset sent to `/order/edit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdate {
    pub id: String,
    pub consignee: String,
    pub phone: String,
    pub deliver_address: String,
    pub order_state: String,
}
