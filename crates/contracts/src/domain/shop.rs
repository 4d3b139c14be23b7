use serde::{Deserialize, Serialize};

/// Shop profile (`/shop/info`, edited via `/shop/edit`). Avatar and gallery
/// images are backend-hosted paths; uploading them is a separate transport
/// outside this contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopProfile {
    #[serde(default)]
    pub id: i64,
    pub shop_name: String,
    #[serde(default)]
    pub shop_announcement: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shop_avatar: Option<String>,
    #[serde(default)]
    pub shop_images: Vec<String>,
    #[serde(default)]
    pub min_price: f64,
    #[serde(default)]
    pub delivery_time: String,
    #[serde(default)]
    pub delivery_description: String,
    #[serde(default)]
    pub shop_rating: f64,
    #[serde(default)]
    pub shop_sales: i64,
    #[serde(default)]
    pub activity_support: Vec<String>,
    #[serde(default)]
    pub business_hours: String,
}
