use serde::{Deserialize, Serialize};

/// Catalog item row (`/goods/list`, `/goods/info`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goods {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub img_url: String,
    #[serde(default)]
    pub goods_desc: String,
    #[serde(default)]
    pub ctime: String,
}

/// Payload for `/goods/add` and `/goods/edit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoodsUpsert {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub category: String,
    pub price: f64,
    #[serde(default)]
    pub goods_desc: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img_url: Option<String>,
}

/// Catalog category row (`/goods/catelist`). `state` is 1 when the category
/// is enabled, 0 when disabled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoodsCategory {
    pub id: i64,
    pub cate_name: String,
    #[serde(default)]
    pub state: i32,
}

/// Payload for `/goods/addcate` and `/goods/editcate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoodsCategoryUpsert {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub cate_name: String,
    pub state: i32,
}
