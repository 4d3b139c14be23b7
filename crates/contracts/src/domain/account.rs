use serde::{Deserialize, Serialize};

/// Back-office account row (`/users/list`, `/users/accountinfo`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: i64,
    pub account: String,
    #[serde(default)]
    pub user_group: String,
    #[serde(default)]
    pub ctime: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Payload for `/users/add` and `/users/edit`. `password` is sent only when
/// creating an account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountUpsert {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub account: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub user_group: String,
}

/// Payload for `/users/editpwd`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChange {
    pub old_pwd: String,
    pub new_pwd: String,
}
