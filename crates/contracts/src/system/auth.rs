use serde::{Deserialize, Serialize};

/// Credentials for `/users/login`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub account: String,
    pub password: String,
}

/// Reply body of `/users/login`. This endpoint reports its fields at the top
/// level of the envelope rather than under `data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub role: Option<String>,
}

/// The slice of user identity the shell keeps for the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub role: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_reply_decodes_top_level_fields() {
        let body = r#"{"code": 0, "token": "abc", "id": 7, "role": "admin"}"#;
        let reply: LoginResponse = serde_json::from_str(body).unwrap();
        assert_eq!(reply.token.as_deref(), Some("abc"));
        assert_eq!(reply.id, Some(7));
        assert_eq!(reply.msg, "");
    }
}
