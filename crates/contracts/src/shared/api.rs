//! Wire contract shared by every backend endpoint: the response envelope and
//! the client-requested pagination query.

use serde::{Deserialize, Serialize};

const DEFAULT_ERROR: &str = "服务器异常";

/// Response envelope: `code` 0 on success (absent `code` means success),
/// human-readable `msg`, payload under `data`, `total` present on paged
/// list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub msg: String,
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

impl<T> ApiResponse<T> {
    /// Unwraps the payload, turning a non-zero `code` or a missing payload
    /// into the backend's message.
    pub fn into_result(self) -> Result<T, String> {
        self.ack()?;
        self.data.ok_or_else(|| DEFAULT_ERROR.to_string())
    }

    /// Success check alone, for endpoints that reply with no payload.
    pub fn ack(&self) -> Result<(), String> {
        if self.code != 0 {
            let msg = if self.msg.is_empty() {
                DEFAULT_ERROR.to_string()
            } else {
                self.msg.clone()
            };
            return Err(msg);
        }
        Ok(())
    }
}

/// One page of rows plus the backend's total row count.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
}

/// Client-requested pagination, rendered as the query string the backend
/// expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    pub current_page: u32,
    pub page_size: u32,
}

impl PageQuery {
    pub fn new(current_page: u32, page_size: u32) -> Self {
        Self {
            current_page,
            page_size,
        }
    }

    pub fn query_string(&self) -> String {
        format!(
            "?currentPage={}&pageSize={}",
            self.current_page, self.page_size
        )
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self::new(1, 5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_code_means_success() {
        let body = r#"{"data": [1, 2, 3], "total": 3}"#;
        let envelope: ApiResponse<Vec<i64>> = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.code, 0);
        assert_eq!(envelope.total, Some(3));
        assert_eq!(envelope.into_result().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn non_zero_code_surfaces_backend_message() {
        let body = r#"{"code": 1, "msg": "账号不存在", "data": null}"#;
        let envelope: ApiResponse<Vec<i64>> = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.into_result().unwrap_err(), "账号不存在");
    }

    #[test]
    fn blank_message_falls_back_to_default() {
        let body = r#"{"code": 500}"#;
        let envelope: ApiResponse<()> = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.ack().unwrap_err(), DEFAULT_ERROR);
    }

    #[test]
    fn page_query_renders_backend_parameter_names() {
        let query = PageQuery::new(2, 10);
        assert_eq!(query.query_string(), "?currentPage=2&pageSize=10");
    }
}
