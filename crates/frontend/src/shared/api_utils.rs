//! Thin HTTP wrapper for the backend API.
//!
//! Every request goes through here: the `/api` prefix, the bearer token
//! header, envelope decoding and the expired-session redirect live in one
//! place so view code only sees `Result<T, String>`.

use contracts::shared::api::{ApiResponse, Page, PageQuery};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::system::auth::storage;

/// Base path of the backend API, same origin as the app.
pub const API_BASE: &str = "/api";

/// Full request path for an API endpoint.
///
/// # Example
/// ```rust
/// let url = frontend::shared::api_utils::api_url("/goods/list");
/// assert_eq!(url, "/api/goods/list");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", API_BASE, path)
}

/// URL for a backend-hosted asset such as a goods image.
pub fn asset_url(path: &str) -> String {
    if path.starts_with("http") {
        path.to_string()
    } else {
        format!("{}{}", API_BASE, path)
    }
}

fn bearer(builder: RequestBuilder) -> RequestBuilder {
    match storage::get_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

/// Session-expiry policy: a 401 clears the stored token and sends the user
/// to the login page with a way back to where they were.
fn guard_status(response: Response) -> Result<Response, String> {
    if response.status() == 401 {
        storage::clear_token();
        redirect_to_login();
        return Err("登录已过期，请重新登录".to_string());
    }
    Ok(response)
}

fn redirect_to_login() {
    if let Some(window) = web_sys::window() {
        let location = window.location();
        let current = format!(
            "{}{}",
            location.pathname().unwrap_or_default(),
            location.search().unwrap_or_default()
        );
        let target = format!("/login?redirect={}", urlencoding::encode(&current));
        let _ = location.set_href(&target);
    }
}

async fn send_get(path: &str) -> Result<Response, String> {
    let response = bearer(Request::get(&api_url(path)))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    guard_status(response)
}

async fn send_post<B: Serialize>(path: &str, body: &B) -> Result<Response, String> {
    let response = bearer(Request::post(&api_url(path)))
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    guard_status(response)
}

/// GET an endpoint and unwrap the envelope payload.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let envelope: ApiResponse<T> = send_get(path)
        .await?
        .json()
        .await
        .map_err(|e| e.to_string())?;
    envelope.into_result()
}

/// GET a paged list endpoint; `query` is appended as `?currentPage=&pageSize=`.
pub async fn get_page<T: DeserializeOwned>(path: &str, query: PageQuery) -> Result<Page<T>, String> {
    let full = format!("{}{}", path, query.query_string());
    let envelope: ApiResponse<Vec<T>> = send_get(&full)
        .await?
        .json()
        .await
        .map_err(|e| e.to_string())?;
    let total = envelope.total.unwrap_or(0);
    let items = envelope.into_result()?;
    Ok(Page { items, total })
}

/// GET where only the envelope `code` matters (`/users/del?id=` style).
pub async fn get_ack(path: &str) -> Result<(), String> {
    let envelope: ApiResponse<serde_json::Value> = send_get(path)
        .await?
        .json()
        .await
        .map_err(|e| e.to_string())?;
    envelope.ack()
}

/// POST a JSON body and unwrap the envelope payload.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, String> {
    let envelope: ApiResponse<T> = send_post(path, body)
        .await?
        .json()
        .await
        .map_err(|e| e.to_string())?;
    envelope.into_result()
}

/// POST a JSON body where only the envelope `code` matters.
pub async fn post_ack<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    let envelope: ApiResponse<serde_json::Value> = send_post(path, body)
        .await?
        .json()
        .await
        .map_err(|e| e.to_string())?;
    envelope.ack()
}

/// POST that decodes the raw body without the envelope wrapper (login).
pub async fn post_raw<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    send_post(path, body)
        .await?
        .json()
        .await
        .map_err(|e| e.to_string())
}
