use contracts::system::auth::{LoginRequest, LoginResponse, UserInfo};

use crate::shared::api_utils;

/// POST `/users/login`. This endpoint reports `token`/`id`/`role` at the top
/// level of the body instead of under `data`.
pub async fn login(request: &LoginRequest) -> Result<(String, UserInfo), String> {
    let reply: LoginResponse = api_utils::post_raw("/users/login", request).await?;
    if reply.code != 0 {
        let msg = if reply.msg.is_empty() {
            "登录失败".to_string()
        } else {
            reply.msg
        };
        return Err(msg);
    }
    match (reply.token, reply.id, reply.role) {
        (Some(token), Some(id), Some(role)) => Ok((token, UserInfo { id, role })),
        _ => Err("登录失败".to_string()),
    }
}
