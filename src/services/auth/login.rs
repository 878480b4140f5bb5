use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use crate::models::{ApiResponse, ErrorCode, users::requests::LoginRequest};
use crate::utils::password::verify_password;

use super::AuthService;

pub async fn handle_login(
    service: &AuthService,
    request: &HttpRequest,
    login_request: LoginRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 1. 在角色所属集合内按邮箱获取用户
    match storage
        .get_user_by_email(login_request.role, &login_request.email)
        .await
    {
        Ok(Some(user)) => {
            // 2. 验证密码。未知邮箱与密码错误返回同一消息
            if verify_password(&login_request.password, &user.password_hash) {
                info!("User {} logged in successfully", user.email);
                Ok(HttpResponse::Ok().json(ApiResponse::success(user, "Login successful")))
            } else {
                Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                    ErrorCode::AuthFailed,
                    "Invalid credentials",
                )))
            }
        }
        Ok(None) => Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::AuthFailed,
            "Invalid credentials",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Login failed: {e}"),
            )),
        ),
    }
}
