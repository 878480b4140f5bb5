use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use once_cell::sync::OnceCell;
use tracing::{error, info};

use super::ExecutionService;
use crate::errors::LabPortalError;
use crate::execution::PistonClient;
use crate::models::execution::{requests::ExecuteCodeRequest, responses::ExecuteCodeResponse};
use crate::models::{ApiResponse, ErrorCode};

// 进程级共享的 Piston 客户端（连接池复用）
static PISTON_CLIENT: OnceCell<PistonClient> = OnceCell::new();

/// 运行代码
/// POST /execute
pub async fn execute_code(
    _service: &ExecutionService,
    _request: &HttpRequest,
    req: ExecuteCodeRequest,
) -> ActixResult<HttpResponse> {
    let client = match PISTON_CLIENT.get_or_try_init(PistonClient::new) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to initialize Piston client: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("执行网关初始化失败: {e}"),
                )),
            );
        }
    };

    match client.execute(&req.language, &req.code, &req.stdin).await {
        Ok(output) => {
            info!("Executed {} snippet ({} bytes)", req.language, req.code.len());
            Ok(HttpResponse::Ok()
                .json(ApiResponse::success(ExecuteCodeResponse { output }, "执行成功")))
        }
        Err(e @ LabPortalError::UnsupportedLanguage(_)) => {
            Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::UnsupportedLanguage,
                e.message(),
            )))
        }
        Err(e @ LabPortalError::RuntimeNotFound(_)) => {
            Ok(HttpResponse::BadGateway().json(ApiResponse::error_empty(
                ErrorCode::RuntimeNotFound,
                e.message(),
            )))
        }
        Err(e) => {
            // Execution / Network / Serialization：远程执行服务侧失败
            error!("Remote execution failed: {}", e);
            Ok(HttpResponse::BadGateway().json(ApiResponse::error_empty(
                ErrorCode::ExecutionFailed,
                e.message(),
            )))
        }
    }
}
