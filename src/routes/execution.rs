use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::execution::requests::ExecuteCodeRequest;
use crate::services::ExecutionService;

// 懒加载的全局 ExecutionService 实例
static EXECUTION_SERVICE: Lazy<ExecutionService> = Lazy::new(ExecutionService::new_lazy);

// 运行代码（临时执行，结果不落盘）
pub async fn execute_code(
    req: HttpRequest,
    body: web::Json<ExecuteCodeRequest>,
) -> ActixResult<HttpResponse> {
    EXECUTION_SERVICE.execute_code(&req, body.into_inner()).await
}

// 配置路由
pub fn configure_execution_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/execute").route("", web::post().to(execute_code)),
    );
}
