pub mod run;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::execution::requests::ExecuteCodeRequest;

pub struct ExecutionService;

impl ExecutionService {
    pub fn new_lazy() -> Self {
        Self
    }

    /// 运行一段代码（结果不落盘）
    pub async fn execute_code(
        &self,
        request: &HttpRequest,
        req: ExecuteCodeRequest,
    ) -> ActixResult<HttpResponse> {
        run::execute_code(self, request, req).await
    }
}
