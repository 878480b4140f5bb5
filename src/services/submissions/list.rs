use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubmissionService;
use crate::models::submissions::requests::{SubmissionListParams, SubmissionListQuery};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_submissions(
    service: &SubmissionService,
    request: &HttpRequest,
    params: SubmissionListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 可见范围：学生只能看自己的提交，教师可以看全部提交
    // （跨学生、跨出题教师，不按作业归属做范围限制）
    let query = match params.role {
        Some(UserRole::Student) => match params.email {
            Some(email) => SubmissionListQuery {
                student_email: Some(email),
            },
            None => {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::BadRequest,
                    "学生视角查询必须提供 email 参数",
                )));
            }
        },
        _ => SubmissionListQuery::default(),
    };

    match storage.list_submissions(query).await {
        Ok(submissions) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(submissions, "查询成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询提交列表失败: {e}"),
            )),
        ),
    }
}
