use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::SubmissionService;
use crate::models::submissions::requests::GradeSubmissionRequest;
use crate::models::{ApiResponse, ErrorCode};

/// 批改提交
/// PUT /submissions/{id}
pub async fn grade_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    submission_id: &str,
    grade_request: GradeSubmissionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 分数区间校验失败时不触碰存储，原有分数保持不变
    if let Err(msg) = grade_request.validate() {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ScoreInvalid, msg)));
    }

    match storage
        .grade_submission(submission_id, grade_request.score)
        .await
    {
        Ok(Some(submission)) => {
            info!(
                "Submission {} graded with score {}",
                submission.id, grade_request.score
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(submission, "批改成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubmissionNotFound,
            "Submission not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("批改失败: {e}"),
            )),
        ),
    }
}
