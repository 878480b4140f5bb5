use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::SubmissionService;
use crate::models::submissions::requests::CreateSubmissionRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    submission_data: CreateSubmissionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 不校验被引用的作业/题目是否存在，也不对同题目旧提交去重：
    // 每次提交都是一条独立的追加记录
    match storage.create_submission(submission_data).await {
        Ok(submission) => {
            info!(
                "Submission {} created by {} for question {} ({} #{})",
                submission.id,
                submission.student_email,
                submission.question_id,
                submission.subject_code,
                submission.assignment_number
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(submission, "提交成功")))
        }
        Err(e) => {
            error!("Submission creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::SubmissionCreationFailed,
                    format!("提交失败: {e}"),
                )),
            )
        }
    }
}
