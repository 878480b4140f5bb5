use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::AssignmentService;
use crate::models::assignments::requests::CreateAssignmentRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    assignment_data: CreateAssignmentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if assignment_data.assignment_number == 0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "作业编号必须是正整数",
        )));
    }

    match storage.create_assignment(assignment_data).await {
        Ok(assignment) => {
            info!(
                "Assignment {} ({} #{}) created by {}",
                assignment.id,
                assignment.subject_code,
                assignment.assignment_number,
                assignment.created_by
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(assignment, "作业创建成功")))
        }
        Err(e) => {
            error!("Assignment creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::AssignmentCreationFailed,
                    format!("作业创建失败: {e}"),
                )),
            )
        }
    }
}
