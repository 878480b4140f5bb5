use serde::Deserialize;
use ts_rs::TS;

use crate::models::assignments::entities::Question;
use crate::models::users::entities::Batch;

/// 创建作业请求
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct CreateAssignmentRequest {
    pub subject_code: String,
    pub batch: Batch,
    pub assignment_number: u32,
    /// 题目列表按提交顺序存储，题目 id 由客户端生成并原样保留
    pub questions: Vec<Question>,
    pub created_by: String,
}

/// 更新作业请求
///
/// 浅合并：缺省字段保留原值。questions 若提供则整体替换，不做嵌套合并。
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct UpdateAssignmentRequest {
    pub subject_code: Option<String>,
    pub batch: Option<Batch>,
    pub assignment_number: Option<u32>,
    pub questions: Option<Vec<Question>>,
}

/// 作业列表查询参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentListQuery {
    /// 缺省时返回全部批次（教师视角）；提供时精确过滤（学生视角）
    pub batch: Option<Batch>,
}
