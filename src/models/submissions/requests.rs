use serde::Deserialize;
use ts_rs::TS;

use crate::models::assignments::entities::{SpaceComplexity, TimeComplexity};
use crate::models::execution::entities::Language;
use crate::models::users::entities::UserRole;

/// 提交评分的上下界
pub const SCORE_MIN: i32 = 0;
pub const SCORE_MAX: i32 = 10;

/// 创建提交请求
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct CreateSubmissionRequest {
    pub student_email: String,
    pub subject_code: String,
    pub assignment_number: u32,
    pub question_id: String,
    pub code: String,
    pub language: Language,
    #[serde(default)]
    pub input: String,
    #[serde(default)]
    pub output: String,
    pub time_complexity: TimeComplexity,
    pub space_complexity: SpaceComplexity,
}

/// 评分请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct GradeSubmissionRequest {
    pub score: i32,
}

impl GradeSubmissionRequest {
    /// 校验分数区间 [0, 10]
    pub fn validate(&self) -> Result<(), String> {
        if (SCORE_MIN..=SCORE_MAX).contains(&self.score) {
            Ok(())
        } else {
            Err(format!(
                "分数必须是 {SCORE_MIN} 到 {SCORE_MAX} 之间的整数，收到: {}",
                self.score
            ))
        }
    }
}

/// 提交列表查询参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmissionListParams {
    pub email: Option<String>,
    pub role: Option<UserRole>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone, Default)]
pub struct SubmissionListQuery {
    /// Some 时只返回该学生的提交
    pub student_email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_bounds() {
        assert!(GradeSubmissionRequest { score: 0 }.validate().is_ok());
        assert!(GradeSubmissionRequest { score: 10 }.validate().is_ok());
        assert!(GradeSubmissionRequest { score: -1 }.validate().is_err());
        assert!(GradeSubmissionRequest { score: 11 }.validate().is_err());
    }

    #[test]
    fn test_fractional_score_rejected_at_deserialization() {
        let result: Result<GradeSubmissionRequest, _> =
            serde_json::from_str(r#"{"score": 7.5}"#);
        assert!(result.is_err());
    }
}
