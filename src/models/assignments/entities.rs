use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::users::entities::Batch;

/// 时间复杂度标签
///
/// 仅作展示与元数据，不与实际运行行为做任何比对。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub enum TimeComplexity {
    #[serde(rename = "O(1)")]
    Constant,
    #[serde(rename = "O(log n)")]
    Logarithmic,
    #[serde(rename = "O(n)")]
    Linear,
    #[serde(rename = "O(n log n)")]
    Linearithmic,
    #[serde(rename = "O(n^2)")]
    Quadratic,
}

/// 空间复杂度标签
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub enum SpaceComplexity {
    #[serde(rename = "O(1)")]
    Constant,
    #[serde(rename = "O(n)")]
    Linear,
}

/// 题目
///
/// 内嵌于作业之中，无独立生命周期。id 由客户端生成，仅在所属作业内唯一。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct Question {
    pub id: String,
    pub title: String,
    pub description: String,
    pub expected_time_complexity: TimeComplexity,
    pub expected_space_complexity: SpaceComplexity,
}

/// 作业
///
/// 题目顺序即展示与识别顺序。assignment_number 在 (subject_code, batch)
/// 内唯一仅是约定，不做强制。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct Assignment {
    pub id: String,
    pub subject_code: String,
    pub batch: Batch,
    pub assignment_number: u32,
    pub questions: Vec<Question>,
    /// 创建者（教师邮箱），仅创建者可编辑/删除
    pub created_by: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complexity_wire_form() {
        assert_eq!(
            serde_json::to_string(&TimeComplexity::Linearithmic).unwrap(),
            "\"O(n log n)\""
        );
        let c: TimeComplexity = serde_json::from_str("\"O(n^2)\"").unwrap();
        assert_eq!(c, TimeComplexity::Quadratic);
        let s: SpaceComplexity = serde_json::from_str("\"O(1)\"").unwrap();
        assert_eq!(s, SpaceComplexity::Constant);
    }

    #[test]
    fn test_complexity_rejects_unknown_label() {
        let result: Result<TimeComplexity, _> = serde_json::from_str("\"O(2^n)\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_assignment_wire_field_names() {
        let assignment = Assignment {
            id: "a1".to_string(),
            subject_code: "CS501".to_string(),
            batch: Batch::X,
            assignment_number: 1,
            questions: vec![],
            created_by: "t@example.com".to_string(),
            created_at: chrono::Utc::now(),
        };
        let json = serde_json::to_string(&assignment).unwrap();
        assert!(json.contains("subjectCode"));
        assert!(json.contains("assignmentNumber"));
        assert!(json.contains("createdBy"));
    }
}
