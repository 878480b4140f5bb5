use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::assignments::entities::{SpaceComplexity, TimeComplexity};
use crate::models::execution::entities::Language;

/// 学生提交
///
/// 追加式记录：同一 (学生, 题目) 允许多条提交并存。question_id 是松散引用，
/// 通过 subject_code + assignment_number + question_id 按值匹配解析，
/// 目标缺失时由前端展示 "Unknown"，后端不做引用完整性校验。
/// 创建后除 score 外任何字段不再变更。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct Submission {
    pub id: String,
    pub student_email: String,
    pub subject_code: String,
    pub assignment_number: u32,
    pub question_id: String,
    pub code: String,
    pub language: Language,
    /// 提交时使用的标准输入
    pub input: String,
    /// 提交时捕获的运行输出（stdout+stderr 交织）
    pub output: String,
    /// 学生自报复杂度估计
    pub time_complexity: TimeComplexity,
    pub space_complexity: SpaceComplexity,
    /// None = 未批改；Some(v) 时 v ∈ 0..=10
    pub score: Option<i32>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl Submission {
    /// 是否已批改
    pub fn is_graded(&self) -> bool {
        self.score.is_some()
    }
}
