//! 提交存储操作
//!
//! 追加式集合：提交创建后永不删除，除 score 外任何字段不再变更。

use super::{JsonFileStorage, generate_id};
use crate::errors::Result;
use crate::models::submissions::{
    entities::Submission,
    requests::{CreateSubmissionRequest, SubmissionListQuery},
};

impl JsonFileStorage {
    /// 创建提交。不校验被引用的作业/题目是否存在（松耦合，
    /// 悬空引用由批改端展示时解析为 "Unknown"）。
    pub(crate) async fn create_submission_impl(
        &self,
        req: CreateSubmissionRequest,
    ) -> Result<Submission> {
        let submission = Submission {
            id: generate_id(),
            student_email: req.student_email,
            subject_code: req.subject_code,
            assignment_number: req.assignment_number,
            question_id: req.question_id,
            code: req.code,
            language: req.language,
            input: req.input,
            output: req.output,
            time_complexity: req.time_complexity,
            space_complexity: req.space_complexity,
            score: None,
            timestamp: chrono::Utc::now(),
        };

        let stored = submission.clone();
        self.submissions
            .mutate::<Submission, _, _>(move |records| records.push(stored))
            .await?;

        Ok(submission)
    }

    /// 列出提交，按提交时间倒序：同一题目存在多条提交时，
    /// 取返回序列首个匹配即为最近一次（恢复草稿的确定性选取策略）。
    pub(crate) async fn list_submissions_impl(
        &self,
        query: SubmissionListQuery,
    ) -> Result<Vec<Submission>> {
        let mut records: Vec<Submission> = self.submissions.load().await?;

        if let Some(email) = query.student_email {
            records.retain(|s| s.student_email == email);
        }

        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(records)
    }

    /// 设置分数。重复批改允许，直接覆盖分数值。
    pub(crate) async fn grade_submission_impl(
        &self,
        id: &str,
        score: i32,
    ) -> Result<Option<Submission>> {
        let id = id.to_string();
        self.submissions
            .mutate::<Submission, _, _>(move |records| {
                let submission = records.iter_mut().find(|s| s.id == id)?;
                submission.score = Some(score);
                Some(submission.clone())
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::assignments::entities::{SpaceComplexity, TimeComplexity};
    use crate::models::execution::entities::Language;

    fn submit_request(email: &str, question_id: &str) -> CreateSubmissionRequest {
        CreateSubmissionRequest {
            student_email: email.to_string(),
            subject_code: "CS501".to_string(),
            assignment_number: 1,
            question_id: question_id.to_string(),
            code: "print(1+1)".to_string(),
            language: Language::Python,
            input: String::new(),
            output: "2\n".to_string(),
            time_complexity: TimeComplexity::Constant,
            space_complexity: SpaceComplexity::Constant,
        }
    }

    #[tokio::test]
    async fn test_create_starts_ungraded() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::with_data_dir(dir.path()).await.unwrap();

        let before = chrono::Utc::now();
        let submission = storage
            .create_submission_impl(submit_request("s@example.com", "q1"))
            .await
            .unwrap();

        assert!(submission.score.is_none());
        assert!(!submission.is_graded());
        assert!(submission.timestamp >= before);
    }

    #[tokio::test]
    async fn test_resubmission_appends_instead_of_overwriting() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::with_data_dir(dir.path()).await.unwrap();

        storage
            .create_submission_impl(submit_request("s@example.com", "q1"))
            .await
            .unwrap();
        storage
            .create_submission_impl(submit_request("s@example.com", "q1"))
            .await
            .unwrap();

        let all = storage
            .list_submissions_impl(SubmissionListQuery::default())
            .await
            .unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn test_list_scopes_to_student_and_orders_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::with_data_dir(dir.path()).await.unwrap();

        let first = storage
            .create_submission_impl(submit_request("a@example.com", "q1"))
            .await
            .unwrap();
        let second = storage
            .create_submission_impl(submit_request("a@example.com", "q1"))
            .await
            .unwrap();
        storage
            .create_submission_impl(submit_request("b@example.com", "q1"))
            .await
            .unwrap();

        let mine = storage
            .list_submissions_impl(SubmissionListQuery {
                student_email: Some("a@example.com".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(mine.len(), 2);
        // 倒序：首个匹配即最近一次提交
        assert_eq!(mine[0].id, second.id);
        assert_eq!(mine[1].id, first.id);
    }

    #[tokio::test]
    async fn test_grade_sets_score_and_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::with_data_dir(dir.path()).await.unwrap();

        let submission = storage
            .create_submission_impl(submit_request("s@example.com", "q1"))
            .await
            .unwrap();

        let graded = storage
            .grade_submission_impl(&submission.id, 9)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(graded.score, Some(9));

        // 重复批改同一分数，终态不变
        let regraded = storage
            .grade_submission_impl(&submission.id, 9)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(regraded.score, Some(9));

        // 教师视角的全量列表能看到批改结果
        let all = storage
            .list_submissions_impl(SubmissionListQuery::default())
            .await
            .unwrap();
        assert_eq!(all[0].score, Some(9));
    }

    #[tokio::test]
    async fn test_grade_unknown_id_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::with_data_dir(dir.path()).await.unwrap();

        let result = storage.grade_submission_impl("missing", 5).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_grade_only_touches_score() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::with_data_dir(dir.path()).await.unwrap();

        let submission = storage
            .create_submission_impl(submit_request("s@example.com", "q1"))
            .await
            .unwrap();
        let graded = storage
            .grade_submission_impl(&submission.id, 7)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(graded.code, submission.code);
        assert_eq!(graded.output, submission.output);
        assert_eq!(graded.timestamp, submission.timestamp);
    }
}
