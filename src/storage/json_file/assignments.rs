//! 作业存储操作

use super::{JsonFileStorage, generate_id};
use crate::errors::Result;
use crate::models::assignments::{
    entities::Assignment,
    requests::{AssignmentListQuery, CreateAssignmentRequest, UpdateAssignmentRequest},
};

impl JsonFileStorage {
    /// 创建作业，题目列表（含客户端生成的题目 id）原样存储
    pub(crate) async fn create_assignment_impl(
        &self,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        let assignment = Assignment {
            id: generate_id(),
            subject_code: req.subject_code,
            batch: req.batch,
            assignment_number: req.assignment_number,
            questions: req.questions,
            created_by: req.created_by,
            created_at: chrono::Utc::now(),
        };

        let stored = assignment.clone();
        self.assignments
            .mutate::<Assignment, _, _>(move |records| records.push(stored))
            .await?;

        Ok(assignment)
    }

    /// 列出作业，按创建时间倒序
    pub(crate) async fn list_assignments_impl(
        &self,
        query: AssignmentListQuery,
    ) -> Result<Vec<Assignment>> {
        let mut records: Vec<Assignment> = self.assignments.load().await?;

        if let Some(batch) = query.batch {
            records.retain(|a| a.batch == batch);
        }

        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }

    /// 浅合并更新：缺省字段保留原值，questions 提供时整体替换。
    /// id、created_by、created_at 不可变更。
    pub(crate) async fn update_assignment_impl(
        &self,
        id: &str,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>> {
        let id = id.to_string();
        self.assignments
            .mutate::<Assignment, _, _>(move |records| {
                let assignment = records.iter_mut().find(|a| a.id == id)?;

                if let Some(subject_code) = update.subject_code {
                    assignment.subject_code = subject_code;
                }
                if let Some(batch) = update.batch {
                    assignment.batch = batch;
                }
                if let Some(assignment_number) = update.assignment_number {
                    assignment.assignment_number = assignment_number;
                }
                if let Some(questions) = update.questions {
                    assignment.questions = questions;
                }

                Some(assignment.clone())
            })
            .await
    }

    /// 删除作业。引用它的提交保持原样（孤儿提交仍是合法独立记录）。
    pub(crate) async fn delete_assignment_impl(&self, id: &str) -> Result<bool> {
        let id = id.to_string();
        self.assignments
            .mutate::<Assignment, _, _>(move |records| {
                let before = records.len();
                records.retain(|a| a.id != id);
                records.len() != before
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::assignments::entities::{Question, SpaceComplexity, TimeComplexity};
    use crate::models::users::entities::Batch;

    fn question(id: &str) -> Question {
        Question {
            id: id.to_string(),
            title: "两数之和".to_string(),
            description: "给定数组与目标值，求下标".to_string(),
            expected_time_complexity: TimeComplexity::Linear,
            expected_space_complexity: SpaceComplexity::Linear,
        }
    }

    fn create_request(subject: &str, batch: Batch, number: u32) -> CreateAssignmentRequest {
        CreateAssignmentRequest {
            subject_code: subject.to_string(),
            batch,
            assignment_number: number,
            questions: vec![question("q1")],
            created_by: "t@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn test_list_filters_by_batch() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::with_data_dir(dir.path()).await.unwrap();

        storage
            .create_assignment_impl(create_request("CS501", Batch::X, 1))
            .await
            .unwrap();
        storage
            .create_assignment_impl(create_request("CS501", Batch::Y, 2))
            .await
            .unwrap();

        let x_only = storage
            .list_assignments_impl(AssignmentListQuery { batch: Some(Batch::X) })
            .await
            .unwrap();
        assert_eq!(x_only.len(), 1);
        assert_eq!(x_only[0].batch, Batch::X);

        let all = storage
            .list_assignments_impl(AssignmentListQuery { batch: None })
            .await
            .unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn test_update_merges_and_keeps_omitted_fields() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::with_data_dir(dir.path()).await.unwrap();

        let created = storage
            .create_assignment_impl(create_request("CS501", Batch::X, 1))
            .await
            .unwrap();

        let updated = storage
            .update_assignment_impl(
                &created.id,
                UpdateAssignmentRequest {
                    subject_code: Some("CS999".to_string()),
                    batch: None,
                    assignment_number: None,
                    questions: None,
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.subject_code, "CS999");
        assert_eq!(updated.batch, Batch::X);
        assert_eq!(updated.assignment_number, 1);
        assert_eq!(updated.questions.len(), 1);
        assert_eq!(updated.created_at, created.created_at);

        // 列表中也能看到合并后的记录
        let all = storage
            .list_assignments_impl(AssignmentListQuery { batch: None })
            .await
            .unwrap();
        assert_eq!(all[0].subject_code, "CS999");
    }

    #[tokio::test]
    async fn test_update_replaces_question_list_wholesale() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::with_data_dir(dir.path()).await.unwrap();

        let created = storage
            .create_assignment_impl(create_request("CS501", Batch::X, 1))
            .await
            .unwrap();

        let updated = storage
            .update_assignment_impl(
                &created.id,
                UpdateAssignmentRequest {
                    subject_code: None,
                    batch: None,
                    assignment_number: None,
                    questions: Some(vec![question("q2"), question("q3")]),
                },
            )
            .await
            .unwrap()
            .unwrap();

        let ids: Vec<&str> = updated.questions.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, vec!["q2", "q3"]);
    }

    #[tokio::test]
    async fn test_update_unknown_id_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::with_data_dir(dir.path()).await.unwrap();

        let result = storage
            .update_assignment_impl(
                "missing",
                UpdateAssignmentRequest {
                    subject_code: Some("CS999".to_string()),
                    batch: None,
                    assignment_number: None,
                    questions: None,
                },
            )
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_unknown_id_leaves_collection_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::with_data_dir(dir.path()).await.unwrap();

        storage
            .create_assignment_impl(create_request("CS501", Batch::X, 1))
            .await
            .unwrap();

        let deleted = storage.delete_assignment_impl("missing").await.unwrap();
        assert!(!deleted);

        let all = storage
            .list_assignments_impl(AssignmentListQuery { batch: None })
            .await
            .unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_existing() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::with_data_dir(dir.path()).await.unwrap();

        let created = storage
            .create_assignment_impl(create_request("CS501", Batch::X, 1))
            .await
            .unwrap();

        assert!(storage.delete_assignment_impl(&created.id).await.unwrap());
        let all = storage
            .list_assignments_impl(AssignmentListQuery { batch: None })
            .await
            .unwrap();
        assert!(all.is_empty());
    }
}
