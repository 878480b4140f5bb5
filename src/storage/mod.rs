use std::sync::Arc;

use crate::models::{
    assignments::{
        entities::Assignment,
        requests::{AssignmentListQuery, CreateAssignmentRequest, UpdateAssignmentRequest},
    },
    submissions::{
        entities::Submission,
        requests::{CreateSubmissionRequest, SubmissionListQuery},
    },
    users::{
        entities::{User, UserRole},
        requests::RegisterRequest,
    },
};

use crate::errors::Result;

pub mod json_file;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户（密码已在业务层哈希完成）
    async fn create_user(&self, user: RegisterRequest) -> Result<User>;
    // 在角色所属集合内按邮箱获取用户
    async fn get_user_by_email(&self, role: UserRole, email: &str) -> Result<Option<User>>;

    /// 作业管理方法
    // 创建作业
    async fn create_assignment(&self, assignment: CreateAssignmentRequest) -> Result<Assignment>;
    // 列出作业（可按批次过滤），按创建时间倒序
    async fn list_assignments(&self, query: AssignmentListQuery) -> Result<Vec<Assignment>>;
    // 浅合并更新作业
    async fn update_assignment(
        &self,
        id: &str,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>>;
    // 删除作业（不级联删除提交）
    async fn delete_assignment(&self, id: &str) -> Result<bool>;

    /// 提交管理方法
    // 创建提交（追加式，score 初始为 None）
    async fn create_submission(&self, submission: CreateSubmissionRequest) -> Result<Submission>;
    // 列出提交（可按学生邮箱过滤），按提交时间倒序
    async fn list_submissions(&self, query: SubmissionListQuery) -> Result<Vec<Submission>>;
    // 设置提交分数（唯一允许的字段变更）
    async fn grade_submission(&self, id: &str, score: i32) -> Result<Option<Submission>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = json_file::JsonFileStorage::new_async().await?;
    Ok(Arc::new(storage))
}
