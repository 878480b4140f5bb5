//! JSON 文件存储实现
//!
//! 每个集合对应数据目录下的一个 JSON 数组文件。每次变更都在集合写锁内
//! 完成整个 读取-解析-修改-重写 周期，单写者纪律消除了并发写之间的
//! 丢失更新竞态。

mod assignments;
mod submissions;
mod users;

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;
use tracing::info;

use crate::config::AppConfig;
use crate::errors::{LabPortalError, Result};

/// 单个集合：文件路径 + 串行化读写的锁
pub(crate) struct Collection {
    path: PathBuf,
    lock: RwLock<()>,
}

impl Collection {
    fn new(dir: &Path, file_name: &str) -> Self {
        Self {
            path: dir.join(file_name),
            lock: RwLock::new(()),
        }
    }

    /// 文件不存在时写入空数组
    async fn ensure_exists(&self) -> Result<()> {
        if tokio::fs::try_exists(&self.path).await? {
            return Ok(());
        }
        info!("Creating empty collection file: {}", self.path.display());
        tokio::fs::write(&self.path, "[]")
            .await
            .map_err(|e| LabPortalError::storage(format!("创建集合文件失败: {e}")))
    }

    async fn read_records<T: DeserializeOwned>(&self) -> Result<Vec<T>> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| LabPortalError::storage(format!("读取集合文件失败: {e}")))?;
        serde_json::from_str(&raw)
            .map_err(|e| LabPortalError::serialization(format!("解析集合文件失败: {e}")))
    }

    async fn write_records<T: Serialize>(&self, records: &[T]) -> Result<()> {
        // 与原始数据文件格式保持一致：带缩进的 JSON
        let raw = serde_json::to_string_pretty(records)
            .map_err(|e| LabPortalError::serialization(format!("序列化集合失败: {e}")))?;
        tokio::fs::write(&self.path, raw)
            .await
            .map_err(|e| LabPortalError::storage(format!("写入集合文件失败: {e}")))
    }

    /// 读锁内加载全部记录
    pub(crate) async fn load<T: DeserializeOwned>(&self) -> Result<Vec<T>> {
        let _guard = self.lock.read().await;
        self.read_records().await
    }

    /// 写锁内执行 读取-修改-重写
    pub(crate) async fn mutate<T, R, F>(&self, f: F) -> Result<R>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce(&mut Vec<T>) -> R,
    {
        let _guard = self.lock.write().await;
        let mut records: Vec<T> = self.read_records().await?;
        let result = f(&mut records);
        self.write_records(&records).await?;
        Ok(result)
    }
}

/// JSON 文件存储
pub struct JsonFileStorage {
    pub(crate) students: Collection,
    pub(crate) teachers: Collection,
    pub(crate) assignments: Collection,
    pub(crate) submissions: Collection,
}

impl JsonFileStorage {
    /// 使用全局配置的数据目录创建存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        Self::with_data_dir(Path::new(&config.storage.data_dir)).await
    }

    /// 在指定目录创建存储实例，目录与集合文件不存在时自动初始化
    pub async fn with_data_dir(dir: &Path) -> Result<Self> {
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| LabPortalError::storage(format!("创建数据目录失败: {e}")))?;

        let storage = Self {
            students: Collection::new(dir, "students.json"),
            teachers: Collection::new(dir, "teachers.json"),
            assignments: Collection::new(dir, "assignments.json"),
            submissions: Collection::new(dir, "submissions.json"),
        };

        storage.students.ensure_exists().await?;
        storage.teachers.ensure_exists().await?;
        storage.assignments.ensure_exists().await?;
        storage.submissions.ensure_exists().await?;

        info!("JSON 文件存储初始化完成，数据目录: {}", dir.display());
        Ok(storage)
    }
}

/// 生成集合内唯一的不透明记录标识
pub(crate) fn generate_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

// Storage trait 实现
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
use crate::storage::Storage;

#[async_trait::async_trait]
impl Storage for JsonFileStorage {
    async fn create_user(&self, user: RegisterRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_email(&self, role: UserRole, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(role, email).await
    }

    async fn create_assignment(&self, assignment: CreateAssignmentRequest) -> Result<Assignment> {
        self.create_assignment_impl(assignment).await
    }

    async fn list_assignments(&self, query: AssignmentListQuery) -> Result<Vec<Assignment>> {
        self.list_assignments_impl(query).await
    }

    async fn update_assignment(
        &self,
        id: &str,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>> {
        self.update_assignment_impl(id, update).await
    }

    async fn delete_assignment(&self, id: &str) -> Result<bool> {
        self.delete_assignment_impl(id).await
    }

    async fn create_submission(&self, submission: CreateSubmissionRequest) -> Result<Submission> {
        self.create_submission_impl(submission).await
    }

    async fn list_submissions(&self, query: SubmissionListQuery) -> Result<Vec<Submission>> {
        self.list_submissions_impl(query).await
    }

    async fn grade_submission(&self, id: &str, score: i32) -> Result<Option<Submission>> {
        self.grade_submission_impl(id, score).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::assignments::entities::Assignment;

    #[tokio::test]
    async fn test_bootstrap_creates_collection_files() {
        let dir = tempfile::tempdir().unwrap();
        let _storage = JsonFileStorage::with_data_dir(dir.path()).await.unwrap();

        for name in [
            "students.json",
            "teachers.json",
            "assignments.json",
            "submissions.json",
        ] {
            let raw = std::fs::read_to_string(dir.path().join(name)).unwrap();
            assert_eq!(raw, "[]");
        }
    }

    #[tokio::test]
    async fn test_reopen_preserves_records() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::with_data_dir(dir.path()).await.unwrap();

        storage
            .assignments
            .mutate::<Assignment, _, _>(|records| {
                records.push(Assignment {
                    id: "a1".to_string(),
                    subject_code: "CS501".to_string(),
                    batch: crate::models::users::entities::Batch::X,
                    assignment_number: 1,
                    questions: vec![],
                    created_by: "t@example.com".to_string(),
                    created_at: chrono::Utc::now(),
                });
            })
            .await
            .unwrap();

        // 第二个实例读取同一目录，应看到先前写入的记录
        let reopened = JsonFileStorage::with_data_dir(dir.path()).await.unwrap();
        let records: Vec<Assignment> = reopened.assignments.load().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "a1");
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = generate_id();
        let b = generate_id();
        assert_ne!(a, b);
        assert!(!a.contains('-'));
    }
}
