//! 用户存储操作
//!
//! 学生与教师各自一个集合文件，邮箱在集合内唯一由业务层先行检查。

use super::{Collection, JsonFileStorage, generate_id};
use crate::errors::Result;
use crate::models::users::{
    entities::{User, UserRole},
    requests::RegisterRequest,
};

impl JsonFileStorage {
    fn users_collection(&self, role: UserRole) -> &Collection {
        match role {
            UserRole::Student => &self.students,
            UserRole::Teacher => &self.teachers,
        }
    }

    /// 创建用户，调用方保证 password 已是哈希
    pub(crate) async fn create_user_impl(&self, req: RegisterRequest) -> Result<User> {
        let user = User {
            id: generate_id(),
            email: req.email,
            password_hash: req.password,
            role: req.role,
            name: req.name,
            batch: req.batch,
            created_at: chrono::Utc::now(),
        };

        let stored = user.clone();
        self.users_collection(req.role)
            .mutate::<User, _, _>(move |records| records.push(stored))
            .await?;

        Ok(user)
    }

    pub(crate) async fn get_user_by_email_impl(
        &self,
        role: UserRole,
        email: &str,
    ) -> Result<Option<User>> {
        let records: Vec<User> = self.users_collection(role).load().await?;
        Ok(records.into_iter().find(|u| u.email == email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::users::entities::Batch;

    fn register_request(email: &str, role: UserRole) -> RegisterRequest {
        RegisterRequest {
            email: email.to_string(),
            password: "$argon2id$fake-hash".to_string(),
            role,
            name: matches!(role, UserRole::Teacher).then(|| "张老师".to_string()),
            batch: matches!(role, UserRole::Student).then_some(Batch::X),
        }
    }

    #[tokio::test]
    async fn test_create_and_lookup_by_role() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::with_data_dir(dir.path()).await.unwrap();

        let student = storage
            .create_user_impl(register_request("s@example.com", UserRole::Student))
            .await
            .unwrap();
        assert_eq!(student.batch, Some(Batch::X));

        // 角色集合彼此隔离
        let found = storage
            .get_user_by_email_impl(UserRole::Student, "s@example.com")
            .await
            .unwrap();
        assert!(found.is_some());
        let missing = storage
            .get_user_by_email_impl(UserRole::Teacher, "s@example.com")
            .await
            .unwrap();
        assert!(missing.is_none());
    }
}
