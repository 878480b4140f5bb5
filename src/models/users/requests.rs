use serde::Deserialize;
use ts_rs::TS;

use crate::models::users::entities::{Batch, UserRole};

/// 注册请求
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub role: UserRole,
    /// 教师显示名
    pub name: Option<String>,
    /// 学生批次
    pub batch: Option<Batch>,
}

/// 登录请求
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub role: UserRole,
}
