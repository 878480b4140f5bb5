//! LabPortal - 实验课提交平台后端服务
//!
//! 基于 Actix Web 构建的课程实验提交与批改系统后端。
//!
//! # 架构
//! - `config`: 配置管理
//! - `errors`: 统一错误处理
//! - `execution`: 远程代码执行网关（Piston）
//! - `models`: 数据模型定义
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（JSON 文件）
//! - `utils`: 工具函数

pub mod config;
pub mod errors;
pub mod execution;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
