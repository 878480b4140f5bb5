use crate::storage::Storage;
use std::sync::Arc;
use tracing::warn;

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 准备服务器启动的上下文
/// 包括存储初始化与集合文件引导
pub async fn prepare_server_startup() -> StartupContext {
    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized and collection files ready");

    // Piston 运行时列表按需懒加载，启动阶段不做预热：
    // 远程服务不可用不应阻塞本服务启动
    StartupContext { storage }
}
