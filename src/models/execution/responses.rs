use serde::Serialize;
use ts_rs::TS;

/// 运行代码响应
///
/// output 为远程执行结果的原样运行输出（stdout+stderr 交织，
/// 编译失败时含编译错误），本服务不做任何解析。
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/execution.ts")]
pub struct ExecuteCodeResponse {
    pub output: String,
}
