use serde::Deserialize;
use ts_rs::TS;

/// 运行代码请求（"Run" 按钮，结果不落盘）
///
/// language 保持字符串形态：不支持的语言要在网关内判定并在发起任何
/// 网络调用之前直接报错，而不是在反序列化阶段被挡下。
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/execution.ts")]
pub struct ExecuteCodeRequest {
    pub language: String,
    pub code: String,
    #[serde(default)]
    pub stdin: String,
}
