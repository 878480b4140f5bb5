use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::OnceCell;
use tracing::warn;

use crate::config::AppConfig;
use crate::errors::{LabPortalError, Result};
use crate::models::execution::entities::Language;

/// 进程级运行时缓存：首次成功拉取后常驻，无 TTL。
/// 运行时可用性极少变化，陈旧可接受；拉取失败不会污染缓存，
/// 当次请求走固定回退表，下一次调用重新尝试拉取。
static RUNTIME_CACHE: OnceCell<Vec<Runtime>> = OnceCell::const_new();

/// Piston 运行时描述
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Runtime {
    pub language: String,
    pub version: String,
    #[serde(default)]
    pub aliases: Vec<String>,
}

#[derive(Serialize)]
struct ExecuteFile<'a> {
    name: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct PistonExecuteRequest<'a> {
    language: &'a str,
    version: &'a str,
    files: Vec<ExecuteFile<'a>>,
    stdin: &'a str,
}

#[derive(Deserialize)]
struct PistonRunResult {
    #[serde(default)]
    output: String,
}

#[derive(Deserialize)]
struct PistonExecuteResponse {
    run: PistonRunResult,
}

#[derive(Deserialize)]
struct PistonErrorResponse {
    message: Option<String>,
}

/// Piston 执行客户端
///
/// 无重试策略：单次网络失败直接上抛，由调用方（前端重新点击 Run）负责重试。
/// 沙箱、超时、资源限制全部委托远程服务，本侧仅设客户端级请求超时。
pub struct PistonClient {
    http: reqwest::Client,
    base_url: String,
}

impl PistonClient {
    /// 使用全局配置创建客户端
    pub fn new() -> Result<Self> {
        let config = AppConfig::get();
        Self::with_base_url(&config.execution.api_url, config.execution.timeout)
    }

    pub fn with_base_url(base_url: &str, timeout_secs: u64) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| LabPortalError::network(format!("构建 HTTP 客户端失败: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// 远程运行时列表不可用时的固定回退表（降级模式的钉死版本）
    fn fallback_runtimes() -> Vec<Runtime> {
        vec![
            Runtime {
                language: "python".to_string(),
                version: "3.10.0".to_string(),
                aliases: vec!["py".to_string()],
            },
            Runtime {
                language: "java".to_string(),
                version: "15.0.2".to_string(),
                aliases: vec![],
            },
            Runtime {
                language: "c".to_string(),
                version: "10.2.0".to_string(),
                aliases: vec!["gcc".to_string()],
            },
            Runtime {
                language: "c++".to_string(),
                version: "10.2.0".to_string(),
                aliases: vec!["cpp".to_string(), "g++".to_string()],
            },
        ]
    }

    /// 语言名精确匹配优先，其次别名匹配
    fn resolve_runtime<'a>(runtimes: &'a [Runtime], piston_language: &str) -> Option<&'a Runtime> {
        runtimes
            .iter()
            .find(|r| r.language == piston_language)
            .or_else(|| {
                runtimes
                    .iter()
                    .find(|r| r.aliases.iter().any(|alias| alias == piston_language))
            })
    }

    async fn fetch_runtimes(&self) -> Result<Vec<Runtime>> {
        let response = self
            .http
            .get(format!("{}/runtimes", self.base_url))
            .send()
            .await?
            .error_for_status()
            .map_err(|e| LabPortalError::network(format!("拉取运行时列表失败: {e}")))?;

        response
            .json::<Vec<Runtime>>()
            .await
            .map_err(|e| LabPortalError::serialization(format!("解析运行时列表失败: {e}")))
    }

    /// 懒加载运行时列表；失败时降级到回退表
    async fn runtimes(&self) -> Vec<Runtime> {
        match RUNTIME_CACHE.get_or_try_init(|| self.fetch_runtimes()).await {
            Ok(runtimes) => runtimes.clone(),
            Err(e) => {
                warn!("Piston runtime listing failed, using pinned fallback table: {e}");
                Self::fallback_runtimes()
            }
        }
    }

    /// 执行一段代码，返回远程运行输出原文
    ///
    /// 不支持的语言标签在发起任何网络调用之前即报错。
    pub async fn execute(&self, language_label: &str, source: &str, stdin: &str) -> Result<String> {
        let language = Language::from_str(language_label).map_err(|_| {
            LabPortalError::unsupported_language(format!("不支持的语言: {language_label}"))
        })?;

        let runtimes = self.runtimes().await;
        let runtime = Self::resolve_runtime(&runtimes, language.piston_language()).ok_or_else(
            || LabPortalError::runtime_not_found(format!("找不到 {language} 的可用运行时")),
        )?;

        let request = PistonExecuteRequest {
            language: &runtime.language,
            version: &runtime.version,
            files: vec![ExecuteFile {
                name: language.file_name(),
                content: source,
            }],
            stdin,
        };

        let response = self
            .http
            .post(format!("{}/execute", self.base_url))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let message = response
                .json::<PistonErrorResponse>()
                .await
                .ok()
                .and_then(|e| e.message)
                .unwrap_or_else(|| "Execution failed".to_string());
            return Err(LabPortalError::execution(message));
        }

        let result: PistonExecuteResponse = response
            .json()
            .await
            .map_err(|e| LabPortalError::serialization(format!("解析执行结果失败: {e}")))?;

        Ok(result.run.output)
    }
}
