//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_labportal_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum LabPortalError {
            $($variant(String),)*
        }

        impl LabPortalError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(LabPortalError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(LabPortalError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(LabPortalError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl LabPortalError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        LabPortalError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_labportal_errors! {
    Storage("E001", "Storage Error"),
    Serialization("E002", "Serialization Error"),
    Validation("E003", "Validation Error"),
    NotFound("E004", "Resource Not Found"),
    UnsupportedLanguage("E005", "Unsupported Language"),
    RuntimeNotFound("E006", "Runtime Not Found"),
    Execution("E007", "Execution Error"),
    Network("E008", "Network Error"),
}

impl LabPortalError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for LabPortalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for LabPortalError {}

// 为常见的错误类型实现 From trait
impl From<std::io::Error> for LabPortalError {
    fn from(err: std::io::Error) -> Self {
        LabPortalError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for LabPortalError {
    fn from(err: serde_json::Error) -> Self {
        LabPortalError::Serialization(err.to_string())
    }
}

impl From<reqwest::Error> for LabPortalError {
    fn from(err: reqwest::Error) -> Self {
        LabPortalError::Network(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LabPortalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(LabPortalError::storage("test").code(), "E001");
        assert_eq!(LabPortalError::validation("test").code(), "E003");
        assert_eq!(LabPortalError::unsupported_language("test").code(), "E005");
        assert_eq!(LabPortalError::execution("test").code(), "E007");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            LabPortalError::runtime_not_found("test").error_type(),
            "Runtime Not Found"
        );
        assert_eq!(
            LabPortalError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = LabPortalError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_format_simple() {
        let err = LabPortalError::execution("Remote engine unreachable");
        let formatted = err.format_simple();
        assert!(formatted.contains("Execution Error"));
        assert!(formatted.contains("Remote engine unreachable"));
    }
}
