use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 支持的编程语言
//
// 调用方只接触人类可读标签（"C++"、"Python"），Piston 的
// language/version 概念由执行网关内部消化。
#[derive(Debug, Clone, Copy, Serialize, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/execution.ts")]
pub enum Language {
    C,
    #[serde(rename = "C++")]
    Cpp,
    Java,
    Python,
}

impl Language {
    /// 人类可读标签，与提交记录及前端使用的一致
    pub fn label(&self) -> &'static str {
        match self {
            Language::C => "C",
            Language::Cpp => "C++",
            Language::Java => "Java",
            Language::Python => "Python",
        }
    }

    /// Piston 侧的语言名
    pub fn piston_language(&self) -> &'static str {
        match self {
            Language::C => "c",
            Language::Cpp => "c++",
            Language::Java => "java",
            Language::Python => "python",
        }
    }

    /// 提交给 Piston 的源文件名
    pub fn file_name(&self) -> &'static str {
        match self {
            Language::C => "main.c",
            Language::Cpp => "main.cpp",
            Language::Java => "Main.java",
            Language::Python => "main.py",
        }
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的语言: '{s}'. 支持的语言: C, C++, Java, Python"
            ))
        })
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "C" => Ok(Language::C),
            "C++" => Ok(Language::Cpp),
            "Java" => Ok(Language::Java),
            "Python" => Ok(Language::Python),
            _ => Err(format!("Unsupported language: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_language_wire_form() {
        assert_eq!(serde_json::to_string(&Language::Cpp).unwrap(), "\"C++\"");
        let lang: Language = serde_json::from_str("\"Python\"").unwrap();
        assert_eq!(lang, Language::Python);
    }

    #[test]
    fn test_language_rejects_unknown() {
        assert!(Language::from_str("COBOL").is_err());
        let result: Result<Language, _> = serde_json::from_str("\"cobol\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_file_name_map() {
        assert_eq!(Language::Python.file_name(), "main.py");
        assert_eq!(Language::Java.file_name(), "Main.java");
        assert_eq!(Language::C.file_name(), "main.c");
        assert_eq!(Language::Cpp.file_name(), "main.cpp");
    }

    #[test]
    fn test_piston_language_map() {
        assert_eq!(Language::Cpp.piston_language(), "c++");
        assert_eq!(Language::Python.piston_language(), "python");
    }
}
