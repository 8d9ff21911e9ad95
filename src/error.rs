//! 统一错误处理模块
//!
//! 提供单词翻译工具的统一错误类型定义和处理机制

// 标准库导入
use std::fmt;

// 第三方crate导入
use anyhow::Error as AnyhowError;

// 本地模块导入
use crate::site_constants::messages;

/// 单词翻译工具统一错误类型
///
/// 定义了项目中可能出现的所有错误类型，提供统一的错误处理接口
#[derive(Debug)]
pub enum TranslateError {
    /// 网络请求相关错误
    Network {
        /// 错误消息
        message: String,
        /// HTTP状态码（如果适用）
        status_code: Option<u16>,
    },

    /// HTML解析相关错误
    HtmlParse {
        /// 具体错误信息
        details: String,
    },

    /// 文件操作相关错误
    FileOperation {
        /// 文件路径
        path: String,
        /// 操作类型（截断、追加等）
        operation: String,
        /// 底层错误信息
        source: String,
    },

    /// 语言被识别但不在支持列表中
    ///
    /// Display输出即面向用户的提示文案，调用方可以直接打印
    UnsupportedLanguage {
        /// 用户输入的语言名称（保留原始大小写）
        language: String,
    },

    /// 菜单编号超出有效范围
    MenuOutOfRange {
        /// 用户选择的编号
        choice: usize,
        /// 菜单最大有效编号
        max: usize,
    },

    /// 输入验证错误
    InvalidInput {
        /// 输入值
        input: String,
        /// 验证失败原因
        reason: String,
    },

    /// 内部处理错误（包装anyhow::Error）
    Internal {
        /// 包装的错误
        source: AnyhowError,
    },
}

impl fmt::Display for TranslateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslateError::Network { message, status_code } => {
                if let Some(code) = status_code {
                    write!(f, "网络请求失败 [{}]: {}", code, message)
                } else {
                    write!(f, "网络请求失败: {}", message)
                }
            }
            TranslateError::HtmlParse { details } => {
                write!(f, "HTML解析失败: {}", details)
            }
            TranslateError::FileOperation { path, operation, source } => {
                write!(f, "文件{}操作失败 [{}]: {}", operation, path, source)
            }
            TranslateError::UnsupportedLanguage { language } => {
                // 固定的用户可见文案，驱动层原样打印
                write!(f, "{}", messages::unsupported_language(language))
            }
            TranslateError::MenuOutOfRange { choice, max } => {
                write!(f, "菜单编号超出范围 [{}]: 有效范围为 0-{}", choice, max)
            }
            TranslateError::InvalidInput { input, reason } => {
                write!(f, "输入验证失败 [{}]: {}", input, reason)
            }
            TranslateError::Internal { source } => {
                write!(f, "内部处理错误: {}", source)
            }
        }
    }
}

impl std::error::Error for TranslateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TranslateError::Internal { source } => Some(source.as_ref()),
            _ => None,
        }
    }
}

/// 单词翻译工具结果类型别名
pub type Result<T> = std::result::Result<T, TranslateError>;

/// 便捷的错误创建宏
#[macro_export]
macro_rules! translate_error {
    (network, $msg:expr) => {
        TranslateError::Network {
            message: $msg.to_string(),
            status_code: None,
        }
    };
    (network, $msg:expr, $code:expr) => {
        TranslateError::Network {
            message: $msg.to_string(),
            status_code: Some($code),
        }
    };
    (html_parse, $details:expr) => {
        TranslateError::HtmlParse {
            details: $details.to_string(),
        }
    };
    (file_op, $path:expr, $op:expr, $source:expr) => {
        TranslateError::FileOperation {
            path: $path.to_string(),
            operation: $op.to_string(),
            source: $source.to_string(),
        }
    };
    (unsupported_language, $language:expr) => {
        TranslateError::UnsupportedLanguage {
            language: $language.to_string(),
        }
    };
    (menu_out_of_range, $choice:expr, $max:expr) => {
        TranslateError::MenuOutOfRange {
            choice: $choice,
            max: $max,
        }
    };
    (invalid_input, $input:expr, $reason:expr) => {
        TranslateError::InvalidInput {
            input: $input.to_string(),
            reason: $reason.to_string(),
        }
    };
}

/// 从anyhow::Error转换为TranslateError
impl From<AnyhowError> for TranslateError {
    fn from(error: AnyhowError) -> Self {
        TranslateError::Internal { source: error }
    }
}

/// 从reqwest::Error转换为TranslateError
impl From<reqwest::Error> for TranslateError {
    fn from(error: reqwest::Error) -> Self {
        let status_code = error.status().map(|s| s.as_u16());
        TranslateError::Network {
            message: error.to_string(),
            status_code,
        }
    }
}

/// 从std::io::Error转换为TranslateError
impl From<std::io::Error> for TranslateError {
    fn from(error: std::io::Error) -> Self {
        TranslateError::FileOperation {
            path: "unknown".to_string(),
            operation: "io".to_string(),
            source: error.to_string(),
        }
    }
}

/// 从url::ParseError转换为TranslateError
impl From<url::ParseError> for TranslateError {
    fn from(error: url::ParseError) -> Self {
        TranslateError::InvalidInput {
            input: "URL".to_string(),
            reason: error.to_string(),
        }
    }
}
