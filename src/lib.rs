//! Reverso CLI - 命令行单词翻译工具库
//!
//! 这个库提供了翻译页面抓取、HTML内容提取、语言目录管理和结果展示等核心功能。

pub mod catalog;
pub mod error;
pub mod extractor;
pub mod fetcher;
pub mod presenter;
pub mod query;
pub mod session;
pub mod site_constants;
pub mod utils;
