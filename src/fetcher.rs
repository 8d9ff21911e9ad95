//! 页面抓取模块
//!
//! 此模块负责：
//! - 以浏览器User-Agent向目标URL发起GET请求
//! - 返回响应体原始HTML文本
//! - 暴露传输层失败，不做重试

// 标准库导入
use std::time::Duration;

// 第三方crate导入
use reqwest::Client;
use tracing::{debug, info};

// 本地模块导入
use crate::error::Result;
use crate::site_constants::fetch_config;

/// 页面抓取配置结构体
#[derive(Debug, Clone)]
pub struct PageFetcherConfig {
    /// 用户代理字符串
    pub user_agent: String,
    /// 连接超时时间（秒）
    pub timeout: u64,
}

impl Default for PageFetcherConfig {
    fn default() -> Self {
        Self {
            user_agent: fetch_config::DEFAULT_USER_AGENT.to_string(),
            timeout: fetch_config::REQUEST_TIMEOUT_SECONDS,
        }
    }
}

impl PageFetcherConfig {
    /// 设置用户代理
    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    /// 设置连接超时
    pub fn timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }
}

/// 页面抓取器主要结构体
///
/// 持有一个复用的HTTP客户端，整个运行期间所有请求共享连接配置。
///
/// # Features
///
/// - 浏览器标识：默认携带 `Mozilla/5.0`，上游站点对无标识客户端行为不同
/// - 任意状态码：非传输层失败的响应一律返回响应体，由调用方按结构标记判断内容缺失
/// - 无重试：失败直接上抛，由驱动层决定是否可恢复
pub struct PageFetcher {
    config: PageFetcherConfig,
    client: Client,
}

impl PageFetcher {
    /// 使用默认配置创建页面抓取器
    pub fn new() -> Result<Self> {
        Self::with_config(PageFetcherConfig::default())
    }

    /// 使用指定配置创建页面抓取器
    pub fn with_config(config: PageFetcherConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self { config, client })
    }

    /// 当前生效的配置
    pub fn config(&self) -> &PageFetcherConfig {
        &self.config
    }

    /// 抓取页面并返回HTML文本
    ///
    /// 只有传输层失败（DNS、连接、超时）才返回错误；HTTP错误状态
    /// 仍然返回响应体，"未找到"由下游通过结构标记缺失来判断。
    pub async fn fetch(&self, url: &str) -> Result<String> {
        info!("🌐 抓取页面: {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        debug!("页面获取完成: 状态 {}, {} 字节", status, body.len());

        Ok(body)
    }
}
