//! 会话驱动模块
//!
//! 此模块负责：
//! - 串联语言校验、页面抓取、内容提取和结果展示
//! - 在"单目标语言"和"全部语言"两种模式间分支
//! - 把参考列表抓取失败降级为可恢复条件

// 标准库导入
use std::path::{Path, PathBuf};

// 第三方crate导入
use tracing::{info, warn};

// 本地模块导入
use crate::catalog::{self, LanguageCatalog};
use crate::error::{Result, TranslateError};
use crate::extractor;
use crate::fetcher::PageFetcher;
use crate::presenter;
use crate::query::TranslationQuery;
use crate::site_constants::{self, display_config, messages};
use crate::translate_error;
use crate::utils::capitalize;

/// 运行模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// 翻译到单个目标语言
    SingleTarget,
    /// 翻译到除源语言外的全部受支持语言
    AllTargets,
}

impl RunMode {
    /// 从目标语言参数推断运行模式
    ///
    /// 比较区分大小写：只有字面"all"进入全语言模式，"All"按普通语言处理
    pub fn from_target(target: &str) -> Self {
        if target == "all" {
            RunMode::AllTargets
        } else {
            RunMode::SingleTarget
        }
    }
}

/// 校验请求的源语言和目标语言
///
/// 只有"不在支持列表、但出现在参考列表"的语言会被拒绝；两个列表都
/// 不认识的语言静默放行。目标语言仅在源语言通过支持检查时才被校验。
/// 这两点都是既有行为，保持原样。
pub fn validate_languages(
    catalog: &LanguageCatalog,
    known_languages: &[String],
    source: &str,
    target: &str,
) -> Result<()> {
    if !catalog.is_supported(source) {
        if advisory_recognizes(known_languages, source) {
            return Err(translate_error!(unsupported_language, source));
        }
    } else if !catalog.is_supported(target) {
        if advisory_recognizes(known_languages, target) {
            return Err(translate_error!(unsupported_language, target));
        }
    }

    Ok(())
}

/// 参考列表是否认识该语言（按展示形匹配）
fn advisory_recognizes(known_languages: &[String], language: &str) -> bool {
    let wanted = capitalize(language);
    known_languages.iter().any(|name| name == &wanted)
}

/// 处理单个已抓取页面：提取候选词和例句并逐块展示
///
/// 独立成同步函数，便于用固定HTML离线验证整条展示链路
pub fn present_page(html: &str, language: &str, limit: usize, destination: &Path) -> Result<()> {
    let tags = extractor::extract_tags(html)?;
    presenter::present_tags(&tags, language, limit, Some(destination))?;

    let examples = extractor::extract_examples(html)?;
    presenter::present_examples(&examples, language, limit, Some(destination))?;

    Ok(())
}

/// 抓取并处理一个目标语言
///
/// 候选词和例句共享同一次抓取结果
pub async fn process_language(
    fetcher: &PageFetcher,
    query: &TranslationQuery,
    limit: usize,
    destination: &Path,
) -> Result<()> {
    let html = fetcher.fetch(query.url()?.as_str()).await?;
    present_page(&html, query.target(), limit, destination)
}

/// 执行一次完整的翻译会话
pub async fn run(source: &str, target: &str, word: &str) -> Result<()> {
    let catalog = LanguageCatalog::new();
    let fetcher = PageFetcher::new()?;

    // 1. 抓取参考语言列表，失败时降级为空列表继续运行
    let known_languages = match catalog::fetch_known_language_names(&fetcher).await {
        Ok(names) => names,
        Err(e) => {
            println!("{}", messages::CONNECTION_ERROR);
            warn!("⚠️  参考语言列表获取失败: {}", e);
            Vec::new()
        }
    };

    // 2. 校验语言，被拒绝时打印提示并正常结束
    if let Err(e) = validate_languages(&catalog, &known_languages, source, target) {
        println!("{}", e);
        return Ok(());
    }

    // 3. 用字面参数探测单词可译性；候选词为空只提示，不中止
    let probe = TranslationQuery::new(source, target, word);
    let probe_html = fetcher.fetch(probe.url()?.as_str()).await?;
    if extractor::extract_tags(&probe_html)?.is_empty() {
        println!("{}", messages::word_not_found(word));
    }

    // 4. 按运行模式处理目标语言，结果始终追加到按单词命名的文件
    let destination = PathBuf::from(site_constants::output_file_name(word));

    match RunMode::from_target(target) {
        RunMode::AllTargets => {
            presenter::prepare_output_file(&destination)?;
            for language in catalog.iteration_targets(source) {
                let query = TranslationQuery::new(source, language, word);
                process_language(
                    &fetcher,
                    &query,
                    display_config::ALL_TARGETS_LIMIT,
                    &destination,
                )
                .await?;
            }
            info!("✅ 全语言翻译完成: {}", destination.display());
        }
        RunMode::SingleTarget => {
            presenter::prepare_output_file(&destination)?;
            let query = TranslationQuery::new(source, target, word);
            process_language(
                &fetcher,
                &query,
                display_config::SINGLE_TARGET_LIMIT,
                &destination,
            )
            .await?;
            info!("✅ 翻译完成: {}", destination.display());
        }
    }

    Ok(())
}
