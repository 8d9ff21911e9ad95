//! 翻译查询模块
//!
//! 此模块负责：
//! - 承载一次查询的（源语言、目标语言、单词）三元组
//! - 构造翻译页面的查询URL，并对单词做百分号编码

// 第三方crate导入
use url::Url;

// 本地模块导入
use crate::error::{Result, TranslateError};
use crate::site_constants::reverso_config;
use crate::translate_error;

/// 单次翻译查询
///
/// 构造后不可变。语言名保留原始大小写用于展示，URL中使用小写形式。
///
/// # Examples
///
/// ```rust
/// use reverso_cli::query::TranslationQuery;
///
/// let query = TranslationQuery::new("English", "German", "house");
/// assert_eq!(
///     query.url().unwrap().as_str(),
///     "https://context.reverso.net/translation/english-german/house"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct TranslationQuery {
    /// 源语言（原始大小写）
    source: String,
    /// 目标语言（原始大小写）
    target: String,
    /// 待翻译的单词
    word: String,
}

impl TranslationQuery {
    /// 创建新的翻译查询
    pub fn new(source: &str, target: &str, word: &str) -> Self {
        Self {
            source: source.to_string(),
            target: target.to_string(),
            word: word.to_string(),
        }
    }

    /// 源语言（原始大小写）
    pub fn source(&self) -> &str {
        &self.source
    }

    /// 目标语言（原始大小写）
    pub fn target(&self) -> &str {
        &self.target
    }

    /// 待翻译的单词
    pub fn word(&self) -> &str {
        &self.word
    }

    /// URL中使用的语言对片段，如 "english-german"
    pub fn language_pair(&self) -> String {
        format!("{}-{}", self.source.to_lowercase(), self.target.to_lowercase())
    }

    /// 构造翻译页面URL
    ///
    /// 单词作为独立路径段追加，由url库负责百分号编码
    pub fn url(&self) -> Result<Url> {
        let mut url = Url::parse(reverso_config::TRANSLATION_BASE_URL)?;

        url.path_segments_mut()
            .map_err(|_| translate_error!(invalid_input, reverso_config::TRANSLATION_BASE_URL, "基础URL无法追加路径段"))?
            .push(&self.language_pair())
            .push(&self.word);

        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_preserves_original_casing() {
        let query = TranslationQuery::new("English", "German", "house");
        assert_eq!(query.source(), "English");
        assert_eq!(query.target(), "German");
        assert_eq!(query.word(), "house");
    }

    #[test]
    fn test_language_pair_is_lowercased() {
        let query = TranslationQuery::new("English", "GERMAN", "house");
        assert_eq!(query.language_pair(), "english-german");
    }

    #[test]
    fn test_url_shape() {
        let query = TranslationQuery::new("english", "french", "cat");
        let url = query.url().unwrap();
        assert_eq!(
            url.as_str(),
            "https://context.reverso.net/translation/english-french/cat"
        );
    }

    #[test]
    fn test_url_encodes_word() {
        // 带空格的词条作为单个路径段被百分号编码
        let query = TranslationQuery::new("English", "German", "ice cream");
        let url = query.url().unwrap();
        assert_eq!(
            url.as_str(),
            "https://context.reverso.net/translation/english-german/ice%20cream"
        );
    }

    #[test]
    fn test_url_for_all_sentinel_target() {
        // 目标为"all"时探测查询仍按字面构造URL
        let query = TranslationQuery::new("English", "all", "house");
        let url = query.url().unwrap();
        assert_eq!(
            url.as_str(),
            "https://context.reverso.net/translation/english-all/house"
        );
    }
}
