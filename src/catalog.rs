//! 语言目录模块
//!
//! 此模块负责：
//! - 维护固定的受支持语言列表和菜单编号映射
//! - 从参考页面抓取完整的ISO语言英文名列表（仅用于提示语甄别）
//! - 提供交互路径的菜单文本和输入读取

// 标准库导入
use std::io::{BufRead, Write};

// 第三方crate导入
use tracing::info;

// 本地模块导入
use crate::error::{Result, TranslateError};
use crate::extractor;
use crate::fetcher::PageFetcher;
use crate::site_constants::{catalog_config, iso_config, messages};
use crate::translate_error;
use crate::utils::capitalize;

/// 语言目录主要结构体
///
/// 列表在整个运行期间保持不变；"all"模式的遍历集合通过
/// [`iteration_targets`](LanguageCatalog::iteration_targets) 派生，
/// 不会修改目录自身，因此同一个目录可以跨运行复用。
pub struct LanguageCatalog {
    languages: Vec<&'static str>,
}

impl Default for LanguageCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageCatalog {
    /// 创建新的语言目录
    pub fn new() -> Self {
        Self {
            languages: catalog_config::SUPPORTED_LANGUAGES.to_vec(),
        }
    }

    /// 受支持的语言列表，顺序决定菜单编号
    pub fn supported_languages(&self) -> &[&'static str] {
        &self.languages
    }

    /// 判断语言是否受支持，匹配不区分大小写
    pub fn is_supported(&self, language: &str) -> bool {
        let wanted = capitalize(language);
        self.languages.iter().any(|name| *name == wanted)
    }

    /// 把菜单编号解析为语言名
    ///
    /// 编号0映射为"All"哨兵，1..N按列表顺序映射；越界返回MenuOutOfRange
    pub fn resolve_menu_choice(&self, choice: usize) -> Result<&'static str> {
        if choice == 0 {
            return Ok(catalog_config::ALL_TARGETS_SENTINEL);
        }

        self.languages
            .get(choice - 1)
            .copied()
            .ok_or_else(|| translate_error!(menu_out_of_range, choice, self.languages.len()))
    }

    /// "all"模式的遍历集合：去掉源语言后的其余受支持语言
    ///
    /// 返回派生序列，目录自身不变
    pub fn iteration_targets(&self, source: &str) -> Vec<&'static str> {
        let source_display = capitalize(source);
        self.languages
            .iter()
            .filter(|name| **name != source_display)
            .copied()
            .collect()
    }

    /// 交互菜单文本：问候语加编号语言列表
    pub fn opening_menu(&self) -> String {
        let mut menu = String::from(messages::GREETING);
        for (index, language) in self.languages.iter().enumerate() {
            menu.push_str(&format!("\n{}. {}", index + 1, language));
        }
        menu
    }

    /// 打印交互菜单
    pub fn print_opening_menu(&self) {
        println!("{}", self.opening_menu());
    }

    /// 输出提示语并读取一行用户输入
    pub fn prompt_word<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
        prompt: &str,
    ) -> Result<String> {
        write!(output, "{}", prompt)?;
        output.flush()?;

        let mut line = String::new();
        input.read_line(&mut line)?;

        Ok(line.trim_end_matches(|c| c == '\r' || c == '\n').to_string())
    }

    /// 输出提示语并把用户输入的菜单编号解析为语言名
    pub fn prompt_language<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
        prompt: &str,
    ) -> Result<&'static str> {
        let raw = self.prompt_word(input, output, prompt)?;
        let choice: usize = raw
            .trim()
            .parse()
            .map_err(|_| translate_error!(invalid_input, raw.trim(), "菜单编号必须是数字"))?;

        self.resolve_menu_choice(choice)
    }
}

/// 从参考页面HTML解析语言英文名列表
///
/// 行按`valign="top"`定位，跳过表头行；行文本按换行拆分后取英文名字段。
/// 字段不足的行直接丢弃，不中断整个解析。
pub fn parse_known_language_names(html: &str) -> Result<Vec<String>> {
    let dom = extractor::parse_html(html)?;
    let rows = extractor::find_by_attr(
        &dom.document,
        "tr",
        "valign",
        iso_config::LANGUAGE_ROW_VALIGN,
    );

    let mut names = Vec::new();
    for row in rows.iter().skip(1) {
        let text = extractor::collect_text(row);
        if let Some(name) = text.split('\n').nth(iso_config::ENGLISH_NAME_FIELD) {
            names.push(name.to_string());
        }
    }

    Ok(names)
}

/// 抓取ISO语言列表页面并返回全部语言英文名
///
/// 结果仅用于区分"认识但不支持"和"完全不认识"两种拒绝场景；
/// 调用方必须把这里的失败当作可恢复条件，不能因此中止整个运行。
pub async fn fetch_known_language_names(fetcher: &PageFetcher) -> Result<Vec<String>> {
    let html = fetcher.fetch(iso_config::CODE_LIST_URL).await?;
    let names = parse_known_language_names(&html)?;

    info!("📚 参考语言列表获取完成: {} 个语言名", names.len());

    Ok(names)
}
