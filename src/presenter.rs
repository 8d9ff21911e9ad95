//! 结果展示模块
//!
//! 此模块负责：
//! - 把翻译候选词和例句裁剪到展示上限
//! - 按固定版式打印到控制台
//! - 以同样版式追加写入按单词命名的输出文件
//!
//! 版式是对外契约的一部分，块渲染函数保持纯函数形式以便逐字节断言。

// 标准库导入
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

// 第三方crate导入
use tracing::debug;

// 本地模块导入
use crate::error::{Result, TranslateError};
use crate::site_constants::display_config;
use crate::translate_error;
use crate::utils::capitalize;

/// 控制台版候选词块
///
/// 标题行总是输出；候选词行只有在完整列表超过上限时才输出，
/// 恰好等于或少于上限的列表只打标题。这是被刻意保留的历史行为，
/// 不要"修复"。
pub fn console_tags_block(tags: &[String], language: &str, limit: usize) -> String {
    let mut block = format!("\n{} Translations:\n", capitalize(language));

    if tags.len() > limit {
        for tag in &tags[..limit] {
            block.push_str(tag);
            block.push('\n');
        }
    }

    block
}

/// 文件版候选词块：标题、最多limit个候选词、一个收尾空行
///
/// 与控制台不同，文件侧总是写入裁剪后的候选词
pub fn file_tags_block(tags: &[String], language: &str, limit: usize) -> String {
    let mut block = format!("\n{} Translations:\n", capitalize(language));

    for tag in tags.iter().take(limit) {
        block.push_str(tag);
        block.push('\n');
    }
    block.push('\n');

    block
}

/// 按分组规则排布例句：每2条之后插入一个空行
fn grouped_examples(examples: &[String], limit: usize) -> String {
    let mut body = String::new();

    for (index, example) in examples.iter().take(limit).enumerate() {
        if index > 0 && index % display_config::EXAMPLE_GROUP_SIZE == 0 {
            body.push('\n');
        }
        body.push_str(example);
        body.push('\n');
    }

    body
}

/// 控制台版例句块
pub fn console_examples_block(examples: &[String], language: &str, limit: usize) -> String {
    format!(
        "\n{} Examples:\n{}",
        capitalize(language),
        grouped_examples(examples, limit)
    )
}

/// 文件版例句块，标题没有前导空行
pub fn file_examples_block(examples: &[String], language: &str, limit: usize) -> String {
    format!(
        "{} Examples:\n{}",
        capitalize(language),
        grouped_examples(examples, limit)
    )
}

/// 打印候选词块，并可选地追加到输出文件
pub fn present_tags(
    tags: &[String],
    language: &str,
    limit: usize,
    destination: Option<&Path>,
) -> Result<()> {
    print!("{}", console_tags_block(tags, language, limit));

    if let Some(path) = destination {
        append_block(path, &file_tags_block(tags, language, limit))?;
    }

    Ok(())
}

/// 打印例句块，并可选地追加到输出文件
pub fn present_examples(
    examples: &[String],
    language: &str,
    limit: usize,
    destination: Option<&Path>,
) -> Result<()> {
    print!("{}", console_examples_block(examples, language, limit));

    if let Some(path) = destination {
        append_block(path, &file_examples_block(examples, language, limit))?;
    }

    Ok(())
}

/// 运行开始时清空已有的输出文件
///
/// 文件不存在时不做任何事，后续的追加写入会自行创建
pub fn prepare_output_file(path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }

    OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(|e| translate_error!(file_op, path.display(), "截断", e))?;

    debug!("已清空输出文件: {}", path.display());

    Ok(())
}

/// 以追加模式写入一个版式块，每次调用独立打开和关闭文件
fn append_block(path: &Path, block: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| translate_error!(file_op, path.display(), "追加", e))?;

    file.write_all(block.as_bytes())
        .map_err(|e| translate_error!(file_op, path.display(), "追加", e))?;

    debug!("已追加 {} 字节到 {}", block.len(), path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn unique_temp_dir(tag: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos(); // 纳秒精度避免并发测试目录冲突
        let dir = std::env::temp_dir().join(format!("reverso-cli-{}-{:x}", tag, nanos));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_console_tags_block_header_only_within_limit() {
        let tags = strings(&["a", "b"]);
        let block = console_tags_block(&tags, "german", 5);

        assert_eq!(block, "\nGerman Translations:\n");
    }

    #[test]
    fn test_console_tags_block_truncates_long_list() {
        let tags = strings(&["t1", "t2", "t3", "t4", "t5", "t6", "t7"]);
        let block = console_tags_block(&tags, "german", 5);

        assert_eq!(block, "\nGerman Translations:\nt1\nt2\nt3\nt4\nt5\n");
    }

    #[test]
    fn test_file_tags_block_keeps_short_list() {
        let tags = strings(&["Haus", "Gebäude", "Heim"]);
        let block = file_tags_block(&tags, "german", 5);

        assert_eq!(block, "\nGerman Translations:\nHaus\nGebäude\nHeim\n\n");
    }

    #[test]
    fn test_file_tags_block_truncates_to_limit() {
        let tags = strings(&["Haus", "Gebäude", "Heim"]);
        let block = file_tags_block(&tags, "german", 1);

        assert_eq!(block, "\nGerman Translations:\nHaus\n\n");
    }

    #[test]
    fn test_console_examples_pair_grouping() {
        let examples = strings(&["e1", "e2", "e3"]);
        let block = console_examples_block(&examples, "german", 5);

        // 每2条例句之后插入一个空行
        assert_eq!(block, "\nGerman Examples:\ne1\ne2\n\ne3\n");
    }

    #[test]
    fn test_examples_grouping_has_no_trailing_blank() {
        let examples = strings(&["e1", "e2", "e3", "e4"]);
        let block = console_examples_block(&examples, "german", 5);

        assert_eq!(block, "\nGerman Examples:\ne1\ne2\n\ne3\ne4\n");
        assert!(!block.ends_with("\n\n"));
    }

    #[test]
    fn test_examples_truncated_to_limit() {
        let examples = strings(&["e1", "e2", "e3"]);
        let block = console_examples_block(&examples, "german", 1);

        assert_eq!(block, "\nGerman Examples:\ne1\n");
    }

    #[test]
    fn test_file_examples_block_has_no_leading_blank() {
        let examples = strings(&["e1"]);
        let block = file_examples_block(&examples, "german", 5);

        assert_eq!(block, "German Examples:\ne1\n");
    }

    #[test]
    fn test_headers_capitalize_language() {
        let block = console_tags_block(&[], "gERMAN", 5);
        assert!(block.starts_with("\nGerman Translations:"));

        let block = console_examples_block(&[], "RUSSIAN", 5);
        assert!(block.starts_with("\nRussian Examples:"));
    }

    #[test]
    fn test_present_tags_appends_to_destination() {
        let dir = unique_temp_dir("present-tags");
        let path = dir.join("house.txt");
        let tags = strings(&["Haus"]);

        present_tags(&tags, "german", 5, Some(&path)).unwrap();
        present_tags(&tags, "french", 5, Some(&path)).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "\nGerman Translations:\nHaus\n\n\nFrench Translations:\nHaus\n\n"
        );

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_present_examples_appends_to_destination() {
        let dir = unique_temp_dir("present-examples");
        let path = dir.join("house.txt");
        let examples = strings(&["e1", "e2", "e3"]);

        present_examples(&examples, "german", 5, Some(&path)).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "German Examples:\ne1\ne2\n\ne3\n");

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_prepare_output_file_truncates_existing() {
        let dir = unique_temp_dir("prepare-existing");
        let path = dir.join("house.txt");
        fs::write(&path, "stale content from last run").unwrap();

        prepare_output_file(&path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "");

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_prepare_output_file_ignores_missing() {
        let dir = unique_temp_dir("prepare-missing");
        let path = dir.join("house.txt");

        prepare_output_file(&path).unwrap();

        // 不存在的文件不会被预先创建
        assert!(!path.exists());

        fs::remove_dir_all(&dir).unwrap();
    }
}
