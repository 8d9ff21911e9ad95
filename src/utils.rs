//! 通用工具模块

/// 初始化日志系统
///
/// 日志统一写到stderr，stdout只保留翻译结果等面向用户的输出
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}

/// 首字母大写、其余小写
///
/// 用于语言名的展示和目录匹配，"gERMAN" 和 "german" 都归一成 "German"
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("german"), "German");
        assert_eq!(capitalize("GERMAN"), "German");
        assert_eq!(capitalize("gErMaN"), "German");
        assert_eq!(capitalize("a"), "A");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_capitalize_keeps_single_word_shape() {
        // 多词输入只处理首字符，后续字符统一转小写
        assert_eq!(capitalize("ice cream"), "Ice cream");
    }
}
