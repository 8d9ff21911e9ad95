//! 测试核心功能的示例程序
//!
//! 该程序演示了ContentExtractor、ResultPresenter和LanguageCatalog的基本使用方法

use anyhow::Result;
use tracing::{error, info};
use reverso_cli::catalog::{self, LanguageCatalog};
use reverso_cli::extractor;
use reverso_cli::fetcher::{PageFetcher, PageFetcherConfig};
use reverso_cli::presenter;

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志系统
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    info!("🚀 开始测试reverso-cli核心功能");

    // 测试1: 内容提取功能
    test_extraction()?;

    // 测试2: 结果展示与文件写入
    test_presentation()?;

    // 测试3: 语言目录与参考列表
    test_catalog().await?;

    info!("✅ 所有测试完成！");
    Ok(())
}

fn test_extraction() -> Result<()> {
    info!("🔧 测试内容提取功能");

    // 一个与翻译页面结构一致的离线样例，候选词行带10空格缩进痕迹
    let test_html = r#"<html><body>
<div id="translations-content">
          Haus
          Gebäude
</div>
<div class="example">
Das ist ein Haus.
This is a house.
</div>
</body></html>"#;

    let tags = extractor::extract_tags(test_html)?;
    info!("📚 提取到 {} 个候选词: {:?}", tags.len(), tags);
    if tags == ["Haus", "Gebäude"] {
        info!("✅ 候选词提取验证成功");
    } else {
        error!("❌ 候选词提取验证失败");
        return Err(anyhow::anyhow!("候选词与样例不一致"));
    }

    let examples = extractor::extract_examples(test_html)?;
    info!("📚 提取到 {} 条例句", examples.len());
    if examples == ["Das ist ein Haus.\nThis is a house."] {
        info!("✅ 例句提取验证成功");
    } else {
        error!("❌ 例句提取验证失败");
        return Err(anyhow::anyhow!("例句与样例不一致"));
    }

    Ok(())
}

fn test_presentation() -> Result<()> {
    info!("🔧 测试结果展示功能");

    let tags: Vec<String> = vec!["Haus".to_string(), "Gebäude".to_string()];
    let examples: Vec<String> = vec!["Das ist ein Haus.\nThis is a house.".to_string()];

    let destination = std::env::temp_dir().join(format!(
        "reverso-cli-demo-{}.txt",
        std::process::id()
    ));

    // 模拟一次单语言展示：先清空，再按版式追加
    presenter::prepare_output_file(&destination)?;
    presenter::present_tags(&tags, "german", 5, Some(&destination))?;
    presenter::present_examples(&examples, "german", 5, Some(&destination))?;

    let content = std::fs::read_to_string(&destination)?;
    info!("📄 输出文件内容长度: {} 字节", content.len());
    if content.contains("German Translations:") && content.contains("German Examples:") {
        info!("✅ 输出文件版式验证成功");
    } else {
        error!("❌ 输出文件版式验证失败");
        return Err(anyhow::anyhow!("输出文件缺少版式标题"));
    }

    // 清理测试文件
    std::fs::remove_file(&destination)?;
    info!("✅ 测试文件清理完成");

    Ok(())
}

async fn test_catalog() -> Result<()> {
    info!("🔧 测试语言目录功能");

    let languages = LanguageCatalog::new();

    if languages.resolve_menu_choice(0)? == "All" && languages.resolve_menu_choice(2)? == "German"
    {
        info!("✅ 菜单编号解析验证成功");
    } else {
        error!("❌ 菜单编号解析验证失败");
        return Err(anyhow::anyhow!("菜单映射与目录不一致"));
    }

    let targets = languages.iteration_targets("english");
    info!("📚 全语言模式遍历 {} 个目标语言", targets.len());
    if targets.len() == 12 && !targets.contains(&"English") {
        info!("✅ 遍历集合验证成功");
    } else {
        error!("❌ 遍历集合验证失败");
        return Err(anyhow::anyhow!("遍历集合包含源语言"));
    }

    // 参考语言列表需要联网，失败时只提示不中断
    let fetcher = PageFetcher::with_config(PageFetcherConfig::default().timeout(10))?;
    match catalog::fetch_known_language_names(&fetcher).await {
        Ok(names) => {
            info!("✅ 参考语言列表获取成功: {} 个语言名", names.len());
        }
        Err(e) => {
            error!("❌ 参考语言列表获取失败: {}", e);
            info!("ℹ️ 这可能是网络问题，不影响代码功能");
        }
    }

    Ok(())
}
