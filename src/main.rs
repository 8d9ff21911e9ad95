// 第三方crate导入
use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

// 本地模块导入
use reverso_cli::session;
use reverso_cli::utils::init_logging;

#[derive(Parser)]
#[command(version, about = "Reverso Context命令行翻译工具 - 抓取翻译候选词与双语例句", long_about = None)]
struct Cli {
    /// 源语言 (如: english)
    #[arg(value_name = "SOURCE")]
    source: String,

    /// 目标语言，或字面"all"翻译到全部受支持语言
    #[arg(value_name = "TARGET")]
    target: String,

    /// 要查询的单词
    #[arg(value_name = "WORD")]
    word: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 初始化日志系统
    init_logging();

    info!(
        "🚀 启动翻译会话: {} -> {} ({})",
        cli.source, cli.target, cli.word
    );

    match session::run(&cli.source, &cli.target, &cli.word).await {
        Ok(()) => {
            info!("✅ 会话结束");
        }
        Err(e) => {
            error!("❌ 翻译失败: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
