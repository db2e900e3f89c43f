use anyhow::Result;
use clap::Parser;
use openreview_crawler::cli::Cli;
use openreview_crawler::utils::logging;
use openreview_crawler::{App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 初始化日志
    logging::init(cli.verbose);

    // 加载配置
    let mut config = Config::load()?;
    if let Some(dir) = &cli.output_dir {
        config.output_dir = dir.clone();
    }

    // 初始化并运行应用
    App::initialize(config, cli.run_options())?.run().await?;

    Ok(())
}
