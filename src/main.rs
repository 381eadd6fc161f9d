// Re-export all library modules
use wizard_commit::*;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use error::WizardError;
use tokio::runtime::Runtime;

fn main() -> Result<()> {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    // 根据 verbose 标志设置日志级别
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    // 初始化 tracing 日志
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(log_level.into()),
        )
        .init();

    // reqwest 使用 rustls-no-provider，创建 Client 之前必须安装 crypto provider
    let _ = rustls::crypto::ring::default_provider().install_default();

    let config = match config::load_config() {
        Ok(config) => config,
        Err(e) => {
            report_error(&e, true);
            std::process::exit(1);
        }
    };
    let colored = config.ui.colored;
    let options = commands::CommitOptions::from_cli(&cli);

    if cli.save_config {
        if let Err(e) = commands::save_config::run(&options, &config) {
            report_error(&e, colored);
            std::process::exit(1);
        }
        return Ok(());
    }

    // 创建 tokio 运行时
    let rt = Runtime::new()?;

    rt.block_on(async {
        if let Err(e) = commands::commit::run(&options, &config).await {
            match e {
                // 用户取消不算错误，正常退出
                WizardError::UserCancelled => std::process::exit(0),
                _ => {
                    report_error(&e, colored);
                    std::process::exit(1);
                }
            }
        }
    });

    Ok(())
}

fn report_error(e: &WizardError, colored: bool) {
    ui::error(&e.to_string(), colored);
    if let Some(suggestion) = e.suggestion() {
        println!();
        println!("{}", ui::info(suggestion, colored));
    }
}
