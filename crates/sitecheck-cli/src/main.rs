use anyhow::{Context, Result};
use clap::Parser;
use sitecheck_core::{check_and_write, CheckOptions, OutputFormat};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

/// 命令行入口（基于 clap）；不带任何参数即检查当前目录
#[derive(Parser, Debug)]
#[command(name = "sitecheck", version, about = "静态网站文件结构验证")]
struct Cli {
    /// 站点根目录
    #[arg(long, default_value = ".")]
    dir: PathBuf,

    /// 规则文件路径（TOML）；不指定则使用内置规则
    #[arg(long)]
    rules: Option<PathBuf>,

    /// 以 JSON 输出报告
    #[arg(long)]
    json: bool,
}

fn main() -> Result<ExitCode> {
    // 初始化日志（支持通过 RUST_LOG 控制等级，例如 info、debug）
    init_tracing();
    let cli = Cli::parse();
    info!(dir = ?cli.dir, rules = ?cli.rules, "starting site check");

    let opts = CheckOptions {
        site_dir: cli.dir,
        rules_path: cli.rules,
        format: if cli.json { OutputFormat::Json } else { OutputFormat::Text },
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let report = check_and_write(&opts, &mut out).context("site check failed")?;
    out.flush().ok();

    info!(passed = report.passed(), "site check finished");
    Ok(ExitCode::from(report.exit_code()))
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    // 日志写到 stderr，stdout 只保留报告；默认只显示 warn 及以上
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
