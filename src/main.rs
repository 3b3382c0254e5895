use clap::Parser;
use tracing::info;

use shortly::config::{self, AppConfig};
use shortly::interfaces;
use shortly::system;

#[derive(Parser, Debug)]
#[command(name = "shortly", version, about = "Terminal front-end for a mock URL shortener")]
struct Args {
    /// TOML 配置文件路径，缺省时按默认路径搜索
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    /// tracing 过滤器覆盖，例如 "debug" 或 "shortly=trace"
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load(),
    };
    if let Some(level) = args.log_level {
        config.logging.level = level;
    }

    // guard 必须存活到程序结束，否则缓冲中的日志会丢失
    let _guard = system::logging::init_logging(&config);
    config::init_config(config);

    info!("Starting Shortly TUI");
    interfaces::tui::run_tui().await
}
