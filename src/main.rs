use clap::Parser;
use course_scout::core::ConfigProvider;
use course_scout::utils::error::ErrorSeverity;
use course_scout::utils::{logger, validation::Validate};
use course_scout::{CliConfig, EtlEngine, EtlError, LocalStorage, SearchPipeline, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting course-scout CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let monitor_enabled = cli.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let exit_code = match cli.config.clone() {
        Some(path) => {
            tracing::info!("Loading configuration from {}", path);
            match TomlConfig::from_file(&path) {
                Ok(mut config) => {
                    // 命令列參數優先於設定檔
                    if let Some(query) = &cli.query {
                        config.search.query = query.clone();
                    }
                    if !cli.pick.is_empty() {
                        config.report.pick = cli.pick.clone();
                    }
                    run(config, monitor_enabled).await
                }
                Err(e) => report_failure("Failed to load configuration", &e),
            }
        }
        None => run(cli, monitor_enabled).await,
    };

    if exit_code > 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}

async fn run<C>(config: C, monitor_enabled: bool) -> i32
where
    C: ConfigProvider + Validate + 'static,
{
    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        return 1;
    }

    // 創建存儲和管道
    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = SearchPipeline::new(storage, config);

    // 創建引擎並運行
    let engine = EtlEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Course search completed successfully!");
            println!("✅ Course search completed successfully!");
            println!("📁 Reports saved to: {}", output_path);
            0
        }
        Err(e) => report_failure("Course search failed", &e),
    }
}

fn report_failure(context: &str, e: &EtlError) -> i32 {
    // 記錄詳細錯誤信息
    tracing::error!(
        "❌ {}: {} (Category: {:?}, Severity: {:?})",
        context,
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    // 輸出用戶友好的錯誤信息
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 建議: {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    match e.severity() {
        ErrorSeverity::Medium => 2,   // 重試錯誤
        ErrorSeverity::High => 1,     // 處理錯誤
        ErrorSeverity::Critical => 3, // 系統錯誤
    }
}
