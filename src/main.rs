use demo_app::utils::{logger, validation::Validate};
use demo_app::{Application, CliConfig, SystemClock};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = CliConfig::parse_lenient();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting demo-app");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }
    if !config.ignored.is_empty() {
        tracing::debug!("Ignoring {} extra argument(s)", config.ignored.len());
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        return ExitCode::from(e.exit_code());
    }

    let app = Application::new(config, SystemClock);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match app.run(&mut out) {
        Ok(report) => {
            tracing::info!("✅ Run completed at {}", report.timestamp);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("❌ Run failed: {}", e);
            eprintln!("❌ {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
