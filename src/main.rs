use stopwatch::app::{shutdown_result, App};
use stopwatch::config::AppConfig;
use stopwatch::error::user_friendly_message;
use stopwatch::logging::{init_logging, log_file_path, LoggingConfig};
use stopwatch::Result;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{}", user_friendly_message(&e));
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = AppConfig::load()?;
    init_logging(LoggingConfig::to_file(log_file_path()?).with_filter(config.log_filter.clone()))?;

    let mut app = App::new(config)?;
    app.init()?;

    // Restore the terminal before reporting any loop error
    let result = app.run().await;
    let restored = app.restore();
    shutdown_result(result, restored)
}
