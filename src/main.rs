use std::process::ExitCode;

use event_planning_store::{config::Config, db, service::log::init_logger};
use log::{error, info, warn};

#[tokio::main]
async fn main() -> ExitCode {
    init_logger();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("{}", err);
            return ExitCode::FAILURE;
        }
    };
    let mut store = match db::open_store(&config).await {
        Ok(store) => store,
        Err(err) => {
            error!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let report = db::schema::initialize(&mut store).await;
    info!(
        "schema initialized: {} created, {} failed",
        report.created.len(),
        report.failed.len()
    );
    if !report.is_complete() {
        warn!("some tables could not be created, see errors above");
    }
    db::close_store(store).await;
    ExitCode::SUCCESS
}
