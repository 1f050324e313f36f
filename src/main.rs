use clap::Parser;
use pytheus::utils::{logger, validation::Validate};
use pytheus::{CliConfig, HttpTransport, LocalStorage, PytheusError, QueryPipeline};
use std::io::Write;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let silent = config.silent;

    if let Err(e) = config.validate() {
        return report_failure(&e, silent);
    }

    let pipeline = QueryPipeline::new(HttpTransport::new(), LocalStorage::new(), config);
    let mut stdout = std::io::stdout();

    match pipeline.run(&mut stdout).await {
        Ok(delivery) => {
            tracing::debug!("Result delivered to {:?}", delivery);
            if let Err(e) = stdout.flush() {
                return report_failure(&PytheusError::IoError(e), silent);
            }
            ExitCode::SUCCESS
        }
        Err(e) => report_failure(&e, silent),
    }
}

fn report_failure(e: &PytheusError, silent: bool) -> ExitCode {
    tracing::debug!(
        "Query aborted: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );

    if e.should_report(silent) {
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
    }

    ExitCode::from(e.exit_code())
}
