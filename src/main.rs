use piriform_updater::commands::Cli;
use piriform_updater::libs::messages::macros::is_debug_mode;
use piriform_updater::msg_error;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Conventional exit status after SIGINT / Ctrl+C.
const INTERRUPTED: u8 = 130;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let _ = dotenv::dotenv();
    init_tracing();

    tokio::select! {
        result = Cli::menu() => match result {
            Ok(()) => ExitCode::SUCCESS,
            Err(error) => {
                msg_error!(format!("{:#}", error));
                ExitCode::FAILURE
            }
        },
        // A download may be left behind; there is nothing to roll back.
        Ok(()) = tokio::signal::ctrl_c() => ExitCode::from(INTERRUPTED),
    }
}

fn init_tracing() {
    if !is_debug_mode() {
        return;
    }
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}
