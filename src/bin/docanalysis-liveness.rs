//! docanalysis-liveness — reachability probe behind the load balancer.
//!
//! Startup sequence:
//!   1. Parse CLI flags
//!   2. Init logger (CLI `-v` flags > RUST_LOG > LOG_LEVEL)
//!   3. Read `PORT` (default 5050)
//!   4. Spawn Ctrl-C → shutdown signal watcher
//!   5. Serve until shutdown; a bind failure exits non-zero

use docanalysis::bootstrap::cli;
use docanalysis::config::{EnvInput, keys};
use docanalysis::error::AppError;
use docanalysis::liveness::{self, LivenessConfig};
use docanalysis::logger;

use tokio_util::sync::CancellationToken;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("{e}");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let args = cli::parse_env_args();
    if args.help {
        cli::print_usage("docanalysis-liveness", "Serve GET / and GET /health for load-balancer probes.");
        return Ok(());
    }

    let env = EnvInput::from_process();

    let (log_level, force_cli_level) = logger::select_level(args.log_level, env.get(keys::LOG_LEVEL));
    logger::init(log_level, force_cli_level)?;

    let config = LivenessConfig::from_env(&env)?;

    let shutdown = CancellationToken::new();

    let ctrlc_token = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("ctrl-c received — initiating shutdown");
            ctrlc_token.cancel();
        }
    });

    liveness::run(config, shutdown).await
}
