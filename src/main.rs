use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use colsim_api::{RestApi, RestConfig, DEFAULT_MAX_PAYLOAD_BYTES};

/// Structural distance between CSV header rows, served over HTTP
#[derive(Parser, Debug)]
#[command(name = "colsim")]
#[command(about = "Compare CSV headers against a baseline", long_about = None)]
struct Args {
    /// Address to bind the HTTP API to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// HTTP API port
    #[arg(short, long, env = "PORT", default_value_t = 5000)]
    port: u16,

    /// HTTP worker threads (defaults to one per core)
    #[arg(long)]
    workers: Option<usize>,

    /// Largest accepted request body in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_PAYLOAD_BYTES)]
    max_payload_bytes: usize,

    /// Log level, overridden by RUST_LOG when set
    #[arg(long, default_value = "info", value_parser = ["trace", "debug", "info", "warn", "error"])]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting colsim v{}", env!("CARGO_PKG_VERSION"));
    info!("HTTP API: http://{}:{}/compare", args.host, args.port);

    let config = RestConfig {
        host: args.host,
        port: args.port,
        workers: args.workers,
        max_payload_bytes: args.max_payload_bytes,
    };

    let http_handle = std::thread::spawn(move || {
        let sys = actix_web::rt::System::new();
        sys.block_on(RestApi::start(config))
    });

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        joined = tokio::task::spawn_blocking(move || http_handle.join()) => {
            match joined {
                Ok(Ok(Ok(()))) => info!("HTTP server stopped"),
                Ok(Ok(Err(e))) => return Err(anyhow::anyhow!("HTTP server error: {}", e)),
                Ok(Err(_)) => return Err(anyhow::anyhow!("HTTP server thread panicked")),
                Err(e) => return Err(e.into()),
            }
        }
    }

    info!("Shutting down...");
    Ok(())
}
