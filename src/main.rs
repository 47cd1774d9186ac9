use clap::Parser;
use color_eyre::Result;
use std::path::{Path, PathBuf};

use clipmock::ClipboardMock;
use clipmock::config::{self, AliasPolicy, Transport};
use clipmock::host::{self, PluginHost};

/// In-memory clipboard provider for editor integration tests
#[derive(Parser, Debug)]
#[command(
    version,
    about = "In-memory clipboard provider that serves clipboard_get/clipboard_set to an editor host"
)]
struct Args {
    /// How to reach the host (overrides the config file)
    #[arg(long, value_enum)]
    transport: Option<Transport>,

    /// Socket address: a unix socket path or host:port (defaults to $NVIM_LISTEN_ADDRESS)
    #[arg(long)]
    address: Option<String>,

    /// What the unnamed register (") resolves to
    #[arg(long, value_enum)]
    alias: Option<AliasPolicy>,

    /// Config file (defaults to ~/.config/clipmock/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log file; stdout is never used for logs since it may carry the session
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    // Logger first so config loading is recorded too
    let log_path = args
        .log_file
        .unwrap_or_else(|| std::env::temp_dir().join("clipmock.log"));
    init_logging(&log_path)?;

    log::info!("=== CLIPMOCK SESSION STARTED ===");

    let config_result = config::load_config(args.config.as_deref());
    if let Some(warning) = &config_result.warning {
        log::warn!("{}", warning);
    }
    let config = config_result.config;

    let transport = args.transport.unwrap_or(config.host.transport);
    let alias = args.alias.unwrap_or(config.alias.unnamed);
    let address = args.address.or(config.host.address);

    let mut session = host::connect(transport, address)?;
    let mut plugin_host = PluginHost::new(ClipboardMock::new(alias));
    plugin_host.run(&mut session)?;

    log::info!("=== CLIPMOCK SESSION ENDED ===");

    Ok(())
}

/// Writes log records to `path` in `[timestamp] [LEVEL] message` form
///
/// Defaults to DEBUG in debug builds and INFO otherwise; RUST_LOG overrides.
fn init_logging(path: &Path) -> Result<()> {
    use std::io::Write;

    let default_level = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .format(|buf, record| {
            use std::time::SystemTime;
            let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
            writeln!(
                buf,
                "[{}] [{}] {}",
                datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .init();

    Ok(())
}
