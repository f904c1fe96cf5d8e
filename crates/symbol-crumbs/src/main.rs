use std::path::{Path, PathBuf};

use clap::Parser;
use tower_lsp::Server;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use symbol_crumbs::{
    CrumbsSettings, build_service,
    config::{LogFilter, find_settings_file, generate_configuration_markdown, generate_json_schema, load_settings_file},
};

#[derive(Parser, Debug)]
#[command(name = "symbol-crumbs", version, about)]
struct Args {
    #[arg(long, short)]
    verbose: bool,

    #[arg(long)]
    log_file: Option<String>,

    /// Settings file; defaults to the nearest `symbol-crumbs.toml` above the
    /// working directory.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the settings reference as Markdown and exit.
    #[arg(long)]
    print_config_docs: bool,

    /// Print the settings JSON schema and exit.
    #[arg(long)]
    print_config_schema: bool,
}

fn default_log_path() -> PathBuf {
    let dir = dirs_or_tmp();
    dir.join("symbol-crumbs.log")
}

fn dirs_or_tmp() -> PathBuf {
    if let Some(home) = std::env::var_os("HOME") {
        let dir = PathBuf::from(home).join(".symbol-crumbs");
        if std::fs::create_dir_all(&dir).is_ok() {
            return dir;
        }
    }
    std::env::temp_dir()
}

/// Load the settings file, falling back to defaults when it is missing or broken.
///
/// Runs before the subscriber is installed, so problems are returned for
/// logging afterwards.
fn load_base_settings(explicit: Option<&Path>) -> (CrumbsSettings, Option<String>) {
    let defaults = CrumbsSettings::default();
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => std::env::current_dir().ok().and_then(|cwd| find_settings_file(&cwd)),
    };
    let Some(path) = path else {
        return (defaults, None);
    };
    match load_settings_file(&path, &defaults) {
        Ok(settings) => (settings, None),
        Err(error) => (defaults, Some(error.to_string())),
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if args.print_config_docs {
        print!("{}", generate_configuration_markdown());
        return;
    }
    if args.print_config_schema {
        match serde_json::to_string_pretty(&generate_json_schema()) {
            Ok(schema) => println!("{schema}"),
            Err(error) => eprintln!("failed to render schema: {error}"),
        }
        return;
    }

    let (base_settings, config_error) = load_base_settings(args.config.as_deref());

    let initial_filter = if args.verbose {
        EnvFilter::new("symbol_crumbs=debug,tower_lsp=debug")
    } else {
        base_settings.logging.level.env_filter()
    };
    let (filter_layer, log_filter) = LogFilter::layer(initial_filter);

    let log_path = args.log_file.as_ref().map(PathBuf::from).unwrap_or_else(default_log_path);

    let file_appender = tracing_appender::rolling::never(
        log_path.parent().unwrap_or(Path::new(".")),
        log_path.file_name().unwrap_or(std::ffi::OsStr::new("symbol-crumbs.log")),
    );

    let file_layer = fmt::layer().with_writer(file_appender).with_ansi(false).with_target(false);

    // stdout carries the JSON-RPC stream; logs go to stderr only.
    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_ansi(false).with_target(false);

    tracing_subscriber::registry().with(filter_layer).with(file_layer).with(stderr_layer).init();

    info!("Starting symbol-crumbs v{}", env!("CARGO_PKG_VERSION"));
    info!("Log file: {}", log_path.display());
    if let Some(error) = config_error {
        warn!("Using default settings: {error}");
    }

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    // `--verbose` pins the filter; otherwise `logging.level` from the client applies.
    let (service, socket) = build_service(base_settings, (!args.verbose).then_some(log_filter));

    Server::new(stdin, stdout, socket).serve(service).await;

    info!("symbol-crumbs stopped");
}
