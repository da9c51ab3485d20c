mod app;
mod cli;

use fennec_config::{FennecConfig, MemoryPrefs, PrefStore, TomlPrefs};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

const DEFAULT_DIRECTIVE: &str = "fennec=info";

fn load_config(args: &cli::Args) -> fennec_common::Result<FennecConfig> {
    let config = match &args.config {
        Some(path) => fennec_config::toml_loader::load_from_path(path)?,
        None => fennec_config::load_config()?,
    };
    Ok(config)
}

fn open_prefs(args: &cli::Args) -> Box<dyn PrefStore> {
    if let Some(path) = &args.prefs {
        return Box::new(TomlPrefs::at_path(path));
    }
    match TomlPrefs::open_default() {
        Ok(prefs) => {
            tracing::info!("Using prefs at {}", prefs.path().display());
            Box::new(prefs)
        }
        Err(e) => {
            tracing::warn!("No prefs location ({e}), last URI will not persist");
            Box::new(MemoryPrefs::new())
        }
    }
}

fn main() {
    let args = cli::parse();

    // Config is read before logging so its level can apply; the outcome is
    // reported once the subscriber exists.
    let loaded = load_config(&args);

    let log_directive = args.log_level.clone().unwrap_or_else(|| match &loaded {
        Ok(config) => config.logging.level.directive().to_string(),
        Err(_) => DEFAULT_DIRECTIVE.to_string(),
    });
    let directive: Directive = log_directive.parse().unwrap_or_else(|_| {
        eprintln!("invalid log filter {log_directive:?}, using {DEFAULT_DIRECTIVE}");
        DEFAULT_DIRECTIVE.parse().expect("default directive is valid")
    });
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();

    tracing::info!("Fennec v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        FennecConfig::default()
    });

    let prefs = open_prefs(&args);

    let remote = args.remote.as_deref().and_then(|raw| {
        let uri = cli::fixup_uri(raw);
        if uri.is_none() {
            tracing::warn!("Ignoring empty --remote argument");
        }
        uri
    });

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            std::process::exit(1);
        }
    };
    let mut app = app::FennecApp::new(config, prefs, remote);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
