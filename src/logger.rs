use env_logger::Env;

/// Initializes the global logger. `RUST_LOG` takes precedence over `verbose`.
pub fn init_logger(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
