use log::LevelFilter;

/// Install the stderr logger. `RUST_LOG` still overrides the given level.
pub fn init(level: LevelFilter) {
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .format_target(false)
        .parse_default_env()
        .try_init();
}
