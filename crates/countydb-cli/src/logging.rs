use env_logger::{Builder, Env};

/// Initializes `env_logger`, honouring `RUST_LOG` and falling back to `warn`
/// so log lines do not interleave with the interactive prompts.
pub fn init_logging() {
    Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .format_module_path(false)
        .init();
}
