use once_cell::sync::OnceCell;
use tracing::Level;
use tracing_subscriber::EnvFilter;

static LOGGING_INIT: OnceCell<()> = OnceCell::new();

/// Install a `tracing` subscriber writing to stderr. `RUST_LOG` takes
/// precedence; otherwise `verbose` selects DEBUG over INFO. Later calls are
/// no-ops, as is calling it after another global subscriber was installed.
pub fn init_logging(verbose: bool) {
    LOGGING_INIT.get_or_init(|| {
        let level = if verbose { Level::DEBUG } else { Level::INFO };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(level.to_string().to_lowercase()));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init_logging(true);
        init_logging(false);
        tracing::debug!("logging initialised");
    }
}
