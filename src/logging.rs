use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the stderr logger used by the demo binaries. `RUST_LOG` wins over
/// `verbose` when set.
pub fn init(verbose: bool) {
    let default_directive = if verbose {
        "dsa_patterns=debug,info"
    } else {
        "dsa_patterns=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    // A second init in the same process (tests) is not an error.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init();
}
