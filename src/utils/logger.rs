use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is not set.
fn default_directives(verbose: bool) -> String {
    let crate_name = env!("CARGO_CRATE_NAME");
    if verbose {
        format!("{}=debug,warn", crate_name)
    } else {
        format!("{}=info,warn", crate_name)
    }
}

/// Progress goes to stderr so stdout only carries the final output path.
pub fn init_cli_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time()
                .compact(),
        )
        .init();
}
