use tracing_subscriber::{prelude::*, EnvFilter};

/// Install the global tracing subscriber.
///
/// JSON lines in production, pretty output otherwise. `RUST_LOG` overrides
/// the default filter. Calling this more than once is harmless.
pub fn init_tracing(production: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if production {
            EnvFilter::new("info")
        } else {
            EnvFilter::new("debug,hyper=info,reqwest=info")
        }
    });

    let result = if production {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .flatten_event(true),
            )
            .with(filter)
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().with_target(false).pretty())
            .with(filter)
            .try_init()
    };

    if result.is_err() {
        tracing::debug!("tracing already initialized");
    }
}
