use bic_runtime::{echo, OwnedStr};

use anyhow::Result;

/// Enable with `RUST_LOG=bic_runtime=trace`. Logs go to stderr so that
/// stdout carries nothing but the printed bytes.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn main() -> Result<()> {
    init_tracing();

    let s = OwnedStr::new("Hello, ")?;
    tracing::debug!(size = s.size(), "built greeting");

    echo!(s, "World!")?;

    Ok(())
}
