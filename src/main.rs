// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Writes every valid unlock pattern to `allPatterns.txt`.

use lock_patterns::{run, OutputConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lock_patterns=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = OutputConfig::default();
    run(&config)?;

    Ok(())
}
