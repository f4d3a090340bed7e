// SPDX-License-Identifier: Apache-2.0

//! Logging initialization for the Habitica CLI.
//!
//! Uses `tracing` with `tracing-subscriber` for structured logging.
//! Log level can be controlled via the `RUST_LOG` environment variable.
//!
//! # Examples
//!
//! ```bash
//! # Debug output for troubleshooting
//! RUST_LOG=habitica_core=debug habitica status
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the logging subsystem.
///
/// The `-v` flag raises the default filter to info level for this crate's
/// targets; `RUST_LOG` overrides everything.
pub fn init_logging(verbose: bool) {
    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let default_filter = if verbose {
        "habitica_cli=info,habitica_core=info,reqwest=error"
    } else {
        "habitica_cli=warn,habitica_core=warn,reqwest=error"
    };
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .expect("valid default filter directives");

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
