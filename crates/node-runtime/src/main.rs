//! # Unpay Node Runtime
//!
//! Entry point for the Unpay proof-of-work node.
//!
//! ## Startup Sequence
//!
//! 1. Parse command line and load configuration (CLI over environment)
//! 2. Initialize logging
//! 3. Build and self-check chain parameters for every network
//! 4. Activate exactly one network
//! 5. Report the active parameters
//!
//! Any failure in steps 3-4 aborts startup with a non-zero exit code.

use anyhow::Result;
use clap::Parser;
use tracing::error;

use node_runtime::{init_tracing, load_config, Cli, NodeContext};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli);

    init_tracing(&config.logging)?;

    let ctx = match NodeContext::bootstrap(config) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Startup aborted: {e:#}");
            return Err(e);
        }
    };

    if ctx.config().print_params {
        println!("{}", serde_json::to_string_pretty(&ctx.params().summary())?);
        return Ok(());
    }

    ctx.log_summary();
    Ok(())
}
