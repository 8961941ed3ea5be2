//! Command-line arguments.

use clap::Parser;

/// Unpay node: verifies chain parameters and activates one network.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "node-runtime")]
#[command(about = "Unpay proof-of-work node runtime")]
pub struct Cli {
    /// Use the public test network
    #[arg(long)]
    pub testnet: bool,

    /// Use the local regression-test network
    #[arg(long)]
    pub regtest: bool,

    /// Select a network by name (main, test, regtest)
    #[arg(long, value_name = "NAME")]
    pub network: Option<String>,

    /// Log filter directive, e.g. "info" or "chain_params=debug"
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,

    /// Print the active parameters as JSON and exit
    #[arg(long)]
    pub print_params: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from(["node-runtime", "--regtest", "--log-level", "debug"]);
        assert!(cli.regtest);
        assert!(!cli.testnet);
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_parse_network_name() {
        let cli = Cli::parse_from(["node-runtime", "--network", "testnet", "--print-params"]);
        assert_eq!(cli.network.as_deref(), Some("testnet"));
        assert!(cli.print_params);
    }

    #[test]
    fn test_both_flags_parse() {
        // Rejected later by network resolution, not by clap.
        let cli = Cli::parse_from(["node-runtime", "--testnet", "--regtest"]);
        assert!(cli.testnet && cli.regtest);
    }

    #[test]
    fn test_command_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
