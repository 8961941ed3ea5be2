//! # Seed Staleness
//!
//! Fixed bootstrap peers must always look one to two weeks old.

#[cfg(test)]
mod tests {
    use chain_params::adapters::ThreadRandomSource;
    use chain_params::registry::mainnet;
    use chain_params::test_utils::FixedTimeSource;
    use chain_params::{
        ChainParamsRegistry, NetworkId, SeedAddressGenerator, ONE_WEEK_SECS,
    };
    use std::collections::HashSet;
    use std::net::Ipv4Addr;

    const NOW: u64 = 1_750_000_000;

    #[test]
    fn test_thousand_runs_stay_in_window() {
        let time = FixedTimeSource::new(NOW);
        let rng = ThreadRandomSource::new();
        let generator = SeedAddressGenerator::new(&time, &rng);

        let mut distinct = HashSet::new();
        for _ in 0..1000 {
            for peer in generator.generate(&mainnet::FIXED_SEEDS, mainnet::DEFAULT_PORT) {
                assert!(peer.last_seen >= NOW - 2 * ONE_WEEK_SECS, "{peer:?}");
                assert!(peer.last_seen <= NOW - ONE_WEEK_SECS, "{peer:?}");
                distinct.insert(peer.last_seen);
            }
        }
        // 15 000 draws over a week of seconds cannot plausibly collapse.
        assert!(distinct.len() > 1000);
    }

    #[test]
    fn test_main_seed_addresses() {
        let registry = ChainParamsRegistry::build(&FixedTimeSource::new(NOW), &ThreadRandomSource::new()).unwrap();
        let main = registry.get(NetworkId::Main);
        assert_eq!(main.fixed_seeds.len(), mainnet::FIXED_SEEDS.len());
        assert_eq!(main.fixed_seeds[0].ip, Ipv4Addr::new(239, 128, 43, 179));
        assert_eq!(main.fixed_seeds[14].ip, Ipv4Addr::new(37, 209, 61, 108));
        assert!(registry.get(NetworkId::Test).fixed_seeds.is_empty());
        assert!(registry.get(NetworkId::Regtest).fixed_seeds.is_empty());
    }
}
