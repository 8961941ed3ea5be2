//! # Network Selection
//!
//! Layered parameter sets and the selection rules, on a local selector.

#[cfg(test)]
mod tests {
    use chain_params::ports::flags;
    use chain_params::test_utils::{FixedRandomSource, FixedTimeSource, MapFlagSource};
    use chain_params::{
        Base58Type, ChainParamsError, ChainParamsRegistry, CompactTarget, NetworkId,
        NetworkSelector, U256,
    };

    fn selector() -> NetworkSelector {
        NetworkSelector::new(
            ChainParamsRegistry::build(&FixedTimeSource::new(1_700_000_000), &FixedRandomSource::new(0))
                .unwrap(),
        )
    }

    #[test]
    fn test_main_selection_reports_wire_constants() {
        let s = selector();
        let p = s.select(NetworkId::Main).unwrap();
        assert_eq!(p.magic, [0xbf, 0x0c, 0x6b, 0xbd]);
        assert_eq!(p.default_port, 3338);
        assert_eq!(p.rpc_port, 3339);
        assert_eq!(CompactTarget::from_target(p.pow_limit).to_consensus(), 0x1e0f_ffff);
    }

    #[test]
    fn test_regtest_selection() {
        let s = selector();
        let p = s.select_by_name("regtest").unwrap();
        assert_eq!(p.subsidy_halving_interval, 150);
        assert_eq!(p.pow_limit, U256::MAX >> 1);
        assert!(p.dns_seeds.is_empty());
        assert!(!p.require_rpc_password);
    }

    #[test]
    fn test_flags_select_testnet() {
        let s = selector();
        let p = s
            .select_from_flags(&MapFlagSource::new().with_bool(flags::TESTNET, true))
            .unwrap();
        assert_eq!(p.network_id, NetworkId::Test);
        assert_eq!(p.data_dir.as_deref(), Some("testnet3"));
        assert_eq!(p.base58_prefix(Base58Type::ScriptAddress), vec![19]);
        assert_eq!(p.base58_prefix(Base58Type::SecretKey), vec![239]);
        assert_eq!(p.base58_prefix(Base58Type::ExtPublicKey), vec![0x3a, 0x80, 0x61, 0xa0]);
        assert_eq!(p.base58_prefix(Base58Type::ExtSecretKey), vec![0x3a, 0x80, 0x58, 0x37]);
    }

    #[test]
    fn test_conflicting_flags_leave_nothing_active() {
        let s = selector();
        let flags = MapFlagSource::new()
            .with_bool(flags::TESTNET, true)
            .with_bool(flags::REGTEST, true);
        assert!(matches!(
            s.select_from_flags(&flags),
            Err(ChainParamsError::ConfigurationConflict(_))
        ));
        assert_eq!(s.active_network(), None);

        // A later valid selection still works.
        assert!(s.select(NetworkId::Regtest).is_ok());
    }

    #[test]
    fn test_gating_fields_pairwise_distinct() {
        let s = selector();
        let sets: Vec<_> = s.registry().iter().collect();
        for (i, a) in sets.iter().enumerate() {
            for b in &sets[i + 1..] {
                assert_ne!(a.magic, b.magic);
                assert_ne!(a.default_port, b.default_port);
                assert_ne!(a.rpc_port, b.rpc_port);
            }
        }
    }

    #[test]
    fn test_summary_json() {
        let s = selector();
        let json = serde_json::to_value(s.select(NetworkId::Test).unwrap().summary()).unwrap();
        assert_eq!(json["network"], "test");
        assert_eq!(json["magic"], "cee2caff");
        assert_eq!(json["default_port"], 13338);
        assert_eq!(json["data_dir"], "testnet3");
        assert_eq!(json["dns_seeds"][0]["host"], "testnet-dnsseed.unpaybank.info");
    }
}
