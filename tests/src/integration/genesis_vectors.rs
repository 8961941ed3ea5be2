//! # Genesis Vectors
//!
//! Every network's genesis block, rebuilt from its inputs, must reproduce the
//! hardcoded hash and Merkle root exactly.

#[cfg(test)]
mod tests {
    use chain_params::registry::{mainnet, regtest, testnet};
    use chain_params::test_utils::{FixedRandomSource, FixedTimeSource};
    use chain_params::{
        build_genesis, compute_merkle_root, main_genesis_inputs, ChainParamsError,
        ChainParamsRegistry, ExpectedGenesis, GenesisBuilder, GenesisInputs, NetworkId,
    };

    const MERKLE_ROOT: &str = "6e56cf9e2477064c15d6fceb458c882484f5cfd94907d657c2140831beacb74c";

    fn inputs_for(network: NetworkId) -> GenesisInputs {
        let main = main_genesis_inputs().unwrap();
        match network {
            NetworkId::Main => main,
            NetworkId::Test => GenesisInputs {
                time: testnet::GENESIS_TIME,
                nonce: testnet::GENESIS_NONCE,
                ..main
            },
            NetworkId::Regtest => GenesisInputs {
                time: regtest::GENESIS_TIME,
                nonce: regtest::GENESIS_NONCE,
                ..main
            },
        }
    }

    fn expected_hash(network: NetworkId) -> &'static str {
        match network {
            NetworkId::Main => mainnet::GENESIS_HASH,
            NetworkId::Test => testnet::GENESIS_HASH,
            NetworkId::Regtest => regtest::GENESIS_HASH,
        }
    }

    #[test]
    fn test_each_network_reproduces_its_genesis() {
        for network in NetworkId::ALL {
            let genesis = build_genesis(&inputs_for(network));
            assert_eq!(genesis.hash().to_string(), expected_hash(network), "{network}");
            assert_eq!(genesis.merkle_root().to_string(), MERKLE_ROOT, "{network}");
        }
    }

    #[test]
    fn test_literal_hashes() {
        assert_eq!(
            build_genesis(&inputs_for(NetworkId::Main)).hash().to_string(),
            "9170f18cb2d6d2192c079c09e024c25ada980281604219fcd3c906db51f91ff6"
        );
        assert_eq!(
            build_genesis(&inputs_for(NetworkId::Test)).hash().to_string(),
            "b6dac2f62371ea41bfe2acae3842afb9e6526cdff729d870f5d5966e6ce5b630"
        );
        assert_eq!(
            build_genesis(&inputs_for(NetworkId::Regtest)).hash().to_string(),
            "0049b86a410883394a382040bbaaa4af5c885d9a9d20cce079e567790e6a769a"
        );
    }

    #[test]
    fn test_registry_agrees_with_standalone_builder() {
        let registry = ChainParamsRegistry::build(&FixedTimeSource::new(0), &FixedRandomSource::new(0)).unwrap();
        for network in NetworkId::ALL {
            let standalone = build_genesis(&inputs_for(network));
            assert_eq!(&standalone, &registry.get(network).genesis);
        }
    }

    #[test]
    fn test_single_leaf_merkle_matches_coinbase_txid() {
        let genesis = build_genesis(&inputs_for(NetworkId::Main));
        let txid = genesis.coinbase().txid();
        let merkle = compute_merkle_root(&[txid]);
        assert_eq!(merkle.root, txid);
        assert!(!merkle.mutated);
        assert_eq!(genesis.merkle_root(), txid);
    }

    #[test]
    fn test_swapped_expectations_fail_fast() {
        let inputs = inputs_for(NetworkId::Test);
        let err = GenesisBuilder::new(
            NetworkId::Test,
            &inputs,
            ExpectedGenesis {
                hash: mainnet::GENESIS_HASH,
                merkle_root: MERKLE_ROOT,
            },
        )
        .build()
        .unwrap_err();

        match err {
            ChainParamsError::ConstantIntegrityFailure {
                network,
                field,
                expected,
                actual,
            } => {
                assert_eq!(network, NetworkId::Test);
                assert_eq!(field, "genesis hash");
                assert_eq!(expected, mainnet::GENESIS_HASH);
                assert_eq!(actual, testnet::GENESIS_HASH);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
