//! # Wire Format
//!
//! Byte-level checks on the serialized genesis block.

#[cfg(test)]
mod tests {
    use chain_params::{build_genesis, main_genesis_inputs};
    use shared_crypto::sha256d;
    use shared_types::{serialize, BLOCK_HEADER_SIZE};

    #[test]
    fn test_header_is_80_bytes_and_hashes_to_identity() {
        let genesis = build_genesis(&main_genesis_inputs().unwrap());
        let header = serialize(genesis.header());
        assert_eq!(header.len(), BLOCK_HEADER_SIZE);

        let mut digest = sha256d(&header);
        digest.reverse();
        assert_eq!(hex::encode(digest), genesis.hash().to_string());
    }

    #[test]
    fn test_header_field_layout() {
        let genesis = build_genesis(&main_genesis_inputs().unwrap());
        let header = serialize(genesis.header());
        assert_eq!(&header[0..4], &1i32.to_le_bytes());
        assert!(header[4..36].iter().all(|b| *b == 0));
        assert_eq!(&header[36..68], genesis.merkle_root().as_bytes());
        assert_eq!(&header[68..72], &1_435_041_593u32.to_le_bytes());
        assert_eq!(&header[72..76], &0x1e0f_fff0u32.to_le_bytes());
        assert_eq!(&header[76..80], &64_680u32.to_le_bytes());
    }

    #[test]
    fn test_full_block_encoding() {
        let genesis = build_genesis(&main_genesis_inputs().unwrap());
        let block = serialize(genesis.block());
        let tx = serialize(genesis.coinbase());
        assert_eq!(block.len(), BLOCK_HEADER_SIZE + 1 + tx.len());
        assert_eq!(block[BLOCK_HEADER_SIZE], 1);
        assert_eq!(&block[BLOCK_HEADER_SIZE + 1..], tx.as_slice());
    }

    #[test]
    fn test_coinbase_txid_is_double_digest_of_encoding() {
        let genesis = build_genesis(&main_genesis_inputs().unwrap());
        let tx = serialize(genesis.coinbase());
        assert_eq!(&sha256d(&tx), genesis.coinbase().txid().as_bytes());
    }
}
