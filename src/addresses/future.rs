//! Contract address forecasting
//!
//! A CREATE deployment lands at `keccak256(rlp([deployer, nonce]))[12..]`,
//! so the address of an account's next contract is known before the
//! transaction is sent.

use alloy::primitives::Address;

/// Address of the contract `deployer` will create at the given nonce.
pub fn future_contract_address(deployer: Address, nonce: u64) -> Address {
    deployer.create(nonce)
}

/// EIP-55 checksummed rendering.
pub fn checksummed(address: Address) -> String {
    address.to_checksum(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    #[test]
    fn test_known_create_addresses() {
        let deployer = address!("6ac7ea33f8831ea9dcc53393aaa88b25a785dbf0");

        assert_eq!(
            future_contract_address(deployer, 0),
            address!("cd234a471b72ba2f1ccf0a70fcaba648a5eecd8d")
        );
        assert_eq!(
            future_contract_address(deployer, 1),
            address!("343c43a37d37dff08ae8c4a11544c718abb4fcf8")
        );
    }

    #[test]
    fn test_nonce_changes_address() {
        let deployer = address!("6ac7ea33f8831ea9dcc53393aaa88b25a785dbf0");

        assert_ne!(
            future_contract_address(deployer, 2),
            future_contract_address(deployer, 3)
        );
    }

    #[test]
    fn test_eip55_checksum() {
        // Test vectors from EIP-55.
        for expected in [
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
            "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
            "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
            "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
        ] {
            let address: Address = expected.parse().unwrap();
            assert_eq!(checksummed(address), expected);
        }
    }
}
