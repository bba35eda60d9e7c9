//! Tests for account creation

#[cfg(test)]
mod tests {
    use crate::{Error, KeyReference, account::Account};
    use ethers::types::Address;

    const PHRASE: &str = "test test test test test test test test test test test junk";

    fn expected_address() -> Address {
        "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266".parse().unwrap()
    }

    #[test]
    fn test_from_mnemonic_is_deterministic() {
        let account = Account::from_mnemonic(PHRASE).unwrap();

        assert_eq!(account.address(), expected_address());
        assert_eq!(account.recovery(), &KeyReference::Mnemonic(PHRASE.to_string()));
    }

    #[test]
    fn test_from_private_key_matches_derived_key() {
        let key = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

        let account = Account::from_private_key(key).unwrap();

        assert_eq!(account.address(), expected_address());
        assert_eq!(account.recovery(), &KeyReference::PrivateKey);
    }

    #[test]
    fn test_generate_returns_recoverable_phrase() {
        let account = Account::generate().unwrap();

        let KeyReference::Mnemonic(phrase) = account.recovery() else {
            panic!("generated account should carry a phrase");
        };
        assert_eq!(phrase.split_whitespace().count(), 12);

        let restored = Account::from_mnemonic(phrase).unwrap();
        assert_eq!(restored.address(), account.address());
    }

    #[test]
    fn test_invalid_mnemonic_rejected() {
        let result = Account::from_mnemonic("not a real recovery phrase");

        assert!(matches!(result, Err(Error::KeyProvider { .. })));
    }
}
