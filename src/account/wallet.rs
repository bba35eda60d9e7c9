use crate::{Error, KeyReference, Result};
use ethers::core::rand::thread_rng;
use ethers::signers::coins_bip39::{English, Mnemonic};
use ethers::signers::{LocalWallet, MnemonicBuilder, Signer};
use ethers::types::Address;
use tracing::info;

/// Number of words in a generated recovery phrase
const PHRASE_WORDS: usize = 12;

/// Signing account for a job
///
/// Created either fresh (with a new recovery phrase), from an existing phrase,
/// or from a raw private key. Keys are derived at `m/44'/60'/0'/0/0`.
pub struct Account {
    wallet: LocalWallet,
    recovery: KeyReference,
}

impl Account {
    /// Create a new random account with a 12-word recovery phrase
    pub fn generate() -> Result<Self> {
        let mnemonic = Mnemonic::<English>::new_with_count(&mut thread_rng(), PHRASE_WORDS)
            .map_err(key_error)?;
        let account = Self::from_mnemonic(&mnemonic.to_phrase())?;
        info!("Generated new account {:?}", account.address());
        Ok(account)
    }

    /// Derive the account from an existing recovery phrase
    pub fn from_mnemonic(phrase: &str) -> Result<Self> {
        let wallet = MnemonicBuilder::<English>::default()
            .phrase(phrase)
            .build()
            .map_err(key_error)?;
        Ok(Self {
            wallet,
            recovery: KeyReference::Mnemonic(phrase.to_string()),
        })
    }

    /// Import the account from a hex-encoded private key
    pub fn from_private_key(hex_key: &str) -> Result<Self> {
        let wallet = hex_key
            .trim_start_matches("0x")
            .parse::<LocalWallet>()
            .map_err(key_error)?;
        Ok(Self {
            wallet,
            recovery: KeyReference::PrivateKey,
        })
    }

    pub fn address(&self) -> Address {
        self.wallet.address()
    }

    pub fn recovery(&self) -> &KeyReference {
        &self.recovery
    }

    pub fn wallet(&self) -> &LocalWallet {
        &self.wallet
    }
}

fn key_error(e: impl std::fmt::Display) -> Error {
    Error::KeyProvider {
        underlying: e.to_string(),
    }
}
