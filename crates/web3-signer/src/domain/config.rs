//! Signer configuration
//!
//! Without a chain identifier the signer falls back to legacy (homestead)
//! signatures, which are replayable across chains.
//!
//! # Example
//!
//! ```ignore
//! use web3_signer::SignerConfig;
//!
//! let signer = SignerConfig::from_json(r#"{"chainId":"0x1"}"#)?.signer();
//! ```

use super::errors::SignerError;
use super::signer::Signer;
use serde::{Deserialize, Serialize};
use web3_types::{TypesError, U256};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignerConfig {
    /// Chain to bind signatures to (hex quantity). `None` selects legacy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<U256>,
}

impl SignerConfig {
    /// Parse a configuration document.
    pub fn from_json(data: &str) -> Result<Self, SignerError> {
        serde_json::from_str(data)
            .map_err(TypesError::from)
            .map_err(SignerError::from)
    }

    /// Builder-style method to set the chain identifier
    pub fn with_chain_id(mut self, chain_id: U256) -> Self {
        self.chain_id = Some(chain_id);
        self
    }

    pub fn signer(&self) -> Signer {
        Signer::new(self.chain_id)
    }
}
