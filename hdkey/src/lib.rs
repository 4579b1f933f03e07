//! Hierarchical deterministic key derivation (BIP32) over secp256k1.
//!
//! ```
//! use hdkey::{DerivationPath, ExtendedKey, Network};
//!
//! let seed = [0x42u8; 32];
//! let master = ExtendedKey::new_master(&seed, Network::Mainnet)?;
//! let account = master.derive_path(&"m/44'/0'/0'".parse::<DerivationPath>()?)?;
//! let xpub = account.neuter();
//! let receive = xpub.derive_child(0u32)?.derive_child(7u32)?;
//! assert_eq!(receive, account.derive_child(0u32)?.derive_child(7u32)?.neuter());
//! assert_eq!(xpub.to_string().parse::<ExtendedKey>()?, xpub);
//! # Ok::<(), hdkey::Error>(())
//! ```

pub mod child_number;
pub mod curve;
pub mod derivation;
pub mod error;
pub mod extended_key;
pub mod serialization;
pub mod version;

pub use child_number::{ChildNumber, HARDENED_OFFSET};
pub use derivation::DerivationPath;
pub use error::{Error, Result};
pub use extended_key::{ExtendedKey, KeyMaterial};
pub use version::{KeyVersions, Network};
