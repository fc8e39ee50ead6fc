//! # Bankbook Core
//!
//! The account ledger behind a personal bank-account manager: register,
//! edit, delete, deposit, and withdraw bank accounts, with the whole list
//! mirrored to a single persisted blob after every mutation.
//!
//! ## Features
//!
//! - **Write-through ledger**: every mutation ends in one full rewrite of the persisted list
//! - **Injected storage**: file-backed for real use, in-memory for tests and demos
//! - **Pure updates**: mutations build a new list; accounts are never edited in place
//! - **Form sessions**: the register / save-edit flow with raw draft field handling
//!
//! ## Quick Start
//!
//! ```rust
//! use bankbook_core::utils::MemoryStore;
//! use bankbook_core::{AccountDraft, Ledger};
//!
//! let mut ledger = Ledger::load(MemoryStore::new()).unwrap();
//! let account = ledger
//!     .register(&AccountDraft::new("Acme Bank", "1", "100", "200"))
//!     .unwrap();
//!
//! assert_eq!(account.bank_name, "Acme Bank");
//! assert_eq!(ledger.accounts().len(), 1);
//! ```

pub mod ledger;
pub mod storage;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use ledger::*;
pub use storage::*;
pub use traits::*;
pub use types::*;
