//! Core of the guard evaluation model
//!
//! The failure taxonomy, the fluent chain, and the aggregating manager.
//! Atomic guards live in [`crate::guards`]; named profiles in
//! [`crate::registry`].

pub mod chain;
pub mod error;
pub mod manager;

pub use chain::{ChainExt, GuardChain, NumChainExt, OrdChainExt, StrChainExt, chain_of, chain_required};
pub use error::{
    CollectionKind, FileKind, FormatKind, GuardError, GuardErrorKind, GuardResult, NumericKind,
    ProfileError, TemporalKind,
};
pub use manager::{GuardClause, GuardManager};
