//! Orion Guard - guard-clause validation toolkit with fluent chains,
//! aggregated runs, and named profiles
//!
//! Guard clauses check one value against one invariant and report a typed
//! [`GuardError`] the moment the invariant is violated, instead of letting
//! bad data propagate. The crate offers four ways to run them:
//!
//! - **Atomic guards** ([`guards`]) - free functions for one-off checks:
//!   `string::not_empty(value, "name")?`.
//! - **Fluent chains** ([`core::chain`]) - several steps over one value in a
//!   single short-circuiting expression.
//! - **Aggregated runs** ([`core::manager`]) - validate a whole structured
//!   input and report every failure at once.
//! - **Named profiles** ([`registry`]) - register a composite recipe once,
//!   invoke it by name anywhere.
//!
//! # Examples
//!
//! ```
//! use orion_guard::prelude::*;
//!
//! fn register_user(username: &str, email: &str, age: i64) -> Result<(), GuardError> {
//!     chain_of(username, "username")
//!         .not_empty()
//!         .length(3, 20)
//!         .alphanumeric()
//!         .finish()?;
//!     guards::format::email(email, "email")?;
//!     guards::numeric::in_range(age, 18, 120, "age")?;
//!     Ok(())
//! }
//!
//! assert!(register_user("ada42", "ada@example.com", 36).is_ok());
//! assert!(register_user("ada42", "not-an-email", 36).is_err());
//! ```
//!
//! Collecting every violation of a form instead of the first:
//!
//! ```
//! use orion_guard::prelude::*;
//!
//! let email = "not-an-email".to_string();
//! let age = 7;
//! let failures = GuardManager::new()
//!     .add(move || guards::format::email(&email, "email"))
//!     .add(move || guards::numeric::in_range(age, 18, 120, "age"))
//!     .collect();
//! assert_eq!(failures.len(), 2);
//! ```

pub mod core;
pub mod guards;
pub mod patterns;
pub mod registry;

pub use self::core::chain::{
    ChainExt, GuardChain, NumChainExt, OrdChainExt, StrChainExt, chain_of, chain_required,
};
pub use self::core::error::{
    CollectionKind, FileKind, FormatKind, GuardError, GuardErrorKind, GuardResult, NumericKind,
    ProfileError, TemporalKind,
};
pub use self::core::manager::{GuardClause, GuardManager};
pub use self::registry::ProfileRegistry;

/// Everything needed at a typical call site.
pub mod prelude {
    pub use crate::core::chain::{
        ChainExt, GuardChain, NumChainExt, OrdChainExt, StrChainExt, chain_of, chain_required,
    };
    pub use crate::core::error::{
        CollectionKind, FileKind, FormatKind, GuardError, GuardErrorKind, GuardResult,
        NumericKind, ProfileError, TemporalKind,
    };
    pub use crate::core::manager::{GuardClause, GuardManager};
    pub use crate::guards;
    pub use crate::registry::ProfileRegistry;
}
