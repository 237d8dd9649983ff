//! Atomic guards
//!
//! One free function per invariant, grouped by value category. Every guard
//! takes the subject, any auxiliary parameters, and the parameter name used
//! in the failure message, and returns `Err(GuardError)` on violation with
//! no other observable effect. The `file` and `env` guards are the
//! documented exceptions: they delegate to a platform metadata query.

pub mod basic;
pub mod collection;
pub mod datetime;
pub mod env;
pub mod file;
pub mod format;
pub mod numeric;
pub mod string;
