#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Canonicalization of demangled C++ type names.
//!
//! A demangled type name is not yet usable as a dictionary-lookup key: the
//! platform demangler spells out default allocators and comparators, puts
//! spaces after commas, writes `const` after the type it qualifies, and keeps
//! integer-literal suffixes on non-type template arguments. [`canonicalize`]
//! rewrites such a name into the normalized form the dictionary expects:
//!
//! ```
//! use typekey_core::canonicalize;
//!
//! let name = "std::map<std::string, int, std::less<std::string>, \
//!             std::allocator<std::pair<std::string const, int> > >";
//! assert_eq!(
//!     canonicalize(name).unwrap(),
//!     "std::map<std::basic_string<char>,int>"
//! );
//! ```
//!
//! Every pass respects template-bracket nesting; a naive textual substitution
//! would corrupt nested generic types. The pipeline is a pure string
//! transform: no I/O, no shared state, calls are independent.

pub mod canon;
pub mod rewrite;
pub mod scan;

#[cfg(test)]
mod canon_tests;

pub use canon::canonicalize;

/// Errors that can occur while canonicalizing a type name.
///
/// Both variants indicate a broken input or a broken rewrite rule, never a
/// recoverable condition: a half-rewritten name is not a valid dictionary key,
/// so canonicalization either fully succeeds or fails outright.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A rewrite rule failed to reach a fixed point within the iteration cap.
    #[error("rewrite limit exceeded while normalizing '{name}'")]
    RewriteFuelExhausted { name: String },

    /// A bracket-depth scan could not find a matching angle bracket.
    ///
    /// The input violates the well-formedness invariant, which points at an
    /// upstream demangler bug.
    #[error("malformed type name '{name}': unbalanced angle brackets")]
    UnbalancedBrackets { name: String },
}

/// Result type for canonicalization passes.
pub type Result<T> = std::result::Result<T, Error>;
