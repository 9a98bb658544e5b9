#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Mangled C++ symbols to canonical dictionary-key type names.
//!
//! Two steps: a platform-specific raw demangle (the [`Demangler`] trait,
//! with an Itanium-ABI implementation for GCC/Clang symbols), then the pure
//! canonicalization pipeline from `typekey-core`. [`canonical_type_name`]
//! composes them:
//!
//! ```
//! use typekey_demangle::canonical_type_name;
//!
//! assert_eq!(canonical_type_name("_ZSt4cout").unwrap(), "std::cout");
//! ```
//!
//! Known limitations, inherited from the mangling scheme: only type names
//! are supported, not function signatures, and an enum value used as a
//! non-type template parameter cannot be recovered by name from the mangled
//! form.


pub use typekey_core::canonicalize;

/// The symbol is not a valid mangled name for the active scheme.
///
/// Never retried: retrying cannot turn a malformed symbol into a valid one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unable to demangle symbol '{symbol}'")]
pub struct DemangleError {
    /// The offending symbol, verbatim.
    pub symbol: String,
}

/// Errors from the combined demangle-and-canonicalize entry point.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Demangle(#[from] DemangleError),

    #[error(transparent)]
    Canonicalize(#[from] typekey_core::Error),
}

/// Result type for symbol operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Platform- and scheme-specific raw demangler.
///
/// Implementations turn a mangled symbol into a human-readable type name;
/// the output is not yet canonical. The trait seam keeps the pipeline
/// testable without a platform demangler, and lets a non-reentrant platform
/// facility be wrapped in whatever serialization the caller needs — the
/// canonicalization passes themselves impose no such restriction.
pub trait Demangler {
    fn demangle(&self, symbol: &str) -> std::result::Result<String, DemangleError>;
}

/// Itanium-ABI demangler (GCC, Clang) backed by `cpp_demangle`.
///
/// Pure Rust, reentrant and thread-safe.
#[derive(Debug, Clone, Copy, Default)]
pub struct ItaniumDemangler;

impl Demangler for ItaniumDemangler {
    fn demangle(&self, symbol: &str) -> std::result::Result<String, DemangleError> {
        let parsed = cpp_demangle::Symbol::new(symbol).map_err(|_| DemangleError {
            symbol: symbol.to_string(),
        })?;
        parsed
            .demangle(&cpp_demangle::DemangleOptions::default())
            .map_err(|_| DemangleError {
                symbol: symbol.to_string(),
            })
    }
}

/// Demangle `symbol` with the platform demangler and canonicalize the
/// result into dictionary-key form.
pub fn canonical_type_name(symbol: &str) -> Result<String> {
    canonical_type_name_with(&ItaniumDemangler, symbol)
}

/// Like [`canonical_type_name`], with an injected demangler.
pub fn canonical_type_name_with<D: Demangler>(demangler: &D, symbol: &str) -> Result<String> {
    let demangled = demangler.demangle(symbol)?;
    Ok(typekey_core::canonicalize(&demangled)?)
}
