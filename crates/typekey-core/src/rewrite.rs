//! Fixed-point pattern rewriting.
//!
//! The pipeline's textual rules are whole-string matches re-applied until
//! they stop matching, not one-shot substitutions: a rule fires on the last
//! eligible occurrence each time, so one application per occurrence is
//! needed, and some rewrites chain.

use regex::Regex;

use crate::{Error, Result};

/// Iteration cap for fixed-point rewriting.
///
/// Every pipeline rule strictly reduces some measure of the string (length,
/// or count of eligible tokens), so a well-formed rule converges far below
/// this. Hitting the cap means a non-reducing rule and is reported as an
/// error instead of looping forever.
pub const REWRITE_FUEL: usize = 10_000;

/// A whole-string rewrite rule: an anchored pattern plus a replacement
/// template with `${n}` capture references.
#[derive(Debug, Clone)]
pub struct Rule {
    regex: Regex,
    replacement: &'static str,
}

impl Rule {
    /// Compile a rule. The pattern is matched against the entire string, so
    /// it must carry its own `^`/`$` anchors.
    ///
    /// Panics on an invalid pattern; rules are compiled from literals.
    pub fn new(pattern: &str, replacement: &'static str) -> Self {
        let regex = Regex::new(pattern).expect("rewrite rule pattern must compile");
        Self { regex, replacement }
    }

    fn is_match(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }

    fn apply(&self, name: &str) -> String {
        self.regex.replace(name, self.replacement).into_owned()
    }
}

/// Apply `rule` repeatedly until it no longer matches the whole string.
///
/// Termination is the caller's obligation: each application of the rule must
/// strictly shrink some measure of the string. [`REWRITE_FUEL`] is the
/// safety net for a rule that breaks that invariant.
pub fn rewrite_to_fixpoint(input: &str, rule: &Rule) -> Result<String> {
    let mut name = input.to_string();
    for _ in 0..REWRITE_FUEL {
        if !rule.is_match(&name) {
            return Ok(name);
        }
        name = rule.apply(&name);
    }
    Err(Error::RewriteFuelExhausted { name })
}
