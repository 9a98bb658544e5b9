//! The canonicalization pipeline.
//!
//! Pass order is load-bearing: allocator/comparator stripping must precede
//! const repositioning (a stripped parameter changes which identifier
//! precedes a trailing `const`), bracket splitting must follow both
//! parameter removal and string canonicalization (those passes create the
//! `>>` runs it separates), and comma-space collapse comes first so the
//! parameter markers match without spaces.

use std::sync::LazyLock;

use crate::rewrite::{REWRITE_FUEL, Rule, rewrite_to_fixpoint};
use crate::scan::{Direction, scope_boundary};
use crate::{Error, Result};

/// No space after a comma.
static COMMA_SPACE: LazyLock<Rule> = LazyLock::new(|| Rule::new(r"^(.*), (.*)$", "${1},${2}"));

/// Spell out the built-in string type. `:` is a non-identifier character, so
/// one rule covers both `std::string` and the unqualified token.
static STRING_CANON: LazyLock<Rule> = LazyLock::new(|| {
    Rule::new(
        r"^(.*[^0-9A-Za-z_])string([^0-9A-Za-z_].*)$",
        "${1}basic_string<char>${2}",
    )
});

/// No two consecutive `>`: downstream lexers would read a shift operator.
static SHIFT_SPLIT: LazyLock<Rule> = LazyLock::new(|| Rule::new(r"^(.*)>>(.*)$", "${1}> >${2}"));

/// No `u`/`l` suffixes on integer template arguments.
static INT_SUFFIX: LazyLock<Rule> =
    LazyLock::new(|| Rule::new(r"^(.*[<,][0-9]+)[ul]l*([,>].*)$", "${1}${2}"));

/// Default template parameters stripped from the name, in pass order:
/// allocators, then comparators, so containers keyed by containers come out
/// clean on the repeated rescans. The platform demangler qualifies these
/// with `std::`; the unqualified spellings are accepted too. Each marker
/// starts at a `,` and ends at its own `<`.
const DEFAULT_PARAMETERS: [&str; 4] = [",std::allocator<", ",allocator<", ",std::less<", ",less<"];

/// Remove every template parameter introduced by `marker`, including the
/// parameter's own nested argument list.
///
/// `marker` must begin with `,` and end with `<`. The depth scan starts just
/// past the marker's `<` and the deletion runs through the `>` that closes
/// it. A stray separator space left at the deletion point is deleted too,
/// unless the character before it is `>` (that spacing is canonical).
///
/// Fails with [`Error::UnbalancedBrackets`] when no closing bracket exists;
/// such input can only come from a broken demangler, and a partially
/// stripped name must not escape.
pub fn remove_parameter(input: &str, marker: &str) -> Result<String> {
    debug_assert!(marker.starts_with(',') && marker.ends_with('<'));

    let mut name = input.to_string();
    while let Some(index) = name.find(marker) {
        let Some(end) = scope_boundary(&name, index + marker.len(), Direction::Forward) else {
            return Err(Error::UnbalancedBrackets { name });
        };
        name.replace_range(index..=end, "");
        if name.as_bytes().get(index) == Some(&b' ') && (index == 0 || name.as_bytes()[index - 1] != b'>')
        {
            name.remove(index);
        }
    }
    Ok(name)
}

/// Move each trailing `const` in front of the identifier it qualifies.
///
/// The demangler writes `pair<int,double const>`; the dictionary convention
/// is `pair<int,const double>`. Each ` const` is deleted and the qualifier
/// re-inserted right after the `<` or `,` opening the enclosing argument,
/// skipping nested argument lists on the way back. When the backward scan
/// reaches the start of the string there is no enclosing argument and the
/// qualifier is dropped: top-level constness is not part of a dictionary
/// key.
///
/// On demangler output the occurrence count strictly decreases, but a name
/// that already carries repositioned qualifiers can recreate the occurrence
/// just removed (`vector<const int const>` cycles), so the loop is capped
/// like the other fixed-point passes and fails with
/// [`Error::RewriteFuelExhausted`] instead of hanging.
pub fn const_before_identifier(input: &str) -> Result<String> {
    const TRAILING_CONST: &str = " const";

    let mut name = input.to_string();
    for _ in 0..REWRITE_FUEL {
        let Some(index) = name.find(TRAILING_CONST) else {
            return Ok(name);
        };
        name.replace_range(index..index + TRAILING_CONST.len(), "");
        if let Some(boundary) = scope_boundary(&name, index, Direction::Backward) {
            name.insert_str(boundary + 1, "const ");
        }
    }
    Err(Error::RewriteFuelExhausted { name })
}

/// Canonicalize a demangled type name into dictionary-key form.
///
/// # Examples
/// ```
/// use typekey_core::canonicalize;
///
/// assert_eq!(canonicalize("pair<int, double const>").unwrap(), "pair<int,const double>");
/// assert_eq!(canonicalize("vector<int,allocator<int> >").unwrap(), "vector<int>");
/// ```
pub fn canonicalize(demangled: &str) -> Result<String> {
    let mut name = rewrite_to_fixpoint(demangled, &COMMA_SPACE)?;
    for marker in DEFAULT_PARAMETERS {
        name = remove_parameter(&name, marker)?;
    }
    name = rewrite_to_fixpoint(&name, &STRING_CANON)?;
    name = const_before_identifier(&name)?;
    name = rewrite_to_fixpoint(&name, &SHIFT_SPLIT)?;
    rewrite_to_fixpoint(&name, &INT_SUFFIX)
}
