//! Bracket-depth scanning over type-name strings.
//!
//! Parameter removal scans forward for the `>` that closes a template
//! argument list; const repositioning scans backward for the `<` or `,` that
//! opens the enclosing argument. Both are the same abstract operation — find
//! the token bounding the current nesting scope — so they share one
//! primitive, parameterized by direction.
//!
//! Demangler output is ASCII, so byte offsets are character offsets.

/// Direction of a depth scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Toward the end of the string, for the `>` closing the current scope.
    Forward,
    /// Toward the start, for the `<` or `,` opening the current argument.
    Backward,
}

/// Find the byte index of the token bounding the current nesting scope.
///
/// `Forward`: `from` is just past an already-consumed `<`; returns the index
/// of the `>` that closes it, skipping nested argument lists.
///
/// `Backward`: `from` is the position the scan backs away from (exclusive);
/// returns the index of the `<` or `,` that opens the enclosing argument,
/// skipping complete nested lists seen on the way. Index 0 is never a
/// boundary: a type name cannot open an argument list before its first
/// character.
///
/// Returns `None` when the scan runs off the string without a boundary.
pub fn scope_boundary(name: &str, from: usize, direction: Direction) -> Option<usize> {
    let bytes = name.as_bytes();
    match direction {
        Direction::Forward => {
            let mut depth = 1usize;
            let mut i = from;
            while i < bytes.len() {
                match bytes[i] {
                    b'<' => depth += 1,
                    b'>' => {
                        depth -= 1;
                        if depth == 0 {
                            return Some(i);
                        }
                    }
                    _ => {}
                }
                i += 1;
            }
            None
        }
        Direction::Backward => {
            let mut depth = 0usize;
            let mut i = from.min(name.len());
            while i > 1 {
                i -= 1;
                match bytes[i] {
                    b'>' => depth += 1,
                    b'<' if depth > 0 => depth -= 1,
                    b'<' => return Some(i),
                    b',' if depth == 0 => return Some(i),
                    _ => {}
                }
            }
            None
        }
    }
}
