//! Case-insensitive equality and ordinal ordering for canonical strings.
//!
//! Every path type shares the same value semantics: equality and hashing
//! fold case with a locale-invariant lowercase mapping, while ordering
//! ([`DirectoryPath::cmp_ordinal`](crate::DirectoryPath::cmp_ordinal) and
//! friends) compares the canonical strings byte-for-byte. The two produce
//! different total orders on purpose: two values that are equal (and hash
//! alike) may still order apart when their casing differs. Callers must not
//! expect the orders to agree, which is also why no `Ord` impl exists: an
//! `Ord` inconsistent with `Eq` would violate the std trait contract.

use std::hash::Hasher;

/// Locale-invariant case-folded equality on canonical strings.
pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Hash a canonical string consistently with [`eq_ignore_case`].
pub(crate) fn hash_ignore_case<H: Hasher>(s: &str, state: &mut H) {
    for c in s.chars().flat_map(char::to_lowercase) {
        state.write_u32(c as u32);
    }
    // Terminator so prefixes hash distinctly, as String's Hash does.
    state.write_u8(0xff);
}
