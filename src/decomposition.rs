use compact_str::CompactString;
use unicode_normalization::char::{canonical_combining_class, decompose_canonical};

#[inline]
pub fn is_combining(c: char) -> bool {
    canonical_combining_class(c) > 0
}

/// Canonically decompose `c`, drop its combining marks, and map each
/// remaining base character with `base`. Fails unless the character has a
/// decomposition and every base character maps.
pub fn strip_marks<F>(c: char, base: F) -> Option<CompactString>
where
    F: Fn(char) -> Option<CompactString>,
{
    let mut decomposed = CompactString::default();
    decompose_canonical(c, |d| decomposed.push(d));

    let mut bases = decomposed.chars().filter(|d| !is_combining(*d)).peekable();
    if decomposed.chars().count() < 2 || bases.peek().is_none() {
        return None;
    }

    let mut result = CompactString::default();
    for d in bases {
        result.push_str(&base(d)?);
    }
    Some(result)
}
