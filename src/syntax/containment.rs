//! Path containment predicate.
//! Used to refuse copying/moving a folder into itself or one of its descendants.

use std::borrow::Cow;

/// True when `descendant` equals `ancestor` or lies beneath it.
///
/// Both sides get a trailing separator before the prefix test, so `/a/bc` is not
/// treated as living under `/a/b`.
pub fn contains(ancestor: &str, descendant: &str, separator: char) -> bool {
    let ancestor = with_trailing_separator(ancestor, separator);
    let descendant = with_trailing_separator(descendant, separator);
    descendant.starts_with(ancestor.as_ref())
}

fn with_trailing_separator(path: &str, separator: char) -> Cow<'_, str> {
    if path.ends_with(separator) {
        Cow::Borrowed(path)
    } else {
        let mut owned = String::with_capacity(path.len() + separator.len_utf8());
        owned.push_str(path);
        owned.push(separator);
        Cow::Owned(owned)
    }
}
