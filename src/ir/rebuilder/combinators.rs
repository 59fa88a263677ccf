//! Helpers for rebuilding child sequences and optional children.

/// Rebuilds every element of `items` in order, stopping at the first error.
///
/// The result has the same length and ordering as the input.
pub fn seq<T, U, E, F>(items: &[T], mut rebuild: F) -> Result<Vec<U>, E>
where
    F: FnMut(&T) -> Result<U, E>,
{
    let mut rebuilt = Vec::with_capacity(items.len());
    for item in items {
        rebuilt.push(rebuild(item)?);
    }
    Ok(rebuilt)
}

/// Rebuilds an optional child. An absent child stays absent and `rebuild`
/// is not called at all.
pub fn opt<T, U, E, F>(item: Option<&T>, rebuild: F) -> Result<Option<U>, E>
where
    F: FnOnce(&T) -> Result<U, E>,
{
    match item {
        Some(item) => rebuild(item).map(Some),
        None => Ok(None),
    }
}
