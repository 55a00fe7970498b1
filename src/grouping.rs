use crate::engine::{Clusterer, Group};
use crate::normalize::normalize;
use crate::options::Options;
use std::convert::Infallible;
use tracing::debug;

/// Groups `source` by similarity of the key each item yields.
///
/// Items are extracted into `(key, payload)` pairs, stably sorted by key in
/// ordinal order, normalized per `options`, then clustered greedily. Every
/// call builds a fresh result; nothing is shared between calls.
pub fn group_by<T, R, S, K, P>(
    source: impl IntoIterator<Item = T>,
    options: &Options,
    mut key_of: K,
    mut payload_of: P,
) -> Vec<Group<R>>
where
    S: AsRef<str>,
    K: FnMut(&T) -> S,
    P: FnMut(T) -> R,
{
    let result = try_group_by(
        source,
        options,
        |item| Ok::<_, Infallible>(key_of(item)),
        |item| Ok(payload_of(item)),
    );
    match result {
        Ok(groups) => groups,
        Err(never) => match never {},
    }
}

/// Like [`group_by`], with selectors that can fail. The first selector error
/// is returned as-is and no groups are produced.
pub fn try_group_by<T, R, S, E, K, P>(
    source: impl IntoIterator<Item = T>,
    options: &Options,
    mut key_of: K,
    mut payload_of: P,
) -> Result<Vec<Group<R>>, E>
where
    S: AsRef<str>,
    K: FnMut(&T) -> Result<S, E>,
    P: FnMut(T) -> Result<R, E>,
{
    let mut items: Vec<(S, R)> = Vec::new();
    for item in source {
        let key = key_of(&item)?;
        let payload = payload_of(item)?;
        items.push((key, payload));
    }
    items.sort_by(|a, b| a.0.as_ref().cmp(b.0.as_ref()));

    let total = items.len();
    let mut clusterer = Clusterer::new(*options);
    for (key, payload) in items {
        let key = normalize(key.as_ref(), options.strip_digits(), options.strip_identifiers());
        clusterer.push(&key, payload);
    }
    let groups = clusterer.finish();
    debug!(
        items = total,
        groups = groups.len(),
        unit = ?options.unit(),
        tolerance = options.tolerance(),
        "grouped items"
    );
    Ok(groups)
}

/// Groups items by their `Display` text, keeping the items themselves as payloads.
pub fn group<T: ToString>(source: impl IntoIterator<Item = T>, options: &Options) -> Vec<Group<T>> {
    group_by(source, options, |item| item.to_string(), |item| item)
}
