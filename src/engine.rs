use crate::distance;
use crate::options::Options;
use serde::Serialize;
use tracing::trace;

/// A discovered cluster: the key that founded it plus every payload that
/// matched it, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group<R> {
    pub representative: String,
    pub items: Vec<R>,
}

impl<R> Group<R> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Single-pass greedy clusterer.
///
/// Keys must be fed in ascending order and already normalized. Each key joins
/// the first representative within tolerance, scanning newest representative
/// first, or founds a new group. First match wins even if an older
/// representative would be closer, so results depend on input order.
pub struct Clusterer<R> {
    options: Options,
    // Creation order. Scanned back to front so the newest representative is tried first.
    groups: Vec<Group<R>>,
}

impl<R> Clusterer<R> {
    pub fn new(options: Options) -> Self {
        Self { options, groups: Vec::new() }
    }

    pub fn push(&mut self, key: &str, payload: R) {
        match self.groups.iter().rposition(|g| self.matches(key, &g.representative)) {
            Some(idx) => self.groups[idx].items.push(payload),
            None => {
                trace!(representative = key, index = self.groups.len(), "new group");
                self.groups.push(Group { representative: key.to_string(), items: vec![payload] });
            }
        }
    }

    fn matches(&self, key: &str, representative: &str) -> bool {
        let allowed = self.options.allowed_distance(key, representative);
        if allowed == 0 {
            return key == representative;
        }
        distance::within(key, representative, allowed)
    }

    pub fn groups(&self) -> &[Group<R>] {
        &self.groups
    }

    /// Groups in the order their representatives were created.
    pub fn finish(self) -> Vec<Group<R>> {
        self.groups
    }
}

/// One-shot clustering over `(key, payload)` pairs already sorted by key.
pub fn cluster<K, R, I>(items: I, options: &Options) -> Vec<Group<R>>
where
    K: AsRef<str>,
    I: IntoIterator<Item = (K, R)>,
{
    let mut clusterer = Clusterer::new(*options);
    for (key, payload) in items {
        clusterer.push(key.as_ref(), payload);
    }
    clusterer.finish()
}
