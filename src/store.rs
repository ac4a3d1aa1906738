use hashbrown::HashMap;

/// Read-only, name-addressed access to raw template or component text.
///
/// Loading text into a store (from a directory tree, an embedded asset
/// table or anything else) happens outside this crate; during one expansion
/// call the store is only read.
pub trait FragmentStore {
    fn get(&self, name: &str) -> Option<&str>;
}

impl FragmentStore for HashMap<String, String> {
    #[inline]
    fn get(&self, name: &str) -> Option<&str> {
        HashMap::get(self, name).map(String::as_str)
    }
}

/// The trivial in-memory store.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore(HashMap<String, String>);

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Inserts a fragment, returning the previously stored text for the
    /// name, if any.
    pub fn insert(&mut self, name: impl Into<String>, text: impl Into<String>) -> Option<String> {
        self.0.insert(name.into(), text.into())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FragmentStore for MemoryStore {
    #[inline]
    fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }
}

impl<N: Into<String>, T: Into<String>> FromIterator<(N, T)> for MemoryStore {
    fn from_iter<I: IntoIterator<Item = (N, T)>>(iter: I) -> Self {
        MemoryStore(
            iter.into_iter()
                .map(|(name, text)| (name.into(), text.into()))
                .collect(),
        )
    }
}
