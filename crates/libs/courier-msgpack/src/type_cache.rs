use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::registry::MessageTypeDescriptor;

/// Memoized identifier-string to descriptor mapping, owned by one serializer
/// instance and shared by every decode call made through it. Entries are
/// never evicted.
pub(crate) struct TypeCache {
    entries: RwLock<HashMap<String, Arc<MessageTypeDescriptor>>>,
}

impl TypeCache {
    pub(crate) fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the cached descriptor for `qualified_name`, invoking `resolve`
    /// only on a miss. Concurrent misses for the same key may both resolve,
    /// but the first stored handle wins and every caller gets it back
    /// (get-or-insert, not last-write-wins).
    pub(crate) fn get_or_resolve(
        &self,
        qualified_name: &str,
        resolve: impl FnOnce() -> Option<Arc<MessageTypeDescriptor>>,
    ) -> Option<Arc<MessageTypeDescriptor>> {
        if let Some(found) = self
            .entries
            .read()
            .expect("type cache lock poisoned")
            .get(qualified_name)
        {
            return Some(found.clone());
        }

        let resolved = resolve()?;
        let mut entries = self.entries.write().expect("type cache lock poisoned");
        Some(
            entries
                .entry(qualified_name.to_owned())
                .or_insert(resolved)
                .clone(),
        )
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.read().expect("type cache lock poisoned").len()
    }
}
