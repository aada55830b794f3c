use alloc::sync::{Arc, Weak};

use recycler::DataSource;

/// A non-owning handle to a [`DataSource`].
///
/// The controller never keeps its data source alive. Once every strong reference is dropped, the
/// handle reports itself as detached and the controller falls back to an empty list.
#[derive(Clone, Debug, Default)]
pub struct SourceHandle {
    source: Option<Weak<dyn DataSource>>,
}

impl SourceHandle {
    pub fn new(source: &Arc<dyn DataSource>) -> Self {
        Self {
            source: Some(Arc::downgrade(source)),
        }
    }

    pub fn detached() -> Self {
        Self::default()
    }

    pub fn upgrade(&self) -> Option<Arc<dyn DataSource>> {
        self.source.as_ref()?.upgrade()
    }

    pub fn is_attached(&self) -> bool {
        self.source.as_ref().is_some_and(|w| w.strong_count() > 0)
    }

    /// Whether both handles point at the same allocation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.source, &other.source) {
            (Some(a), Some(b)) => Weak::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}
