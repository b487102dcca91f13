use crate::observable::{Observable, SubscriptionId};

/// Integer counter with an optional caller-supplied label.
///
/// There are no bounds: decrementing from zero goes negative.
#[derive(Debug, Default)]
pub struct Counter {
    value: Observable<i64>,
    label: Option<String>,
}

impl Counter {
    pub fn new(label: Option<String>) -> Self {
        Self {
            value: Observable::new(0),
            label,
        }
    }

    pub fn labeled(label: impl Into<String>) -> Self {
        Self::new(Some(label.into()))
    }

    pub fn value(&self) -> i64 {
        *self.value.get()
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn version(&self) -> u64 {
        self.value.version()
    }

    pub fn increment(&mut self) -> i64 {
        self.value.update(|current| current.wrapping_add(1));
        tracing::debug!(label = ?self.label, value = self.value(), "counter incremented");
        self.value()
    }

    pub fn decrement(&mut self) -> i64 {
        self.value.update(|current| current.wrapping_sub(1));
        tracing::debug!(label = ?self.label, value = self.value(), "counter decremented");
        self.value()
    }

    pub fn set(&mut self, value: i64) {
        self.value.set(value);
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&i64) + 'static) -> SubscriptionId {
        self.value.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.value.unsubscribe(id)
    }
}
