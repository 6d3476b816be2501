use std::fmt;

/// Opaque identifier for an override layer inside a [`LayeredValue`].
///
/// Handles are only meaningful for the container that issued them. Passing a
/// handle to any container call after the layer was removed is a caller bug.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LayerHandle(u64);

#[derive(Debug)]
struct Layer<T> {
    handle: LayerHandle,
    priority: i32,
    value: T,
}

/// A value that can be shadowed by a stack of override layers.
///
/// Adding a layer temporarily replaces the effective value without touching
/// the permanent base value, so independent systems can each contribute an
/// override and retract it later without coordinating. The effective value is
/// that of the highest-priority layer; among equal priorities the most
/// recently added layer wins.
pub struct LayeredValue<T> {
    base: T,
    // Sorted by non-decreasing priority; the last layer is the effective one.
    overrides: Vec<Layer<T>>,
    next_handle: u64,
    listener: Option<Box<dyn FnMut(&T)>>,
}

impl<T> LayeredValue<T> {
    /// Creates a layered value holding only its base value.
    #[must_use]
    pub fn new(base: T) -> Self {
        Self {
            base,
            overrides: Vec::new(),
            next_handle: 0,
            listener: None,
        }
    }

    /// Creates a layered value whose listener runs after every mutation.
    ///
    /// The listener receives the new effective value. It is invoked
    /// synchronously, inline with the mutating call, and is not deduplicated:
    /// it may run even when the effective value did not actually change.
    #[must_use]
    pub fn with_listener(base: T, listener: impl FnMut(&T) + 'static) -> Self {
        Self {
            base,
            overrides: Vec::new(),
            next_handle: 0,
            listener: Some(Box::new(listener)),
        }
    }

    /// The permanent floor value beneath every override.
    #[must_use]
    pub fn base(&self) -> &T {
        &self.base
    }

    /// Replaces the base value.
    ///
    /// Use this for permanent changes; overrides stacked above it keep
    /// shadowing the effective value.
    pub fn set_base(&mut self, value: T) {
        self.base = value;
        self.notify();
    }

    /// The effective value after all overrides have been applied.
    #[must_use]
    pub fn get(&self) -> &T {
        self.overrides.last().map_or(&self.base, |layer| &layer.value)
    }

    /// Adds an override at priority 0.
    ///
    /// Until the layer is removed or outranked it provides the effective
    /// value. Returns the handle used to mutate or remove the layer later.
    pub fn add_layer(&mut self, value: T) -> LayerHandle {
        self.add_layer_with_priority(value, 0)
    }

    /// Adds an override at the given priority.
    ///
    /// Layers with a higher priority always rank above lower ones; among
    /// equal priorities the newest layer ranks highest. The base value ranks
    /// below every override, including negative priorities.
    pub fn add_layer_with_priority(&mut self, value: T, priority: i32) -> LayerHandle {
        let handle = LayerHandle(self.next_handle);
        self.next_handle += 1;

        // Insert right before the first layer with a strictly greater
        // priority, keeping equal-priority layers in insertion order.
        let insert_at = self
            .overrides
            .iter()
            .position(|layer| layer.priority > priority)
            .unwrap_or(self.overrides.len());
        self.overrides.insert(
            insert_at,
            Layer {
                handle,
                priority,
                value,
            },
        );

        self.notify();
        handle
    }

    /// Removes an override, handing the effective value back to the layer
    /// below it.
    ///
    /// Panics when the handle is not present (for example a double remove);
    /// callers are expected to track their handles.
    pub fn remove_layer(&mut self, handle: LayerHandle) {
        let index = self.index_of(handle);
        let _ = self.overrides.remove(index);
        self.notify();
    }

    /// Replaces the value stored in an existing override in place.
    ///
    /// Panics when the handle is not present.
    pub fn set_layer_value(&mut self, handle: LayerHandle, value: T) {
        let index = self.index_of(handle);
        self.overrides[index].value = value;
        self.notify();
    }

    /// Reports whether the layer is at the top of the stack and therefore
    /// providing the effective value.
    ///
    /// Panics when the handle is not present.
    #[must_use]
    pub fn is_top(&self, handle: LayerHandle) -> bool {
        let index = self.index_of(handle);
        index + 1 == self.overrides.len()
    }

    /// Number of override layers currently stacked above the base value.
    #[must_use]
    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }

    fn index_of(&self, handle: LayerHandle) -> usize {
        self.overrides
            .iter()
            .position(|layer| layer.handle == handle)
            .expect("override layer is not present in the stack")
    }

    fn notify(&mut self) {
        if let Some(listener) = self.listener.as_mut() {
            let current = self
                .overrides
                .last()
                .map_or(&self.base, |layer| &layer.value);
            listener(current);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LayeredValue<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("LayeredValue")
            .field("base", &self.base)
            .field("overrides", &self.overrides)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::LayeredValue;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn newest_layer_provides_the_effective_value() {
        let mut value = LayeredValue::new(1);
        assert_eq!(*value.get(), 1);

        let first = value.add_layer(2);
        let second = value.add_layer(3);
        assert_eq!(*value.get(), 3);
        assert!(value.is_top(second));
        assert!(!value.is_top(first));

        value.remove_layer(second);
        assert_eq!(*value.get(), 2);
        value.remove_layer(first);
        assert_eq!(*value.get(), 1);
    }

    #[test]
    fn higher_priority_outranks_later_insertion() {
        let mut value = LayeredValue::new(0);
        let high = value.add_layer_with_priority(10, 5);
        let low = value.add_layer_with_priority(20, 1);
        assert_eq!(*value.get(), 10);
        assert!(value.is_top(high));
        assert!(!value.is_top(low));
    }

    #[test]
    fn equal_priorities_keep_insertion_order() {
        let mut value = LayeredValue::new(0);
        let _first = value.add_layer_with_priority(1, 3);
        let second = value.add_layer_with_priority(2, 3);
        assert_eq!(*value.get(), 2);
        assert!(value.is_top(second));
    }

    #[test]
    fn negative_priority_still_overrides_the_base() {
        let mut value = LayeredValue::new(7);
        let below = value.add_layer_with_priority(1, -4);
        assert_eq!(*value.get(), 1);

        let normal = value.add_layer(2);
        assert_eq!(*value.get(), 2);

        value.remove_layer(normal);
        assert_eq!(*value.get(), 1);
        value.remove_layer(below);
        assert_eq!(*value.get(), 7);
    }

    #[test]
    fn set_base_keeps_overrides_on_top() {
        let mut value = LayeredValue::new(1);
        let layer = value.add_layer(5);
        value.set_base(9);
        assert_eq!(*value.get(), 5);
        assert_eq!(*value.base(), 9);
        value.remove_layer(layer);
        assert_eq!(*value.get(), 9);
    }

    #[test]
    fn set_layer_value_updates_in_place() {
        let mut value = LayeredValue::new(0);
        let bottom = value.add_layer(1);
        let top = value.add_layer(2);
        value.set_layer_value(bottom, 8);
        assert_eq!(*value.get(), 2);
        value.remove_layer(top);
        assert_eq!(*value.get(), 8);
    }

    #[test]
    fn listener_fires_on_every_mutation_without_deduplication() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut value = LayeredValue::with_listener(10, move |current: &i32| {
            sink.borrow_mut().push(*current);
        });

        let layer = value.add_layer(10);
        value.set_base(11);
        value.remove_layer(layer);
        // The first two mutations never changed the effective value, but the
        // listener still heard about them.
        assert_eq!(*seen.borrow(), vec![10, 10, 11]);
    }

    #[test]
    fn prioritised_overrides_unwind_back_to_the_base() {
        let mut value = LayeredValue::new(10);
        let a = value.add_layer_with_priority(5, 0);
        let b = value.add_layer_with_priority(7, 1);
        assert_eq!(*value.get(), 7);
        value.remove_layer(b);
        assert_eq!(*value.get(), 5);
        value.remove_layer(a);
        assert_eq!(*value.get(), 10);
    }

    #[test]
    #[should_panic(expected = "override layer is not present in the stack")]
    fn double_remove_panics() {
        let mut value = LayeredValue::new(0);
        let layer = value.add_layer(1);
        value.remove_layer(layer);
        value.remove_layer(layer);
    }

    #[test]
    #[should_panic(expected = "override layer is not present in the stack")]
    fn is_top_rejects_unknown_handles() {
        let mut value = LayeredValue::new(0);
        let layer = value.add_layer(1);
        value.remove_layer(layer);
        let _ = value.is_top(layer);
    }
}
