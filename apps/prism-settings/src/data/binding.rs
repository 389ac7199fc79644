//! Two-way bindings to externally owned values
//!
//! A [`Binding`] is a getter/setter pair. Controls read the current value
//! through it and write user changes back through it; they never own the
//! value. The owner decides where the value lives (a shared struct, a
//! preferences object, a constant in a preview).

use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

type Getter<T> = Arc<dyn Fn() -> T + Send + Sync>;
type Setter<T> = Arc<dyn Fn(T) + Send + Sync>;

/// Live read/write access to a value owned elsewhere
pub struct Binding<T> {
    get: Getter<T>,
    set: Setter<T>,
}

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Self {
            get: Arc::clone(&self.get),
            set: Arc::clone(&self.set),
        }
    }
}

impl<T> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding").finish_non_exhaustive()
    }
}

impl<T: 'static> Binding<T> {
    pub fn new(
        get: impl Fn() -> T + Send + Sync + 'static,
        set: impl Fn(T) + Send + Sync + 'static,
    ) -> Self {
        Self {
            get: Arc::new(get),
            set: Arc::new(set),
        }
    }

    /// Read the owner's current value
    pub fn get(&self) -> T {
        (self.get)()
    }

    /// Write a new value back to the owner
    pub fn set(&self, value: T) {
        (self.set)(value)
    }

    /// Project this binding onto another value type.
    ///
    /// `to` converts on read, `from` converts on write.
    pub fn map<U: 'static>(
        self,
        to: impl Fn(T) -> U + Send + Sync + 'static,
        from: impl Fn(U) -> T + Send + Sync + 'static,
    ) -> Binding<U> {
        let get = self.get;
        let set = self.set;
        Binding::new(move || to(get()), move |value| set(from(value)))
    }
}

impl<T: Clone + Send + Sync + 'static> Binding<T> {
    /// A read-only binding; writes are dropped
    pub fn constant(value: T) -> Self {
        Self::new(move || value.clone(), |_| {})
    }

    /// Bind to a value held behind a shared mutex
    pub fn from_shared(state: Arc<Mutex<T>>) -> Self {
        let reader = Arc::clone(&state);
        Self::new(move || reader.lock().clone(), move |value| *state.lock() = value)
    }
}

/// Bind to one field of a struct held behind a shared mutex
pub fn project<S, T>(
    state: &Arc<Mutex<S>>,
    get: fn(&S) -> T,
    set: fn(&mut S, T),
) -> Binding<T>
where
    S: Send + 'static,
    T: 'static,
{
    let reader = Arc::clone(state);
    let writer = Arc::clone(state);
    Binding::new(
        move || get(&reader.lock()),
        move |value| set(&mut writer.lock(), value),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Owner {
        count: u32,
        name: String,
    }

    #[test]
    fn test_shared_binding_reads_and_writes_owner() {
        let state = Arc::new(Mutex::new(5u32));
        let binding = Binding::from_shared(Arc::clone(&state));

        assert_eq!(binding.get(), 5);
        binding.set(9);
        assert_eq!(*state.lock(), 9);

        // Changes made by the owner are visible on the next read
        *state.lock() = 11;
        assert_eq!(binding.get(), 11);
    }

    #[test]
    fn test_clones_share_the_same_value() {
        let state = Arc::new(Mutex::new(false));
        let a = Binding::from_shared(Arc::clone(&state));
        let b = a.clone();

        a.set(true);
        assert!(b.get());
    }

    #[test]
    fn test_constant_ignores_writes() {
        let binding = Binding::constant("en".to_string());
        binding.set("fr".to_string());
        assert_eq!(binding.get(), "en");
    }

    #[test]
    fn test_map_converts_both_ways() {
        let state = Arc::new(Mutex::new(3i32));
        let positive = Binding::from_shared(Arc::clone(&state)).map(|v| v > 0, |on| if on { 1 } else { -1 });

        assert!(positive.get());
        positive.set(false);
        assert_eq!(*state.lock(), -1);
        assert!(!positive.get());
    }

    #[test]
    fn test_project_touches_one_field() {
        let state = Arc::new(Mutex::new(Owner {
            count: 1,
            name: "panel".to_string(),
        }));
        let count = project(&state, |o: &Owner| o.count, |o: &mut Owner, v| o.count = v);

        count.set(7);
        let owner = state.lock();
        assert_eq!(owner.count, 7);
        assert_eq!(owner.name, "panel");
    }
}
