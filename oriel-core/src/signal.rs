//! Value-or-signal containers for widget state.
//!
//! Most widget setters accept `impl Into<MaybeSignal<T>>`, so callers can
//! pass either a plain value or a [StateSignal] shared with other parts of
//! the application.

use std::cell::RefCell;
use std::ops::Deref;
use std::rc::Rc;

/// A borrowed or owned reference to a signal's value.
pub enum Ref<'a, T> {
    /// A borrow out of a [RefCell]-backed signal.
    Cell(std::cell::Ref<'a, T>),
    /// A plain borrow.
    Borrowed(&'a T),
    /// An owned value.
    Owned(T),
}

impl<T> Deref for Ref<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        match self {
            Ref::Cell(value) => value,
            Ref::Borrowed(value) => value,
            Ref::Owned(value) => value,
        }
    }
}

/// A boxed signal.
pub type BoxedSignal<T> = Box<dyn Signal<T>>;

/// A listener invoked with the new value after a signal changes.
pub type Listener<T> = Rc<dyn Fn(&T)>;

/// The base trait for observable values.
pub trait Signal<T: 'static> {
    /// Get the current value.
    fn get(&self) -> Ref<'_, T>;

    /// Replace the current value and notify listeners.
    fn set_value(&self, value: T);

    /// Register a listener for changes.
    fn listen(&mut self, listener: Listener<T>);

    /// Notify listeners of the current value.
    fn notify(&self);

    /// Clone the signal into a box, sharing the underlying value.
    fn dyn_clone(&self) -> BoxedSignal<T>;
}

/// Simple signal implementation based on [Rc] and [RefCell] to get/set a
/// value and notify listeners when it changes.
pub struct StateSignal<T: 'static> {
    value: Rc<RefCell<T>>,
    listeners: Vec<Listener<T>>,
}

impl<T: 'static> StateSignal<T> {
    /// Creates a new signal with the given value.
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            listeners: Vec::with_capacity(1),
        }
    }

    /// Mutate the inner value in a set scope and notify listeners.
    pub fn mutate(&self, op: impl FnOnce(&mut T)) {
        op(&mut self.value.borrow_mut());
        self.notify();
    }

    /// Replace the current value and notify listeners.
    pub fn set(&self, value: T) {
        self.mutate(move |old| *old = value);
    }
}

impl<T: 'static> Clone for StateSignal<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            listeners: self.listeners.clone(),
        }
    }
}

impl<T: 'static> Signal<T> for StateSignal<T> {
    fn get(&self) -> Ref<'_, T> {
        Ref::Cell(self.value.borrow())
    }

    fn set_value(&self, value: T) {
        self.set(value);
    }

    fn listen(&mut self, listener: Listener<T>) {
        self.listeners.push(listener);
    }

    fn notify(&self) {
        for listener in &self.listeners {
            listener(&self.value.borrow());
        }
    }

    fn dyn_clone(&self) -> BoxedSignal<T> {
        Box::new(self.clone())
    }
}

/// Either a plain value or a signal.
pub enum MaybeSignal<T: 'static> {
    /// A live signal.
    Signal(BoxedSignal<T>),
    /// A fixed value.
    Value(T),
}

impl<T: 'static> MaybeSignal<T> {
    /// Wrap a plain value.
    pub fn value(value: T) -> Self {
        Self::Value(value)
    }

    /// Wrap a signal.
    pub fn signal(signal: impl Signal<T> + 'static) -> Self {
        Self::Signal(Box::new(signal))
    }

    /// Get the current value.
    pub fn get(&self) -> Ref<'_, T> {
        match self {
            Self::Signal(signal) => signal.get(),
            Self::Value(value) => Ref::Borrowed(value),
        }
    }

    /// The underlying signal, if this is one.
    pub fn as_signal(&self) -> Option<&BoxedSignal<T>> {
        match self {
            Self::Signal(signal) => Some(signal),
            Self::Value(_) => None,
        }
    }
}

impl<T: 'static> From<T> for MaybeSignal<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl<T: 'static> From<StateSignal<T>> for MaybeSignal<T> {
    fn from(signal: StateSignal<T>) -> Self {
        Self::Signal(Box::new(signal))
    }
}
