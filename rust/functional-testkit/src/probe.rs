//! Recording wrappers for callbacks under test.

use std::cell::RefCell;

/// Records every value a callback was invoked with, in invocation order.
///
/// Recording takes `&self`, so a closure can record while the test keeps a shared
/// reference for inspecting the calls afterwards.
#[derive(Debug)]
pub struct CallRecorder<T> {
    calls: RefCell<Vec<T>>,
}

impl<T> Default for CallRecorder<T> {
    fn default() -> Self {
        CallRecorder {
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl<T: Clone> CallRecorder<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, value: T) {
        self.calls.borrow_mut().push(value);
    }

    /// Wraps `f` so that each input is recorded before `f` is invoked.
    pub fn wrap<'a, O>(&'a self, mut f: impl FnMut(T) -> O + 'a) -> impl FnMut(T) -> O + 'a {
        move |input| {
            self.record(input.clone());
            f(input)
        }
    }

    pub fn calls(&self) -> Vec<T> {
        self.calls.borrow().clone()
    }

    pub fn count(&self) -> usize {
        self.calls.borrow().len()
    }
}
