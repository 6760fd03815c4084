//! Signal port — boolean environment conditions.

use std::rc::Rc;

/// A boolean condition owned by the environment, such as
/// `(prefers-color-scheme: dark)` or `(min-width: 760px)`.
///
/// Change notifications are wired by the adapter; services only read the
/// current value, fresh on every call.
pub trait MediaSignal {
    fn matches(&self) -> bool;
}

impl<T: MediaSignal + ?Sized> MediaSignal for Rc<T> {
    fn matches(&self) -> bool {
        (**self).matches()
    }
}

impl MediaSignal for bool {
    fn matches(&self) -> bool {
        *self
    }
}
