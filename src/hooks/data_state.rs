use std::rc::Rc;

/// Lifecycle of a single fetch.
#[derive(Clone, PartialEq, Debug)]
pub enum DataState<T> {
    /// Nothing requested yet.
    Idle,
    Loading,
    Loaded(Rc<T>),
    Error(String),
}

impl<T> DataState<T> {
    /// Returns the data if it is loaded
    pub fn data(&self) -> Option<&Rc<T>> {
        match self {
            DataState::Loaded(data) => Some(data),
            _ => None,
        }
    }
}
