use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use yew::Callback;

/// Wraps `callback` so it only fires once `delay_ms` has passed without another call.
///
/// Each call cancels the pending one, so only the last value is delivered. The
/// returned callback owns the pending timeout; build it once per component
/// (e.g. inside `use_memo`) or every render starts a fresh, unrelated timer.
///
/// # Example
///
/// ```rust,ignore
/// let on_filter = use_memo((), move |_| {
///     debounce(Callback::from(move |text: String| apply_filter(text)), 300)
/// });
///
/// // Typing "mea" quickly emits only "mea", 300ms after the last key press
/// on_filter.emit(input.value());
/// ```
pub fn debounce<T: 'static>(callback: Callback<T>, delay_ms: u32) -> Callback<T> {
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

    Callback::from(move |value: T| {
        // Cancel pending timeout
        if let Some(handle) = pending.borrow_mut().take() {
            drop(handle);
        }

        // Schedule new timeout
        let callback = callback.clone();
        let handle = Timeout::new(delay_ms, move || callback.emit(value));
        *pending.borrow_mut() = Some(handle);
    })
}
