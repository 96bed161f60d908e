use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// State that updates immediately for display but only commits after input
/// has been quiet for a while.
#[derive(Clone)]
pub struct DebouncedValue<T: Clone + PartialEq + 'static> {
    /// Latest value, for readouts and control positions.
    pub live: T,
    /// Value that downstream effects should depend on.
    pub committed: T,
    /// Record a new value and restart the quiet period.
    pub set: Callback<T>,
}

/// Custom hook pairing a live value with a debounced commit.
#[hook]
pub fn use_debounced<T: Clone + PartialEq + 'static>(
    initial_value: T,
    delay_ms: u32,
) -> DebouncedValue<T> {
    let live_handle: UseStateHandle<T> = use_state(|| initial_value.clone());
    let committed_handle: UseStateHandle<T> = use_state(|| initial_value.clone());
    // Dropping a Timeout cancels it, so replacing the slot debounces.
    let pending = use_mut_ref(|| None::<Timeout>);

    let set = {
        let live_setter = live_handle.clone();
        let committed_setter = committed_handle.clone();
        let pending = pending.clone();
        Callback::from(move |new_val: T| {
            live_setter.set(new_val.clone());
            let committed_setter = committed_setter.clone();
            let handle = Timeout::new(delay_ms, move || {
                committed_setter.set(new_val);
            });
            *pending.borrow_mut() = Some(handle);
        })
    };

    DebouncedValue {
        live: (*live_handle).clone(),
        committed: (*committed_handle).clone(),
        set,
    }
}
