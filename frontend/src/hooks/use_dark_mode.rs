use yew::prelude::*;

use crate::storage;

/// Current dark mode flag plus a toggle callback. The persisted preference
/// is applied to the document on mount and every toggle is written back to
/// local storage.
#[hook]
pub fn use_dark_mode() -> (bool, Callback<()>) {
    let enabled = use_state(storage::dark_mode_enabled);

    {
        let initial = *enabled;
        use_effect_with((), move |_| {
            storage::apply_dark_mode(initial);
        });
    }

    let toggle = {
        let enabled = enabled.clone();
        Callback::from(move |_| {
            let next = !*enabled;
            storage::set_dark_mode(next);
            storage::apply_dark_mode(next);
            enabled.set(next);
        })
    };

    (*enabled, toggle)
}
