use leptos::*;
use shared::{BulkAction, ControlState};

/// Checkbox that triggers a bulk accordion action.
///
/// Checked and disabled are driven entirely by `state`; the native toggle on
/// click is overwritten with the state after `on_select` has run.
#[component]
pub fn BulkCheckbox(
    action: BulkAction,
    #[prop(into)] state: Signal<ControlState>,
    #[prop(into)] on_select: Callback<BulkAction>,
) -> impl IntoView {
    let checkbox_id = action.dom_id();

    view! {
        <label class="accordion-select">
            <input
                type="checkbox"
                id=checkbox_id.clone()
                name=checkbox_id
                disabled=move || state.get().disabled
                prop:checked=move || state.get().checked
                on:click=move |ev| {
                    on_select.call(action);
                    event_target::<web_sys::HtmlInputElement>(&ev)
                        .set_checked(state.get_untracked().checked);
                }
            />
            <span>{action.label()}</span>
        </label>
    }
}
