use leptos::*;
use shared::{panel_max_height, AccordionItem, ItemId};

/// One accordion section: a title button and its collapsible panel.
///
/// The panel's `max-height` is its measured content height while expanded and
/// unset while collapsed. Measuring waits until the panel node is mounted.
#[component]
pub fn AccordionPanel(
    item: AccordionItem,
    #[prop(into)] expanded: Signal<bool>,
    #[prop(into)] on_toggle: Callback<ItemId>,
) -> impl IntoView {
    let panel_ref = create_node_ref::<html::Div>();
    let max_height = create_rw_signal(None::<String>);

    create_effect(move |_| {
        let open = expanded.get();
        if let Some(panel) = panel_ref.get() {
            max_height.set(panel_max_height(open, panel.scroll_height()));
        }
    });

    let id = item.id;

    view! {
        <button
            type="button"
            id=item.dom_id()
            class="accordion-title"
            class:active=move || expanded.get()
            data-item-id=id.to_string()
            on:click=move |_| on_toggle.call(id)
        >
            {item.title}
        </button>
        <div
            class="accordion-panel"
            data-item-id=id.to_string()
            node_ref=panel_ref
            style:max-height=move || max_height.get()
        >
            <p>{item.content}</p>
        </div>
    }
}
