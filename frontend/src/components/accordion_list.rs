use leptos::logging::warn;
use leptos::*;
use shared::{sample_items, AccordionError, AccordionItem, AccordionState, BulkAction, ItemId};

use crate::components::accordion::AccordionPanel;
use crate::components::checkbox::BulkCheckbox;
use crate::utils::{blocking_alert, count_rendered_titles};

/// Apply a fallible change to a copy of the state and only publish it on success.
fn try_apply<T>(
    state: RwSignal<AccordionState>,
    change: impl FnOnce(&mut AccordionState) -> Result<T, AccordionError>,
) -> Result<T, AccordionError> {
    let mut next = state.get_untracked();
    let result = change(&mut next)?;
    state.set(next);
    Ok(result)
}

/// List of independently collapsible sections with "select all" and
/// "unselect all" controls. All sections start expanded.
#[component]
pub fn AccordionList(
    #[prop(default = sample_items())] items: Vec<AccordionItem>,
    #[prop(default = true)] show_bulk_controls: bool,
) -> impl IntoView {
    let initial = match AccordionState::initialized(items) {
        Ok(state) => state,
        Err(err) => {
            warn!("Cannot render accordion list: {}", err);
            return view! { <p class="accordion-error">{err.to_string()}</p> }.into_view();
        }
    };

    let items = initial.items().to_vec();
    let state = create_rw_signal(initial);
    let controls = create_memo(move |_| state.with(|s| s.controls()));
    let list_ref = create_node_ref::<html::Div>();

    let on_toggle = Callback::new(move |id: ItemId| {
        if let Err(err) = try_apply(state, |s| s.toggle(id)) {
            warn!("Ignoring accordion click: {}", err);
        }
    });

    let on_select = Callback::new(move |action: BulkAction| {
        let rendered = list_ref
            .get_untracked()
            .map(|root| count_rendered_titles(&root))
            .unwrap_or(0);
        if rendered == 0 {
            blocking_alert(&AccordionError::NoRenderedTitles.to_string());
            return;
        }

        if let Err(err) = try_apply(state, |s| s.bulk_select(action)) {
            blocking_alert(&err.to_string());
        }
    });

    let bulk_controls = show_bulk_controls.then(|| {
        view! {
            <div class="accordion-select-checkboxes">
                {BulkAction::ALL
                    .into_iter()
                    .map(|action| {
                        view! {
                            <BulkCheckbox
                                action=action
                                state=Signal::derive(move || controls.get().for_action(action))
                                on_select=on_select
                            />
                        }
                    })
                    .collect_view()}
            </div>
        }
    });

    let panels = items
        .into_iter()
        .map(|item| {
            let id = item.id;
            let expanded = create_memo(move |_| state.with(|s| s.is_expanded(id)));
            view! { <AccordionPanel item=item expanded=expanded on_toggle=on_toggle /> }
        })
        .collect_view();

    view! {
        <div class="accordion-list" node_ref=list_ref>
            {bulk_controls}
            {panels}
        </div>
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount(show_bulk_controls: bool, items: Vec<AccordionItem>) -> web_sys::HtmlElement {
        let document = web_sys::window().unwrap().document().unwrap();
        let host: web_sys::HtmlElement = document.create_element("div").unwrap().unchecked_into();
        document.body().unwrap().append_child(&host).unwrap();

        leptos::mount_to(host.clone(), move || {
            view! { <AccordionList items=items show_bulk_controls=show_bulk_controls /> }
        });
        host
    }

    /// Wait for post-render effects to measure the panels
    async fn settle() {
        TimeoutFuture::new(0).await;
    }

    fn elements(host: &web_sys::HtmlElement, selector: &str) -> Vec<web_sys::HtmlElement> {
        let list = host.query_selector_all(selector).unwrap();
        (0..list.length())
            .filter_map(|i| list.item(i))
            .map(|node| node.unchecked_into())
            .collect()
    }

    fn input(host: &web_sys::HtmlElement, action: BulkAction) -> web_sys::HtmlInputElement {
        host.query_selector(&format!("#{}", action.dom_id()))
            .unwrap()
            .unwrap()
            .unchecked_into()
    }

    fn max_heights(host: &web_sys::HtmlElement) -> Vec<String> {
        elements(host, ".accordion-panel")
            .iter()
            .map(|panel| panel.style().get_property_value("max-height").unwrap())
            .collect()
    }

    fn all_expanded(host: &web_sys::HtmlElement) -> bool {
        max_heights(host).iter().all(|h| h.ends_with("px") && h != "0px")
    }

    fn all_collapsed(host: &web_sys::HtmlElement) -> bool {
        max_heights(host).iter().all(|h| h.is_empty())
    }

    #[wasm_bindgen_test]
    async fn test_renders_titles_and_panels_in_order() {
        let host = mount(true, sample_items());
        settle().await;

        let titles = elements(&host, ".accordion-title");
        assert_eq!(titles.len(), 3);
        assert_eq!(elements(&host, ".accordion-panel").len(), 3);
        assert!(titles[0].text_content().unwrap().contains("Section One"));
        assert!(titles[2].text_content().unwrap().contains("Section Three"));
        assert_eq!(titles[1].get_attribute("data-item-id").as_deref(), Some("2"));
    }

    #[wasm_bindgen_test]
    async fn test_initial_render_expands_everything() {
        let host = mount(true, sample_items());
        settle().await;

        assert!(all_expanded(&host));
        let select_all = input(&host, BulkAction::SelectAll);
        assert!(select_all.checked());
        assert!(select_all.disabled());
        assert!(!input(&host, BulkAction::UnselectAll).checked());
    }

    #[wasm_bindgen_test]
    async fn test_title_click_toggles_panel() {
        let host = mount(true, sample_items());
        settle().await;

        let first_title = &elements(&host, ".accordion-title")[0];

        first_title.click();
        settle().await;
        assert_eq!(max_heights(&host)[0], "");
        assert!(!first_title.class_list().contains("active"));
        assert!(!input(&host, BulkAction::SelectAll).disabled());

        first_title.click();
        settle().await;
        assert!(max_heights(&host)[0].ends_with("px"));
        assert!(first_title.class_list().contains("active"));
    }

    #[wasm_bindgen_test]
    async fn test_select_all_then_unselect_all() {
        let host = mount(true, sample_items());
        settle().await;

        elements(&host, ".accordion-title")[0].click();
        settle().await;

        input(&host, BulkAction::SelectAll).click();
        settle().await;
        assert!(all_expanded(&host));
        let select_all = input(&host, BulkAction::SelectAll);
        let unselect_all = input(&host, BulkAction::UnselectAll);
        assert!(select_all.disabled() && select_all.checked());
        assert!(!unselect_all.disabled() && !unselect_all.checked());

        unselect_all.click();
        settle().await;
        assert!(all_collapsed(&host));
        assert!(unselect_all.disabled() && unselect_all.checked());
        assert!(!select_all.disabled() && !select_all.checked());
    }

    #[wasm_bindgen_test]
    async fn test_controls_track_item_count() {
        let items = (1..=4)
            .map(|i| AccordionItem::new(i, format!("Section {}", i), "content"))
            .collect();
        let host = mount(true, items);
        settle().await;

        let titles = elements(&host, ".accordion-title");
        titles[3].click();
        settle().await;
        assert!(!input(&host, BulkAction::SelectAll).disabled());

        titles[3].click();
        settle().await;
        assert!(input(&host, BulkAction::SelectAll).disabled());
    }

    #[wasm_bindgen_test]
    async fn test_simple_variant_has_no_bulk_controls() {
        let host = mount(false, sample_items());
        settle().await;

        assert!(elements(&host, ".accordion-select-checkboxes").is_empty());
        assert_eq!(elements(&host, ".accordion-title").len(), 3);
    }

    #[wasm_bindgen_test]
    async fn test_invalid_items_render_error() {
        let items = vec![
            AccordionItem::new(1, "One", ""),
            AccordionItem::new(1, "One again", ""),
        ];
        let host = mount(true, items);
        settle().await;

        assert!(elements(&host, ".accordion-title").is_empty());
        assert_eq!(elements(&host, ".accordion-error").len(), 1);
    }
}
