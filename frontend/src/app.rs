use leptos::*;
use shared::footer::APP_TITLE;
use shared::sample_items;

use crate::components::accordion_list::AccordionList;
use crate::components::footer::Footer;

/// Composition root: builds the page from its components.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="page">
            <h1>{APP_TITLE}</h1>
            <AccordionList items=sample_items() />
        </main>
        <Footer />
    }
}
