use leptos::*;
use shared::footer::REPOSITORY_URL;
use shared::FooterContent;

/// Page footer with attribution links and the current year.
#[component]
pub fn Footer() -> impl IntoView {
    let FooterContent { app_title, year } = FooterContent::now();

    view! {
        <footer>
            <div class="footer-container">
                <div class="footer-text">
                    "Powered by"
                    <a href="https://leptos.dev/" target="_blank" class="leptos-link">"Leptos"</a>
                    "•"
                    <a href=REPOSITORY_URL target="_blank" class="github-link">"GitHub"</a>
                    "•"
                    <p class="footer-year">"© " {year}</p>
                    "•"
                    <a href="/">{app_title}</a>
                </div>
            </div>
        </footer>
    }
}
