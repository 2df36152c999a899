use dioxus::prelude::*;

mod api;
mod components;
mod config;
mod constants;
mod playback;

use components::AppShell;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "استوديو ريلز القرآن" }
        document::Link { rel: "icon", r#type: "image/svg+xml", href: FAVICON }

        // Arabic display face for the verse text
        document::Link { rel: "preconnect", href: "https://fonts.googleapis.com" }
        document::Link {
            rel: "preconnect",
            href: "https://fonts.gstatic.com",
            crossorigin: "anonymous",
        }
        document::Link {
            rel: "stylesheet",
            href: "https://fonts.googleapis.com/css2?family=Amiri:wght@400;700&family=Cairo:wght@400;600;700&display=swap",
        }

        document::Script { src: "https://cdn.tailwindcss.com" }
        document::Stylesheet { href: MAIN_CSS }

        document::Meta { name: "theme-color", content: "#064e3b" }
        document::Meta { name: "mobile-web-app-capable", content: "yes" }

        AppShell {}
    }
}
