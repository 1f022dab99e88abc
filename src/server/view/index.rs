use dioxus::prelude::*;

pub const SITE_NAME: &str = "Bookshelf";

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@2.0.4";

/// Landing page head and body. Navigation buttons load the table fragments into `#content`.
#[component]
pub fn IndexPage() -> Element {
    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { {SITE_NAME} }
            link { rel: "stylesheet", href: "/css/styles.css" }
            script { src: HTMX_SRC }
        }
        body {
            header {
                class: "header",
                h1 { {SITE_NAME} }
                nav {
                    class: "nav",
                    NavButton { label: "Books", href: "/books" }
                    NavButton { label: "Authors", href: "/authors" }
                    NavButton { label: "Years", href: "/years" }
                    NavButton { label: "Search", href: "/search" }
                }
            }
            main {
                id: "content",
                class: "content",
                p { class: "hint", "Pick a view above to browse the catalog." }
            }
        }
    }
}

#[component]
fn NavButton(label: &'static str, href: &'static str) -> Element {
    rsx! {
        button {
            class: "btn",
            "hx-get": href,
            "hx-target": "#content",
            "hx-swap": "innerHTML",
            {label}
        }
    }
}
