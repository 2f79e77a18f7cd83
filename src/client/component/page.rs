use dioxus::prelude::*;

#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class: &str = class.unwrap_or_default();

    rsx!(
        div {
            class: "min-h-screen pt-24 p-4 {class}",
            {children}
        }
    )
}

/// Full-page message for routes and loads that cannot render.
#[component]
pub fn ErrorPage(status: u64, message: String) -> Element {
    rsx!(
        Page {
            class: "flex items-center justify-center",
            div {
                class: "text-center",
                h1 { class: "text-5xl font-bold mb-4", "{status}" }
                p { class: "opacity-70", "{message}" }
            }
        }
    )
}
