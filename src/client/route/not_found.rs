use dioxus::prelude::*;

use crate::client::{component::page::ErrorPage, constant::SITE_NAME, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        Title { "Not Found | {SITE_NAME}" }
        ErrorPage { status: 404, message: format!("Nothing lives at /{}", path) }
        div {
            class: "flex justify-center -mt-32",
            Link { to: Route::Home {}, class: "btn btn-outline", "Back to students" }
        }
    }
}
