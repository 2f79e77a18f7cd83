use dioxus::prelude::*;

use crate::client::{
    component::ToastContainer, constant::SITE_NAME, model::toast::ToastQueue, router::Route,
};

const MAIN_CSS: Asset = asset!("/assets/main.css");
const DAISY_UI: &str = "https://cdn.jsdelivr.net/npm/daisyui@4.12.14/dist/full.min.css";
const TAILWIND: &str = "https://cdn.tailwindcss.com";

#[component]
pub fn App() -> Element {
    use_context_provider(|| Signal::new(ToastQueue::default()));

    rsx! {
        Title { "{SITE_NAME}" }
        document::Meta {
            name: "description",
            content: "Student record management"
        }
        document::Link { rel: "stylesheet", href: DAISY_UI }
        document::Script { src: TAILWIND }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
        ToastContainer {}
    }
}
