use dioxus::prelude::*;

use crate::client::model::toast::{Toast, ToastQueue};

#[cfg(feature = "web")]
use crate::client::constant::TOAST_DURATION_MS;

/// Renders the shared [`ToastQueue`] in the corner of the screen.
#[component]
pub fn ToastContainer() -> Element {
    let toasts = use_context::<Signal<ToastQueue>>();
    let current = toasts.read().toasts().to_vec();

    rsx!(
        div {
            class: "toast toast-end toast-bottom toast-stack z-50",
            for toast in current {
                ToastItem { key: "{toast.id}", toast }
            }
        }
    )
}

#[component]
fn ToastItem(toast: Toast) -> Element {
    let mut toasts = use_context::<Signal<ToastQueue>>();
    let id = toast.id;

    #[cfg(feature = "web")]
    use_future(move || async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_DURATION_MS).await;
        toasts.write().dismiss(id);
    });

    let alert_class = toast.kind.alert_class();

    rsx!(
        div {
            class: "alert {alert_class} shadow-lg",
            span { "{toast.message}" }
            button {
                class: "btn btn-xs btn-ghost",
                onclick: move |_| toasts.write().dismiss(id),
                "✕"
            }
        }
    )
}
