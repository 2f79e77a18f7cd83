use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::model::student_form::{StudentForm, SubmitAction},
    model::student::StudentFieldsDto,
};

#[cfg(feature = "web")]
use crate::client::{
    api::student::{create_student, update_student},
    model::toast::ToastQueue,
};

#[component]
pub fn StudentFormCard(mut form: Signal<StudentForm>, mut refetch_trigger: Signal<u32>) -> Element {
    #[cfg(feature = "web")]
    let mut toasts = use_context::<Signal<ToastQueue>>();
    // Set while a submit is in flight; cleared when its result has been handled.
    let mut pending = use_signal(|| None::<(SubmitAction, StudentFieldsDto)>);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let (action, payload) = pending()?;
        let result = match action {
            SubmitAction::Create => create_student(payload).await,
            SubmitAction::Update(id) => update_student(id, payload).await,
        };
        Some((action, result))
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some((action, result))) = future.read_unchecked().as_ref() {
            // A stale result can be seen again after `pending` was cleared.
            if pending.peek().is_none() {
                return;
            }

            match result {
                Ok(_) => {
                    toasts.write().success(action.success_message());
                    form.write().reset();
                    refetch_trigger.set(refetch_trigger() + 1);
                }
                Err(err) => {
                    tracing::error!("Failed to save student: {}", err);
                    toasts.write().danger(action.failure_message());
                }
            }
            pending.set(None);
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        if pending.peek().is_some() {
            return;
        }

        let current = form.read();
        let action = current.submit_action();
        tracing::info!("Submitting student form: {:?}", action);
        pending.set(Some((action, current.to_payload())));
    };

    let is_submitting = pending.read().is_some();
    let current = form();
    let title = current.title();
    let submit_label = current.submit_label();
    let is_editing = current.is_editing();

    rsx!(
        div {
            class: "card bg-base-200",
            div {
                class: "card-body",
                h2 {
                    class: "card-title",
                    "{title}"
                }
                form {
                    class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                    onsubmit: on_submit,
                    TextField {
                        label: "Name",
                        value: current.name.clone(),
                        on_input: move |value| form.write().name = value,
                    }
                    TextField {
                        label: "Roll Number",
                        value: current.roll_number.clone(),
                        on_input: move |value| form.write().roll_number = value,
                    }
                    TextField {
                        label: "Email",
                        input_type: "email",
                        value: current.email.clone(),
                        on_input: move |value| form.write().email = value,
                    }
                    TextField {
                        label: "Department",
                        value: current.department.clone(),
                        on_input: move |value| form.write().department = value,
                    }
                    TextField {
                        label: "Year",
                        input_type: "number",
                        value: current.year.clone(),
                        on_input: move |value| form.write().year = value,
                    }
                    div {
                        class: "flex items-end gap-2 md:col-span-2",
                        button {
                            r#type: "submit",
                            class: "btn btn-primary",
                            disabled: is_submitting,
                            if is_submitting {
                                span { class: "loading loading-spinner loading-sm mr-2" }
                                "Saving..."
                            } else {
                                "{submit_label}"
                            }
                        }
                        if is_editing {
                            button {
                                r#type: "button",
                                class: "btn btn-ghost",
                                disabled: is_submitting,
                                onclick: move |_| form.write().reset(),
                                "Cancel Edit"
                            }
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn TextField(
    label: &'static str,
    input_type: Option<&'static str>,
    value: String,
    on_input: EventHandler<String>,
) -> Element {
    let input_type = input_type.unwrap_or("text");

    rsx!(
        label {
            class: "form-control w-full",
            div {
                class: "label",
                span { class: "label-text", "{label}" }
            }
            input {
                r#type: input_type,
                class: "input input-bordered w-full",
                required: true,
                value: "{value}",
                oninput: move |evt| on_input.call(evt.value()),
            }
        }
    )
}
