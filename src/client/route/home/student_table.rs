use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaPencil, FaTrash},
    Icon,
};

use crate::{
    client::{
        component::ConfirmationModal,
        model::{
            student_form::StudentForm,
            table::{StudentRow, TableView, EMPTY_PLACEHOLDER},
        },
    },
    model::student::StudentId,
};

#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::client::{
    api::student::{delete_student, get_student},
    model::toast::ToastQueue,
};

#[cfg(feature = "web")]
const DELETE_SUCCESS: &str = "Student deleted successfully!";
#[cfg(feature = "web")]
const DELETE_FAILURE: &str = "Failed to delete student";

#[component]
pub fn StudentTable(
    view: TableView,
    mut form: Signal<StudentForm>,
    mut refetch_trigger: Signal<u32>,
) -> Element {
    #[cfg(feature = "web")]
    let mut toasts = use_context::<Signal<ToastQueue>>();

    let mut edit_target = use_signal(|| None::<StudentId>);

    let mut show_delete_modal = use_signal(|| false);
    let mut delete_target = use_signal(|| None::<(StudentId, String)>);
    let mut is_deleting = use_signal(|| false);

    // Edit loads the record fresh so the form never starts from a stale row.
    #[cfg(feature = "web")]
    let edit_future = use_resource(move || async move {
        let id = edit_target()?;
        Some(get_student(id).await)
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = edit_future.read_unchecked().as_ref() {
            if edit_target.peek().is_none() {
                return;
            }

            match result {
                Ok(student) => form.write().begin_edit(student),
                Err(err) => {
                    tracing::error!("Failed to fetch student: {}", err);
                    toasts
                        .write()
                        .danger(format!("Failed to load student: {}", err));
                }
            }
            edit_target.set(None);
        }
    });

    #[cfg(feature = "web")]
    let delete_future = use_resource(move || async move {
        if !is_deleting() {
            return None;
        }
        let (id, _) = delete_target.peek().clone()?;
        Some(delete_student(id).await)
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = delete_future.read_unchecked().as_ref() {
            if !*is_deleting.peek() {
                return;
            }

            match result {
                Ok(_) => {
                    toasts.write().warning(DELETE_SUCCESS);
                    refetch_trigger.set(refetch_trigger() + 1);
                }
                Err(err) => {
                    tracing::error!("Failed to delete student: {}", err);
                    toasts.write().danger(DELETE_FAILURE);
                }
            }
            show_delete_modal.set(false);
            is_deleting.set(false);
        }
    });

    rsx!(
        div {
            class: "card bg-base-200",
            div {
                class: "card-body",
                h2 {
                    class: "card-title",
                    "Students"
                }
                div {
                    class: "overflow-x-auto",
                    table {
                        class: "table table-zebra w-full",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Roll Number" }
                                th { "Email" }
                                th { "Department" }
                                th { "Year" }
                                th { class: "text-right", "Actions" }
                            }
                        }
                        tbody {
                            match view {
                                TableView::Loading => rsx!(
                                    tr {
                                        td {
                                            colspan: "6",
                                            class: "text-center py-8",
                                            span { class: "loading loading-spinner loading-lg" }
                                        }
                                    }
                                ),
                                TableView::Empty => rsx!(
                                    tr {
                                        td {
                                            colspan: "6",
                                            class: "text-center py-8 opacity-50",
                                            {EMPTY_PLACEHOLDER}
                                        }
                                    }
                                ),
                                TableView::Failed(message) => rsx!(
                                    tr {
                                        td {
                                            colspan: "6",
                                            div {
                                                class: "alert alert-error",
                                                span { "Error loading students: {message}" }
                                            }
                                        }
                                    }
                                ),
                                TableView::Rows(rows) => rsx!(
                                    for row in rows {
                                        StudentTableRow {
                                            key: "{row.id}",
                                            row: row.clone(),
                                            on_edit: move |id| edit_target.set(Some(id)),
                                            on_delete: move |target| {
                                                delete_target.set(Some(target));
                                                show_delete_modal.set(true);
                                            },
                                        }
                                    }
                                ),
                            }
                        }
                    }
                }
            }
        }

        ConfirmationModal {
            show: show_delete_modal,
            title: "Delete Student".to_string(),
            message: rsx!(
                if let Some((_, name)) = delete_target() {
                    div {
                        class: "py-4",
                        p {
                            "Are you sure you want to delete "
                            span { class: "font-bold", "\"{name}\"" }
                            "?"
                        }
                        p {
                            class: "mt-4",
                            "This action cannot be undone."
                        }
                    }
                }
            ),
            confirm_text: "Delete".to_string(),
            confirm_class: "btn-error".to_string(),
            is_processing: is_deleting(),
            processing_text: "Deleting...".to_string(),
            on_confirm: move |_| is_deleting.set(true),
        }
    )
}

#[component]
fn StudentTableRow(
    row: StudentRow,
    on_edit: EventHandler<StudentId>,
    on_delete: EventHandler<(StudentId, String)>,
) -> Element {
    let id = row.id;
    let name = row.name.clone();

    rsx!(
        tr {
            td {
                div {
                    class: "flex items-center gap-3",
                    div {
                        class: "profile-initial",
                        "{row.initials}"
                    }
                    span { "{row.name}" }
                }
            }
            td { "{row.roll_number}" }
            td { "{row.email}" }
            td { "{row.department}" }
            td { "{row.year}" }
            td {
                div {
                    class: "flex gap-2 justify-end",
                    button {
                        class: "btn btn-sm btn-primary",
                        title: "Edit",
                        onclick: move |_| on_edit.call(id),
                        Icon { width: 14, height: 14, icon: FaPencil }
                    }
                    button {
                        class: "btn btn-sm btn-error",
                        title: "Delete",
                        onclick: move |_| on_delete.call((id, name.clone())),
                        Icon { width: 14, height: 14, icon: FaTrash }
                    }
                }
            }
        }
    )
}
