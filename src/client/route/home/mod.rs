mod student_form;
mod student_table;

use dioxus::prelude::*;

use crate::client::{
    component::Page,
    constant::SITE_NAME,
    model::{student_form::StudentForm, table::StudentList},
};

use student_form::StudentFormCard;
use student_table::StudentTable;

#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::client::{api::student::get_students, model::toast::ToastQueue};

/// The single page of the app: the add/edit form above the student table.
///
/// The form and the table only talk through `form` and `refetch_trigger`.
/// Every successful mutation bumps the trigger, which reloads the list.
#[component]
pub fn Home() -> Element {
    let form = use_signal(StudentForm::default);
    let refetch_trigger = use_signal(|| 0u32);
    let students = use_signal(StudentList::default);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let _ = refetch_trigger();
        get_students().await
    });

    // Previous rows stay on screen while a reload is in flight or after it fails.
    #[cfg(feature = "web")]
    {
        let mut toasts = use_context::<Signal<ToastQueue>>();
        let mut students = students;

        use_effect(move || {
            if let Some(result) = future.read_unchecked().as_ref() {
                if let Err(err) = result {
                    tracing::error!("Failed to fetch students: {}", err);
                    toasts.write().danger(format!("Failed to load students: {}", err));
                }
                students.write().apply(result.clone());
            }
        });
    }

    let view = students.read().view();

    rsx! {
        Title { "{SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full",
            div {
                class: "w-full max-w-5xl flex flex-col gap-6",
                StudentFormCard { form, refetch_trigger }
                StudentTable { view, form, refetch_trigger }
            }
        }
    }
}
