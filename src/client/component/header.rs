use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaUserGraduate, Icon};

use crate::client::{constant::SITE_NAME, router::Route};

#[component]
pub fn Header() -> Element {
    rsx!(div {
        class: "fixed flex items-center w-full h-20 py-2 px-4 bg-base-200 z-20",
        Link {
            to: Route::Home {},
            div {
                class: "flex items-center gap-3",
                Icon {
                    width: 32,
                    height: 32,
                    icon: FaUserGraduate
                }
                p {
                    class: "md:text-xl text-wrap font-semibold",
                    {SITE_NAME}
                }
            }
        }
    })
}
