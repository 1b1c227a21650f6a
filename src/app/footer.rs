use chrono::{DateTime, Datelike, Utc};
use leptos::prelude::*;

use crate::catalog::content;
use crate::sections::Section;
use crate::view_state::ViewState;

use super::navigate;

/// Year of the build. Avoids reading the clock while rendering.
fn build_year() -> i32 {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|dt| dt.year())
        .unwrap_or_else(|_| Utc::now().year())
}

#[component]
pub fn Footer() -> impl IntoView {
    let state = expect_context::<RwSignal<ViewState>>();
    let profile = &content().profile;

    view! {
        <footer class="bg-gray-800 text-white py-8 dark:bg-gray-950 transition-colors duration-500">
            <div class="container mx-auto px-4 text-center">
                <p class="mb-4">
                    {format!("© {} {}. All rights reserved.", build_year(), profile.name)}
                </p>
                <p class="text-sm text-gray-400 mb-4">
                    "Last Updated: " {profile.last_updated.as_str()}
                </p>
                <div class="flex justify-center space-x-6 mb-4">
                    {Section::FOOTER_NAV
                        .into_iter()
                        .map(|section| {
                            view! {
                                <a
                                    href=section.href()
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        navigate(state, section);
                                    }
                                    class="text-gray-300 hover:text-blue-400"
                                >
                                    {section.nav_label()}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <p class="text-sm text-gray-500">"Built with ❤️ using Rust + Leptos"</p>
            </div>
        </footer>
    }
}
