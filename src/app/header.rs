use leptos::prelude::*;

use crate::catalog::content;
use crate::sections::Section;
use crate::view_state::{Theme, ViewState};

use super::navigate;

fn nav_icon(section: Section) -> &'static str {
    match section {
        Section::Home => "🏠",
        Section::About => "👤",
        Section::Projects | Section::Experience => "💼",
        Section::Research => "📖",
        Section::Contact => "✉️",
        _ => "",
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let state = expect_context::<RwSignal<ViewState>>();
    let theme = expect_context::<Signal<Theme>>();
    let (menu_open, set_menu_open) = signal(false);

    let nav_buttons = move |mobile: bool| {
        Section::HEADER_NAV
            .into_iter()
            .map(|section| {
                view! {
                    <button
                        on:click=move |_| {
                            if mobile {
                                set_menu_open(false);
                            }
                            navigate(state, section);
                        }
                        class="text-gray-700 hover:text-blue-600 dark:text-gray-200 dark:hover:text-purple-400 transition duration-300 flex items-center gap-1"
                    >
                        <span aria-hidden="true">{nav_icon(section)}</span>
                        {section.nav_label()}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <header class="sticky top-0 z-50 bg-white shadow-md dark:bg-gray-900 dark:shadow-lg transition-colors duration-500">
            <div class="container mx-auto px-4 py-4 flex justify-between items-center">
                <div class="text-2xl font-bold text-blue-600 dark:text-purple-400">
                    {content().profile.name.as_str()}
                </div>
                <nav class="hidden md:flex space-x-6">{nav_buttons(false)}</nav>
                <div class="flex items-center gap-4">
                    <button
                        on:click=move |_| state.update(|s| s.toggle_theme())
                        aria-label="Toggle dark mode"
                        class="p-2 rounded-full bg-gray-200 dark:bg-gray-700 text-gray-800 dark:text-white hover:bg-gray-300 dark:hover:bg-gray-600 transition duration-300"
                    >
                        {move || if theme.get().is_dark() { "☀️" } else { "🌙" }}
                    </button>
                    <button
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        aria-label="Toggle navigation menu"
                        class="md:hidden p-2 rounded-md text-gray-700 dark:text-gray-200 hover:bg-gray-100 dark:hover:bg-gray-800"
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>
            <Show when=move || menu_open.get()>
                <nav class="md:hidden flex flex-col gap-4 px-4 pb-4">{nav_buttons(true)}</nav>
            </Show>
        </header>
    }
}
