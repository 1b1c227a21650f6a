use leptos::prelude::*;

use crate::catalog::{content, Project};
use crate::sections::Section;
use crate::view_state::{CategoryFilter, ViewState};

use super::SectionShell;

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let state = expect_context::<RwSignal<ViewState>>();
    let filter = Memo::new(move |_| state.with(|s| s.filter().clone()));
    let visible = Memo::new(move |_| {
        state.with(|s| s.visible_projects(&content().projects))
    });

    view! {
        <SectionShell section=Section::Projects>
            <div class="flex flex-wrap justify-center mb-8 gap-4">
                {CategoryFilter::OPTIONS
                    .into_iter()
                    .map(|option| {
                        let label = option.label().to_string();
                        let is_active = {
                            let option = option.clone();
                            move || filter.with(|f| *f == option)
                        };
                        view! {
                            <button
                                on:click=move |_| {
                                    let option = option.clone();
                                    state.update(|s| s.set_category_filter(option));
                                }
                                class=move || {
                                    if is_active() {
                                        "px-6 py-2 rounded-full text-lg font-semibold transition duration-300 bg-blue-600 text-white shadow-md dark:bg-purple-600"
                                    } else {
                                        "px-6 py-2 rounded-full text-lg font-semibold transition duration-300 bg-gray-200 text-gray-700 hover:bg-gray-300 dark:bg-gray-700 dark:text-gray-200 dark:hover:bg-gray-600"
                                    }
                                }
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                <For
                    each=move || visible.get()
                    key=|project| project.id.clone()
                    children=move |project| view! { <ProjectCard project /> }
                />
            </div>
        </SectionShell>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    let state = expect_context::<RwSignal<ViewState>>();
    let hidden = project.hidden_stack_count();

    view! {
        <div class="bg-gray-50 rounded-xl shadow-lg overflow-hidden flex flex-col dark:bg-gray-800 hover:shadow-xl transform hover:-translate-y-1 transition duration-300">
            {project
                .cover()
                .map(|src| {
                    view! {
                        <img src=src alt=project.title.as_str() class="w-full h-48 object-cover" />
                    }
                })}
            <div class="p-6 flex-grow flex flex-col">
                <h3 class="text-2xl font-bold text-gray-800 dark:text-white mb-2">
                    {project.title.as_str()}
                </h3>
                <p class="text-gray-600 dark:text-gray-300 mb-4 flex-grow">
                    {project.tagline.as_str()}
                </p>
                <div class="flex flex-wrap gap-2 mb-4">
                    {project
                        .card_stack()
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="px-3 py-1 bg-blue-100 text-blue-800 text-sm rounded-full dark:bg-purple-200 dark:text-purple-900">
                                    {tech.as_str()}
                                </span>
                            }
                        })
                        .collect_view()}
                    {(hidden > 0)
                        .then(|| {
                            view! {
                                <span class="px-3 py-1 bg-gray-200 text-gray-700 text-sm rounded-full dark:bg-gray-600 dark:text-gray-200">
                                    {format!("+{hidden} more")}
                                </span>
                            }
                        })}
                </div>
                <button
                    on:click=move |_| state.update(|s| s.select_project(project.id.as_str()))
                    class="mt-auto px-6 py-2 bg-blue-500 text-white rounded-lg hover:bg-blue-600 transition duration-300 dark:bg-purple-600 dark:hover:bg-purple-700"
                >
                    "View Details"
                </button>
            </div>
        </div>
    }
}

/// Full record of the selected project. Renders nothing if the selection
/// doesn't resolve to a catalog entry.
#[component]
pub fn ProjectDetail() -> impl IntoView {
    let state = expect_context::<RwSignal<ViewState>>();
    let detail = Memo::new(move |_| state.with(|s| s.active_project_detail(&content().projects)));

    move || {
        let Some(project) = detail.get() else {
            if let Some(id) = state.with_untracked(|s| s.active_project_id().map(str::to_string)) {
                log::warn!("selected project {id} is not in the catalog");
            }
            return None;
        };
        Some(view! {
            <div class="container mx-auto px-4 py-8 flex-grow dark:text-white">
                <button
                    on:click=move |_| state.update(|s| s.clear_selection())
                    class="mb-6 px-4 py-2 bg-blue-500 text-white rounded-lg hover:bg-blue-600 transition duration-300 dark:bg-blue-700 dark:hover:bg-blue-800"
                >
                    "← Back to Projects"
                </button>
                <h1 class="text-4xl font-bold mb-4">{project.title.as_str()}</h1>
                <p class="text-xl text-gray-600 dark:text-gray-300 mb-6">
                    {project.tagline.as_str()}
                </p>

                <DetailBlock title="Problem Statement">
                    <p class="text-lg text-gray-700 dark:text-gray-200">
                        {project.problem.as_str()}
                    </p>
                </DetailBlock>

                <DetailBlock title="Tech Stack">
                    <div class="flex flex-wrap gap-2">
                        {project
                            .stack
                            .iter()
                            .map(|tech| {
                                view! {
                                    <span class="px-3 py-1 bg-gray-200 text-gray-800 rounded-full text-sm dark:bg-gray-700 dark:text-gray-100">
                                        {tech.as_str()}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </DetailBlock>

                <DetailBlock title="Key Achievements & Metrics">
                    <ul class="list-disc list-inside text-lg text-gray-700 dark:text-gray-200 space-y-2">
                        {project
                            .achievements
                            .iter()
                            .map(|a| view! { <li>{a.as_str()}</li> })
                            .collect_view()}
                    </ul>
                </DetailBlock>

                <DetailBlock title="Screenshots / Demo">
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                        {project
                            .screenshots
                            .iter()
                            .enumerate()
                            .map(|(i, src)| {
                                view! {
                                    <img
                                        src=src.as_str()
                                        alt=format!("{} Screenshot {}", project.title, i + 1)
                                        class="rounded-lg shadow-lg w-full h-auto object-cover"
                                    />
                                }
                            })
                            .collect_view()}
                        {project
                            .demo
                            .as_deref()
                            .map(|demo| {
                                view! {
                                    <div class="w-full h-64 bg-gray-300 flex items-center justify-center rounded-lg shadow-lg dark:bg-gray-700">
                                        <a
                                            href=demo
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="text-blue-600 hover:underline dark:text-blue-400 text-center"
                                        >
                                            <span class="text-5xl">"↗"</span>
                                            <span class="block mt-2">"View Demo Video"</span>
                                        </a>
                                    </div>
                                }
                            })}
                    </div>
                </DetailBlock>

                <DetailBlock title="Links">
                    <div class="flex flex-wrap gap-4">
                        {project
                            .github
                            .as_deref()
                            .map(|github| {
                                view! {
                                    <a
                                        href=github
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="flex items-center gap-2 px-4 py-2 bg-gray-800 text-white rounded-lg hover:bg-gray-700 transition duration-300 dark:bg-gray-900 dark:hover:bg-gray-800"
                                    >
                                        <i class="devicon-github-plain" />
                                        "GitHub Repo"
                                    </a>
                                }
                            })}
                    </div>
                </DetailBlock>
            </div>
        })
    }
}

#[component]
fn DetailBlock(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="mb-8">
            <h2 class="text-2xl font-semibold mb-3">{title}</h2>
            {children()}
        </div>
    }
}
