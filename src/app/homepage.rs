use leptos::prelude::*;
use leptos_use::use_interval_fn;

use crate::catalog::content;
use crate::contact::Notice;
use crate::effects::{Typewriter, TICK};
use crate::sections::Section;
use crate::view_state::ViewState;

use super::avatar::{Avatar, InfoBlock};
use super::{navigate, notice::Notifier, SectionShell};

const CV_BUTTON: &str = "flex items-center justify-center px-8 py-3 bg-white text-blue-600 rounded-full shadow-lg hover:bg-gray-100 transition duration-300 text-lg font-semibold";

#[component]
pub fn HeroSection() -> impl IntoView {
    let state = expect_context::<RwSignal<ViewState>>();
    let notifier = expect_context::<Notifier>();
    let profile = &content().profile;

    let typewriter = StoredValue::new(Typewriter::new(profile.phrases.clone()));
    let (typed, set_typed) = signal(String::new());
    let _ = use_interval_fn(
        move || {
            typewriter.update_value(|t| {
                if t.tick(TICK) {
                    set_typed(t.text().to_string());
                }
            });
        },
        TICK.as_millis() as u64,
    );

    view! {
        <section
            id=Section::Home.id()
            class="min-h-screen flex items-center justify-center bg-gradient-to-r from-blue-500 to-purple-600 text-white dark:from-gray-800 dark:to-gray-900 transition-colors duration-500"
        >
            <div class="container mx-auto px-4 py-20 text-center">
                <h1 class="text-5xl md:text-7xl font-extrabold mb-4 animate-fade-in-down">
                    {profile.name.as_str()}
                </h1>
                <p class="text-xl md:text-3xl mb-2 animate-fade-in-up">
                    {profile.headline.as_str()}
                </p>
                <p class="text-lg md:text-2xl mb-8 h-8 font-mono">
                    <span>{typed}</span>
                    <span class="animate-pulse">"|"</span>
                </p>
                <div class="flex flex-col sm:flex-row justify-center gap-4 mb-12 animate-fade-in">
                    {match profile.resume.as_deref() {
                        Some(resume) => {
                            view! {
                                <a href=resume download="" class=CV_BUTTON>
                                    "⬇ Download CV"
                                </a>
                            }
                                .into_any()
                        }
                        None => {
                            view! {
                                <button
                                    on:click=move |_| {
                                        notifier.show(Notice::info("CV download is coming soon."))
                                    }
                                    class=CV_BUTTON
                                >
                                    "⬇ Download CV"
                                </button>
                            }
                                .into_any()
                        }
                    }}
                    <button
                        on:click=move |_| navigate(state, Section::Projects)
                        class="flex items-center justify-center px-8 py-3 bg-transparent border-2 border-white text-white rounded-full shadow-lg hover:bg-white hover:text-blue-600 transition duration-300 text-lg font-semibold"
                    >
                        "💼 View Projects"
                    </button>
                </div>
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6 animate-fade-in-up">
                    {profile
                        .stats
                        .iter()
                        .map(|stat| {
                            view! {
                                <div class="bg-white/20 backdrop-blur-sm p-6 rounded-xl shadow-lg">
                                    <h3 class="text-4xl font-bold">{stat.value.as_str()}</h3>
                                    <p class="text-lg">{stat.label.as_str()}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn AboutSection() -> impl IntoView {
    let profile = &content().profile;
    view! {
        <SectionShell section=Section::About>
            <div class="flex flex-col md:flex-row items-center gap-12">
                <div class="md:w-1/3 flex justify-center">
                    <Avatar />
                </div>
                <div class="md:w-2/3 text-lg text-gray-700 dark:text-gray-200 leading-relaxed">
                    {profile
                        .about
                        .iter()
                        .map(|p| view! { <p class="mb-4">{p.as_str()}</p> })
                        .collect_view()}
                    <InfoBlock />
                </div>
            </div>
        </SectionShell>
    }
}

#[component]
pub fn EducationSection() -> impl IntoView {
    view! {
        <SectionShell section=Section::Education>
            <div class="relative border-l-4 border-blue-500 dark:border-purple-500 pl-8 ml-4">
                {content()
                    .education
                    .iter()
                    .map(|e| {
                        view! {
                            <div class="mb-12 relative">
                                <div class="absolute w-4 h-4 bg-blue-500 dark:bg-purple-500 rounded-full -left-10 top-1.5 border-4 border-white dark:border-gray-900"></div>
                                <h3 class="text-2xl font-semibold text-gray-800 dark:text-white">
                                    {e.degree.as_str()}
                                </h3>
                                <p class="text-lg text-gray-600 dark:text-gray-300">
                                    {e.institution.as_str()}
                                </p>
                                <p class="text-md text-gray-500 dark:text-gray-400">
                                    {format!("{} | {}", e.period, e.score)}
                                </p>
                                <p class="text-md text-gray-500 dark:text-gray-400 mt-2">
                                    "Relevant Coursework: " {e.coursework.as_str()}
                                </p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </SectionShell>
    }
}

#[component]
pub fn SkillsSection() -> impl IntoView {
    let site = content();
    view! {
        <SectionShell section=Section::Skills>
            <div class="mb-12">
                <h3 class="text-2xl font-semibold text-gray-800 dark:text-white mb-6">
                    "Technical Stack"
                </h3>
                <div class="grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 lg:grid-cols-6 gap-6">
                    {site
                        .skills
                        .iter()
                        .map(|skill| {
                            view! {
                                <div class="flex flex-col items-center p-4 bg-white rounded-lg shadow-md hover:shadow-lg transition duration-300 dark:bg-gray-700">
                                    <img
                                        src=skill.icon.as_str()
                                        alt=skill.name.as_str()
                                        class="w-12 h-12 mb-2"
                                    />
                                    <span class="text-gray-800 dark:text-white text-center font-medium">
                                        {skill.name.as_str()}
                                    </span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div>
                <h3 class="text-2xl font-semibold text-gray-800 dark:text-white mb-6">
                    "Soft Skills & Leadership"
                </h3>
                <div class="flex flex-wrap justify-center gap-4">
                    {site
                        .soft_skills
                        .iter()
                        .map(|s| {
                            view! {
                                <span class="px-6 py-3 bg-blue-100 text-blue-800 rounded-full shadow-md text-lg font-medium dark:bg-purple-200 dark:text-purple-900">
                                    {s.as_str()}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </SectionShell>
    }
}
