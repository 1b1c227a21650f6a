use leptos::prelude::*;

use crate::catalog::content;
use crate::contact::Notice;
use crate::sections::Section;

use super::{notice::Notifier, SectionShell};

const PILL_BUTTON: &str = "px-8 py-3 bg-blue-600 text-white rounded-full shadow-lg hover:bg-blue-700 transition duration-300 dark:bg-purple-600 dark:hover:bg-purple-700";

#[component]
pub fn VaultSection() -> impl IntoView {
    let notifier = expect_context::<Notifier>();
    view! {
        <SectionShell section=Section::Vault>
            <div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 gap-6">
                {content()
                    .documents
                    .iter()
                    .map(|doc| {
                        view! {
                            <div class="bg-white rounded-lg shadow-md p-6 flex items-center justify-between dark:bg-gray-700">
                                <span class="text-lg font-medium text-gray-800 dark:text-white">
                                    {doc.name.as_str()}
                                </span>
                                {match doc.link.as_deref() {
                                    Some(link) => {
                                        view! {
                                            <a
                                                href=link
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                aria-label=format!("Open {}", doc.name)
                                                class="text-2xl text-blue-600 hover:text-blue-800 dark:text-purple-400 dark:hover:text-purple-600"
                                            >
                                                "↗"
                                            </a>
                                        }
                                            .into_any()
                                    }
                                    None => {
                                        view! {
                                            <span class="text-sm text-gray-400">"Coming soon"</span>
                                        }
                                            .into_any()
                                    }
                                }}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="text-center mt-10">
                <button
                    on:click=move |_| notifier.show(Notice::info("Bulk download isn't available yet."))
                    class=PILL_BUTTON
                >
                    "Bulk Download All"
                </button>
            </div>
        </SectionShell>
    }
}

/// A section whose content hasn't been written yet.
#[component]
fn Placeholder(
    section: Section,
    lead: &'static str,
    detail: &'static str,
    action: &'static str,
) -> impl IntoView {
    let notifier = expect_context::<Notifier>();
    view! {
        <SectionShell section=section>
            <div class="text-center text-gray-700 dark:text-gray-200">
                <p class="mb-4 text-lg">{lead}</p>
                <p class="text-md">{detail}</p>
                <button
                    on:click=move |_| notifier.show(Notice::info(format!("{} is coming soon.", section.nav_label())))
                    class=format!("mt-8 {PILL_BUTTON}")
                >
                    {action}
                </button>
            </div>
        </SectionShell>
    }
}

#[component]
pub fn BlogSection() -> impl IntoView {
    view! {
        <Placeholder
            section=Section::Blog
            lead="Stay tuned for insightful articles on AI, Machine Learning, Data Structures, and Career Tips!"
            detail="This section will feature my thoughts, tutorials, and deep dives into technical topics."
            action="Explore Blog Posts"
        />
    }
}

#[component]
pub fn SpeakingSection() -> impl IntoView {
    view! {
        <Placeholder
            section=Section::Speaking
            lead="Details about my past and upcoming speaking engagements and workshops will appear here."
            detail="Topics include Explainable AI, Federated Learning, and Full-Stack Development."
            action="View Event Gallery"
        />
    }
}

#[component]
pub fn TestimonialsSection() -> impl IntoView {
    view! {
        <SectionShell section=Section::Testimonials>
            <div class="relative max-w-2xl mx-auto space-y-8">
                {content()
                    .testimonials
                    .iter()
                    .map(|t| {
                        view! {
                            <div class="bg-gray-50 rounded-xl shadow-lg p-8 text-center dark:bg-gray-800">
                                <p class="text-xl italic text-gray-700 dark:text-gray-200 mb-6">
                                    {format!("\"{}\"", t.quote)}
                                </p>
                                <p class="font-semibold text-gray-800 dark:text-white">
                                    {format!("- {}", t.attribution)}
                                </p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </SectionShell>
    }
}
