use leptos::prelude::*;

use crate::catalog::{content, Publication};
use crate::sections::Section;

use super::SectionShell;

const LINK_CLASS: &str = "flex items-center gap-2 text-blue-600 hover:underline dark:text-purple-400";

#[component]
pub fn ResearchSection() -> impl IntoView {
    view! {
        <SectionShell section=Section::Research>
            <div class="space-y-8">
                {content()
                    .publications
                    .iter()
                    .map(|publication| view! { <PublicationCard publication=publication /> })
                    .collect_view()}
            </div>
        </SectionShell>
    }
}

#[component]
fn PublicationCard(publication: &'static Publication) -> impl IntoView {
    let (show_bibtex, set_show_bibtex) = signal(false);
    view! {
        <div class="bg-white rounded-xl shadow-lg p-6 dark:bg-gray-700">
            <h3 class="text-2xl font-semibold text-gray-800 dark:text-white mb-2">
                {publication.title.as_str()}
            </h3>
            <p class="text-gray-600 dark:text-gray-300 mb-2">
                <span class="font-medium">"Status:"</span>
                " "
                {publication.status.as_str()}
                {publication
                    .year
                    .as_deref()
                    .map(|year| {
                        view! {
                            " | "
                            <span class="font-medium">"Year:"</span>
                            " "
                            {year}
                        }
                    })}
            </p>
            <ul class="list-disc list-inside text-gray-700 dark:text-gray-200 mb-4">
                {publication
                    .highlights
                    .iter()
                    .map(|h| view! { <li>{h.as_str()}</li> })
                    .collect_view()}
            </ul>
            <div class="flex flex-wrap gap-4">
                // not published yet
                <span class=format!("{LINK_CLASS} opacity-60 cursor-not-allowed")>"📄 PDF"</span>
                <span class=format!("{LINK_CLASS} opacity-60 cursor-not-allowed")>"🔗 arXiv"</span>
                <button on:click=move |_| set_show_bibtex.update(|s| *s = !*s) class=LINK_CLASS>
                    {move || if show_bibtex.get() { "</> Hide BibTeX" } else { "</> BibTeX" }}
                </button>
            </div>
            <Show when=move || show_bibtex.get()>
                <pre class="mt-4 p-4 rounded-md bg-gray-100 dark:bg-gray-800 text-sm overflow-x-auto select-all">
                    {publication.bibtex.as_str()}
                </pre>
            </Show>
        </div>
    }
}

#[component]
pub fn AchievementsSection() -> impl IntoView {
    view! {
        <SectionShell section=Section::Achievements>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                {content()
                    .awards
                    .iter()
                    .map(|award| {
                        view! {
                            <div class="bg-gray-50 rounded-xl shadow-lg p-6 text-center dark:bg-gray-800">
                                <div class="text-6xl mb-4 text-yellow-500">"🏆"</div>
                                <h3 class="text-xl font-semibold text-gray-800 dark:text-white mb-2">
                                    {award.title.as_str()}
                                </h3>
                                <p class="text-gray-600 dark:text-gray-300">
                                    {award.description.as_str()}
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
pub fn ExperienceSection() -> impl IntoView {
    view! {
        <SectionShell section=Section::Experience>
            <div class="space-y-8">
                {content()
                    .experience
                    .iter()
                    .map(|job| {
                        view! {
                            <div class="bg-white rounded-xl shadow-lg p-6 dark:bg-gray-700 flex flex-col md:flex-row items-start md:items-center gap-6">
                                <img
                                    src=job.logo.as_str()
                                    alt=format!("{} Logo", job.organisation)
                                    class="w-20 h-20 rounded-full object-cover flex-shrink-0"
                                />
                                <div class="flex-grow">
                                    <h3 class="text-2xl font-semibold text-gray-800 dark:text-white">
                                        {job.role.as_str()}
                                    </h3>
                                    <p class="text-xl text-gray-600 dark:text-gray-300 mb-2">
                                        {job.organisation.as_str()}
                                    </p>
                                    <p class="text-md text-gray-500 dark:text-gray-400 mb-4">
                                        {format!("{} | {}", job.period, job.location)}
                                    </p>
                                    <ul class="list-disc list-inside text-gray-700 dark:text-gray-200 space-y-2">
                                        {job
                                            .highlights
                                            .iter()
                                            .map(|h| view! { <li>{h.as_str()}</li> })
                                            .collect_view()}
                                    </ul>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </SectionShell>
    }
}

#[component]
pub fn CertificationsSection() -> impl IntoView {
    view! {
        <SectionShell section=Section::Certifications>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                {content()
                    .certifications
                    .iter()
                    .map(|cert| {
                        view! {
                            <div class="bg-gray-50 rounded-xl shadow-lg p-6 text-center dark:bg-gray-800">
                                <img
                                    src=cert.logo.as_str()
                                    alt=format!("{} Logo", cert.issuer)
                                    class="w-20 h-20 mx-auto mb-4 object-contain"
                                />
                                <h3 class="text-xl font-semibold text-gray-800 dark:text-white mb-2">
                                    {cert.title.as_str()}
                                </h3>
                                <p class="text-gray-600 dark:text-gray-300 mb-2">
                                    "Issuer: " {cert.issuer.as_str()}
                                </p>
                                <p class="text-gray-500 dark:text-gray-400 mb-4">
                                    {cert.topics.as_str()}
                                </p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </SectionShell>
    }
}
