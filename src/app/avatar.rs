use leptos::prelude::*;

use crate::catalog::content;

#[component]
pub fn Avatar() -> impl IntoView {
    let profile = &content().profile;
    view! {
        <img
            src=profile.avatar.as_str()
            alt=profile.name.as_str()
            class="rounded-full w-64 h-64 object-cover shadow-lg border-4 border-blue-400 dark:border-purple-400"
        />
    }
}

/// Key facts listed next to the avatar.
#[component]
pub fn InfoBlock() -> impl IntoView {
    let profile = &content().profile;
    let facts = [
        ("Location", profile.location.as_str()),
        ("Email", profile.email.as_str()),
        ("Current Role", profile.role.as_str()),
        ("Interests", profile.interests.as_str()),
    ];
    view! {
        <div class="grid grid-cols-1 sm:grid-cols-2 gap-4 mt-6">
            {facts
                .into_iter()
                .map(|(label, value)| {
                    view! {
                        <div>
                            <span class="font-semibold text-gray-900 dark:text-white">
                                {label} ":"
                            </span>
                            " "
                            {value}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
