use leptos::{html, prelude::*};

use crate::catalog::content;
use crate::contact::{submit, ContactForm};
use crate::sections::Section;

use super::{notice::Notifier, SectionShell};

const INPUT_CLASS: &str = "mt-1 block w-full px-4 py-2 border border-gray-300 rounded-md shadow-sm focus:ring-blue-500 focus:border-blue-500 dark:bg-gray-600 dark:border-gray-500 dark:text-white";
const LABEL_CLASS: &str = "block text-lg font-medium text-gray-700 dark:text-gray-200";

#[component]
pub fn ContactSection() -> impl IntoView {
    let notifier = expect_context::<Notifier>();
    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let subject_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (Some(name), Some(email), Some(subject), Some(message)) = (
            name_ref.get_untracked(),
            email_ref.get_untracked(),
            subject_ref.get_untracked(),
            message_ref.get_untracked(),
        ) else {
            return;
        };
        let form = ContactForm {
            name: name.value(),
            email: email.value(),
            subject: subject.value(),
            message: message.value(),
        };

        let (link, notice) = submit(&form, &content().profile.email);
        if let Some(link) = link {
            if let Err(e) = window().location().set_href(&link) {
                log::error!("couldn't open mail client: {e:?}");
            }
            name.set_value("");
            email.set_value("");
            subject.set_value("");
            message.set_value("");
        }
        notifier.show(notice);
    };

    view! {
        <SectionShell section=Section::Contact>
            <div class="max-w-xl mx-auto bg-white rounded-xl shadow-lg p-8 dark:bg-gray-700">
                <form class="space-y-6" on:submit=on_submit novalidate=true>
                    <div>
                        <label for="name" class=LABEL_CLASS>
                            "Name"
                        </label>
                        <input
                            node_ref=name_ref
                            type="text"
                            id="name"
                            name="name"
                            class=INPUT_CLASS
                            placeholder="Your Name"
                        />
                    </div>
                    <div>
                        <label for="email" class=LABEL_CLASS>
                            "Email"
                        </label>
                        <input
                            node_ref=email_ref
                            type="email"
                            id="email"
                            name="email"
                            class=INPUT_CLASS
                            placeholder="your.email@example.com"
                        />
                    </div>
                    <div>
                        <label for="subject" class=LABEL_CLASS>
                            "Subject"
                        </label>
                        <input
                            node_ref=subject_ref
                            type="text"
                            id="subject"
                            name="subject"
                            class=INPUT_CLASS
                            placeholder="What's this about?"
                        />
                    </div>
                    <div>
                        <label for="message" class=LABEL_CLASS>
                            "Message"
                        </label>
                        <textarea
                            node_ref=message_ref
                            id="message"
                            name="message"
                            rows="5"
                            class=INPUT_CLASS
                            placeholder="Your message..."
                        ></textarea>
                    </div>
                    <div class="text-center">
                        <button
                            type="submit"
                            class="px-8 py-3 bg-blue-600 text-white rounded-full shadow-lg hover:bg-blue-700 transition duration-300 dark:bg-purple-600 dark:hover:bg-purple-700"
                        >
                            "Send Message"
                        </button>
                    </div>
                </form>
                <div class="mt-8 text-center">
                    <h3 class="text-xl font-semibold text-gray-800 dark:text-white mb-4">
                        "Connect with me:"
                    </h3>
                    <div class="flex justify-center gap-6 text-4xl">
                        {content()
                            .profile
                            .socials
                            .iter()
                            .map(|social| {
                                let class = format!(
                                    "{} text-gray-700 hover:text-blue-600 dark:text-gray-200 dark:hover:text-purple-400",
                                    social.icon,
                                );
                                match social.href.as_deref() {
                                    Some(href) => {
                                        view! {
                                            <a
                                                href=href
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                aria-label=social.label.as_str()
                                                class=class
                                            ></a>
                                        }
                                            .into_any()
                                    }
                                    None => {
                                        view! {
                                            <span
                                                title=format!("{} (coming soon)", social.label)
                                                class=format!("{class} opacity-60")
                                            ></span>
                                        }
                                            .into_any()
                                    }
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </SectionShell>
    }
}
