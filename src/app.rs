mod avatar;
mod contact;
mod footer;
mod header;
mod homepage;
mod notice;
mod projects;
mod resume;
mod vault;

use leptos::{either::Either, ev, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::{use_document, use_event_listener};

use crate::catalog::content;
use crate::contact::Notice;
use crate::effects::{KonamiDetector, TimedSlot};
use crate::sections::Section;
use crate::view_state::{Theme, ViewState};

use contact::ContactSection;
use footer::Footer;
use header::Header;
use homepage::{AboutSection, EducationSection, HeroSection, SkillsSection};
use notice::{NoticeToast, Notifier};
use projects::{ProjectDetail, ProjectsSection};
use resume::{AchievementsSection, CertificationsSection, ExperienceSection, ResearchSection};
use vault::{BlogSection, SpeakingSection, TestimonialsSection, VaultSection};

const RAINBOW_DURATION: std::time::Duration = std::time::Duration::from_millis(2000);

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let state = RwSignal::new(ViewState::new());
    provide_context(state);
    // every section reads the theme from here, never from `state` directly
    let theme: Signal<Theme> = Memo::new(move |_| state.with(|s| s.theme())).into();
    provide_context(theme);
    let notifier = Notifier::new();
    provide_context(notifier);

    let rainbow = RwSignal::new(TimedSlot::<()>::new());
    let konami = StoredValue::new(KonamiDetector::new());
    let _ = use_event_listener(use_document(), ev::keydown, move |ev| {
        let fired = konami.try_update_value(|k| k.push(&ev.code())).unwrap_or(false);
        if !fired {
            return;
        }
        log::info!("konami code entered");
        notifier.show(Notice::success(
            "🚀 Easter egg activated! You found the secret!",
        ));
        if let Some(id) = rainbow.try_update(|r| r.show(())) {
            set_timeout(move || rainbow.maybe_update(|r| r.expire(id)), RAINBOW_DURATION);
        }
    });

    let name = content().profile.name.as_str();

    view! {
        <Title formatter=move |title| format!("{name} - {title}") />

        <Router>
            <div class=move || {
                let mut class = format!(
                    "font-inter min-h-screen flex flex-col {}",
                    theme.get().class(),
                );
                if rainbow.with(|r| r.is_showing()) {
                    class.push_str(" animate-rainbow");
                }
                class
            }>
                <Header />
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
                <Footer />
                <NoticeToast />
            </div>
        </Router>
    }
}

/// Leave detail mode if needed, then scroll `section` into view.
pub fn navigate(state: RwSignal<ViewState>, section: Section) {
    if state.with_untracked(|s| s.is_detail_mode()) {
        state.update(|s| s.clear_selection());
        // the list view only exists after the next render
        request_animation_frame(move || scroll_into_view(section));
    } else {
        scroll_into_view(section);
    }
}

fn scroll_into_view(section: Section) {
    match document().get_element_by_id(section.id()) {
        Some(el) => el.scroll_into_view(),
        None => log::warn!("no element for section {}", section.id()),
    }
}

/// Heading and background shared by every content section.
#[component]
fn SectionShell(section: Section, children: Children) -> impl IntoView {
    let shaded = Section::ALL
        .iter()
        .position(|s| *s == section)
        .is_some_and(|i| i % 2 == 1);
    let background = if shaded {
        "bg-gray-50 dark:bg-gray-800"
    } else {
        "bg-white dark:bg-gray-900"
    };
    view! {
        <section
            id=section.id()
            class=format!("py-20 {background} transition-colors duration-500")
        >
            <div class="container mx-auto px-4">
                <h2 class="text-4xl font-bold text-center mb-12 text-gray-800 dark:text-white">
                    {section.title()}
                </h2>
                {children()}
            </div>
        </section>
    }
}

/// The single page: either the full list of sections or one project's detail.
#[component]
fn HomePage() -> impl IntoView {
    let state = expect_context::<RwSignal<ViewState>>();
    let detail_mode = Memo::new(move |_| state.with(|s| s.is_detail_mode()));

    view! {
        <Title text="Portfolio" />
        {move || {
            if detail_mode.get() {
                Either::Left(view! { <ProjectDetail /> })
            } else {
                Either::Right(
                    view! {
                        <main class="flex-grow">
                            <HeroSection />
                            <AboutSection />
                            <EducationSection />
                            <SkillsSection />
                            <ProjectsSection />
                            <ResearchSection />
                            <AchievementsSection />
                            <ExperienceSection />
                            <CertificationsSection />
                            <VaultSection />
                            <BlogSection />
                            <SpeakingSection />
                            <TestimonialsSection />
                            <ContactSection />
                        </main>
                    },
                )
            }
        }}
    }
}
