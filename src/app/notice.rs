use leptos::prelude::*;

use crate::contact::{Notice, NoticeKind, NoticeSlot, NOTICE_DURATION};

/// Shows one transient notice at a time.
#[derive(Clone, Copy)]
pub struct Notifier {
    slot: RwSignal<NoticeSlot>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            slot: RwSignal::new(NoticeSlot::new()),
        }
    }

    pub fn show(&self, notice: Notice) {
        let Some(id) = self.slot.try_update(|s| s.show(notice)) else {
            return;
        };
        let slot = self.slot;
        set_timeout(
            move || slot.maybe_update(|s| s.expire(id)),
            NOTICE_DURATION,
        );
    }
}

#[component]
pub fn NoticeToast() -> impl IntoView {
    let notifier = expect_context::<Notifier>();
    move || {
        notifier.slot.with(|s| s.current().cloned()).map(|notice| {
            let background = match notice.kind {
                NoticeKind::Success => "bg-gradient-to-br from-teal-600 to-green-400",
                NoticeKind::Error => "bg-gradient-to-br from-rose-500 to-orange-500",
                NoticeKind::Info => "bg-gradient-to-br from-indigo-400 to-purple-600",
            };
            view! {
                <div
                    role="status"
                    class=format!(
                        "fixed top-5 right-5 z-[10000] max-w-sm px-6 py-4 rounded-xl shadow-2xl text-white font-semibold break-words {background}",
                    )
                >
                    {notice.message}
                </div>
            }
        })
    }
}
