use dioxus::prelude::*;

use crate::components::icons::{
    MessageCircleIcon, MoreHorizontalIcon, ShareIcon, ThumbsDownIcon, ThumbsUpIcon,
};

/// Stateless like/dislike/comment/share/more column. The comment button is
/// the only action with externally meaningful behavior: it raises "comment
/// pressed" to the owning widget without bubbling into the video surface.
#[component]
pub fn ActionsBar(on_comment_pressed: EventHandler<()>) -> Element {
    let button_class =
        "text-xl bg-white/20 hover:bg-white/30 flex items-center justify-center w-12 h-12 rounded-full";

    rsx! {
        div {
            class: "flex flex-col justify-end items-center gap-2 h-full",

            div {
                class: "flex flex-col gap-1",
                button {
                    class: "{button_class}",
                    ThumbsUpIcon { class: "w-5 h-5" }
                }
                span { class: "text-sm text-center", "349K" }
            }

            div {
                class: "flex flex-col gap-1",
                button {
                    class: "{button_class}",
                    ThumbsDownIcon { class: "w-5 h-5" }
                }
                span { class: "text-sm text-center", "Dislike" }
            }

            div {
                class: "flex flex-col gap-1",
                button {
                    class: "{button_class}",
                    onclick: move |evt| {
                        evt.stop_propagation();
                        on_comment_pressed.call(());
                    },
                    MessageCircleIcon { class: "w-5 h-5" }
                }
                span { class: "text-sm text-center", "3.1K" }
            }

            div {
                class: "flex flex-col gap-1",
                button {
                    class: "{button_class}",
                    ShareIcon { class: "w-5 h-5" }
                }
                span { class: "text-sm text-center", "Share" }
            }

            div {
                class: "flex flex-col gap-1",
                button {
                    class: "{button_class}",
                    MoreHorizontalIcon { class: "w-5 h-5" }
                }
            }
        }
    }
}
