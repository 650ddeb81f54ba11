use dioxus::prelude::*;

use crate::components::icons::XIcon;

/// Togglable comment panel shell. Purely visual: it carries no comment data,
/// only the expanded/collapsed class and a close control in the header.
#[component]
pub fn CommentSection(show: bool, on_close: EventHandler<()>) -> Element {
    let panel_class = if show {
        "comment-section visible transition-all duration-300 ease-in-out bg-[#212121] rounded-e-lg"
    } else {
        "comment-section transition-all duration-300 ease-in-out bg-[#212121] rounded-e-lg"
    };

    rsx! {
        div {
            class: "{panel_class}",

            if show {
                div {
                    class: "flex justify-between items-center p-4",
                    h1 { class: "text-xl font-bold", "Comments" }

                    button {
                        class: "text-white hover:bg-white/20 p-1 rounded-full transition",
                        onclick: move |evt| {
                            evt.stop_propagation();
                            on_close.call(());
                        },
                        XIcon { class: "w-7 h-7" }
                    }
                }
            }
        }
    }
}
