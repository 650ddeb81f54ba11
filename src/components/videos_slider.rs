use dioxus::html::geometry::WheelDelta;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::components::icons::{ChevronDownIcon, ChevronUpIcon, VideoIcon};
use crate::components::video_widget::{VideoRecord, VideoWidget};
use crate::stores::slider::{Direction, SliderController};

/// One wheel gesture per window; events inside it are dropped, not queued.
const WHEEL_DEBOUNCE_MS: u32 = 300;

/// Short grace period after mount so widget handles are attached before the
/// first video is activated.
const MOUNT_ACTIVATE_DELAY_MS: u32 = 100;

/// Vertical delta of a wheel gesture regardless of the browser's delta unit.
fn wheel_delta_y(delta: &WheelDelta) -> f64 {
    match delta {
        WheelDelta::Pixels(v) => v.y,
        WheelDelta::Lines(v) => v.y,
        WheelDelta::Pages(v) => v.y,
    }
}

/// Full-screen vertical feed: renders one widget per video and coordinates
/// transitions between them through the per-widget handles.
#[component]
pub fn VideosSlider(videos: Vec<VideoRecord>) -> Element {
    let len = videos.len();
    let controller = use_signal(|| SliderController::new(len));

    // Establish the initial playing item without user input
    use_effect(move || {
        spawn(async move {
            TimeoutFuture::new(MOUNT_ACTIVATE_DELAY_MS).await;
            controller.read().activate_current();
        });
    });

    let on_wheel = move |evt: Event<WheelData>| {
        let delta_y = wheel_delta_y(&evt.data.delta());
        let mut controller = controller;
        let captured = controller.write().capture_wheel(delta_y);

        if let Some(direction) = captured {
            spawn(async move {
                TimeoutFuture::new(WHEEL_DEBOUNCE_MS).await;
                controller.write().advance(direction);
                // released regardless of the navigation outcome
                controller.write().release_wheel();
            });
        }
    };

    let on_keydown = move |evt: Event<KeyboardData>| {
        let mut controller = controller;
        match evt.key() {
            Key::ArrowDown => {
                evt.prevent_default();
                controller.write().advance(Direction::Next);
            }
            Key::ArrowUp => {
                evt.prevent_default();
                controller.write().advance(Direction::Prev);
            }
            _ => {}
        }
    };

    if videos.is_empty() {
        return rsx! {
            div {
                class: "bg-black w-screen h-screen flex items-center justify-center text-white",
                div {
                    class: "text-center space-y-4",
                    div {
                        class: "mb-4 flex justify-center",
                        VideoIcon { class: "w-24 h-24 text-gray-500" }
                    }
                    h3 { class: "text-2xl font-semibold", "No videos yet" }
                    p { class: "text-gray-400", "Add videos to the feed to start watching." }
                }
            }
        };
    }

    rsx! {
        div {
            class: "bg-black w-screen h-screen overflow-hidden items-center flex flex-col gap-5 py-5 transition-transform duration-300 ease-in-out pb-[300px]",
            tabindex: "0",
            onwheel: on_wheel,
            onkeydown: on_keydown,

            for (index, video) in videos.iter().enumerate() {
                VideoWidget {
                    key: "{index}",
                    index,
                    video: video.clone(),
                    controller,
                    on_video_end: move |_| {
                        let mut controller = controller;
                        controller.write().advance(Direction::Next);
                    },
                }
            }

            // Prev/next controls, hidden at the boundaries
            div {
                class: "fixed right-0 flex justify-center top-0 bottom-0 w-20",

                if !controller.read().at_first() {
                    button {
                        class: "fixed top-3 text-white text-3xl bg-white/20 hover:bg-white/30 flex items-center justify-center w-14 h-14 rounded-full",
                        onclick: move |_| {
                            let mut controller = controller;
                            controller.write().advance(Direction::Prev);
                        },
                        ChevronUpIcon { class: "w-6 h-6" }
                    }
                }

                if !controller.read().at_last() {
                    button {
                        class: "fixed bottom-3 text-white text-3xl bg-white/20 hover:bg-white/30 flex items-center justify-center w-14 h-14 rounded-full",
                        onclick: move |_| {
                            let mut controller = controller;
                            controller.write().advance(Direction::Next);
                        },
                        ChevronDownIcon { class: "w-6 h-6" }
                    }
                }
            }

            // Position counter
            div {
                class: "fixed bottom-4 left-4 text-white text-sm font-medium bg-black/50 px-3 py-2 rounded-full backdrop-blur-sm",
                "{controller.read().current_index() + 1} / {len}"
            }
        }
    }
}
