#![allow(non_snake_case)]

use dioxus::prelude::*;

// Modules
mod components;
mod stores;
mod utils;

use components::{VideoRecord, VideosSlider};

fn main() {
    // Initialize panic hook for better error messages in browser console
    #[cfg(target_family = "wasm")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    }

    log::info!("Starting storyfeed");

    // Launch the Dioxus web app
    dioxus::launch(App);
}

/// Demo feed served from the app's static assets.
///
/// The deployment is expected to serve `assets/videos/` next to the app
/// bundle, containing `story-1.mp4` through `story-5.mp4` plus the
/// `poster-1.jpg` and `avatar.jpg` images; the clips themselves are not
/// checked into the repository.
fn demo_videos() -> Vec<VideoRecord> {
    (1..=5)
        .map(|n| VideoRecord {
            src: format!("/assets/videos/story-{n}.mp4"),
            title: format!("Story {n}"),
            poster: "/assets/videos/poster-1.jpg".to_string(),
            channel: format!("Channel {n}"),
            avatar: "/assets/videos/avatar.jpg".to_string(),
        })
        .collect()
}

#[component]
fn App() -> Element {
    rsx! {
        VideosSlider { videos: demo_videos() }
    }
}
