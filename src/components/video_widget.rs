use dioxus::events::MediaData;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::components::actions_bar::ActionsBar;
use crate::components::comment_section::CommentSection;
use crate::components::icons::{PauseIcon, PlayIcon, VolumeIcon, VolumeXIcon};
use crate::components::time_progress::TimeProgress;
use crate::stores::playback::{self, PlaybackState};
use crate::stores::slider::{SliderController, WidgetControl};
use crate::utils::media;

/// One feed entry, supplied by the hosting application. Read-only from the
/// UI's perspective.
#[derive(Clone, Debug, PartialEq)]
pub struct VideoRecord {
    pub src: String,
    pub title: String,
    pub poster: String,
    pub channel: String,
    pub avatar: String,
}

/// How long the centered play/pause glyph stays visible after a tap on the
/// video surface.
const PULSE_MS: u32 = 1_200;

/// The widget side of the slider's handle map: flips this widget's own state
/// and drives its video element. The slider holds it without owning either.
pub struct VideoWidgetHandle {
    state: Signal<PlaybackState>,
    video_id: String,
}

impl VideoWidgetHandle {
    pub fn new(state: Signal<PlaybackState>, video_id: String) -> Self {
        Self { state, video_id }
    }
}

impl WidgetControl for VideoWidgetHandle {
    fn play(&self) {
        let mut state = self.state;
        if state.write().request_play() {
            media::request_play(self.video_id.clone());
        }
    }

    fn pause(&self) {
        let mut state = self.state;
        if state.write().request_pause() {
            media::pause_video(&self.video_id);
        }
    }

    fn scroll_into_view(&self) {
        media::scroll_video_into_view(&self.video_id);
    }

    fn close_comment_section(&self) {
        let mut state = self.state;
        state.write().close_comment();
    }
}

/// Dispatches to play or pause from the current state. A tap on the video
/// surface also pulses the centered glyph; the hide timer is fire-and-forget,
/// so rapid taps stack timers harmlessly (hiding is idempotent).
fn toggle_play(
    mut state: Signal<PlaybackState>,
    mut pulse_visible: Signal<bool>,
    video_id: &str,
    animate: bool,
) {
    if animate {
        pulse_visible.set(true);
        spawn(async move {
            TimeoutFuture::new(PULSE_MS).await;
            pulse_visible.set(false);
        });
    }

    let is_playing = state.read().is_playing;
    if is_playing {
        if state.write().request_pause() {
            media::pause_video(video_id);
        }
    } else if state.write().request_play() {
        media::request_play(video_id.to_string());
    }
}

/// The single-video unit: owns play/pause/mute/comment state, registers a
/// control handle with the slider on mount, and reports natural playback end
/// upward through `on_video_end`.
#[component]
pub fn VideoWidget(
    index: usize,
    video: VideoRecord,
    controller: Signal<SliderController>,
    on_video_end: EventHandler<()>,
) -> Element {
    let video_id = use_hook(|| format!("story-video-{index}"));
    let mut state = use_signal(|| PlaybackState::with_muted(playback::load_muted()));
    #[cfg_attr(not(target_family = "wasm"), allow(unused_mut))]
    let mut progress = use_signal(|| 0u8);
    let pulse_visible = use_signal(|| false);

    // Clone the element id for closures
    let video_id_attach = video_id.clone();
    let video_id_tap = video_id.clone();
    let video_id_toggle = video_id.clone();
    let video_id_mute = video_id.clone();

    // Attach this widget's handle to the slider's index-keyed map
    use_effect(move || {
        let handle = VideoWidgetHandle::new(state, video_id_attach.clone());
        let mut controller = controller;
        controller.write().register(index, Box::new(handle));
    });

    use_drop(move || {
        let mut controller = controller;
        controller.write().unregister(index);
    });

    let on_timeupdate = move |evt: Event<MediaData>| {
        #[cfg(target_family = "wasm")]
        {
            use dioxus::web::WebEventExt;
            use wasm_bindgen::JsCast;

            use crate::components::time_progress::playback_progress;

            if let Some(target) = evt.data.as_web_event().target() {
                if let Some(video) = target.dyn_ref::<web_sys::HtmlVideoElement>() {
                    progress.set(playback_progress(video.current_time(), video.duration()));
                }
            }
        }
        #[cfg(not(target_family = "wasm"))]
        let _ = &evt;
    };

    let playback = *state.read();
    // Dock flat against the comment panel while it is expanded
    let video_radius = if playback.is_comment_expanded {
        "rounded-s-2xl"
    } else {
        "rounded-2xl"
    };
    let pulse_class = if *pulse_visible.read() {
        "grow-fade-in"
    } else {
        "opacity-0"
    };

    rsx! {
        div {
            class: "relative flex items-stretch h-[765px] min-w-[500px] max-w-[860px] text-white",

            div {
                class: "relative",

                video {
                    id: "{video_id}",
                    class: "{video_radius} shadow-sm shadow-white/10 border border-white/10",
                    src: "{video.src}",
                    poster: "{video.poster}",
                    width: "430",
                    controls: false,
                    muted: playback.is_muted,
                    playsinline: true,
                    preload: "metadata",
                    ontimeupdate: on_timeupdate,
                    onended: move |_| {
                        log::debug!("Video {} ended", index);
                        let mut state = state;
                        state.write().mark_ended();
                        on_video_end.call(());
                    },
                }

                // Tap surface and overlays
                div {
                    class: "absolute top-0 right-0 left-0 bottom-0 z-50 {video_radius} overflow-hidden",
                    onclick: move |_| {
                        toggle_play(state, pulse_visible, &video_id_tap, true);
                    },

                    // Top controls: play/pause and mute
                    div {
                        class: "absolute top-0 left-0 right-0 flex justify-between items-center p-4",

                        button {
                            class: "text-2xl",
                            onclick: move |evt| {
                                evt.stop_propagation();
                                toggle_play(state, pulse_visible, &video_id_toggle, false);
                            },
                            if playback.is_playing {
                                PauseIcon { class: "w-6 h-6" }
                            } else {
                                PlayIcon { class: "w-6 h-6" }
                            }
                        }

                        button {
                            class: "text-2xl",
                            onclick: move |evt| {
                                evt.stop_propagation();
                                let mut state = state;
                                let muted = state.write().toggle_muted();
                                media::set_video_muted(&video_id_mute, muted);
                                playback::store_muted(muted);
                            },
                            if playback.is_muted {
                                VolumeXIcon { class: "w-6 h-6" }
                            } else {
                                VolumeIcon { class: "w-6 h-6" }
                            }
                        }
                    }

                    // Bottom overlay: title, byline, subscribe; hosts the
                    // action bar while the comment panel is expanded
                    div {
                        class: "absolute bottom-0 left-0 right-0 flex flex-col gap-2 p-4",

                        div {
                            class: "flex justify-between items-end",

                            div {
                                h1 { "{video.title}" }
                                div {
                                    class: "flex gap-2 items-center",
                                    img {
                                        src: "{video.avatar}",
                                        alt: "{video.channel}",
                                        class: "w-[40px] h-[40px] rounded-full drop-shadow-sm",
                                    }
                                    h2 { "@{video.channel}" }
                                }
                            }

                            button {
                                class: "bg-white hover:bg-gray-100 h-10 px-3 rounded-3xl text-black text-sm shadow-sm",
                                onclick: move |evt| evt.stop_propagation(),
                                "Subscribe"
                            }

                            if playback.is_comment_expanded {
                                ActionsBar {
                                    on_comment_pressed: move |_| {
                                        let mut state = state;
                                        state.write().toggle_comment();
                                    }
                                }
                            }
                        }
                    }

                    // Transient center glyph pulsed by a tap
                    div {
                        class: "{pulse_class} absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 text-4xl bg-black/50 w-14 h-14 flex justify-center items-center rounded-full",
                        if playback.is_playing {
                            PlayIcon { class: "w-8 h-8" }
                        } else {
                            PauseIcon { class: "w-8 h-8" }
                        }
                    }

                    TimeProgress { percent: *progress.read() }
                }
            }

            if !playback.is_comment_expanded {
                ActionsBar {
                    on_comment_pressed: move |_| {
                        let mut state = state;
                        state.write().toggle_comment();
                    }
                }
            }

            CommentSection {
                show: playback.is_comment_expanded,
                on_close: move |_| {
                    let mut state = state;
                    state.write().close_comment();
                },
            }
        }
    }
}
