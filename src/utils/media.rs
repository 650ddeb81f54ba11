//! Direct control of `<video>` elements by DOM id.
//!
//! Every lookup failure degrades to a logged no-op. Off-wasm these functions
//! compile to nothing so the state machines stay testable natively.

#[cfg(target_family = "wasm")]
const PLAY_REJECTED_ALERT: &str =
    "Unable to play the video, please check if videos are allowed to play on this site.";

/// Delay before surfacing a playback failure to the user, so the alert can
/// never stall a same-frame slider transition.
#[cfg(target_family = "wasm")]
const PLAY_ALERT_DELAY_MS: u32 = 1_000;

#[cfg(target_family = "wasm")]
fn video_element(id: &str) -> Option<web_sys::HtmlVideoElement> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()?.document()?;
    let element = match document.get_element_by_id(id) {
        Some(e) => e,
        None => {
            log::debug!("Video element {} not found yet", id);
            return None;
        }
    };

    match element.dyn_into::<web_sys::HtmlVideoElement>() {
        Ok(video) => Some(video),
        Err(e) => {
            log::error!("Element {} is not a video element: {:?}", id, e);
            None
        }
    }
}

/// Requests playback start on the element. The returned promise is awaited in
/// the background; a rejected start (e.g. autoplay blocked) is logged and
/// surfaced to the user with a delayed blocking alert. The caller has already
/// flipped its state to playing and is not rolled back.
#[cfg_attr(not(target_family = "wasm"), allow(unused_variables))]
pub fn request_play(id: String) {
    #[cfg(target_family = "wasm")]
    {
        use dioxus::prelude::spawn;

        spawn(async move {
            let video = match video_element(&id) {
                Some(v) => v,
                None => return,
            };

            let promise = match video.play() {
                Ok(p) => p,
                Err(e) => {
                    notify_play_rejected(&id, e).await;
                    return;
                }
            };

            if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
                notify_play_rejected(&id, e).await;
            }
        });
    }
}

#[cfg(target_family = "wasm")]
async fn notify_play_rejected(id: &str, error: wasm_bindgen::JsValue) {
    log::error!("Playback start rejected for {}: {:?}", id, error);

    gloo_timers::future::TimeoutFuture::new(PLAY_ALERT_DELAY_MS).await;
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(PLAY_REJECTED_ALERT);
    }
}

#[cfg_attr(not(target_family = "wasm"), allow(unused_variables))]
pub fn pause_video(id: &str) {
    #[cfg(target_family = "wasm")]
    if let Some(video) = video_element(id) {
        if let Err(e) = video.pause() {
            log::debug!("Pause failed for {}: {:?}", id, e);
        }
    }
}

/// Mirrors the muted flag onto the element attribute.
#[cfg_attr(not(target_family = "wasm"), allow(unused_variables))]
pub fn set_video_muted(id: &str, muted: bool) {
    #[cfg(target_family = "wasm")]
    if let Some(video) = video_element(id) {
        video.set_muted(muted);
    }
}

/// Smooth-scrolls the element to the top of the viewport.
#[cfg_attr(not(target_family = "wasm"), allow(unused_variables))]
pub fn scroll_video_into_view(id: &str) {
    #[cfg(target_family = "wasm")]
    if let Some(video) = video_element(id) {
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        options.set_inline(web_sys::ScrollLogicalPosition::Center);
        video.scroll_into_view_with_scroll_into_view_options(&options);
    }
}
