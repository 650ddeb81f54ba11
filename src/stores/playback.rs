use gloo_storage::{LocalStorage, Storage};

const STORAGE_KEY_MUTED: &str = "storyfeed_muted";

/// Per-widget playback flags. Each widget owns one of these; the slider only
/// reaches them through the widget's handle.
///
/// The transition methods return whether the caller needs to dispatch the
/// matching operation to the video element, so repeated requests in the same
/// state never produce duplicate element calls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlaybackState {
    pub is_playing: bool,
    pub is_muted: bool,
    pub is_comment_expanded: bool,
}

impl PlaybackState {
    pub fn with_muted(is_muted: bool) -> Self {
        Self {
            is_muted,
            ..Self::default()
        }
    }

    /// Flips to playing before the async element start resolves. Intentional
    /// latency hiding: a rejected start leaves the flag set and only notifies.
    pub fn request_play(&mut self) -> bool {
        if self.is_playing {
            return false;
        }
        self.is_playing = true;
        true
    }

    pub fn request_pause(&mut self) -> bool {
        if !self.is_playing {
            return false;
        }
        self.is_playing = false;
        true
    }

    /// Returns the new muted value so the caller can mirror it onto the
    /// element attribute in lockstep.
    pub fn toggle_muted(&mut self) -> bool {
        self.is_muted = !self.is_muted;
        self.is_muted
    }

    pub fn toggle_comment(&mut self) {
        self.is_comment_expanded = !self.is_comment_expanded;
    }

    pub fn close_comment(&mut self) {
        self.is_comment_expanded = false;
    }

    /// The element finished naturally.
    pub fn mark_ended(&mut self) {
        self.is_playing = false;
    }
}

/// Load the persisted muted preference.
pub fn load_muted() -> bool {
    LocalStorage::get::<bool>(STORAGE_KEY_MUTED).unwrap_or(false)
}

/// Persist the muted preference across sessions.
pub fn store_muted(is_muted: bool) {
    LocalStorage::set(STORAGE_KEY_MUTED, is_muted).ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_is_idempotent() {
        let mut state = PlaybackState::default();

        assert!(state.request_play());
        assert!(state.is_playing);
        // already playing: no duplicate dispatch
        assert!(!state.request_play());
        assert!(state.is_playing);
    }

    #[test]
    fn pause_is_idempotent() {
        let mut state = PlaybackState::default();

        assert!(!state.request_pause());

        state.request_play();
        assert!(state.request_pause());
        assert!(!state.is_playing);
        assert!(!state.request_pause());
    }

    #[test]
    fn toggle_muted_twice_round_trips() {
        let mut state = PlaybackState::default();

        assert!(state.toggle_muted());
        assert!(state.is_muted);
        assert!(!state.toggle_muted());
        assert!(!state.is_muted);
    }

    #[test]
    fn ended_video_reads_as_paused() {
        let mut state = PlaybackState::default();
        state.request_play();

        state.mark_ended();

        assert!(!state.is_playing);
        // the next play request dispatches again
        assert!(state.request_play());
    }

    #[test]
    fn close_comment_forces_collapsed() {
        let mut state = PlaybackState::default();

        state.close_comment();
        assert!(!state.is_comment_expanded);

        state.toggle_comment();
        assert!(state.is_comment_expanded);
        state.close_comment();
        assert!(!state.is_comment_expanded);
    }

    #[test]
    fn with_muted_seeds_only_the_mute_flag() {
        let state = PlaybackState::with_muted(true);

        assert!(state.is_muted);
        assert!(!state.is_playing);
        assert!(!state.is_comment_expanded);
    }
}
