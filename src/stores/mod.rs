// UI state
// Pure state machines, kept free of DOM access so they test natively

pub mod playback;
pub mod slider;
