// UI components
// One file per widget, leaf components first

pub mod actions_bar;
pub mod comment_section;
pub mod icons;
pub mod time_progress;
pub mod video_widget;
pub mod videos_slider;

pub use actions_bar::ActionsBar;
pub use comment_section::CommentSection;
pub use time_progress::TimeProgress;
pub use video_widget::{VideoRecord, VideoWidget};
pub use videos_slider::VideosSlider;
