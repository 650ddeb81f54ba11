use std::collections::HashMap;

/// Navigation direction for the slider.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

/// Narrow control surface the slider uses to drive one video widget
/// without owning its internal state. Widgets register an implementation
/// when they mount and remove it when they unmount.
pub trait WidgetControl {
    fn play(&self);
    fn pause(&self);
    fn scroll_into_view(&self);
    fn close_comment_section(&self);
}

/// Coordinates transitions between video widgets: owns the current-index
/// cursor, the index-keyed handle map, and the wheel-debounce flag.
///
/// The debounce flag is per-controller so independent sliders never share
/// scroll state.
pub struct SliderController {
    handles: HashMap<usize, Box<dyn WidgetControl>>,
    current_index: usize,
    len: usize,
    wheel_locked: bool,
}

impl SliderController {
    pub fn new(len: usize) -> Self {
        Self {
            handles: HashMap::new(),
            current_index: 0,
            len,
            wheel_locked: false,
        }
    }

    pub fn register(&mut self, index: usize, handle: Box<dyn WidgetControl>) {
        self.handles.insert(index, handle);
    }

    pub fn unregister(&mut self, index: usize) {
        self.handles.remove(&index);
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn at_first(&self) -> bool {
        self.current_index == 0
    }

    pub fn at_last(&self) -> bool {
        self.current_index + 1 >= self.len
    }

    /// Brings the current widget into view and starts it. Used once on
    /// mount so the feed plays without user input.
    pub fn activate_current(&self) {
        if let Some(handle) = self.handles.get(&self.current_index) {
            handle.scroll_into_view();
            handle.play();
        }
    }

    /// Moves the cursor one step. A call at the boundary is a silent no-op.
    ///
    /// The outgoing widget is paused and its comment panel collapsed; the
    /// incoming widget is started and scrolled into view. A missing handle
    /// is skipped but the cursor still moves.
    pub fn advance(&mut self, direction: Direction) -> bool {
        let target = match direction {
            Direction::Next if !self.at_last() => self.current_index + 1,
            Direction::Prev if !self.at_first() => self.current_index - 1,
            _ => return false,
        };

        if let Some(outgoing) = self.handles.get(&self.current_index) {
            outgoing.pause();
            outgoing.close_comment_section();
        }

        if let Some(incoming) = self.handles.get(&target) {
            incoming.play();
            incoming.scroll_into_view();
        }

        log::debug!("slider cursor {} -> {}", self.current_index, target);
        self.current_index = target;
        true
    }

    /// Captures one wheel gesture and locks out further wheel events until
    /// `release_wheel`. Returns the gesture's direction, or `None` while
    /// locked (overlapping gestures are dropped, not queued).
    pub fn capture_wheel(&mut self, delta_y: f64) -> Option<Direction> {
        if self.wheel_locked {
            return None;
        }
        self.wheel_locked = true;

        Some(if delta_y > 0.0 {
            Direction::Next
        } else {
            Direction::Prev
        })
    }

    /// Releases the wheel lock. Called unconditionally after the debounce
    /// window so a no-op navigation never strands the lock.
    pub fn release_wheel(&mut self) {
        self.wheel_locked = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Call {
        Play,
        Pause,
        ScrollIntoView,
        CloseCommentSection,
    }

    #[derive(Default)]
    struct Recorder {
        calls: Rc<RefCell<Vec<Call>>>,
    }

    struct RecordingHandle {
        calls: Rc<RefCell<Vec<Call>>>,
    }

    impl WidgetControl for RecordingHandle {
        fn play(&self) {
            self.calls.borrow_mut().push(Call::Play);
        }
        fn pause(&self) {
            self.calls.borrow_mut().push(Call::Pause);
        }
        fn scroll_into_view(&self) {
            self.calls.borrow_mut().push(Call::ScrollIntoView);
        }
        fn close_comment_section(&self) {
            self.calls.borrow_mut().push(Call::CloseCommentSection);
        }
    }

    impl Recorder {
        fn handle(&self) -> Box<dyn WidgetControl> {
            Box::new(RecordingHandle {
                calls: self.calls.clone(),
            })
        }

        fn count(&self, call: Call) -> usize {
            self.calls.borrow().iter().filter(|c| **c == call).count()
        }

        fn is_empty(&self) -> bool {
            self.calls.borrow().is_empty()
        }

        fn clear(&self) {
            self.calls.borrow_mut().clear();
        }
    }

    fn controller_with_recorders(len: usize) -> (SliderController, Vec<Recorder>) {
        let mut controller = SliderController::new(len);
        let recorders: Vec<Recorder> = (0..len).map(|_| Recorder::default()).collect();
        for (index, recorder) in recorders.iter().enumerate() {
            controller.register(index, recorder.handle());
        }
        (controller, recorders)
    }

    #[test]
    fn prev_at_first_is_a_noop() {
        let (mut controller, recorders) = controller_with_recorders(3);

        assert!(!controller.advance(Direction::Prev));
        assert_eq!(controller.current_index(), 0);
        assert!(recorders.iter().all(Recorder::is_empty));
    }

    #[test]
    fn next_at_last_is_a_noop() {
        let (mut controller, recorders) = controller_with_recorders(3);
        controller.advance(Direction::Next);
        controller.advance(Direction::Next);
        recorders.iter().for_each(Recorder::clear);

        assert!(!controller.advance(Direction::Next));
        assert_eq!(controller.current_index(), 2);
        assert!(recorders.iter().all(Recorder::is_empty));
    }

    #[test]
    fn single_video_never_moves() {
        let (mut controller, recorders) = controller_with_recorders(1);

        assert!(!controller.advance(Direction::Next));
        assert!(!controller.advance(Direction::Prev));
        assert_eq!(controller.current_index(), 0);
        assert!(recorders[0].is_empty());
    }

    #[test]
    fn empty_feed_is_safe() {
        let mut controller = SliderController::new(0);

        assert!(!controller.advance(Direction::Next));
        assert!(!controller.advance(Direction::Prev));
        assert_eq!(controller.current_index(), 0);
        assert!(controller.at_last());
    }

    #[test]
    fn next_drives_outgoing_and_incoming_handles_exactly_once() {
        let (mut controller, recorders) = controller_with_recorders(3);

        assert!(controller.advance(Direction::Next));

        assert_eq!(controller.current_index(), 1);
        assert_eq!(recorders[0].count(Call::Pause), 1);
        assert_eq!(recorders[0].count(Call::CloseCommentSection), 1);
        assert_eq!(recorders[0].count(Call::Play), 0);
        assert_eq!(recorders[1].count(Call::Play), 1);
        assert_eq!(recorders[1].count(Call::ScrollIntoView), 1);
        assert_eq!(recorders[1].count(Call::Pause), 0);
        assert!(recorders[2].is_empty());
    }

    #[test]
    fn prev_drives_outgoing_and_incoming_handles_exactly_once() {
        let (mut controller, recorders) = controller_with_recorders(3);
        controller.advance(Direction::Next);
        recorders.iter().for_each(Recorder::clear);

        assert!(controller.advance(Direction::Prev));

        assert_eq!(controller.current_index(), 0);
        assert_eq!(recorders[1].count(Call::Pause), 1);
        assert_eq!(recorders[1].count(Call::CloseCommentSection), 1);
        assert_eq!(recorders[0].count(Call::Play), 1);
        assert_eq!(recorders[0].count(Call::ScrollIntoView), 1);
    }

    #[test]
    fn missing_handle_still_moves_cursor() {
        let mut controller = SliderController::new(3);
        let recorder = Recorder::default();
        controller.register(0, recorder.handle());
        // index 1 never registered

        assert!(controller.advance(Direction::Next));
        assert_eq!(controller.current_index(), 1);
        assert_eq!(recorder.count(Call::Pause), 1);
    }

    #[test]
    fn activate_current_scrolls_and_plays_the_first_widget() {
        let (controller, recorders) = controller_with_recorders(2);

        controller.activate_current();

        assert_eq!(recorders[0].count(Call::ScrollIntoView), 1);
        assert_eq!(recorders[0].count(Call::Play), 1);
        assert!(recorders[1].is_empty());
    }

    #[test]
    fn wheel_lock_drops_overlapping_gestures() {
        let mut controller = SliderController::new(3);

        assert_eq!(controller.capture_wheel(12.0), Some(Direction::Next));
        assert_eq!(controller.capture_wheel(15.0), None);
        assert_eq!(controller.capture_wheel(-7.0), None);

        controller.release_wheel();
        assert_eq!(controller.capture_wheel(-7.0), Some(Direction::Prev));
    }

    #[test]
    fn wheel_direction_follows_delta_sign() {
        let mut controller = SliderController::new(3);

        assert_eq!(controller.capture_wheel(1.0), Some(Direction::Next));
        controller.release_wheel();
        assert_eq!(controller.capture_wheel(-1.0), Some(Direction::Prev));
        controller.release_wheel();
        // a zero delta scrolls up, only a strictly positive delta goes down
        assert_eq!(controller.capture_wheel(0.0), Some(Direction::Prev));
    }

    #[test]
    fn three_video_walkthrough() {
        let (mut controller, recorders) = controller_with_recorders(3);

        // autoplay on mount
        controller.activate_current();
        assert_eq!(recorders[0].count(Call::Play), 1);

        // wheel-down
        assert!(controller.advance(Direction::Next));
        assert_eq!(controller.current_index(), 1);
        assert_eq!(recorders[0].count(Call::Pause), 1);
        assert_eq!(recorders[1].count(Call::Play), 1);
        assert_eq!(recorders[1].count(Call::ScrollIntoView), 1);

        // widget 1 reports its video ended
        assert!(controller.advance(Direction::Next));
        assert_eq!(controller.current_index(), 2);
        assert_eq!(recorders[2].count(Call::Play), 1);

        // wheel-down at the last video
        assert!(!controller.advance(Direction::Next));
        assert_eq!(controller.current_index(), 2);
        assert!(controller.at_last());
    }
}
