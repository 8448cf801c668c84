//! Notifications emitted by the trimmer.

use trimkit_core::RationalTime;

/// Something the host should react to, usually by seeking its player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrimmerEvent {
    /// The position indicator moved while a handle is being dragged.
    PositionChanged(RationalTime),
    /// A handle drag or a filmstrip scroll came to rest.
    PositionSettled(RationalTime),
    /// The selected range changed.
    HandleRangeChanged {
        start: RationalTime,
        end: RationalTime,
    },
    /// A handle drag began or the filmstrip started scrolling.
    DragStarted,
}

/// Receiver for trimmer notifications. All methods default to no-ops.
///
/// The trimmer never holds on to a listener; hosts pass one in when
/// dispatching a frame's events.
pub trait TrimmerListener {
    fn position_changed(&mut self, _time: RationalTime) {}
    fn position_settled(&mut self, _time: RationalTime) {}
    fn handle_range_changed(&mut self, _start: RationalTime, _end: RationalTime) {}
    fn drag_started(&mut self) {}
}

impl TrimmerEvent {
    pub fn dispatch(&self, listener: &mut dyn TrimmerListener) {
        match *self {
            Self::PositionChanged(time) => listener.position_changed(time),
            Self::PositionSettled(time) => listener.position_settled(time),
            Self::HandleRangeChanged { start, end } => listener.handle_range_changed(start, end),
            Self::DragStarted => listener.drag_started(),
        }
    }
}

/// Dispatch a batch of events in order.
pub fn dispatch_all<'a>(
    events: impl IntoIterator<Item = &'a TrimmerEvent>,
    listener: &mut dyn TrimmerListener,
) {
    for event in events {
        event.dispatch(listener);
    }
}
