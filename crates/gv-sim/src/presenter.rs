//! The presentation seam: input events in, drawn frames out.
//!
//! Drawing a single node and reading input devices are left to the
//! application; the visualiser only hands over a display-ordered
//! [`GridView`] once per frame and asks for pending control events.

use gv_core::Day;
use gv_grid::GridView;

/// User-level controls the loop understands.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ControlEvent {
    /// Flip between slot order and status-sorted order.
    ToggleSort,
    /// Stop after the current frame's work is complete.
    Quit,
}

/// Per-frame metadata handed to the presenter alongside the grid view.
#[derive(Copy, Clone, Debug)]
pub struct FrameInfo {
    /// Day label to show: the next day to be processed.
    pub day:       Day,
    pub frame:     u64,
    /// Pixel side of one node.
    pub node_size: u32,
    /// Something changed since the previous frame was presented.
    pub updated:   bool,
}

pub trait Presenter {
    /// Control events that arrived since the last frame.
    fn poll_events(&mut self) -> Vec<ControlEvent> {
        Vec::new()
    }

    /// Draw one frame.
    fn present(&mut self, frame: &FrameInfo, view: GridView<'_>);
}

/// A [`Presenter`] that draws nothing and never emits events.
pub struct HeadlessPresenter;

impl Presenter for HeadlessPresenter {
    fn present(&mut self, _frame: &FrameInfo, _view: GridView<'_>) {}
}
