//! Mapping of the watch's inputs to the app's logical buttons
//!
//! The watch has a single side button, so the touch panel supplies the
//! remaining inputs.

pub use cst816s::TouchGesture;

use crate::event::Button;

/// Logical button bound to the physical side button
pub const SIDE_BUTTON: Button = Button::StartStop;

/// Logical button bound to a touch gesture, if any
pub fn touch_button(gesture: &TouchGesture) -> Option<Button> {
    match gesture {
        TouchGesture::SingleClick => Some(Button::Select),
        TouchGesture::LongPress => Some(Button::Reset),
        _ => None,
    }
}
