//! LaneCut Engine - interaction and playback synchronization
//!
//! The stateful half of the editor core:
//! - Snap resolution against clip edges and the playhead
//! - The pointer gesture state machine (scrub, clip drag)
//! - Playback synchronization with the external media surface
//! - The `TimelineEditor` facade wiring the above over one `TimelineState`

pub mod editor;
pub mod gesture;
pub mod playback;
pub mod snap;

pub use editor::{StepDirection, TimelineEditor};
pub use gesture::{GestureController, GestureState, NullCapture, PointerCapture};
pub use playback::{MediaSurface, PlaybackSync};
pub use snap::{SnapEngine, SnapKind, SnapPoint};
