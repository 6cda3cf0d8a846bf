pub mod listener;
pub mod motion;
pub mod pointer;
pub mod scroll;

pub use listener::ListenerHandle;
pub use motion::{matches_media, watch_motion_preference, MotionWatch};
pub use pointer::wire_pointer;
pub use scroll::{wire_resize, wire_scroll};
