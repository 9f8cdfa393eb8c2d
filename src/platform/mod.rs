// Platform identification — which social network a link belongs to, and
// which account, channel or video it points at.
//
// None of this affects the score directly. The detected platform selects
// the platform-specific rules and the video-statistics adapter; the channel
// string is purely informational.

pub mod channel;
pub mod detect;
pub mod video;

pub use channel::extract_channel;
pub use detect::{detect_platform, ContentCategory, PlatformIdentity, PlatformName};
pub use video::extract_video_id;
