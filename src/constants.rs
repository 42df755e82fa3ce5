//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name, platform limits, and the default
//! author identity shown when no profile override is active.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "PostPeek";

/// The binary name of the application (used in command examples, lowercase).
pub const APP_BINARY_NAME: &str = "postpeek";

/// Platform character limit for a post. Exceeding it is a soft warning only.
pub const MAX_POST_CHARS: usize = 3000;

/// Character count at which the counter switches to the warning color.
pub const WARN_POST_CHARS: usize = 2700;

/// Maximum number of images a post may carry.
pub const MAX_IMAGES: usize = 4;

/// Number of blank placeholder pages used when a document cannot be read.
pub const PLACEHOLDER_PAGE_COUNT: usize = 5;

/// Watermark stamped at the bottom of every exported card.
pub const EXPORT_WATERMARK: &str = "Created with PostPeek";

/// Display name of the fixed default author identity.
pub const DEFAULT_PROFILE_NAME: &str = "Jordan Vale 🧠";

/// Headline of the fixed default author identity.
pub const DEFAULT_PROFILE_HEADLINE: &str =
    "Founder / CEO @ ReachLab | Scale Outbound with AI & Tech 👉 reachlab.io";

/// Fixed reaction count shown in the card footer.
pub const FOOTER_REACTIONS: &str = "83";
/// Comment count shown in the card footer.
pub const FOOTER_COMMENTS: &str = "23 comments";
/// Repost count shown in the card footer.
pub const FOOTER_REPOSTS: &str = "4 reposts";

/// Sample post loaded on request to demonstrate truncation behavior.
pub const SAMPLE_POST: &str = "\
I discovered something surprising about social posts.

Most people think longer posts perform worse.

But here's the truth: engagement depends on your hook, not length.

The key is those first 3-5 lines that show before \"see more\".

If your hook doesn't grab attention, nobody clicks to read more.

Test this yourself - write a compelling first paragraph, then add your full story after.

What's been your experience with post length?";
