//! Structured text → Slack mrkdwn translation.
//!
//! - [`patterns`]: LazyLock-cached regex patterns
//! - [`translate`]: the ordered translation pipeline

pub mod patterns;
mod translate;

pub use translate::translate;
