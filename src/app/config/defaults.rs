// SPDX-License-Identifier: MPL-2.0
//! Default values and bounds for configuration settings.

// ==========================================================================
// Gallery Image Cache
// ==========================================================================

/// Default number of decoded gallery images kept in memory.
pub const DEFAULT_PREFETCH_CACHE_ENTRIES: usize = 24;

/// Minimum number of cached images.
pub const MIN_PREFETCH_CACHE_ENTRIES: usize = 3;

/// Maximum number of cached images.
pub const MAX_PREFETCH_CACHE_ENTRIES: usize = 256;

/// Default memory budget of the image cache, in megabytes.
pub const DEFAULT_PREFETCH_CACHE_MB: u32 = 128;

/// Minimum image cache budget in megabytes.
pub const MIN_PREFETCH_CACHE_MB: u32 = 16;

/// Maximum image cache budget in megabytes.
pub const MAX_PREFETCH_CACHE_MB: u32 = 1024;

/// Largest remote image body accepted, in bytes.
pub const MAX_REMOTE_IMAGE_BYTES: u64 = 16 * 1024 * 1024;

// ==========================================================================
// Career Submission
// ==========================================================================

/// Default HTTP timeout for application submission, in seconds.
pub const DEFAULT_SUBMISSION_TIMEOUT_SECS: u64 = 30;

/// Minimum submission timeout in seconds.
pub const MIN_SUBMISSION_TIMEOUT_SECS: u64 = 5;

/// Maximum submission timeout in seconds.
pub const MAX_SUBMISSION_TIMEOUT_SECS: u64 = 300;

/// Delay of the offline submitter, in milliseconds.
pub const DEFAULT_SIMULATED_DELAY_MS: u64 = 1000;

/// Largest resume file accepted for upload, in bytes.
pub const MAX_RESUME_BYTES: u64 = 10 * 1024 * 1024;

// ==========================================================================
// Layout / Scroll
// ==========================================================================

/// Scroll offset (logical px) past which the navbar turns sticky.
pub const NAVBAR_STICKY_OFFSET: f32 = 50.0;

/// Scroll offset (logical px) past which the scroll-to-top button shows.
pub const SCROLL_TOP_BUTTON_OFFSET: f32 = 200.0;

/// Window width (logical px) below which the navbar collapses into a menu.
pub const NAVBAR_COLLAPSE_WIDTH: f32 = 900.0;

// ==========================================================================
// Page Transitions
// ==========================================================================

/// Duration of each transition phase (exit, enter), in milliseconds.
pub const TRANSITION_PHASE_MS: u64 = 300;

/// Vertical travel of a page during a transition phase, in logical px.
pub const TRANSITION_OFFSET_PX: f32 = 40.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_defaults_within_bounds() {
        assert!(DEFAULT_PREFETCH_CACHE_ENTRIES >= MIN_PREFETCH_CACHE_ENTRIES);
        assert!(DEFAULT_PREFETCH_CACHE_ENTRIES <= MAX_PREFETCH_CACHE_ENTRIES);
        assert!(DEFAULT_PREFETCH_CACHE_MB >= MIN_PREFETCH_CACHE_MB);
        assert!(DEFAULT_PREFETCH_CACHE_MB <= MAX_PREFETCH_CACHE_MB);
    }

    #[test]
    fn timeout_default_within_bounds() {
        assert!(DEFAULT_SUBMISSION_TIMEOUT_SECS >= MIN_SUBMISSION_TIMEOUT_SECS);
        assert!(DEFAULT_SUBMISSION_TIMEOUT_SECS <= MAX_SUBMISSION_TIMEOUT_SECS);
    }

    #[test]
    fn sticky_threshold_before_scroll_top_threshold() {
        assert!(NAVBAR_STICKY_OFFSET < SCROLL_TOP_BUTTON_OFFSET);
    }
}
