//! Tuning knobs for the simulated snapshot fetch.
//!
//! The tool never talks to a real screenshot backend. It pulls a
//! placeholder image whose dimensions stand in for the capture the real
//! API would return, so everything endpoint-related lives here.

/// Placeholder image service standing in for a screenshot API.
pub fn get_snapshot_base_url() -> String {
    "https://picsum.photos".to_string()
}

/// Fixed capture width in pixels.
pub const SNAPSHOT_WIDTH: u32 = 1280;

/// Height of a viewport-only capture.
pub const VIEWPORT_HEIGHT: u32 = 720;

/// Height of a full-page capture.
pub const FULL_PAGE_HEIGHT: u32 = 1800;

/// Artificial delay before the fetch is issued, so the loading state is
/// visible to the user.
pub const SIMULATED_LATENCY_MS: u32 = 1_500;
