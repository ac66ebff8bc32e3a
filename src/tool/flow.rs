//! Decision logic for the snapshot fetch: input validation, endpoint
//! selection and the fixed user-facing messages. Kept separate from the
//! component so it can be tested without a DOM.

use crate::config;
use crate::tool::model::SnapshotRequest;

pub const VALIDATION_ERROR: &str = "Please enter a valid URL.";
pub const FETCH_FAILED_ERROR: &str = "Failed to fetch the thumbnail. Please try again.";
pub const UNKNOWN_ERROR: &str = "An unknown error occurred.";

/// Reject submissions with an empty URL before any network activity.
pub fn validate(request: &SnapshotRequest) -> Result<(), &'static str> {
    if request.target_url.trim().is_empty() {
        Err(VALIDATION_ERROR)
    } else {
        Ok(())
    }
}

pub fn snapshot_height(full_page: bool) -> u32 {
    if full_page {
        config::FULL_PAGE_HEIGHT
    } else {
        config::VIEWPORT_HEIGHT
    }
}

/// Endpoint for one capture. Only the height varies; the target URL and
/// API key are deliberately not forwarded in the simulated flow.
pub fn snapshot_url(full_page: bool) -> String {
    format!(
        "{}/{}/{}",
        config::get_snapshot_base_url(),
        config::SNAPSHOT_WIDTH,
        snapshot_height(full_page)
    )
}

/// Message shown for a transport-level failure: the error's own text
/// when it has any, otherwise the generic fallback.
pub fn transport_error_message(detail: &str) -> String {
    if detail.trim().is_empty() {
        UNKNOWN_ERROR.to_string()
    } else {
        detail.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(url: &str, full_page: bool) -> SnapshotRequest {
        SnapshotRequest {
            target_url: url.to_string(),
            api_key_or_endpoint: String::new(),
            full_page,
        }
    }

    #[test]
    fn empty_url_is_rejected_with_the_fixed_message() {
        assert_eq!(
            validate(&request("", false)),
            Err("Please enter a valid URL.")
        );
    }

    #[test]
    fn whitespace_url_is_rejected() {
        assert_eq!(validate(&request("   \t", true)), Err(VALIDATION_ERROR));
    }

    #[test]
    fn non_empty_url_passes() {
        assert!(validate(&request("https://example.com", false)).is_ok());
    }

    #[test]
    fn viewport_capture_uses_the_standard_height() {
        assert_eq!(snapshot_height(false), 720);
        assert_eq!(snapshot_url(false), "https://picsum.photos/1280/720");
    }

    #[test]
    fn full_page_capture_is_taller() {
        assert_eq!(snapshot_height(true), 1800);
        assert_eq!(snapshot_url(true), "https://picsum.photos/1280/1800");
    }

    #[test]
    fn blank_transport_detail_falls_back_to_the_generic_message() {
        assert_eq!(transport_error_message(""), "An unknown error occurred.");
        assert_eq!(transport_error_message("  "), UNKNOWN_ERROR);
    }

    #[test]
    fn transport_detail_is_surfaced_verbatim() {
        assert_eq!(
            transport_error_message("JsError: NetworkError when attempting to fetch resource."),
            "JsError: NetworkError when attempting to fetch resource."
        );
    }
}
