//! State for the thumbnail tool, kept free of browser types so the
//! transition rules can be unit tested on the host.

use serde::{Deserialize, Serialize};

/// Snapshot of the form at the moment the user submits.
///
/// `api_key_or_endpoint` is collected but never forwarded anywhere; the
/// simulated flow only looks at `full_page`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SnapshotRequest {
    pub target_url: String,
    pub api_key_or_endpoint: String,
    pub full_page: bool,
}

/// An owned image resource that must be released when no longer shown.
pub trait Releasable {
    fn release(&self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchStatus {
    Idle,
    Loading,
    Success,
    Error,
}

pub enum SnapshotAction<H> {
    /// A valid submission started; prior outcome is cleared.
    Begin,
    /// The fetch produced an image.
    Complete(H),
    /// Validation or the fetch failed with a user-facing message.
    Fail(String),
    /// Tear down, back to a blank slate.
    Reset,
}

/// Result state of one request cycle.
///
/// At most one of `image` and `error` is set, and `status` always agrees
/// with them: Idle/Loading hold neither, Success holds an image, Error
/// holds a message. `apply` is the only way to move between states and
/// keeps that alignment.
#[derive(Clone, Debug, PartialEq)]
pub struct SnapshotState<H: Releasable> {
    pub status: FetchStatus,
    pub image: Option<H>,
    pub error: Option<String>,
}

impl<H: Releasable + Clone> SnapshotState<H> {
    pub fn idle() -> Self {
        Self {
            status: FetchStatus::Idle,
            image: None,
            error: None,
        }
    }

    /// Apply one transition, releasing the previous image handle.
    ///
    /// No transition carries the old image forward, so whatever handle is
    /// currently held is superseded and revoked here, before the new state
    /// replaces it.
    pub fn apply(&self, action: SnapshotAction<H>) -> Self {
        if let Some(image) = &self.image {
            image.release();
        }
        match action {
            SnapshotAction::Begin => Self {
                status: FetchStatus::Loading,
                image: None,
                error: None,
            },
            SnapshotAction::Complete(handle) => Self {
                status: FetchStatus::Success,
                image: Some(handle),
                error: None,
            },
            SnapshotAction::Fail(message) => Self {
                status: FetchStatus::Error,
                image: None,
                error: Some(message),
            },
            SnapshotAction::Reset => Self::idle(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone, Debug)]
    struct DummyHandle {
        id: u32,
        releases: Rc<Cell<u32>>,
    }

    impl DummyHandle {
        fn new(id: u32, releases: Rc<Cell<u32>>) -> Self {
            Self { id, releases }
        }
    }

    impl PartialEq for DummyHandle {
        fn eq(&self, other: &Self) -> bool {
            self.id == other.id
        }
    }

    impl Releasable for DummyHandle {
        fn release(&self) {
            self.releases.set(self.releases.get() + 1);
        }
    }

    fn assert_consistent(state: &SnapshotState<DummyHandle>) {
        match state.status {
            FetchStatus::Idle | FetchStatus::Loading => {
                assert!(state.image.is_none() && state.error.is_none());
            }
            FetchStatus::Success => {
                assert!(state.image.is_some() && state.error.is_none());
            }
            FetchStatus::Error => {
                assert!(state.error.is_some() && state.image.is_none());
            }
        }
    }

    #[test]
    fn successful_cycle_publishes_one_handle() {
        let releases = Rc::new(Cell::new(0));
        let state = SnapshotState::idle();
        let state = state.apply(SnapshotAction::Begin);
        assert_eq!(state.status, FetchStatus::Loading);
        assert_consistent(&state);

        let state = state.apply(SnapshotAction::Complete(DummyHandle::new(1, releases.clone())));
        assert_eq!(state.status, FetchStatus::Success);
        assert_eq!(state.image.as_ref().map(|h| h.id), Some(1));
        assert_eq!(releases.get(), 0, "published handle must stay live");
        assert_consistent(&state);
    }

    #[test]
    fn failed_cycle_stores_message_verbatim() {
        let state: SnapshotState<DummyHandle> = SnapshotState::idle()
            .apply(SnapshotAction::Begin)
            .apply(SnapshotAction::Fail("Failed to fetch the thumbnail. Please try again.".into()));
        assert_eq!(state.status, FetchStatus::Error);
        assert_eq!(
            state.error.as_deref(),
            Some("Failed to fetch the thumbnail. Please try again.")
        );
        assert_consistent(&state);
    }

    #[test]
    fn resubmit_from_success_releases_previous_handle() {
        let releases = Rc::new(Cell::new(0));
        let state = SnapshotState::idle()
            .apply(SnapshotAction::Begin)
            .apply(SnapshotAction::Complete(DummyHandle::new(1, releases.clone())));

        // New submission: the old image must be revoked before Loading shows.
        let state = state.apply(SnapshotAction::Begin);
        assert_eq!(state.status, FetchStatus::Loading);
        assert!(state.image.is_none());
        assert_eq!(releases.get(), 1);

        let state = state.apply(SnapshotAction::Complete(DummyHandle::new(2, releases.clone())));
        assert_eq!(state.image.as_ref().map(|h| h.id), Some(2));
        assert_eq!(releases.get(), 1);
    }

    #[test]
    fn resubmit_from_error_clears_the_message() {
        let state: SnapshotState<DummyHandle> = SnapshotState::idle()
            .apply(SnapshotAction::Fail("Please enter a valid URL.".into()))
            .apply(SnapshotAction::Begin);
        assert_eq!(state.status, FetchStatus::Loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn reset_releases_the_held_handle() {
        let releases = Rc::new(Cell::new(0));
        let state = SnapshotState::idle()
            .apply(SnapshotAction::Complete(DummyHandle::new(1, releases.clone())))
            .apply(SnapshotAction::Reset);
        assert_eq!(state.status, FetchStatus::Idle);
        assert_eq!(releases.get(), 1);
        assert_consistent(&state);
    }

    proptest! {
        /// Any transition sequence keeps status/image/error aligned and
        /// releases every superseded handle exactly once.
        #[test]
        fn transitions_never_leak_or_double_release(ops in proptest::collection::vec(0u8..4, 0..32)) {
            let releases = Rc::new(Cell::new(0u32));
            let mut created = 0u32;
            let mut state: SnapshotState<DummyHandle> = SnapshotState::idle();
            for op in ops {
                let action = match op {
                    0 => SnapshotAction::Begin,
                    1 => {
                        created += 1;
                        SnapshotAction::Complete(DummyHandle::new(created, releases.clone()))
                    }
                    2 => SnapshotAction::Fail("boom".into()),
                    _ => SnapshotAction::Reset,
                };
                state = state.apply(action);
                prop_assert!(!(state.image.is_some() && state.error.is_some()));
                match state.status {
                    FetchStatus::Idle | FetchStatus::Loading => {
                        prop_assert!(state.image.is_none() && state.error.is_none())
                    }
                    FetchStatus::Success => {
                        prop_assert!(state.image.is_some() && state.error.is_none())
                    }
                    FetchStatus::Error => {
                        prop_assert!(state.error.is_some() && state.image.is_none())
                    }
                }
            }
            let live = state.image.is_some() as u32;
            prop_assert_eq!(releases.get() + live, created);
        }
    }
}
