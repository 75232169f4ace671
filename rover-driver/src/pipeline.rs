use crossbeam_utils::atomic::AtomicCell;
use rover_data::Action;

/// Single-slot hand-off between the sensing loop and the control loop.
///
/// Holds only the most recent directive: publishing overwrites whatever is
/// still pending, so the consumer never acts on a stale decision.
pub(crate) struct ActionCell {
    latest: AtomicCell<Option<Action>>,
}

impl ActionCell {
    pub(crate) fn new() -> ActionCell {
        ActionCell {
            latest: AtomicCell::new(None),
        }
    }

    pub(crate) fn publish(&self, action: Action) {
        self.latest.store(Some(action));
    }

    pub(crate) fn take(&self) -> Option<Action> {
        self.latest.take()
    }
}
