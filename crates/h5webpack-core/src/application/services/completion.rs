//! Join barrier over the scaffold branches.

use crate::application::ApplicationError;

/// Counted latch: opened once exactly `count` completions have arrived.
///
/// Branches run one after another today, but they are independent, so the
/// service counts them down instead of assuming the last one in the list is
/// the last one to finish.
#[derive(Debug)]
pub struct CompletionLatch {
    remaining: usize,
}

impl CompletionLatch {
    pub fn new(count: usize) -> Self {
        Self { remaining: count }
    }

    /// Record one completion. Returns `true` for the completion that opens
    /// the latch and `false` for every earlier one.
    pub fn complete(&mut self) -> Result<bool, ApplicationError> {
        self.remaining = self
            .remaining
            .checked_sub(1)
            .ok_or(ApplicationError::LatchUnderflow)?;
        Ok(self.remaining == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_on_last_completion_only() {
        let mut latch = CompletionLatch::new(3);
        assert!(!latch.complete().unwrap());
        assert!(!latch.complete().unwrap());
        assert!(latch.complete().unwrap());
    }

    #[test]
    fn extra_completion_is_an_error() {
        let mut latch = CompletionLatch::new(1);
        assert!(latch.complete().unwrap());
        assert!(matches!(latch.complete(), Err(ApplicationError::LatchUnderflow)));
    }

    #[test]
    fn empty_latch_rejects_any_completion() {
        let mut latch = CompletionLatch::new(0);
        assert!(matches!(latch.complete(), Err(ApplicationError::LatchUnderflow)));
    }
}
