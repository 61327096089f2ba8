//! Platform notification seam.

use crate::error::Result;

/// Desktop notification integration.
///
/// Permission is requested once at start-up; failures are ignored.
pub trait Notifier {
    fn request_permission(&mut self) -> Result<()>;
}

/// Notifier for environments without notifications.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn request_permission(&mut self) -> Result<()> {
        Ok(())
    }
}
