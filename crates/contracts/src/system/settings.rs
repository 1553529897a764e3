use serde::{Deserialize, Serialize};

/// Whether non-admin roles may currently register progress entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureWindow {
    pub capture_enabled: bool,
}

impl CaptureWindow {
    pub fn open() -> Self {
        Self {
            capture_enabled: true,
        }
    }

    pub fn closed() -> Self {
        Self {
            capture_enabled: false,
        }
    }
}

impl Default for CaptureWindow {
    fn default() -> Self {
        Self::open()
    }
}
