// src/exit.rs
//! Standardized process exit codes for `sitelint`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum SiteLintExit {
    /// Run completed (with or without lint findings).
    Success = 0,
    /// Generic error (e.g. IO, config, unexpected failure).
    Error = 1,
    /// Operator input rejected (blank or missing path).
    InvalidInput = 2,
}

impl SiteLintExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for SiteLintExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
