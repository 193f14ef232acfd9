// src/exit.rs
//! Process exit codes for `brandcheck`.
//!
//! Scripts can rely on these staying stable.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum BrandcheckExit {
    /// Every design checked without an `Error` verdict.
    Success = 0,
    /// At least one design came back with overall status `Error`.
    CheckFailed = 1,
    /// Bad guidelines, unreadable design, or another runtime failure.
    Error = 2,
}

impl BrandcheckExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for BrandcheckExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
