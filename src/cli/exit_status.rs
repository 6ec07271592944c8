use std::process::ExitCode;

/// Process exit status of a `tscat` invocation.
///
/// - `Success` (0): finished without error-severity issues
/// - `Failure` (1): finished, but reported errors or could not load a requested catalogue
/// - `Error` (2): aborted (bad config, unreadable root, I/O failure)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
