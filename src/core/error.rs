/// Everything that can stop a jump from being simulated or played back.
///
/// All variants are recoverable: the shell shows the message and keeps the
/// launch control usable.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum JumpError {
    #[error("Enter numeric values")]
    Parse { field: &'static str, value: String },
    #[error("No intersection with the ramp")]
    NoIntersection { landing_time_s: f64 },
    #[error("Simulation failed: {0} is not a finite number")]
    NonFinite(&'static str),
    #[error("Simulation failed: {0}")]
    InvalidParameter(String),
    #[error("A jump is already in progress")]
    Busy,
}

impl JumpError {
    /// `Busy` leaves the running playback alone; every other error aborts the
    /// launch before anything is drawn.
    pub fn aborts_launch(&self) -> bool {
        !matches!(self, JumpError::Busy)
    }
}

pub type JumpResult<T> = Result<T, JumpError>;
