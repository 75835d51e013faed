/// Run outcome determining exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every check held for every input (exit 0).
    AllPassed,
    /// Some check failed or an input was skipped (exit 1).
    Failed,
    /// The run could not be performed (exit 2).
    Refusal,
}

impl Outcome {
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::AllPassed => 0,
            Outcome::Failed => 1,
            Outcome::Refusal => 2,
        }
    }
}
