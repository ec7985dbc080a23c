use anchor_lang::prelude::*;

// ============================================================
// Errors
// ============================================================

#[error_code]
pub enum VotingError {
    #[msg("Description is too long")]
    DescriptionTooLong,
    #[msg("Invalid duration (must be > 0)")]
    InvalidDuration,
    #[msg("Proposal is closed")]
    VotingClosed,
    #[msg("Voting deadline has passed")]
    DeadlinePassed,
    #[msg("Already voted on this proposal")]
    AlreadyVoted,
    #[msg("Only the proposal creator can do this")]
    Unauthorized,
    #[msg("Too early to close")]
    TooEarlyToClose,
    #[msg("Proposal already closed")]
    ProposalAlreadyClosed,
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
