use anchor_lang::prelude::*;

// ============================================================
// Events
// ============================================================

#[event]
pub struct ProposalCreated {
    pub proposal: Pubkey,
    pub creator: Pubkey,
    pub start_ts: i64,
    pub end_ts: i64,
}

#[event]
pub struct VoteCast {
    pub proposal: Pubkey,
    pub voter: Pubkey,
    pub choice: bool,
}

#[event]
pub struct ProposalClosed {
    pub proposal: Pubkey,
    pub votes_yes: u64,
    pub votes_no: u64,
    pub end_ts: i64,
}
