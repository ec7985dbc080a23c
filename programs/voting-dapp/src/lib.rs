use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod pda;
pub mod state;

#[cfg(not(target_os = "solana"))]
pub mod client;
#[cfg(not(target_os = "solana"))]
pub mod listing;

pub use instructions::*;

declare_id!("FotkyW5saNF7jWoJXZm4yDcEabcCkUnZPB2RQa7hJJZr");

#[program]
pub mod voting_dapp {
    use super::*;

    // ================================================================
    // Proposal Lifecycle
    // ================================================================

    /// Open a yes/no proposal that accepts votes for `duration_seconds`
    /// starting now. The proposal account is a fresh keypair chosen by the
    /// creator.
    pub fn create_proposal(
        ctx: Context<CreateProposal>,
        description: String,
        duration_seconds: i64,
    ) -> Result<()> {
        create_proposal_handler(ctx, description, duration_seconds)
    }

    /// Record one vote for the signer. The vote receipt PDA is created in
    /// the same instruction, so a second vote from the same key fails when
    /// the runtime refuses to allocate the receipt again.
    pub fn cast_vote(ctx: Context<CastVote>, choice: bool) -> Result<()> {
        cast_vote_handler(ctx, choice)
    }

    /// Close the proposal. Only the creator, and only once the deadline
    /// has been reached.
    pub fn close_proposal(ctx: Context<CloseProposal>) -> Result<()> {
        close_proposal_handler(ctx)
    }
}
