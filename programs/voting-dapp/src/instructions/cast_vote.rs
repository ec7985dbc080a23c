use anchor_lang::prelude::*;

use crate::constants::VOTE_SEED;
use crate::events::VoteCast;
use crate::state::{Proposal, VoteReceipt};

#[derive(Accounts)]
pub struct CastVote<'info> {
    #[account(mut)]
    pub proposal: Account<'info, Proposal>,
    // init fails if the receipt already exists = double vote prevention
    #[account(
        init, payer = voter,
        space = VoteReceipt::SPACE,
        seeds = [VOTE_SEED, proposal.key().as_ref(), voter.key().as_ref()],
        bump,
    )]
    pub vote_receipt: Account<'info, VoteReceipt>,
    #[account(mut)]
    pub voter: Signer<'info>,
    pub system_program: Program<'info, System>,
}

pub fn cast_vote_handler(ctx: Context<CastVote>, choice: bool) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let voter = ctx.accounts.voter.key();
    tally_vote(&mut ctx.accounts.proposal, voter, choice, now)
}

/// Counts `voter`'s ballot. Runs after the receipt has been allocated.
pub fn tally_vote(
    proposal: &mut Account<'_, Proposal>,
    voter: Pubkey,
    choice: bool,
    now: i64,
) -> Result<()> {
    proposal.record_vote(choice, now)?;

    msg!(
        "Vote on {}: yes={} no={}",
        proposal.key(),
        proposal.votes_yes,
        proposal.votes_no
    );
    emit!(VoteCast {
        proposal: proposal.key(),
        voter,
        choice,
    });

    Ok(())
}
