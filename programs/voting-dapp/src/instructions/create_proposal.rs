use anchor_lang::prelude::*;

use crate::events::ProposalCreated;
use crate::state::Proposal;

#[derive(Accounts)]
pub struct CreateProposal<'info> {
    #[account(init, payer = creator, space = 8 + Proposal::INIT_SPACE)]
    pub proposal: Account<'info, Proposal>,
    #[account(mut)]
    pub creator: Signer<'info>,
    pub system_program: Program<'info, System>,
}

pub fn create_proposal_handler(
    ctx: Context<CreateProposal>,
    description: String,
    duration_seconds: i64,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let creator = ctx.accounts.creator.key();
    open_proposal(
        &mut ctx.accounts.proposal,
        creator,
        description,
        duration_seconds,
        now,
    )
}

/// Writes a fresh proposal into the newly allocated account.
pub fn open_proposal(
    proposal: &mut Account<'_, Proposal>,
    creator: Pubkey,
    description: String,
    duration_seconds: i64,
    now: i64,
) -> Result<()> {
    let state = Proposal::open(creator, description, duration_seconds, now)?;
    let (start_ts, end_ts) = (state.start_ts, state.end_ts);
    proposal.set_inner(state);

    msg!("Proposal {} opened by {} until {}", proposal.key(), creator, end_ts);
    emit!(ProposalCreated {
        proposal: proposal.key(),
        creator,
        start_ts,
        end_ts,
    });

    Ok(())
}
