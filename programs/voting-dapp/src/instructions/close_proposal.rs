use anchor_lang::prelude::*;

use crate::events::ProposalClosed;
use crate::state::Proposal;

#[derive(Accounts)]
pub struct CloseProposal<'info> {
    #[account(mut)]
    pub proposal: Account<'info, Proposal>,
    pub requester: Signer<'info>,
}

pub fn close_proposal_handler(ctx: Context<CloseProposal>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let requester = ctx.accounts.requester.key();
    finish_proposal(&mut ctx.accounts.proposal, &requester, now)
}

/// `Account` has its own `close` (rent reclaim), so the transition is
/// `Proposal::deactivate`.
pub fn finish_proposal(
    proposal: &mut Account<'_, Proposal>,
    requester: &Pubkey,
    now: i64,
) -> Result<()> {
    proposal.deactivate(requester, now)?;

    msg!(
        "Proposal {} closed: yes={} no={}",
        proposal.key(),
        proposal.votes_yes,
        proposal.votes_no
    );
    emit!(ProposalClosed {
        proposal: proposal.key(),
        votes_yes: proposal.votes_yes,
        votes_no: proposal.votes_no,
        end_ts: proposal.end_ts,
    });

    Ok(())
}
