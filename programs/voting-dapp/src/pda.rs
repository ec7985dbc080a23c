use anchor_lang::prelude::*;

use crate::constants::VOTE_SEED;

/// Vote receipt address and bump for `voter` on `proposal`.
///
/// Uses the same seeds as the `vote_receipt` constraint in `CastVote`, so
/// clients can build the instruction without asking the program first.
pub fn find_vote_address(proposal: &Pubkey, voter: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VOTE_SEED, proposal.as_ref(), voter.as_ref()], &crate::ID)
}

pub fn derive_vote_address(proposal: &Pubkey, voter: &Pubkey) -> Pubkey {
    find_vote_address(proposal, voter).0
}
