//! Off-chain helpers for building and decoding voting instructions.
//!
//! Builders return unsigned [`Instruction`]s; signing and submission are left
//! to the caller.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::{Discriminator, Id, InstructionData, ToAccountMetas};

use crate::pda::derive_vote_address;

pub fn create_proposal(
    creator: Pubkey,
    proposal: Pubkey,
    description: String,
    duration_seconds: i64,
) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: crate::accounts::CreateProposal {
            proposal,
            creator,
            system_program: System::id(),
        }
        .to_account_metas(None),
        data: crate::instruction::CreateProposal {
            description,
            duration_seconds,
        }
        .data(),
    }
}

/// The vote receipt address is derived from `proposal` and `voter`.
pub fn cast_vote(voter: Pubkey, proposal: Pubkey, choice: bool) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: crate::accounts::CastVote {
            proposal,
            vote_receipt: derive_vote_address(&proposal, &voter),
            voter,
            system_program: System::id(),
        }
        .to_account_metas(None),
        data: crate::instruction::CastVote { choice }.data(),
    }
}

pub fn close_proposal(requester: Pubkey, proposal: Pubkey) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: crate::accounts::CloseProposal {
            proposal,
            requester,
        }
        .to_account_metas(None),
        data: crate::instruction::CloseProposal {}.data(),
    }
}

/// Decoded form of the program's instruction data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VotingInstruction {
    CreateProposal {
        description: String,
        duration_seconds: i64,
    },
    CastVote {
        choice: bool,
    },
    CloseProposal,
}

impl VotingInstruction {
    pub fn unpack(data: &[u8]) -> Result<Self> {
        if let Some(args) = data.strip_prefix(crate::instruction::CreateProposal::DISCRIMINATOR) {
            let ix = decode_args::<crate::instruction::CreateProposal>(args)?;
            return Ok(Self::CreateProposal {
                description: ix.description,
                duration_seconds: ix.duration_seconds,
            });
        }
        if let Some(args) = data.strip_prefix(crate::instruction::CastVote::DISCRIMINATOR) {
            let ix = decode_args::<crate::instruction::CastVote>(args)?;
            return Ok(Self::CastVote { choice: ix.choice });
        }
        if let Some(args) = data.strip_prefix(crate::instruction::CloseProposal::DISCRIMINATOR) {
            decode_args::<crate::instruction::CloseProposal>(args)?;
            return Ok(Self::CloseProposal);
        }
        Err(anchor_lang::error::ErrorCode::InstructionFallbackNotFound.into())
    }

    pub fn pack(&self) -> Vec<u8> {
        match self {
            Self::CreateProposal {
                description,
                duration_seconds,
            } => crate::instruction::CreateProposal {
                description: description.clone(),
                duration_seconds: *duration_seconds,
            }
            .data(),
            Self::CastVote { choice } => crate::instruction::CastVote { choice: *choice }.data(),
            Self::CloseProposal => crate::instruction::CloseProposal {}.data(),
        }
    }
}

fn decode_args<T: AnchorDeserialize>(mut args: &[u8]) -> Result<T> {
    let decoded = T::deserialize(&mut args)
        .map_err(|_| anchor_lang::error::ErrorCode::InstructionDidNotDeserialize)?;
    if !args.is_empty() {
        return Err(anchor_lang::error::ErrorCode::InstructionDidNotDeserialize.into());
    }
    Ok(decoded)
}
