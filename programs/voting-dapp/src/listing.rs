//! Read-side helpers for enumerating proposals straight from program
//! accounts, without a separate index.

use anchor_lang::prelude::*;
use anchor_lang::{AccountDeserialize, Discriminator};

use crate::state::{Proposal, ProposalStatus};

/// Byte offset of the account discriminator in every program account.
pub const DISCRIMINATOR_OFFSET: usize = 0;

/// `(offset, bytes)` pair for a memcmp filter that matches proposal accounts.
pub fn proposal_filter() -> (usize, &'static [u8]) {
    (DISCRIMINATOR_OFFSET, Proposal::DISCRIMINATOR)
}

pub fn is_proposal(data: &[u8]) -> bool {
    data.starts_with(Proposal::DISCRIMINATOR)
}

/// Decodes a proposal account. Trailing padding left by the fixed account
/// size is ignored.
pub fn decode_proposal(data: &[u8]) -> Result<Proposal> {
    let mut data = data;
    Proposal::try_deserialize(&mut data)
}

/// Proposal with its address and the status derived at read time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProposalEntry {
    pub address: Pubkey,
    pub proposal: Proposal,
    pub status: ProposalStatus,
}

/// Keeps every record carrying the proposal discriminator and decodes it.
/// Records of other types, and proposal-tagged records that fail to decode,
/// are skipped.
pub fn collect_proposals<'a, I>(records: I, now: i64) -> Vec<ProposalEntry>
where
    I: IntoIterator<Item = (Pubkey, &'a [u8])>,
{
    records
        .into_iter()
        .filter(|(_, data)| is_proposal(data))
        .filter_map(|(address, data)| {
            let proposal = decode_proposal(data).ok()?;
            Some(ProposalEntry {
                address,
                status: proposal.status(now),
                proposal,
            })
        })
        .collect()
}
