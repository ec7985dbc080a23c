use anchor_lang::prelude::*;

use crate::constants::MAX_DESCRIPTION_LEN;
use crate::error::VotingError;

/// Outcome of a pure state transition, before it is lifted into an
/// `anchor_lang` error by the handler.
pub type Transition<T> = std::result::Result<T, VotingError>;

// ============================================================
// State Accounts
// ============================================================

#[account]
#[derive(Debug, PartialEq, Eq, InitSpace)]
pub struct Proposal {
    pub creator: Pubkey,
    #[max_len(MAX_DESCRIPTION_LEN)]
    pub description: String,
    pub votes_yes: u64,
    pub votes_no: u64,
    pub is_active: bool,
    pub start_ts: i64,
    pub end_ts: i64,
}

/// Marker account at `[VOTE_SEED, proposal, voter]`. Carries no data; its
/// existence is the record that the voter has voted.
#[account]
#[derive(Debug, Default, PartialEq, Eq)]
pub struct VoteReceipt {}

impl VoteReceipt {
    /// Discriminator only.
    pub const SPACE: usize = 8;
}

/// Lifecycle of a proposal as seen at a given instant. Only `Closed` is
/// persisted (as `is_active == false`); `Expired` is derived from the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProposalStatus {
    Active,
    Expired,
    Closed,
}

impl Proposal {
    /// Builds a fresh proposal starting at `now`.
    pub fn open(
        creator: Pubkey,
        description: String,
        duration_seconds: i64,
        now: i64,
    ) -> Transition<Self> {
        if description.len() > MAX_DESCRIPTION_LEN {
            return Err(VotingError::DescriptionTooLong);
        }
        if duration_seconds <= 0 {
            return Err(VotingError::InvalidDuration);
        }
        let end_ts = now
            .checked_add(duration_seconds)
            .ok_or(VotingError::ArithmeticOverflow)?;

        Ok(Self {
            creator,
            description,
            votes_yes: 0,
            votes_no: 0,
            is_active: true,
            start_ts: now,
            end_ts,
        })
    }

    /// Counts one vote. The caller is responsible for having created the
    /// voter's receipt in the same transaction.
    pub fn record_vote(&mut self, choice: bool, now: i64) -> Transition<()> {
        if !self.is_active {
            return Err(VotingError::VotingClosed);
        }
        // Voting is still allowed during the deadline second itself.
        if now > self.end_ts {
            return Err(VotingError::DeadlinePassed);
        }

        let tally = if choice {
            &mut self.votes_yes
        } else {
            &mut self.votes_no
        };
        *tally = tally
            .checked_add(1)
            .ok_or(VotingError::ArithmeticOverflow)?;
        Ok(())
    }

    /// One-shot `Active -> Closed` transition.
    pub fn deactivate(&mut self, requester: &Pubkey, now: i64) -> Transition<()> {
        if *requester != self.creator {
            return Err(VotingError::Unauthorized);
        }
        if now < self.end_ts {
            return Err(VotingError::TooEarlyToClose);
        }
        if !self.is_active {
            return Err(VotingError::ProposalAlreadyClosed);
        }
        self.is_active = false;
        Ok(())
    }

    pub fn is_expired(&self, now: i64) -> bool {
        now > self.end_ts
    }

    /// Whether a vote submitted at `now` would pass the proposal checks.
    pub fn is_open(&self, now: i64) -> bool {
        self.is_active && !self.is_expired(now)
    }

    pub fn can_close(&self, requester: &Pubkey, now: i64) -> bool {
        self.is_active && *requester == self.creator && now >= self.end_ts
    }

    pub fn status(&self, now: i64) -> ProposalStatus {
        if !self.is_active {
            ProposalStatus::Closed
        } else if self.is_expired(now) {
            ProposalStatus::Expired
        } else {
            ProposalStatus::Active
        }
    }

    pub fn total_votes(&self) -> u64 {
        self.votes_yes.saturating_add(self.votes_no)
    }
}
