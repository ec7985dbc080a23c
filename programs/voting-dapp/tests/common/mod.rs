//! In-memory account store that replays voting instructions the way the
//! runtime would: every instruction is staged against a copy of the touched
//! accounts and committed only if it succeeds, and account creation refuses
//! addresses that are already in use.

#![allow(dead_code)]

use std::collections::HashMap;

use anchor_lang::prelude::Pubkey;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::{AccountDeserialize, AccountSerialize, Space};

use voting_dapp::client::VotingInstruction;
use voting_dapp::error::VotingError;
use voting_dapp::pda::derive_vote_address;
use voting_dapp::state::{Proposal, VoteReceipt};

#[derive(Debug)]
pub enum TxError {
    Program(VotingError),
    AccountInUse(Pubkey),
    AccountNotFound(Pubkey),
    MissingSignature(Pubkey),
    SeedsMismatch(Pubkey),
    InvalidInstruction,
    InvalidAccountData(Pubkey),
}

impl From<VotingError> for TxError {
    fn from(err: VotingError) -> Self {
        TxError::Program(err)
    }
}

pub struct Ledger {
    accounts: HashMap<Pubkey, Vec<u8>>,
    now: i64,
}

impl Ledger {
    pub fn new(now: i64) -> Self {
        Self {
            accounts: HashMap::new(),
            now,
        }
    }

    pub fn now(&self) -> i64 {
        self.now
    }

    pub fn advance(&mut self, seconds: i64) {
        self.now += seconds;
    }

    pub fn exists(&self, address: &Pubkey) -> bool {
        self.accounts.contains_key(address)
    }

    pub fn proposal(&self, address: &Pubkey) -> Proposal {
        let data = self.accounts.get(address).expect("proposal account");
        Proposal::try_deserialize(&mut data.as_slice()).expect("proposal data")
    }

    pub fn records(&self) -> impl Iterator<Item = (Pubkey, &[u8])> + '_ {
        self.accounts
            .iter()
            .map(|(address, data)| (*address, data.as_slice()))
    }

    pub fn process(&mut self, ix: &Instruction) -> Result<(), TxError> {
        assert_eq!(ix.program_id, voting_dapp::ID);
        let writes = self.execute(ix)?;
        self.accounts.extend(writes);
        Ok(())
    }

    fn execute(&self, ix: &Instruction) -> Result<Vec<(Pubkey, Vec<u8>)>, TxError> {
        let instruction =
            VotingInstruction::unpack(&ix.data).map_err(|_| TxError::InvalidInstruction)?;
        match instruction {
            VotingInstruction::CreateProposal {
                description,
                duration_seconds,
            } => {
                let proposal = account_at(ix, 0)?;
                let creator = signer_at(ix, 1)?;
                self.create_if_absent(&proposal)?;

                let state = Proposal::open(creator, description, duration_seconds, self.now)?;
                Ok(vec![(proposal, encode(&state, 8 + Proposal::INIT_SPACE))])
            }
            VotingInstruction::CastVote { choice } => {
                let proposal = account_at(ix, 0)?;
                let receipt = account_at(ix, 1)?;
                let voter = signer_at(ix, 2)?;
                if receipt != derive_vote_address(&proposal, &voter) {
                    return Err(TxError::SeedsMismatch(receipt));
                }

                // The receipt is allocated while accounts are validated,
                // before any proposal check runs.
                self.create_if_absent(&receipt).map_err(|err| match err {
                    TxError::AccountInUse(_) => TxError::Program(VotingError::AlreadyVoted),
                    other => other,
                })?;
                let mut state = self.load_proposal(&proposal)?;
                state.record_vote(choice, self.now)?;

                Ok(vec![
                    (proposal, encode(&state, 8 + Proposal::INIT_SPACE)),
                    (receipt, encode(&VoteReceipt::default(), VoteReceipt::SPACE)),
                ])
            }
            VotingInstruction::CloseProposal => {
                let proposal = account_at(ix, 0)?;
                let requester = signer_at(ix, 1)?;

                let mut state = self.load_proposal(&proposal)?;
                state.deactivate(&requester, self.now)?;
                Ok(vec![(proposal, encode(&state, 8 + Proposal::INIT_SPACE))])
            }
        }
    }

    fn create_if_absent(&self, address: &Pubkey) -> Result<(), TxError> {
        if self.exists(address) {
            return Err(TxError::AccountInUse(*address));
        }
        Ok(())
    }

    fn load_proposal(&self, address: &Pubkey) -> Result<Proposal, TxError> {
        let data = self
            .accounts
            .get(address)
            .ok_or(TxError::AccountNotFound(*address))?;
        Proposal::try_deserialize(&mut data.as_slice())
            .map_err(|_| TxError::InvalidAccountData(*address))
    }
}

fn account_at(ix: &Instruction, index: usize) -> Result<Pubkey, TxError> {
    ix.accounts
        .get(index)
        .map(|meta| meta.pubkey)
        .ok_or(TxError::InvalidInstruction)
}

fn signer_at(ix: &Instruction, index: usize) -> Result<Pubkey, TxError> {
    let meta = ix.accounts.get(index).ok_or(TxError::InvalidInstruction)?;
    if !meta.is_signer {
        return Err(TxError::MissingSignature(meta.pubkey));
    }
    Ok(meta.pubkey)
}

fn encode<T: AccountSerialize>(account: &T, space: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(space);
    account
        .try_serialize(&mut data)
        .expect("account serialization");
    data.resize(space, 0);
    data
}
