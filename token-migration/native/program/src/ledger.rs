use std::collections::BTreeMap;

use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::{clock::UnixTimestamp, msg, pubkey::Pubkey};

use crate::clock::TimeSource;
use crate::error::MigrationError;
use crate::event::{ComponentKind, Event};
use crate::instruction::MigrationInstruction;
use crate::instructions::{
    add_beneficiaries, approve, claim, create_swap, create_token, create_vesting, mint, swap,
    transfer, transfer_from,
};
use crate::interface::TokenBank;
use crate::state::{Amount, SwapEscrow, TokenLedger, VestingRegistry, VestingSchedule};

// Seeds for component addresses
const TOKEN_SEED: &[u8] = b"token";
const SWAP_SEED: &[u8] = b"swap";
const VESTING_SEED: &[u8] = b"vesting";

/// Every component's state, stored in one program account.
///
/// Operations run through [`Ledger::execute`], which applies them to a working
/// copy and only commits when the whole operation succeeded.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    pub program_id: Pubkey,
    pub deployments: u64,
    pub tokens: BTreeMap<Pubkey, TokenLedger>,
    pub swaps: BTreeMap<Pubkey, SwapEscrow>,
    pub vestings: BTreeMap<Pubkey, VestingRegistry>,
}

impl Ledger {
    pub fn new(program_id: Pubkey) -> Self {
        Self {
            program_id,
            ..Self::default()
        }
    }

    /// A zero-filled account decodes to a ledger without a program id.
    pub fn is_initialized(&self) -> bool {
        self.program_id != Pubkey::default()
    }

    /// Applies one instruction signed by `caller` atomically and returns the
    /// events it produced. On error the ledger is left untouched.
    ///
    /// Events are not logged here; the caller emits them once the new state
    /// has been persisted.
    pub fn execute<C: TimeSource + ?Sized>(
        &mut self,
        clock: &C,
        caller: &Pubkey,
        instruction: MigrationInstruction,
    ) -> Result<Vec<Event>, MigrationError> {
        let now = clock.unix_timestamp();
        let mut draft = self.clone();
        let mut events = Vec::new();

        if let Err(e) = draft.apply(caller, now, instruction, &mut events) {
            msg!("Instruction failed: {}", e);
            return Err(e);
        }

        *self = draft;
        Ok(events)
    }

    fn apply(
        &mut self,
        caller: &Pubkey,
        now: UnixTimestamp,
        instruction: MigrationInstruction,
        events: &mut Vec<Event>,
    ) -> Result<(), MigrationError> {
        match instruction {
            MigrationInstruction::InitializeLedger { .. } => Err(MigrationError::AlreadyInitialized),
            MigrationInstruction::CreateToken { name, symbol, cap } => {
                create_token(self, caller, name, symbol, cap, events).map(|_| ())
            }
            MigrationInstruction::Mint { token, to, amount } => {
                mint(self.token_mut(&token)?, &token, caller, &to, amount, events)
            }
            MigrationInstruction::Transfer { token, to, amount } => {
                transfer(self.token_mut(&token)?, &token, caller, &to, amount, events)
            }
            MigrationInstruction::Approve {
                token,
                spender,
                amount,
            } => approve(self.token_mut(&token)?, &token, caller, &spender, amount, events),
            MigrationInstruction::TransferFrom {
                token,
                from,
                to,
                amount,
            } => transfer_from(self.token_mut(&token)?, &token, caller, &from, &to, amount, events),
            MigrationInstruction::CreateSwap {
                token_from,
                token_to,
            } => create_swap(self, caller, token_from, token_to, events).map(|_| ()),
            MigrationInstruction::Swap {
                swap: address,
                amount,
            } => {
                let escrow = *self.swap(&address)?;
                let mut bank = TokenBank::new(&mut self.tokens, events);
                let swapped = swap(&escrow, &address, &mut bank, caller, amount)?;
                events.push(swapped);
                Ok(())
            }
            MigrationInstruction::CreateVesting {
                token,
                first_unlock,
                second_unlock,
                third_unlock,
            } => create_vesting(
                self,
                caller,
                token,
                [first_unlock, second_unlock, third_unlock],
                now,
                events,
            )
            .map(|_| ()),
            MigrationInstruction::AddBeneficiaries {
                vesting,
                beneficiaries,
                schedules,
            } => add_beneficiaries(self.vesting_mut(&vesting)?, caller, &beneficiaries, &schedules),
            MigrationInstruction::Claim { vesting } => {
                let registry = self
                    .vestings
                    .get_mut(&vesting)
                    .ok_or(MigrationError::UnknownVesting)?;
                let mut bank = TokenBank::new(&mut self.tokens, events);
                let claimed = claim(registry, &vesting, &mut bank, caller, now)?;
                events.push(claimed);
                Ok(())
            }
        }
    }

    /// Derives the next component address for `deployer` and consumes the nonce.
    pub(crate) fn deploy_address(&mut self, kind: ComponentKind, deployer: &Pubkey) -> Pubkey {
        let address = self.next_address(kind, deployer);
        self.deployments += 1;
        address
    }

    /// Address the next deployment of `kind` by `deployer` will receive.
    pub fn next_address(&self, kind: ComponentKind, deployer: &Pubkey) -> Pubkey {
        let seed = match kind {
            ComponentKind::Token => TOKEN_SEED,
            ComponentKind::Swap => SWAP_SEED,
            ComponentKind::Vesting => VESTING_SEED,
        };
        let (address, _) = Pubkey::find_program_address(
            &[seed, deployer.as_ref(), &self.deployments.to_le_bytes()],
            &self.program_id,
        );
        address
    }

    pub fn token(&self, address: &Pubkey) -> Result<&TokenLedger, MigrationError> {
        self.tokens.get(address).ok_or(MigrationError::UnknownToken)
    }

    fn token_mut(&mut self, address: &Pubkey) -> Result<&mut TokenLedger, MigrationError> {
        self.tokens
            .get_mut(address)
            .ok_or(MigrationError::UnknownToken)
    }

    pub fn swap(&self, address: &Pubkey) -> Result<&SwapEscrow, MigrationError> {
        self.swaps.get(address).ok_or(MigrationError::UnknownSwap)
    }

    pub fn vesting(&self, address: &Pubkey) -> Result<&VestingRegistry, MigrationError> {
        self.vestings
            .get(address)
            .ok_or(MigrationError::UnknownVesting)
    }

    fn vesting_mut(&mut self, address: &Pubkey) -> Result<&mut VestingRegistry, MigrationError> {
        self.vestings
            .get_mut(address)
            .ok_or(MigrationError::UnknownVesting)
    }

    pub fn balance_of(&self, token: &Pubkey, holder: &Pubkey) -> Result<Amount, MigrationError> {
        Ok(self.token(token)?.balance_of(holder))
    }

    pub fn allowance(
        &self,
        token: &Pubkey,
        owner: &Pubkey,
        spender: &Pubkey,
    ) -> Result<Amount, MigrationError> {
        Ok(self.token(token)?.allowance(owner, spender))
    }

    pub fn get_vesting(
        &self,
        vesting: &Pubkey,
        beneficiary: &Pubkey,
    ) -> Result<VestingSchedule, MigrationError> {
        Ok(self.vesting(vesting)?.get_vesting(beneficiary))
    }

    pub fn get_available_amount_to_claim<C: TimeSource + ?Sized>(
        &self,
        clock: &C,
        vesting: &Pubkey,
        beneficiary: &Pubkey,
    ) -> Result<Amount, MigrationError> {
        Ok(self
            .vesting(vesting)?
            .get_available_amount_to_claim(beneficiary, clock.unix_timestamp()))
    }
}
