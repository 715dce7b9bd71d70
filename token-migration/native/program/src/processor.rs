use borsh::BorshDeserialize;
use solana_program::{
    account_info::{AccountInfo, next_account_info},
    clock::Clock,
    entrypoint::{MAX_PERMITTED_DATA_INCREASE, ProgramResult},
    msg,
    program::invoke,
    program_error::ProgramError,
    pubkey::Pubkey,
    sysvar::{Sysvar, rent::Rent},
};
use solana_system_interface::{MAX_PERMITTED_DATA_LENGTH, instruction, program};

use crate::error::MigrationError;
use crate::event::Event;
use crate::instruction::{MigrationInstruction, ledger_address};
use crate::instructions::initialize_ledger;
use crate::ledger::Ledger;

// Extra room reserved on each growth so small additions don't resize every time
const LEDGER_SLACK: usize = 1024;

pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    let instruction = MigrationInstruction::try_from_slice(instruction_data)
        .map_err(|_| MigrationError::InvalidInstruction)?;

    match instruction {
        MigrationInstruction::InitializeLedger { space } => {
            msg!("Instruction: InitializeLedger");
            initialize_ledger(program_id, accounts, space)
        }
        instruction => process_ledger_instruction(program_id, accounts, instruction),
    }
}

fn process_ledger_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction: MigrationInstruction,
) -> ProgramResult {
    let events = execute_and_store(program_id, accounts, instruction)?;
    for event in &events {
        event.emit();
    }
    Ok(())
}

/// Accounts:
/// [signer, writable caller]
/// [writable ledger PDA]
/// [readonly clock sysvar]
/// [readonly rent sysvar]
/// [readonly system program]
///
/// Returns the events of the instruction once the ledger account holds the new state.
fn execute_and_store(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction: MigrationInstruction,
) -> Result<Vec<Event>, ProgramError> {
    let account_info_iter = &mut accounts.iter();

    let caller = next_account_info(account_info_iter)?;
    let ledger_account = next_account_info(account_info_iter)?;
    let clock_sysvar = next_account_info(account_info_iter)?;
    let rent_sysvar = next_account_info(account_info_iter)?;
    let system_prog = next_account_info(account_info_iter)?;

    // Basic checks
    if !caller.is_signer {
        return Err(MigrationError::NotSigner.into());
    }
    if !ledger_account.is_writable {
        return Err(MigrationError::NotWritable.into());
    }
    if system_prog.key != &program::ID {
        return Err(ProgramError::IncorrectProgramId);
    }
    let (ledger_pda, _) = ledger_address(program_id);
    if ledger_pda != *ledger_account.key || ledger_account.owner != program_id {
        msg!("Ledger PDA mismatch");
        return Err(MigrationError::InvalidLedgerAccount.into());
    }

    let mut ledger = {
        let data = ledger_account.data.borrow();
        Ledger::deserialize(&mut &data[..]).map_err(|_| MigrationError::InvalidLedgerState)?
    };
    if !ledger.is_initialized() {
        return Err(MigrationError::UninitializedLedger.into());
    }
    let clock = Clock::from_account_info(clock_sysvar)?;

    msg!("Instruction from {} at {}", caller.key, clock.unix_timestamp);
    let events = ledger.execute(&clock, caller.key, instruction)?;

    let rent = Rent::from_account_info(rent_sysvar)?;
    store_ledger(&ledger, ledger_account, caller, system_prog, &rent)?;
    Ok(events)
}

/// Writes `ledger` back to its account, growing the account (and topping up
/// its rent from `payer`) when the encoded state no longer fits.
fn store_ledger<'a>(
    ledger: &Ledger,
    ledger_account: &AccountInfo<'a>,
    payer: &AccountInfo<'a>,
    system_prog: &AccountInfo<'a>,
    rent: &Rent,
) -> ProgramResult {
    let encoded = borsh::to_vec(ledger).map_err(|_| MigrationError::InvalidLedgerState)?;
    let current_len = ledger_account.data_len();

    if encoded.len() > current_len {
        let new_len = required_len(encoded.len(), current_len)?;

        let lamports = rent
            .minimum_balance(new_len)
            .saturating_sub(ledger_account.lamports());
        if lamports > 0 {
            if !payer.is_writable {
                return Err(MigrationError::NotWritable.into());
            }
            msg!("Topping up ledger rent by {} lamports", lamports);
            invoke(
                &instruction::transfer(payer.key, ledger_account.key, lamports),
                &[payer.clone(), ledger_account.clone(), system_prog.clone()],
            )?;
        }

        msg!("Growing ledger account from {} to {} bytes", current_len, new_len);
        ledger_account.resize(new_len)?;
    }

    ledger_account.data.borrow_mut()[..encoded.len()].copy_from_slice(&encoded);
    Ok(())
}

/// Account length to grow to so that `encoded_len` bytes fit, bounded by the
/// per-instruction growth limit and the maximum account size.
fn required_len(encoded_len: usize, current_len: usize) -> Result<usize, MigrationError> {
    let growth_limit = current_len
        .saturating_add(MAX_PERMITTED_DATA_INCREASE)
        .min(MAX_PERMITTED_DATA_LENGTH as usize);
    if encoded_len > growth_limit {
        msg!("Ledger needs {} bytes, can grow to {}", encoded_len, growth_limit);
        return Err(MigrationError::LedgerAccountTooSmall);
    }
    Ok(encoded_len.saturating_add(LEDGER_SLACK).min(growth_limit))
}
