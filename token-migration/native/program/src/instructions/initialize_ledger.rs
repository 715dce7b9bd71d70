use crate::error::MigrationError;
use crate::instruction::{LEDGER_SEED, ledger_address};
use crate::ledger::Ledger;
use solana_program::{
    account_info::{AccountInfo, next_account_info},
    entrypoint::{MAX_PERMITTED_DATA_INCREASE, ProgramResult},
    msg,
    program::invoke_signed,
    program_error::ProgramError,
    pubkey::Pubkey,
    sysvar::{Sysvar, rent::Rent},
};
use solana_system_interface::{instruction, program};

/// Accounts:
/// [signer payer]
/// [writable ledger PDA]
/// [readonly system program]
/// [readonly rent sysvar]
pub fn initialize_ledger(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    space: u64,
) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    let payer = next_account_info(account_info_iter)?;
    let ledger_account = next_account_info(account_info_iter)?;
    let system_prog = next_account_info(account_info_iter)?;
    let rent_sysvar = next_account_info(account_info_iter)?;

    // Basic checks
    if !payer.is_signer {
        return Err(MigrationError::NotSigner.into());
    }
    if !ledger_account.is_writable {
        return Err(MigrationError::NotWritable.into());
    }
    if system_prog.key != &program::ID {
        return Err(ProgramError::IncorrectProgramId);
    }

    // Derive the ledger PDA and verify it
    let (ledger_pda, ledger_bump) = ledger_address(program_id);
    if ledger_pda != *ledger_account.key {
        msg!("Ledger PDA mismatch");
        return Err(MigrationError::InvalidLedgerAccount.into());
    }
    if !ledger_account.data_is_empty() {
        return Err(MigrationError::AlreadyInitialized.into());
    }

    let initial = borsh::to_vec(&Ledger::new(*program_id))
        .map_err(|_| MigrationError::InvalidLedgerState)?;
    // A program-signed create_account is capped; the ledger grows on demand after that.
    let space = space.clamp(initial.len() as u64, MAX_PERMITTED_DATA_INCREASE as u64);
    let rent = &Rent::from_account_info(rent_sysvar)?;
    let lamports = rent.minimum_balance(space as usize);

    msg!("Creating ledger account with {} bytes", space);
    invoke_signed(
        &instruction::create_account(
            payer.key,
            ledger_account.key,
            lamports,
            space,
            program_id,
        ),
        &[payer.clone(), ledger_account.clone(), system_prog.clone()],
        &[&[LEDGER_SEED, &[ledger_bump]]],
    )?;

    ledger_account.data.borrow_mut()[..initial.len()].copy_from_slice(&initial);
    msg!("Ledger initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruction::MigrationInstruction;
    use crate::test_utils::{self, TestAccount};

    struct Fixture {
        program_id: Pubkey,
        payer: TestAccount,
        ledger: TestAccount,
        system_program: TestAccount,
        rent: TestAccount,
    }

    impl Fixture {
        fn new() -> Self {
            let program_id = Pubkey::new_unique();
            let (ledger, _) = ledger_address(&program_id);
            Self {
                program_id,
                payer: TestAccount::payer(Pubkey::new_unique()),
                ledger: TestAccount::new(ledger, program::ID, vec![], false, true),
                system_program: TestAccount::system_program(),
                rent: TestAccount::rent(),
            }
        }

        fn run(&mut self) -> ProgramResult {
            let data = borsh::to_vec(&MigrationInstruction::InitializeLedger { space: 4096 }).unwrap();
            let mut accounts = [
                self.payer.clone(),
                self.ledger.clone(),
                self.system_program.clone(),
                self.rent.clone(),
            ];
            let result = test_utils::run(&self.program_id, &mut accounts, &data);
            let [_, ledger, _, _] = accounts;
            self.ledger = ledger;
            result
        }
    }

    #[test]
    fn requires_payer_signature() {
        let mut fixture = Fixture::new();
        fixture.payer.is_signer = false;
        assert_eq!(
            fixture.run().unwrap_err(),
            ProgramError::from(MigrationError::NotSigner)
        );
    }

    #[test]
    fn requires_writable_ledger() {
        let mut fixture = Fixture::new();
        fixture.ledger.is_writable = false;
        assert_eq!(
            fixture.run().unwrap_err(),
            ProgramError::from(MigrationError::NotWritable)
        );
    }

    #[test]
    fn requires_system_program() {
        let mut fixture = Fixture::new();
        fixture.system_program.key = Pubkey::new_unique();
        assert_eq!(fixture.run().unwrap_err(), ProgramError::IncorrectProgramId);
    }

    #[test]
    fn requires_ledger_pda() {
        let mut fixture = Fixture::new();
        fixture.ledger.key = Pubkey::new_unique();
        assert_eq!(
            fixture.run().unwrap_err(),
            ProgramError::from(MigrationError::InvalidLedgerAccount)
        );
    }

    #[test]
    fn refuses_to_initialize_twice() {
        let mut fixture = Fixture::new();
        fixture.ledger = TestAccount::ledger(
            &fixture.program_id,
            &Ledger::new(fixture.program_id),
            256,
        );
        let before = fixture.ledger.data.clone();

        let err = fixture.run().unwrap_err();

        assert_eq!(err, ProgramError::from(MigrationError::AlreadyInitialized));
        assert_eq!(fixture.ledger.data, before);
    }
}
