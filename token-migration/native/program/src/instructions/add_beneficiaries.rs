use crate::error::MigrationError;
use crate::state::{VestingRegistry, VestingSchedule, VestingTerms};
use solana_program::{msg, pubkey::Pubkey};

/// Registers (or re-registers) beneficiaries. Re-registering an address
/// replaces its tranches and resets what it has claimed.
pub fn add_beneficiaries(
    registry: &mut VestingRegistry,
    caller: &Pubkey,
    beneficiaries: &[Pubkey],
    terms: &[VestingTerms],
) -> Result<(), MigrationError> {
    if *caller != registry.owner {
        return Err(MigrationError::NotOwner);
    }
    if beneficiaries.len() != terms.len() {
        return Err(MigrationError::LengthMismatch);
    }
    if terms.iter().any(|t| t.total().is_none()) {
        return Err(MigrationError::Overflow);
    }

    msg!("Registering {} beneficiaries", beneficiaries.len());
    for (beneficiary, terms) in beneficiaries.iter().zip(terms) {
        registry
            .schedules
            .insert(*beneficiary, VestingSchedule::register(*terms));
    }
    Ok(())
}
