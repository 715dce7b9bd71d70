use crate::error::MigrationError;
use crate::event::Event;
use crate::interface::TokenInterface;
use crate::state::VestingRegistry;
use solana_program::{clock::UnixTimestamp, msg, pubkey::Pubkey};

/// Pays out everything unlocked and not yet claimed for the caller.
/// Returns the `Claimed` event once the tokens have moved.
pub fn claim<T: TokenInterface + ?Sized>(
    registry: &mut VestingRegistry,
    registry_address: &Pubkey,
    tokens: &mut T,
    caller: &Pubkey,
    now: UnixTimestamp,
) -> Result<Event, MigrationError> {
    // Basic checks: existence, time, amount, inventory
    let schedule = registry.get_vesting(caller);
    if !schedule.registered {
        return Err(MigrationError::NotBeneficiary);
    }
    if now < registry.first_unlock {
        return Err(MigrationError::BeforeFirstUnlock);
    }
    let claimable = registry.get_available_amount_to_claim(caller, now);
    if claimable == 0 {
        return Err(MigrationError::NothingToClaim);
    }
    if tokens.balance_of(&registry.token, registry_address)? < claimable {
        msg!("Vesting inventory shortfall");
        return Err(MigrationError::ClaimInventoryShortfall);
    }

    // Record the claim before tokens leave the registry
    let total_claimed = schedule
        .total_claimed
        .checked_add(claimable)
        .ok_or(MigrationError::Overflow)?;
    if let Some(stored) = registry.schedules.get_mut(caller) {
        stored.total_claimed = total_claimed;
    }

    msg!("Releasing {} vested tokens to {}", claimable, caller);
    tokens.transfer(&registry.token, registry_address, caller, claimable)?;

    Ok(Event::Claimed {
        vesting: *registry_address,
        beneficiary: *caller,
        amount: claimable,
    })
}
