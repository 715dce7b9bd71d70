use crate::error::MigrationError;
use crate::event::Event;
use crate::interface::TokenInterface;
use crate::state::{Amount, SwapEscrow};
use solana_program::{msg, pubkey::Pubkey};

/// Exchanges `amount` of the caller's `token_from` for the same amount of the
/// escrow's `token_to`. Returns the `Swapped` event once both legs have moved.
pub fn swap<T: TokenInterface + ?Sized>(
    escrow: &SwapEscrow,
    escrow_address: &Pubkey,
    tokens: &mut T,
    caller: &Pubkey,
    amount: Amount,
) -> Result<Event, MigrationError> {
    // Basic checks, in the order callers observe them
    if tokens.allowance(&escrow.token_from, caller, escrow_address)? < amount {
        return Err(MigrationError::InsufficientAllowance);
    }
    if tokens.balance_of(&escrow.token_from, caller)? < amount {
        return Err(MigrationError::InsufficientBalance);
    }
    if tokens.balance_of(&escrow.token_to, escrow_address)? < amount {
        msg!("Swap inventory shortfall");
        return Err(MigrationError::SwapInventoryShortfall);
    }

    msg!("Pulling {} tokens from {} into escrow", amount, caller);
    tokens.transfer_from(&escrow.token_from, escrow_address, caller, escrow_address, amount)?;

    msg!("Releasing {} tokens from escrow to {}", amount, caller);
    tokens.transfer(&escrow.token_to, escrow_address, caller, amount)?;

    Ok(Event::Swapped {
        swap: *escrow_address,
        caller: *caller,
        amount,
    })
}
