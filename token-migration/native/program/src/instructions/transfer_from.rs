use super::transfer;
use crate::error::MigrationError;
use crate::event::Event;
use crate::state::{Amount, TokenLedger, UNLIMITED_ALLOWANCE};
use solana_program::pubkey::Pubkey;

/// Spends `spender`'s allowance over `from` and moves `amount` to `to`.
pub fn transfer_from(
    token: &mut TokenLedger,
    token_address: &Pubkey,
    spender: &Pubkey,
    from: &Pubkey,
    to: &Pubkey,
    amount: Amount,
    events: &mut Vec<Event>,
) -> Result<(), MigrationError> {
    let allowance = token.allowance(from, spender);
    if allowance < amount {
        return Err(MigrationError::InsufficientAllowance);
    }

    // The allowance only moves once the balance leg has succeeded.
    transfer(token, token_address, from, to, amount, events)?;
    if allowance != UNLIMITED_ALLOWANCE {
        token.allowances.insert((*from, *spender), allowance - amount);
    }
    Ok(())
}
