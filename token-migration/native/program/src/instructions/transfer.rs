use crate::error::MigrationError;
use crate::event::Event;
use crate::state::{Amount, TokenLedger};
use solana_program::pubkey::Pubkey;

/// Moves `amount` from `from` to `to`. Validates fully before touching balances.
pub fn transfer(
    token: &mut TokenLedger,
    token_address: &Pubkey,
    from: &Pubkey,
    to: &Pubkey,
    amount: Amount,
    events: &mut Vec<Event>,
) -> Result<(), MigrationError> {
    if *to == Pubkey::default() {
        return Err(MigrationError::TransferToZeroAddress);
    }
    let from_balance = token
        .balance_of(from)
        .checked_sub(amount)
        .ok_or(MigrationError::InsufficientBalance)?;

    token.balances.insert(*from, from_balance);
    // Total supply bounds every balance, so this cannot overflow.
    let to_balance = token.balance_of(to) + amount;
    token.balances.insert(*to, to_balance);

    events.push(Event::Transfer {
        token: *token_address,
        from: *from,
        to: *to,
        amount,
    });
    Ok(())
}
