use crate::error::MigrationError;
use crate::event::Event;
use crate::state::{Amount, TokenLedger};
use solana_program::{msg, pubkey::Pubkey};

/// Mints `amount` new tokens to `to`. Owner only; bounded by the cap.
pub fn mint(
    token: &mut TokenLedger,
    token_address: &Pubkey,
    caller: &Pubkey,
    to: &Pubkey,
    amount: Amount,
    events: &mut Vec<Event>,
) -> Result<(), MigrationError> {
    // Basic checks
    if *caller != token.owner {
        return Err(MigrationError::NotOwner);
    }
    if *to == Pubkey::default() {
        return Err(MigrationError::MintToZeroAddress);
    }

    let total_supply = token
        .total_supply
        .checked_add(amount)
        .ok_or(MigrationError::CapExceeded)?;
    if total_supply > token.cap {
        return Err(MigrationError::CapExceeded);
    }
    // Bounded by the cap, so the balance cannot overflow either.
    let balance = token.balance_of(to) + amount;

    msg!("Minting {} tokens to {}", amount, to);
    token.total_supply = total_supply;
    token.balances.insert(*to, balance);

    events.push(Event::Transfer {
        token: *token_address,
        from: Pubkey::default(),
        to: *to,
        amount,
    });
    Ok(())
}
