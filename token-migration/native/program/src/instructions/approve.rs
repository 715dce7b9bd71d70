use crate::error::MigrationError;
use crate::event::Event;
use crate::state::{Amount, TokenLedger};
use solana_program::pubkey::Pubkey;

/// Sets (not adds to) the allowance `spender` may move out of `owner`.
pub fn approve(
    token: &mut TokenLedger,
    token_address: &Pubkey,
    owner: &Pubkey,
    spender: &Pubkey,
    amount: Amount,
    events: &mut Vec<Event>,
) -> Result<(), MigrationError> {
    if *spender == Pubkey::default() {
        return Err(MigrationError::ApproveToZeroAddress);
    }
    token.allowances.insert((*owner, *spender), amount);
    events.push(Event::Approval {
        token: *token_address,
        owner: *owner,
        spender: *spender,
        amount,
    });
    Ok(())
}
