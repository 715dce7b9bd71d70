use crate::error::MigrationError;
use crate::event::{ComponentKind, Event};
use crate::ledger::Ledger;
use crate::state::SwapEscrow;
use solana_program::{msg, pubkey::Pubkey};

/// Deploys a 1:1 swap escrow between two existing tokens.
pub fn create_swap(
    ledger: &mut Ledger,
    deployer: &Pubkey,
    token_from: Pubkey,
    token_to: Pubkey,
    events: &mut Vec<Event>,
) -> Result<Pubkey, MigrationError> {
    if token_from == Pubkey::default() {
        return Err(MigrationError::SwapFromZeroAddress);
    }
    if token_to == Pubkey::default() {
        return Err(MigrationError::SwapToZeroAddress);
    }
    ledger.token(&token_from)?;
    ledger.token(&token_to)?;

    let address = ledger.deploy_address(ComponentKind::Swap, deployer);
    msg!("Creating swap {} -> {}", token_from, token_to);
    ledger.swaps.insert(address, SwapEscrow { token_from, token_to });
    events.push(Event::Deployed {
        kind: ComponentKind::Swap,
        address,
        deployer: *deployer,
    });
    Ok(address)
}
