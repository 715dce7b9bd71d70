use crate::error::MigrationError;
use crate::event::{ComponentKind, Event};
use crate::ledger::Ledger;
use crate::state::{Amount, TokenLedger};
use solana_program::{msg, pubkey::Pubkey};

/// Deploys a capped token owned by `deployer`.
pub fn create_token(
    ledger: &mut Ledger,
    deployer: &Pubkey,
    name: String,
    symbol: String,
    cap: Amount,
    events: &mut Vec<Event>,
) -> Result<Pubkey, MigrationError> {
    let token = TokenLedger::new(*deployer, name, symbol, cap)?;
    let address = ledger.deploy_address(ComponentKind::Token, deployer);

    msg!("Creating token {} with cap {}", token.symbol, cap);
    ledger.tokens.insert(address, token);
    events.push(Event::Deployed {
        kind: ComponentKind::Token,
        address,
        deployer: *deployer,
    });
    Ok(address)
}
