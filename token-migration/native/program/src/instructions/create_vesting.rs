use crate::error::MigrationError;
use crate::event::{ComponentKind, Event};
use crate::ledger::Ledger;
use crate::state::VestingRegistry;
use solana_program::{clock::UnixTimestamp, msg, pubkey::Pubkey};

/// Deploys a vesting registry owned by `deployer` with three future unlocks.
pub fn create_vesting(
    ledger: &mut Ledger,
    deployer: &Pubkey,
    token: Pubkey,
    unlocks: [UnixTimestamp; 3],
    now: UnixTimestamp,
    events: &mut Vec<Event>,
) -> Result<Pubkey, MigrationError> {
    let [first_unlock, second_unlock, third_unlock] = unlocks;
    let registry = VestingRegistry::new(*deployer, token, first_unlock, second_unlock, third_unlock, now)?;
    ledger.token(&token)?;

    let address = ledger.deploy_address(ComponentKind::Vesting, deployer);
    msg!(
        "Creating vesting for {} unlocking at {}, {}, {}",
        token,
        first_unlock,
        second_unlock,
        third_unlock
    );
    ledger.vestings.insert(address, registry);
    events.push(Event::Deployed {
        kind: ComponentKind::Vesting,
        address,
        deployer: *deployer,
    });
    Ok(address)
}
