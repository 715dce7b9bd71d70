#![allow(dead_code)]

use solana_program::{clock::UnixTimestamp, pubkey::Pubkey};
use token_migration::{
    clock::ManualClock,
    error::MigrationError,
    event::Event,
    instruction::MigrationInstruction,
    ledger::Ledger,
    state::{Amount, VestingTerms},
};

pub const DAY: UnixTimestamp = 24 * 60 * 60;
pub const START: UnixTimestamp = 1_700_000_000;
pub const ONE: Amount = 1_000_000_000_000_000_000;
pub const CAP: Amount = 200_000_000 * ONE;

pub struct Harness {
    pub ledger: Ledger,
    pub clock: ManualClock,
    pub admin: Pubkey,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            ledger: Ledger::new(Pubkey::new_unique()),
            clock: ManualClock::new(START),
            admin: Pubkey::new_unique(),
        }
    }

    pub fn exec(
        &mut self,
        caller: &Pubkey,
        instruction: MigrationInstruction,
    ) -> Result<Vec<Event>, MigrationError> {
        self.ledger.execute(&self.clock, caller, instruction)
    }

    fn deploy(&mut self, instruction: MigrationInstruction) -> Result<Pubkey, MigrationError> {
        let admin = self.admin;
        let events = self.exec(&admin, instruction)?;
        Ok(events
            .iter()
            .find_map(Event::deployed_address)
            .expect("deployment emits its address"))
    }

    pub fn token(&mut self) -> Pubkey {
        self.deploy(MigrationInstruction::CreateToken {
            name: "Token".into(),
            symbol: "TKN".into(),
            cap: CAP,
        })
        .unwrap()
    }

    pub fn swap(&mut self, token_from: Pubkey, token_to: Pubkey) -> Result<Pubkey, MigrationError> {
        self.deploy(MigrationInstruction::CreateSwap { token_from, token_to })
    }

    pub fn vesting(&mut self, token: Pubkey) -> Pubkey {
        self.vesting_at(token, [START + 30 * DAY, START + 60 * DAY, START + 90 * DAY])
            .unwrap()
    }

    pub fn vesting_at(
        &mut self,
        token: Pubkey,
        unlocks: [UnixTimestamp; 3],
    ) -> Result<Pubkey, MigrationError> {
        self.deploy(MigrationInstruction::CreateVesting {
            token,
            first_unlock: unlocks[0],
            second_unlock: unlocks[1],
            third_unlock: unlocks[2],
        })
    }

    pub fn mint(&mut self, token: Pubkey, to: Pubkey, amount: Amount) {
        let admin = self.admin;
        self.exec(&admin, MigrationInstruction::Mint { token, to, amount })
            .unwrap();
    }

    pub fn approve(&mut self, holder: Pubkey, token: Pubkey, spender: Pubkey, amount: Amount) {
        self.exec(&holder, MigrationInstruction::Approve { token, spender, amount })
            .unwrap();
    }

    pub fn balance(&self, token: Pubkey, holder: Pubkey) -> Amount {
        self.ledger.balance_of(&token, &holder).unwrap()
    }

    pub fn available(&self, vesting: Pubkey, beneficiary: Pubkey) -> Amount {
        self.ledger
            .get_available_amount_to_claim(&self.clock, &vesting, &beneficiary)
            .unwrap()
    }

    pub fn claim(&mut self, vesting: Pubkey, beneficiary: Pubkey) -> Result<Vec<Event>, MigrationError> {
        self.exec(&beneficiary, MigrationInstruction::Claim { vesting })
    }
}

pub fn terms(tranche1: Amount, tranche2: Amount, tranche3: Amount) -> VestingTerms {
    VestingTerms {
        tranche1,
        tranche2,
        tranche3,
    }
}
