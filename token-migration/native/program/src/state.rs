use std::collections::BTreeMap;

use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::{clock::UnixTimestamp, pubkey::Pubkey};

use crate::error::MigrationError;

pub type Amount = u128;

pub const DECIMALS: u8 = 18;

/// Allowance value treated as unlimited by `transfer_from`.
pub const UNLIMITED_ALLOWANCE: Amount = Amount::MAX;

/// Capped fungible token with owner-gated minting.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub struct TokenLedger {
    pub owner: Pubkey,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub cap: Amount,
    pub total_supply: Amount,
    pub balances: BTreeMap<Pubkey, Amount>,
    pub allowances: BTreeMap<(Pubkey, Pubkey), Amount>,
}

impl TokenLedger {
    pub fn new(
        owner: Pubkey,
        name: String,
        symbol: String,
        cap: Amount,
    ) -> Result<Self, MigrationError> {
        if cap == 0 {
            return Err(MigrationError::ZeroCap);
        }
        Ok(Self {
            owner,
            name,
            symbol,
            decimals: DECIMALS,
            cap,
            total_supply: 0,
            balances: BTreeMap::new(),
            allowances: BTreeMap::new(),
        })
    }

    pub fn balance_of(&self, holder: &Pubkey) -> Amount {
        self.balances.get(holder).copied().unwrap_or_default()
    }

    pub fn allowance(&self, owner: &Pubkey, spender: &Pubkey) -> Amount {
        self.allowances
            .get(&(*owner, *spender))
            .copied()
            .unwrap_or_default()
    }
}

/// Immutable pair of tokens exchanged 1:1.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapEscrow {
    pub token_from: Pubkey,
    pub token_to: Pubkey,
}

/// Tranche amounts supplied by the registry owner for one beneficiary.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VestingTerms {
    pub tranche1: Amount,
    pub tranche2: Amount,
    pub tranche3: Amount,
}

impl VestingTerms {
    pub fn total(&self) -> Option<Amount> {
        self.tranche1
            .checked_add(self.tranche2)?
            .checked_add(self.tranche3)
    }
}

#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VestingSchedule {
    pub tranche1: Amount,
    pub tranche2: Amount,
    pub tranche3: Amount,
    pub total_claimed: Amount,
    // Distinguishes a registered all-zero schedule from an unknown address.
    pub registered: bool,
}

impl VestingSchedule {
    pub fn register(terms: VestingTerms) -> Self {
        Self {
            tranche1: terms.tranche1,
            tranche2: terms.tranche2,
            tranche3: terms.tranche3,
            total_claimed: 0,
            registered: true,
        }
    }
}

#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub struct VestingRegistry {
    pub owner: Pubkey,
    pub token: Pubkey,
    pub first_unlock: UnixTimestamp,
    pub second_unlock: UnixTimestamp,
    pub third_unlock: UnixTimestamp,
    pub schedules: BTreeMap<Pubkey, VestingSchedule>,
}

impl VestingRegistry {
    pub fn new(
        owner: Pubkey,
        token: Pubkey,
        first_unlock: UnixTimestamp,
        second_unlock: UnixTimestamp,
        third_unlock: UnixTimestamp,
        now: UnixTimestamp,
    ) -> Result<Self, MigrationError> {
        if token == Pubkey::default() {
            return Err(MigrationError::VestingTokenZeroAddress);
        }
        if first_unlock <= now {
            return Err(MigrationError::FirstUnlockNotInFuture);
        }
        if second_unlock <= first_unlock {
            return Err(MigrationError::SecondUnlockNotAfterFirst);
        }
        if third_unlock <= second_unlock {
            return Err(MigrationError::ThirdUnlockNotAfterSecond);
        }
        Ok(Self {
            owner,
            token,
            first_unlock,
            second_unlock,
            third_unlock,
            schedules: BTreeMap::new(),
        })
    }

    /// Zero-valued, unregistered schedule for unknown addresses.
    pub fn get_vesting(&self, beneficiary: &Pubkey) -> VestingSchedule {
        self.schedules.get(beneficiary).copied().unwrap_or_default()
    }

    /// Tranches unlocked at `now` that have not been claimed yet.
    pub fn get_available_amount_to_claim(&self, beneficiary: &Pubkey, now: UnixTimestamp) -> Amount {
        let schedule = self.get_vesting(beneficiary);
        if now < self.first_unlock {
            return 0;
        }

        // Tranche sums were checked for overflow at registration.
        let mut unlocked = schedule.tranche1;
        if now >= self.second_unlock {
            unlocked = unlocked.saturating_add(schedule.tranche2);
        }
        if now >= self.third_unlock {
            unlocked = unlocked.saturating_add(schedule.tranche3);
        }
        unlocked.saturating_sub(schedule.total_claimed)
    }
}
