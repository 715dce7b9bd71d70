use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::{msg, pubkey::Pubkey};

use crate::state::Amount;

#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    Token,
    Swap,
    Vesting,
}

/// Notifications produced by a committed instruction, in emission order.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Deployed {
        kind: ComponentKind,
        address: Pubkey,
        deployer: Pubkey,
    },
    /// `from` is the zero address on mint.
    Transfer {
        token: Pubkey,
        from: Pubkey,
        to: Pubkey,
        amount: Amount,
    },
    Approval {
        token: Pubkey,
        owner: Pubkey,
        spender: Pubkey,
        amount: Amount,
    },
    Swapped {
        swap: Pubkey,
        caller: Pubkey,
        amount: Amount,
    },
    Claimed {
        vesting: Pubkey,
        beneficiary: Pubkey,
        amount: Amount,
    },
}

impl Event {
    pub fn emit(&self) {
        match self {
            Event::Deployed { kind, address, deployer } => {
                msg!("Deployed {:?} at {} by {}", kind, address, deployer)
            }
            Event::Transfer { token, from, to, amount } => {
                msg!("Transfer [{}] {} -> {}: {}", token, from, to, amount)
            }
            Event::Approval { token, owner, spender, amount } => {
                msg!("Approval [{}] {} -> {}: {}", token, owner, spender, amount)
            }
            Event::Swapped { swap, caller, amount } => {
                msg!("Swapped [{}] {}: {}", swap, caller, amount)
            }
            Event::Claimed { vesting, beneficiary, amount } => {
                msg!("Claimed [{}] {}: {}", vesting, beneficiary, amount)
            }
        }
    }

    pub fn deployed_address(&self) -> Option<Pubkey> {
        match self {
            Event::Deployed { address, .. } => Some(*address),
            _ => None,
        }
    }
}
