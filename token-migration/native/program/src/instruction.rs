use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::{
    clock::UnixTimestamp,
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    sysvar,
};
use solana_system_interface::program;

use crate::state::{Amount, VestingTerms};

// Seed for the PDA holding the serialized ledger
pub const LEDGER_SEED: &[u8] = b"ledger";

/// Instructions supported by the program
///
/// `InitializeLedger` accounts:
/// 0. `[signer, writable]` Payer
/// 1. `[writable]` Ledger PDA
/// 2. `[]` System program
/// 3. `[]` Rent sysvar
///
/// Every other instruction's accounts:
/// 0. `[signer, writable]` Caller, pays rent when the ledger grows
/// 1. `[writable]` Ledger PDA
/// 2. `[]` Clock sysvar
/// 3. `[]` Rent sysvar
/// 4. `[]` System program
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub enum MigrationInstruction {
    InitializeLedger {
        space: u64,
    },
    CreateToken {
        name: String,
        symbol: String,
        cap: Amount,
    },
    Mint {
        token: Pubkey,
        to: Pubkey,
        amount: Amount,
    },
    Transfer {
        token: Pubkey,
        to: Pubkey,
        amount: Amount,
    },
    Approve {
        token: Pubkey,
        spender: Pubkey,
        amount: Amount,
    },
    TransferFrom {
        token: Pubkey,
        from: Pubkey,
        to: Pubkey,
        amount: Amount,
    },
    CreateSwap {
        token_from: Pubkey,
        token_to: Pubkey,
    },
    Swap {
        swap: Pubkey,
        amount: Amount,
    },
    CreateVesting {
        token: Pubkey,
        first_unlock: UnixTimestamp,
        second_unlock: UnixTimestamp,
        third_unlock: UnixTimestamp,
    },
    AddBeneficiaries {
        vesting: Pubkey,
        beneficiaries: Vec<Pubkey>,
        schedules: Vec<VestingTerms>,
    },
    Claim {
        vesting: Pubkey,
    },
}

pub fn ledger_address(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[LEDGER_SEED], program_id)
}

pub fn initialize_ledger(program_id: &Pubkey, payer: &Pubkey, space: u64) -> Instruction {
    let (ledger, _) = ledger_address(program_id);
    Instruction::new_with_borsh(
        *program_id,
        &MigrationInstruction::InitializeLedger { space },
        vec![
            AccountMeta::new(*payer, true),
            AccountMeta::new(ledger, false),
            AccountMeta::new_readonly(program::ID, false),
            AccountMeta::new_readonly(sysvar::rent::id(), false),
        ],
    )
}

/// Wraps any ledger operation signed by `caller`.
pub fn ledger_instruction(
    program_id: &Pubkey,
    caller: &Pubkey,
    instruction: &MigrationInstruction,
) -> Instruction {
    let (ledger, _) = ledger_address(program_id);
    Instruction::new_with_borsh(
        *program_id,
        instruction,
        vec![
            AccountMeta::new(*caller, true),
            AccountMeta::new(ledger, false),
            AccountMeta::new_readonly(sysvar::clock::id(), false),
            AccountMeta::new_readonly(sysvar::rent::id(), false),
            AccountMeta::new_readonly(program::ID, false),
        ],
    )
}

pub fn create_token(
    program_id: &Pubkey,
    owner: &Pubkey,
    name: &str,
    symbol: &str,
    cap: Amount,
) -> Instruction {
    ledger_instruction(
        program_id,
        owner,
        &MigrationInstruction::CreateToken {
            name: name.to_string(),
            symbol: symbol.to_string(),
            cap,
        },
    )
}

pub fn mint(
    program_id: &Pubkey,
    owner: &Pubkey,
    token: &Pubkey,
    to: &Pubkey,
    amount: Amount,
) -> Instruction {
    ledger_instruction(
        program_id,
        owner,
        &MigrationInstruction::Mint {
            token: *token,
            to: *to,
            amount,
        },
    )
}

pub fn transfer(
    program_id: &Pubkey,
    holder: &Pubkey,
    token: &Pubkey,
    to: &Pubkey,
    amount: Amount,
) -> Instruction {
    ledger_instruction(
        program_id,
        holder,
        &MigrationInstruction::Transfer {
            token: *token,
            to: *to,
            amount,
        },
    )
}

pub fn approve(
    program_id: &Pubkey,
    holder: &Pubkey,
    token: &Pubkey,
    spender: &Pubkey,
    amount: Amount,
) -> Instruction {
    ledger_instruction(
        program_id,
        holder,
        &MigrationInstruction::Approve {
            token: *token,
            spender: *spender,
            amount,
        },
    )
}

pub fn transfer_from(
    program_id: &Pubkey,
    spender: &Pubkey,
    token: &Pubkey,
    from: &Pubkey,
    to: &Pubkey,
    amount: Amount,
) -> Instruction {
    ledger_instruction(
        program_id,
        spender,
        &MigrationInstruction::TransferFrom {
            token: *token,
            from: *from,
            to: *to,
            amount,
        },
    )
}

pub fn create_swap(
    program_id: &Pubkey,
    deployer: &Pubkey,
    token_from: &Pubkey,
    token_to: &Pubkey,
) -> Instruction {
    ledger_instruction(
        program_id,
        deployer,
        &MigrationInstruction::CreateSwap {
            token_from: *token_from,
            token_to: *token_to,
        },
    )
}

pub fn swap(program_id: &Pubkey, caller: &Pubkey, swap: &Pubkey, amount: Amount) -> Instruction {
    ledger_instruction(
        program_id,
        caller,
        &MigrationInstruction::Swap {
            swap: *swap,
            amount,
        },
    )
}

pub fn create_vesting(
    program_id: &Pubkey,
    owner: &Pubkey,
    token: &Pubkey,
    unlocks: [UnixTimestamp; 3],
) -> Instruction {
    ledger_instruction(
        program_id,
        owner,
        &MigrationInstruction::CreateVesting {
            token: *token,
            first_unlock: unlocks[0],
            second_unlock: unlocks[1],
            third_unlock: unlocks[2],
        },
    )
}

pub fn add_beneficiaries(
    program_id: &Pubkey,
    owner: &Pubkey,
    vesting: &Pubkey,
    beneficiaries: Vec<Pubkey>,
    schedules: Vec<VestingTerms>,
) -> Instruction {
    ledger_instruction(
        program_id,
        owner,
        &MigrationInstruction::AddBeneficiaries {
            vesting: *vesting,
            beneficiaries,
            schedules,
        },
    )
}

pub fn claim(program_id: &Pubkey, beneficiary: &Pubkey, vesting: &Pubkey) -> Instruction {
    ledger_instruction(
        program_id,
        beneficiary,
        &MigrationInstruction::Claim { vesting: *vesting },
    )
}
