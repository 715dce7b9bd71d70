//! Drives `process_instruction` off-chain over accounts laid out the way the
//! runtime serializes them, so account resizing behaves as it does on-chain.

use solana_program::{
    account_info::AccountInfo,
    clock::Clock,
    entrypoint::{self, BPF_ALIGN_OF_U128, MAX_PERMITTED_DATA_INCREASE, NON_DUP_MARKER, ProgramResult},
    pubkey::Pubkey,
    sysvar::{self, rent::Rent},
};
use solana_system_interface::program;

use crate::instruction::ledger_address;
use crate::ledger::Ledger;
use crate::processor::process_instruction;

#[derive(Debug, Clone)]
pub struct TestAccount {
    pub key: Pubkey,
    pub owner: Pubkey,
    pub lamports: u64,
    pub data: Vec<u8>,
    pub is_signer: bool,
    pub is_writable: bool,
}

impl TestAccount {
    pub fn new(key: Pubkey, owner: Pubkey, data: Vec<u8>, is_signer: bool, is_writable: bool) -> Self {
        Self {
            key,
            owner,
            lamports: 1_000_000,
            data,
            is_signer,
            is_writable,
        }
    }

    /// System-owned wallet that signs and pays.
    pub fn payer(key: Pubkey) -> Self {
        Self {
            lamports: 10_000_000_000,
            ..Self::new(key, program::ID, vec![], true, true)
        }
    }

    pub fn clock(unix_timestamp: i64) -> Self {
        let clock = Clock {
            unix_timestamp,
            ..Clock::default()
        };
        Self::new(
            sysvar::clock::id(),
            sysvar::id(),
            bincode::serialize(&clock).unwrap(),
            false,
            false,
        )
    }

    pub fn rent() -> Self {
        Self::new(
            sysvar::rent::id(),
            sysvar::id(),
            bincode::serialize(&Rent::default()).unwrap(),
            false,
            false,
        )
    }

    pub fn system_program() -> Self {
        Self::new(program::ID, Pubkey::default(), vec![], false, false)
    }

    /// Program-owned ledger PDA holding `ledger`, zero-padded to `len` bytes.
    pub fn ledger(program_id: &Pubkey, ledger: &Ledger, len: usize) -> Self {
        let mut data = borsh::to_vec(ledger).unwrap();
        data.resize(len.max(data.len()), 0);
        let lamports = Rent::default().minimum_balance(data.len());
        Self {
            lamports,
            ..Self::new(ledger_address(program_id).0, *program_id, data, false, true)
        }
    }

    pub fn stored_ledger(&self) -> Ledger {
        borsh::BorshDeserialize::deserialize(&mut self.data.as_slice()).unwrap()
    }
}

/// Accounts for a ledger instruction in the order the processor reads them.
pub struct LedgerAccounts {
    pub caller: TestAccount,
    pub ledger: TestAccount,
    pub clock: TestAccount,
    pub rent: TestAccount,
    pub system_program: TestAccount,
}

impl LedgerAccounts {
    pub fn new(program_id: &Pubkey, caller: Pubkey, ledger_len: usize) -> Self {
        Self {
            caller: TestAccount::payer(caller),
            ledger: TestAccount::ledger(program_id, &Ledger::new(*program_id), ledger_len),
            clock: TestAccount::clock(0),
            rent: TestAccount::rent(),
            system_program: TestAccount::system_program(),
        }
    }

    pub fn run(&mut self, program_id: &Pubkey, instruction_data: &[u8]) -> ProgramResult {
        self.with_infos(program_id, |program_id, infos| {
            process_instruction(program_id, infos, instruction_data)
        })
    }

    /// Runs `f` over the decoded account infos, then copies the accounts back.
    pub fn with_infos<R>(
        &mut self,
        program_id: &Pubkey,
        f: impl FnOnce(&Pubkey, &[AccountInfo]) -> R,
    ) -> R {
        let mut accounts = [
            self.caller.clone(),
            self.ledger.clone(),
            self.clock.clone(),
            self.rent.clone(),
            self.system_program.clone(),
        ];
        let result = with_infos(program_id, &mut accounts, f);
        let [caller, ledger, clock, rent, system_program] = accounts;
        *self = Self {
            caller,
            ledger,
            clock,
            rent,
            system_program,
        };
        result
    }
}

/// Serializes the accounts into an entrypoint input buffer, runs the program
/// against the decoded view and copies lamports and data back. Data is copied
/// back even on failure.
pub fn run(program_id: &Pubkey, accounts: &mut [TestAccount], instruction_data: &[u8]) -> ProgramResult {
    with_infos(program_id, accounts, |program_id, infos| {
        process_instruction(program_id, infos, instruction_data)
    })
}

/// Like [`run`], handing the decoded account infos to `f`.
pub fn with_infos<R>(
    program_id: &Pubkey,
    accounts: &mut [TestAccount],
    f: impl FnOnce(&Pubkey, &[AccountInfo]) -> R,
) -> R {
    let mut input = serialize_input(program_id, accounts);
    // SAFETY: `input` follows the runtime's input layout and outlives the decoded accounts.
    let (program_id, infos, _) = unsafe { entrypoint::deserialize(input.as_mut_ptr() as *mut u8) };

    let result = f(program_id, &infos);
    for (account, info) in accounts.iter_mut().zip(&infos) {
        account.lamports = info.lamports();
        account.data = info.data.borrow().to_vec();
    }
    result
}

// u64 words keep the buffer 8-byte aligned like the runtime's input region
fn serialize_input(program_id: &Pubkey, accounts: &[TestAccount]) -> Vec<u64> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&(accounts.len() as u64).to_le_bytes());
    for account in accounts {
        bytes.push(NON_DUP_MARKER);
        bytes.push(account.is_signer as u8);
        bytes.push(account.is_writable as u8);
        bytes.push(0); // executable
        bytes.extend_from_slice(&[0; 4]); // original data length, set on decode
        bytes.extend_from_slice(account.key.as_ref());
        bytes.extend_from_slice(account.owner.as_ref());
        bytes.extend_from_slice(&account.lamports.to_le_bytes());
        bytes.extend_from_slice(&(account.data.len() as u64).to_le_bytes());
        bytes.extend_from_slice(&account.data);
        bytes.resize(bytes.len() + MAX_PERMITTED_DATA_INCREASE, 0);
        bytes.resize(bytes.len().next_multiple_of(BPF_ALIGN_OF_U128), 0);
        bytes.extend_from_slice(&u64::MAX.to_le_bytes()); // rent epoch
    }
    bytes.extend_from_slice(&0u64.to_le_bytes()); // instruction data is passed directly
    bytes.extend_from_slice(program_id.as_ref());

    bytes
        .chunks(8)
        .map(|chunk| {
            let mut word = [0u8; 8];
            word[..chunk.len()].copy_from_slice(chunk);
            u64::from_ne_bytes(word)
        })
        .collect()
}
