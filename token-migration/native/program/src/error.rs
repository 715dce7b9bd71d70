use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use solana_program::program_error::ProgramError;
use thiserror::Error;

/// Broad failure classes callers can branch on without matching every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Authorization,
    InvariantViolation,
    InsufficientBalance,
    InsufficientAllowance,
    InsufficientInventory,
    Temporal,
    State,
    /// Program plumbing: signers, ledger account, instruction data.
    Account,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, FromPrimitive)]
pub enum MigrationError {
    // Authorization
    #[error("Ownable: caller is not the owner")]
    NotOwner,

    // Invariant violations
    #[error("Token: cap is 0")]
    ZeroCap,
    #[error("Token: cap exceeded")]
    CapExceeded,
    #[error("Token: mint to the zero address")]
    MintToZeroAddress,
    #[error("Token: transfer to the zero address")]
    TransferToZeroAddress,
    #[error("Token: approve to the zero address")]
    ApproveToZeroAddress,
    #[error("Token: unknown token address")]
    UnknownToken,
    #[error("TokenSwap: tokenSwapFrom address cannot be zero")]
    SwapFromZeroAddress,
    #[error("TokenSwap: tokenSwapTo address cannot be zero")]
    SwapToZeroAddress,
    #[error("TokenSwap: unknown swap address")]
    UnknownSwap,
    #[error("TokenVesting: token address cannot be zero")]
    VestingTokenZeroAddress,
    #[error("TokenVesting: first unlock time is before current time")]
    FirstUnlockNotInFuture,
    #[error("TokenVesting: second unlock time is before first unlock time")]
    SecondUnlockNotAfterFirst,
    #[error("TokenVesting: third unlock time is before second unlock time")]
    ThirdUnlockNotAfterSecond,
    #[error("TokenVesting: unknown vesting address")]
    UnknownVesting,
    #[error("Overflow occurred")]
    Overflow,

    // Balances
    #[error("Token: transfer amount exceeds balance")]
    InsufficientBalance,
    #[error("Token: insufficient allowance")]
    InsufficientAllowance,
    #[error("TokenSwap: contract balance is not enough to perform swap")]
    SwapInventoryShortfall,
    #[error("TokenVesting: contract balance is not enough to perform claim")]
    ClaimInventoryShortfall,

    // Temporal
    #[error("TokenVesting: current time is before first unlock time")]
    BeforeFirstUnlock,

    // State
    #[error("TokenVesting: address is not beneficiary")]
    NotBeneficiary,
    #[error("TokenVesting: no tokens to claim")]
    NothingToClaim,
    #[error("TokenVesting: arrays of incorrect length")]
    LengthMismatch,

    // Program plumbing
    #[error("Invalid instruction")]
    InvalidInstruction,
    #[error("Missing required signer")]
    NotSigner,
    #[error("Account not writable")]
    NotWritable,
    #[error("Invalid ledger account")]
    InvalidLedgerAccount,
    #[error("Ledger is already initialized")]
    AlreadyInitialized,
    #[error("Ledger is not initialized")]
    UninitializedLedger,
    #[error("Ledger state could not be decoded")]
    InvalidLedgerState,
    #[error("Ledger account cannot grow to fit its state")]
    LedgerAccountTooSmall,
}

impl MigrationError {
    pub fn kind(&self) -> ErrorKind {
        use MigrationError::*;
        match self {
            NotOwner => ErrorKind::Authorization,
            ZeroCap
            | CapExceeded
            | MintToZeroAddress
            | TransferToZeroAddress
            | ApproveToZeroAddress
            | UnknownToken
            | SwapFromZeroAddress
            | SwapToZeroAddress
            | UnknownSwap
            | VestingTokenZeroAddress
            | FirstUnlockNotInFuture
            | SecondUnlockNotAfterFirst
            | ThirdUnlockNotAfterSecond
            | UnknownVesting
            | Overflow => ErrorKind::InvariantViolation,
            InsufficientBalance => ErrorKind::InsufficientBalance,
            InsufficientAllowance => ErrorKind::InsufficientAllowance,
            SwapInventoryShortfall | ClaimInventoryShortfall => ErrorKind::InsufficientInventory,
            BeforeFirstUnlock => ErrorKind::Temporal,
            NotBeneficiary | NothingToClaim | LengthMismatch => ErrorKind::State,
            InvalidInstruction
            | NotSigner
            | NotWritable
            | InvalidLedgerAccount
            | AlreadyInitialized
            | UninitializedLedger
            | InvalidLedgerState
            | LedgerAccountTooSmall => ErrorKind::Account,
        }
    }

    /// Recovers the error from a `ProgramError::Custom` code.
    pub fn from_code(code: u32) -> Option<Self> {
        Self::from_u32(code)
    }
}

impl From<MigrationError> for ProgramError {
    fn from(e: MigrationError) -> Self {
        ProgramError::Custom(e as u32)
    }
}
