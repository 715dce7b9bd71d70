pub mod initialize_ledger;
pub mod create_token;
pub mod mint;
pub mod transfer;
pub mod approve;
pub mod transfer_from;
pub mod create_swap;
pub mod swap;
pub mod create_vesting;
pub mod add_beneficiaries;
pub mod claim;

pub use initialize_ledger::initialize_ledger;
pub use create_token::create_token;
pub use mint::mint;
pub use transfer::transfer;
pub use approve::approve;
pub use transfer_from::transfer_from;
pub use create_swap::create_swap;
pub use swap::swap;
pub use create_vesting::create_vesting;
pub use add_beneficiaries::add_beneficiaries;
pub use claim::claim;
