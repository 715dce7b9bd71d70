#![allow(unexpected_cfgs)]

pub mod clock;
pub mod config;
pub mod error;
pub mod event;
pub mod instruction;
pub mod instructions;
pub mod interface;
pub mod ledger;
pub mod processor;
pub mod state;

#[cfg(test)]
mod test_utils;

#[cfg(not(feature = "no-entrypoint"))]
use crate::processor::process_instruction;

#[cfg(not(feature = "no-entrypoint"))]
solana_program::entrypoint!(process_instruction);
