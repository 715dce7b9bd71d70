//! Deployment argument files.
//!
//! Each file is a JSON record that maps onto one deployment instruction. Loading
//! checks syntax only: addresses are base58 keys, amounts are unsigned
//! integers given as JSON numbers, decimal strings or `0x` hex strings. The
//! ledger enforces every semantic rule when the instruction runs.

use std::{fs, num::ParseIntError, path::Path, path::PathBuf, str::FromStr};

use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use solana_program::{clock::UnixTimestamp, pubkey::Pubkey};
use thiserror::Error;

use crate::instruction::MigrationInstruction;
use crate::state::{Amount, VestingTerms};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid deployment arguments: {0}")]
    Json(#[from] serde_json::Error),
}

/// `{name, symbol, cap}`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenConfig {
    pub name: String,
    pub symbol: String,
    #[serde(deserialize_with = "amount")]
    pub cap: Amount,
}

impl TokenConfig {
    pub fn instruction(&self) -> MigrationInstruction {
        MigrationInstruction::CreateToken {
            name: self.name.clone(),
            symbol: self.symbol.clone(),
            cap: self.cap,
        }
    }
}

/// `{fromAddress, toAddress}`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapConfig {
    #[serde(alias = "addressTokenSwapFrom", deserialize_with = "pubkey")]
    pub from_address: Pubkey,
    #[serde(alias = "addressTokenSwapTo", deserialize_with = "pubkey")]
    pub to_address: Pubkey,
}

impl SwapConfig {
    pub fn instruction(&self) -> MigrationInstruction {
        MigrationInstruction::CreateSwap {
            token_from: self.from_address,
            token_to: self.to_address,
        }
    }
}

/// `{tokenAddress, firstUnlock, secondUnlock, thirdUnlock}`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VestingConfig {
    #[serde(alias = "addressToken", deserialize_with = "pubkey")]
    pub token_address: Pubkey,
    #[serde(alias = "_firstUnlockTime")]
    pub first_unlock: UnixTimestamp,
    #[serde(alias = "_secondUnlockTime")]
    pub second_unlock: UnixTimestamp,
    #[serde(alias = "_thirdUnlockTime")]
    pub third_unlock: UnixTimestamp,
}

impl VestingConfig {
    pub fn instruction(&self) -> MigrationInstruction {
        MigrationInstruction::CreateVesting {
            token: self.token_address,
            first_unlock: self.first_unlock,
            second_unlock: self.second_unlock,
            third_unlock: self.third_unlock,
        }
    }
}

/// `{address, tranche1, tranche2, tranche3}`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BeneficiaryConfig {
    #[serde(deserialize_with = "pubkey")]
    pub address: Pubkey,
    #[serde(alias = "amountToClaimOnFirstUnlockTime", deserialize_with = "amount")]
    pub tranche1: Amount,
    #[serde(alias = "amountToClaimOnSecondUnlockTime", deserialize_with = "amount")]
    pub tranche2: Amount,
    #[serde(alias = "amountToClaimOnThirdUnlockTime", deserialize_with = "amount")]
    pub tranche3: Amount,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BeneficiariesConfig {
    pub beneficiaries: Vec<BeneficiaryConfig>,
}

impl BeneficiariesConfig {
    pub fn instruction(&self, vesting: Pubkey) -> MigrationInstruction {
        let (beneficiaries, schedules): (Vec<Pubkey>, Vec<VestingTerms>) = self
            .beneficiaries
            .iter()
            .map(|b| {
                (
                    b.address,
                    VestingTerms {
                        tranche1: b.tranche1,
                        tranche2: b.tranche2,
                        tranche3: b.tranche3,
                    },
                )
            })
            .unzip();
        MigrationInstruction::AddBeneficiaries {
            vesting,
            beneficiaries,
            schedules,
        }
    }
}

pub fn load<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, ConfigError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&raw)?)
}

fn pubkey<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Pubkey, D::Error> {
    let raw = String::deserialize(deserializer)?;
    Pubkey::from_str(&raw).map_err(|e| serde::de::Error::custom(format!("address {raw}: {e}")))
}

// Token amounts overflow JSON numbers, so decimal and `0x` hex strings are accepted too.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(u64),
    Text(String),
}

fn amount<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Amount, D::Error> {
    match RawAmount::deserialize(deserializer)? {
        RawAmount::Number(n) => Ok(Amount::from(n)),
        RawAmount::Text(s) => parse_amount(s.trim())
            .map_err(|e| serde::de::Error::custom(format!("amount {s}: {e}"))),
    }
}

fn parse_amount(raw: &str) -> Result<Amount, ParseIntError> {
    match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex) => Amount::from_str_radix(hex, 16),
        None => Amount::from_str(raw),
    }
}
