use std::collections::BTreeMap;

use solana_program::pubkey::Pubkey;

use crate::{
    error::MigrationError,
    event::Event,
    instructions::{transfer, transfer_from},
    state::{Amount, TokenLedger},
};

/// Balance-moving surface the swap and vesting components call into.
pub trait TokenInterface {
    fn balance_of(&self, token: &Pubkey, holder: &Pubkey) -> Result<Amount, MigrationError>;

    fn allowance(
        &self,
        token: &Pubkey,
        owner: &Pubkey,
        spender: &Pubkey,
    ) -> Result<Amount, MigrationError>;

    fn transfer(
        &mut self,
        token: &Pubkey,
        from: &Pubkey,
        to: &Pubkey,
        amount: Amount,
    ) -> Result<(), MigrationError>;

    fn transfer_from(
        &mut self,
        token: &Pubkey,
        spender: &Pubkey,
        from: &Pubkey,
        to: &Pubkey,
        amount: Amount,
    ) -> Result<(), MigrationError>;
}

/// Token ledgers held in the program ledger, recording transfer events as they happen.
pub struct TokenBank<'a> {
    tokens: &'a mut BTreeMap<Pubkey, TokenLedger>,
    events: &'a mut Vec<Event>,
}

impl<'a> TokenBank<'a> {
    pub fn new(tokens: &'a mut BTreeMap<Pubkey, TokenLedger>, events: &'a mut Vec<Event>) -> Self {
        Self { tokens, events }
    }

    fn token(&self, token: &Pubkey) -> Result<&TokenLedger, MigrationError> {
        self.tokens.get(token).ok_or(MigrationError::UnknownToken)
    }
}

impl TokenInterface for TokenBank<'_> {
    fn balance_of(&self, token: &Pubkey, holder: &Pubkey) -> Result<Amount, MigrationError> {
        Ok(self.token(token)?.balance_of(holder))
    }

    fn allowance(
        &self,
        token: &Pubkey,
        owner: &Pubkey,
        spender: &Pubkey,
    ) -> Result<Amount, MigrationError> {
        Ok(self.token(token)?.allowance(owner, spender))
    }

    fn transfer(
        &mut self,
        token: &Pubkey,
        from: &Pubkey,
        to: &Pubkey,
        amount: Amount,
    ) -> Result<(), MigrationError> {
        let ledger = self
            .tokens
            .get_mut(token)
            .ok_or(MigrationError::UnknownToken)?;
        transfer(ledger, token, from, to, amount, self.events)
    }

    fn transfer_from(
        &mut self,
        token: &Pubkey,
        spender: &Pubkey,
        from: &Pubkey,
        to: &Pubkey,
        amount: Amount,
    ) -> Result<(), MigrationError> {
        let ledger = self
            .tokens
            .get_mut(token)
            .ok_or(MigrationError::UnknownToken)?;
        transfer_from(ledger, token, spender, from, to, amount, self.events)
    }
}
