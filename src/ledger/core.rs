//! The ledger store: the authoritative account list plus write-through persistence

use bigdecimal::BigDecimal;
use log::{debug, warn};

use crate::traits::LedgerStorage;
use crate::types::{Account, AccountDraft, AccountId, LedgerError, LedgerResult};
use crate::utils::validation::validate_positive_amount;

/// Owns the account list and mirrors it to storage after every mutation.
///
/// Every mutating operation builds a new list from the old one, rewrites the
/// persisted blob in full, and only then swaps the new list in. No account is
/// ever mutated in place, so the list is always a deterministic function of
/// the loaded state plus the operations applied since.
pub struct Ledger<S: LedgerStorage> {
    storage: S,
    accounts: Vec<Account>,
    next_id: u64,
}

impl<S: LedgerStorage> Ledger<S> {
    /// Load the persisted account list from `storage`, or start empty.
    ///
    /// An absent blob means a first run. A blob that no longer parses is
    /// discarded and the ledger starts empty; only storage I/O failures
    /// surface as errors.
    pub fn load(storage: S) -> LedgerResult<Self> {
        let accounts = match storage.read()? {
            Some(payload) => match serde_json::from_str::<Vec<Account>>(&payload) {
                Ok(accounts) => accounts,
                Err(err) => {
                    warn!("discarding malformed account blob: {err}");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        // The id counter is not persisted; it is rebuilt from the highest id
        // in the loaded list.
        let next_id = accounts.iter().map(|a| a.id.0 + 1).max().unwrap_or(1);

        Ok(Self {
            storage,
            accounts,
            next_id,
        })
    }

    /// The current account list, in registration order.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Look up a single account by id.
    pub fn find(&self, id: AccountId) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    /// Register a new account from the submitted form fields.
    ///
    /// All four fields must be non-empty and the numeric ones must parse;
    /// otherwise a `Validation` error is returned and nothing is written.
    pub fn register(&mut self, draft: &AccountDraft) -> LedgerResult<Account> {
        let fields = draft.validate()?;
        let account = Account::new(self.allocate_id(), fields);

        let mut accounts = self.accounts.clone();
        accounts.push(account.clone());
        self.replace(accounts)?;

        Ok(account)
    }

    /// Replace the fields of the account with id `target`, keeping its id.
    ///
    /// Validation matches `register`. A missing target is not an error: the
    /// unchanged list is still rewritten and `None` comes back.
    pub fn edit(
        &mut self,
        draft: &AccountDraft,
        target: AccountId,
    ) -> LedgerResult<Option<Account>> {
        let fields = draft.validate()?;

        let mut updated = None;
        let accounts = self
            .accounts
            .iter()
            .map(|account| {
                if account.id == target {
                    let replacement = Account::new(target, fields.clone());
                    updated = Some(replacement.clone());
                    replacement
                } else {
                    account.clone()
                }
            })
            .collect();
        self.replace(accounts)?;

        Ok(updated)
    }

    /// Remove the account with `id`; an unknown id is a silent no-op.
    ///
    /// The list is rewritten either way.
    pub fn delete(&mut self, id: AccountId) -> LedgerResult<()> {
        let accounts = self
            .accounts
            .iter()
            .filter(|account| account.id != id)
            .cloned()
            .collect();
        self.replace(accounts)
    }

    /// Add `amount` to the matching account's balance.
    ///
    /// The amount must be positive. An unknown id is a no-op that still
    /// rewrites the list; `None` comes back so callers can tell.
    pub fn deposit(&mut self, id: AccountId, amount: &BigDecimal) -> LedgerResult<Option<Account>> {
        validate_positive_amount(amount)?;

        let mut updated = None;
        let accounts = self
            .accounts
            .iter()
            .map(|account| {
                if account.id == id {
                    let credited = account.deposited(amount);
                    updated = Some(credited.clone());
                    credited
                } else {
                    account.clone()
                }
            })
            .collect();
        self.replace(accounts)?;

        Ok(updated)
    }

    /// Subtract `amount` from the matching account's balance.
    ///
    /// The amount must be positive and fully covered by the balance. An
    /// insufficient balance leaves the account untouched, but the (unchanged)
    /// list is still rewritten before the error is returned. An unknown id is
    /// a no-op that rewrites the list.
    pub fn withdraw(&mut self, id: AccountId, amount: &BigDecimal) -> LedgerResult<Option<Account>> {
        validate_positive_amount(amount)?;

        let mut outcome = Ok(None);
        let accounts = self
            .accounts
            .iter()
            .map(|account| {
                if account.id == id {
                    match account.withdrawn(amount) {
                        Ok(debited) => {
                            outcome = Ok(Some(debited.clone()));
                            debited
                        }
                        Err(err) => {
                            outcome = Err(err);
                            account.clone()
                        }
                    }
                } else {
                    account.clone()
                }
            })
            .collect();
        self.replace(accounts)?;

        outcome
    }

    fn allocate_id(&mut self) -> AccountId {
        let id = AccountId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Persist `accounts` and swap it in as the authoritative list.
    ///
    /// The in-memory list only changes after the write succeeds, keeping the
    /// blob and the list equal after every completed mutation.
    fn replace(&mut self, accounts: Vec<Account>) -> LedgerResult<()> {
        let payload = serde_json::to_string(&accounts)
            .map_err(|err| LedgerError::Storage(format!("encoding account list: {err}")))?;
        self.storage.write(&payload)?;
        debug!("persisted {} account(s)", accounts.len());

        self.accounts = accounts;
        Ok(())
    }
}
