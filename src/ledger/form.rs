//! Form state backing the register / save-edit flow

use bigdecimal::BigDecimal;

use crate::ledger::core::Ledger;
use crate::traits::LedgerStorage;
use crate::types::{Account, AccountDraft, AccountId, LedgerResult};

/// Fixed amount applied by the per-row quick deposit and withdraw actions.
pub const QUICK_AMOUNT: u32 = 50;

/// `QUICK_AMOUNT` as a decimal, ready to hand to deposit/withdraw.
pub fn quick_amount() -> BigDecimal {
    BigDecimal::from(QUICK_AMOUNT)
}

/// The four text fields plus the edit-in-progress marker behind the form.
///
/// While an edit is in progress, submitting saves the changes to the target
/// account instead of registering a new one. The form clears only on a
/// successful submission, so a rejected draft keeps the user's input.
#[derive(Debug, Clone, Default)]
pub struct AccountForm {
    pub bank_name: String,
    pub agency_number: String,
    pub account_number: String,
    pub balance: String,
    editing: Option<AccountId>,
}

impl AccountForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a submission would save an edit rather than register.
    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Fill the fields from an existing account and mark it as the edit target.
    pub fn begin_edit(&mut self, account: &Account) {
        self.bank_name = account.bank_name.clone();
        self.agency_number = account.agency_number.to_string();
        self.account_number = account.account_number.to_string();
        self.balance = account.balance.to_string();
        self.editing = Some(account.id);
    }

    /// Current field contents as a draft submission.
    pub fn draft(&self) -> AccountDraft {
        AccountDraft::new(
            &self.bank_name,
            &self.agency_number,
            &self.account_number,
            &self.balance,
        )
    }

    /// Submit the form against `ledger`.
    ///
    /// Dispatches to `register` or `edit` depending on the edit marker and
    /// resets the form on success. Registering always yields the new account;
    /// saving an edit yields `None` when the target has meanwhile vanished.
    pub fn submit<S: LedgerStorage>(
        &mut self,
        ledger: &mut Ledger<S>,
    ) -> LedgerResult<Option<Account>> {
        let draft = self.draft();
        let outcome = match self.editing {
            Some(target) => ledger.edit(&draft, target)?,
            None => Some(ledger.register(&draft)?),
        };

        self.reset();
        Ok(outcome)
    }

    /// Clear every field and leave edit mode.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LedgerError;
    use crate::utils::memory_store::MemoryStore;

    #[test]
    fn submit_registers_and_clears_the_form() {
        let mut ledger = Ledger::load(MemoryStore::new()).unwrap();
        let mut form = AccountForm::new();
        form.bank_name = "Acme".to_string();
        form.agency_number = "1".to_string();
        form.account_number = "100".to_string();
        form.balance = "200".to_string();

        let account = form.submit(&mut ledger).unwrap().unwrap();

        assert_eq!(account.bank_name, "Acme");
        assert!(form.bank_name.is_empty());
        assert!(!form.is_editing());
    }

    #[test]
    fn rejected_submission_keeps_the_fields() {
        let mut ledger = Ledger::load(MemoryStore::new()).unwrap();
        let mut form = AccountForm::new();
        form.bank_name = "Acme".to_string();

        let err = form.submit(&mut ledger).unwrap_err();

        assert!(matches!(err, LedgerError::Validation(_)));
        assert_eq!(form.bank_name, "Acme");
    }

    #[test]
    fn begin_edit_fills_fields_and_submit_saves_in_place() {
        let mut ledger = Ledger::load(MemoryStore::new()).unwrap();
        let account = ledger
            .register(&AccountDraft::new("Acme", "1", "100", "200"))
            .unwrap();

        let mut form = AccountForm::new();
        form.begin_edit(&account);
        assert!(form.is_editing());
        assert_eq!(form.bank_name, "Acme");
        assert_eq!(form.balance, "200");

        form.bank_name = "Globex".to_string();
        let updated = form.submit(&mut ledger).unwrap().unwrap();

        assert_eq!(updated.id, account.id);
        assert_eq!(updated.bank_name, "Globex");
        assert_eq!(ledger.accounts().len(), 1);
        assert!(!form.is_editing());
    }

    #[test]
    fn editing_a_vanished_account_yields_none() {
        let mut ledger = Ledger::load(MemoryStore::new()).unwrap();
        let account = ledger
            .register(&AccountDraft::new("Acme", "1", "100", "200"))
            .unwrap();

        let mut form = AccountForm::new();
        form.begin_edit(&account);
        ledger.delete(account.id).unwrap();

        assert!(form.submit(&mut ledger).unwrap().is_none());
    }

    #[test]
    fn quick_amount_matches_the_row_actions() {
        assert_eq!(quick_amount(), BigDecimal::from(50));
    }
}
