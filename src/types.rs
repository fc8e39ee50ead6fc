//! Core types and data structures for the account ledger

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier assigned to an account when it is registered.
///
/// Ids are issued by the ledger's monotonic counter and stay unique within
/// the account list for its whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(pub u64);

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A bank account as the ledger stores and persists it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Unique identifier within the account list
    pub id: AccountId,
    /// Free-text label for the bank
    pub bank_name: String,
    /// Agency (branch) number
    pub agency_number: u32,
    /// Account number at the agency
    pub account_number: u32,
    /// Current balance; minor-unit-agnostic decimal, no rounding rules
    pub balance: BigDecimal,
}

impl Account {
    pub(crate) fn new(id: AccountId, fields: AccountFields) -> Self {
        Self {
            id,
            bank_name: fields.bank_name,
            agency_number: fields.agency_number,
            account_number: fields.account_number,
            balance: fields.balance,
        }
    }

    /// Copy of this account with `amount` added to the balance.
    pub(crate) fn deposited(&self, amount: &BigDecimal) -> Self {
        Self {
            balance: &self.balance + amount,
            ..self.clone()
        }
    }

    /// Copy of this account with `amount` subtracted from the balance.
    ///
    /// The balance must cover the full amount; there are no partial
    /// withdrawals and no overdrafts.
    pub(crate) fn withdrawn(&self, amount: &BigDecimal) -> LedgerResult<Self> {
        if self.balance < *amount {
            return Err(LedgerError::InsufficientBalance {
                requested: amount.clone(),
                available: self.balance.clone(),
            });
        }

        Ok(Self {
            balance: &self.balance - amount,
            ..self.clone()
        })
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bank: {}, Agency: {}, Account: {}, Balance: {}",
            self.bank_name, self.agency_number, self.account_number, self.balance
        )
    }
}

/// The four raw text inputs exactly as the form collects them.
///
/// Nothing is validated or coerced until the draft is submitted to
/// register/edit; a draft full of garbage is a perfectly fine value to hold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountDraft {
    pub bank_name: String,
    pub agency_number: String,
    pub account_number: String,
    pub balance: String,
}

impl AccountDraft {
    /// Create a draft from raw field contents.
    pub fn new(
        bank_name: impl Into<String>,
        agency_number: impl Into<String>,
        account_number: impl Into<String>,
        balance: impl Into<String>,
    ) -> Self {
        Self {
            bank_name: bank_name.into(),
            agency_number: agency_number.into(),
            account_number: account_number.into(),
            balance: balance.into(),
        }
    }

    /// Check that every field is filled in and coerce the numeric ones.
    pub(crate) fn validate(&self) -> LedgerResult<AccountFields> {
        use crate::utils::validation::{parse_amount_field, parse_integer_field, validate_required};

        validate_required("Bank name", &self.bank_name)?;
        validate_required("Agency number", &self.agency_number)?;
        validate_required("Account number", &self.account_number)?;
        validate_required("Balance", &self.balance)?;

        Ok(AccountFields {
            bank_name: self.bank_name.clone(),
            agency_number: parse_integer_field("Agency number", &self.agency_number)?,
            account_number: parse_integer_field("Account number", &self.account_number)?,
            balance: parse_amount_field("Balance", &self.balance)?,
        })
    }
}

/// A draft that passed validation: the typed fields of an account minus its id.
#[derive(Debug, Clone)]
pub(crate) struct AccountFields {
    pub(crate) bank_name: String,
    pub(crate) agency_number: u32,
    pub(crate) account_number: u32,
    pub(crate) balance: BigDecimal,
}

/// Errors that can occur in the ledger system
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// A required form field was empty or failed numeric coercion.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A withdrawal asked for more than the account holds.
    #[error("Insufficient balance: cannot withdraw {requested} from {available} available")]
    InsufficientBalance {
        requested: BigDecimal,
        available: BigDecimal,
    },

    /// The storage backend failed to read or write the persisted blob.
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn draft_validation_coerces_numeric_fields() {
        let draft = AccountDraft::new("Acme", " 12 ", "3456", "99.50");
        let fields = draft.validate().unwrap();

        assert_eq!(fields.bank_name, "Acme");
        assert_eq!(fields.agency_number, 12);
        assert_eq!(fields.account_number, 3456);
        assert_eq!(fields.balance, BigDecimal::from_str("99.50").unwrap());
    }

    #[test]
    fn draft_validation_rejects_blank_fields() {
        let draft = AccountDraft::new("", "1", "100", "200");
        assert!(matches!(
            draft.validate(),
            Err(LedgerError::Validation(msg)) if msg.contains("Bank name")
        ));

        let draft = AccountDraft::new("Acme", "1", "100", "   ");
        assert!(matches!(
            draft.validate(),
            Err(LedgerError::Validation(msg)) if msg.contains("Balance")
        ));
    }

    #[test]
    fn draft_validation_rejects_non_numeric_input() {
        let draft = AccountDraft::new("Acme", "one", "100", "200");
        assert!(matches!(draft.validate(), Err(LedgerError::Validation(_))));

        let draft = AccountDraft::new("Acme", "1", "100", "lots");
        assert!(matches!(draft.validate(), Err(LedgerError::Validation(_))));
    }

    #[test]
    fn account_serializes_with_camel_case_field_names() {
        let draft = AccountDraft::new("Acme", "1", "100", "200");
        let account = Account::new(AccountId(1), draft.validate().unwrap());

        let json = serde_json::to_string(&account).unwrap();
        assert!(json.contains("\"bankName\""));
        assert!(json.contains("\"agencyNumber\""));
        assert!(json.contains("\"accountNumber\""));

        let back: Account = serde_json::from_str(&json).unwrap();
        assert_eq!(back, account);
    }

    #[test]
    fn withdrawn_rejects_amounts_above_balance() {
        let draft = AccountDraft::new("Acme", "1", "100", "200");
        let account = Account::new(AccountId(1), draft.validate().unwrap());

        let err = account.withdrawn(&BigDecimal::from(500)).unwrap_err();
        assert!(matches!(err, LedgerError::InsufficientBalance { .. }));
        assert_eq!(account.balance, BigDecimal::from(200));
    }
}
