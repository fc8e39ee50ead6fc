//! Traits for storage abstraction

use crate::types::LedgerResult;

/// Storage backend holding the single persisted blob.
///
/// The ledger serializes its whole account list to one UTF-8 document and
/// hands it to `write` after every mutation; `read` returns whatever the
/// previous session persisted, or `None` if nothing has been written yet.
/// Backends move opaque text; the encoding belongs to the ledger.
pub trait LedgerStorage {
    /// Read the persisted blob, if any.
    fn read(&self) -> LedgerResult<Option<String>>;

    /// Replace the persisted blob with `payload`.
    fn write(&mut self, payload: &str) -> LedgerResult<()>;
}
