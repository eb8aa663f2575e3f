//! Transaction operations over the document store

use kasweb_store::{oid, JsonFileStore};

use crate::error::{CoreError, CoreResult, ErrorCode};
use crate::models::{Summary, Transaction, TransactionPayload};

/// Application-level transaction operations.
///
/// Handlers hold the store behind a lock; these functions take plain
/// references so the caller decides the locking scope.
pub struct TransactionService;

impl TransactionService {
    /// All transactions, newest date first
    pub fn list(store: &JsonFileStore) -> Vec<Transaction> {
        store.find_all().into_iter().map(Transaction::from).collect()
    }

    /// Totals over the full collection
    pub fn summary(store: &JsonFileStore) -> Summary {
        let transactions = Self::list(store);
        Summary::from_transactions(&transactions)
    }

    /// Validate and store a new transaction
    pub async fn create(
        store: &mut JsonFileStore,
        payload: TransactionPayload,
    ) -> CoreResult<Transaction> {
        let fields = payload.validate()?;
        let doc = store
            .insert(fields)
            .await
            .map_err(|e| Self::store_failure("insert", e))?;
        log::info!("created transaction {}", doc.id);
        Ok(Transaction::from(doc))
    }

    /// Validate and apply an update to an existing transaction.
    ///
    /// The id format is checked before the payload so a malformed id is
    /// reported even when the body is also bad.
    pub async fn update(
        store: &mut JsonFileStore,
        id: &str,
        payload: TransactionPayload,
    ) -> CoreResult<Transaction> {
        if !oid::is_valid(id) {
            return Err(CoreError::InvalidId { id: id.to_string() });
        }
        let fields = payload.validate()?;
        let doc = store
            .update(id, fields)
            .await
            .map_err(|e| Self::store_failure("update", e))?;
        log::info!("updated transaction {}", id);
        Ok(Transaction::from(doc))
    }

    /// Remove a transaction permanently
    pub async fn delete(store: &mut JsonFileStore, id: &str) -> CoreResult<()> {
        store
            .delete(id)
            .await
            .map_err(|e| Self::store_failure("delete", e))?;
        log::info!("deleted transaction {}", id);
        Ok(())
    }

    /// Find one transaction by id
    pub fn get(store: &JsonFileStore, id: &str) -> CoreResult<Transaction> {
        store
            .find_by_id(id)
            .map(Transaction::from)
            .map_err(CoreError::from)
    }

    fn store_failure(operation: &str, error: kasweb_store::StoreError) -> CoreError {
        let core = CoreError::from(error);
        if core.code() == ErrorCode::StoreError {
            log::error!("store {} failed: {}", operation, core);
        }
        core
    }
}
