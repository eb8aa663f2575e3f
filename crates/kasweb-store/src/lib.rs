//! JSON document store for transaction records
//!
//! The store keeps the whole collection in memory and persists it to a
//! single JSON file after every mutation. Writes go through a temp file
//! plus rename, so a crash mid-write never leaves a torn store file.
//! Every operation touches exactly one document.

pub mod error;
pub mod oid;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use error::{StoreError, StoreErrorCode, StoreErrorSeverity, StoreResult};

/// Transaction direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming in
    Income,
    /// Money going out
    Expense,
}

impl std::str::FromStr for TransactionKind {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            _ => Err(format!("Invalid transaction type: {}", s)),
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionKind::Income => write!(f, "income"),
            TransactionKind::Expense => write!(f, "expense"),
        }
    }
}

/// A stored transaction document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionDocument {
    /// Store-assigned unique identifier
    pub id: String,
    /// Calendar date (YYYY-MM-DD)
    pub date: String,
    /// Free-text label
    pub description: String,
    /// Canonical numeric amount, finite and non-negative
    pub amount: f64,
    /// Income or expense
    pub kind: TransactionKind,
    /// Free-text category
    pub category: String,
    /// Set once at insert
    pub created_at: DateTime<Utc>,
    /// Refreshed on every update
    pub updated_at: DateTime<Utc>,
}

/// Editable fields of a transaction document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentFields {
    pub date: String,
    pub description: String,
    pub amount: f64,
    pub kind: TransactionKind,
    pub category: String,
}

/// Persistence seam for the document collection
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Load the collection from disk; a missing file is an empty collection
    async fn load(&mut self) -> StoreResult<()>;
    /// Persist the whole collection atomically
    async fn persist(&self) -> StoreResult<()>;
}

/// JSON-file-backed transaction store
pub struct JsonFileStore {
    path: PathBuf,
    documents: Vec<TransactionDocument>,
}

impl JsonFileStore {
    /// Create a store backed by the given file path (nothing is read yet)
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            documents: Vec::new(),
        }
    }

    /// Number of stored documents
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the store holds no documents
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// All documents ordered by date descending.
    ///
    /// Same-day documents are ordered by creation time descending so the
    /// latest insert stays first.
    pub fn find_all(&self) -> Vec<TransactionDocument> {
        let mut docs = self.documents.clone();
        docs.sort_by(|a, b| match b.date.cmp(&a.date) {
            std::cmp::Ordering::Equal => b.created_at.cmp(&a.created_at),
            other => other,
        });
        docs
    }

    /// Look up a single document.
    ///
    /// The id is validated against the store format before any lookup.
    pub fn find_by_id(&self, id: &str) -> StoreResult<TransactionDocument> {
        if !oid::is_valid(id) {
            return Err(StoreError::InvalidId { id: id.to_string() });
        }
        self.documents
            .iter()
            .find(|d| d.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })
    }

    /// Insert a new document, assigning id and timestamps
    pub async fn insert(&mut self, fields: DocumentFields) -> StoreResult<TransactionDocument> {
        let now = Utc::now();
        let doc = TransactionDocument {
            id: oid::generate(),
            date: fields.date,
            description: fields.description,
            amount: fields.amount,
            kind: fields.kind,
            category: fields.category,
            created_at: now,
            updated_at: now,
        };
        self.documents.push(doc.clone());
        self.persist().await?;
        log::debug!("inserted document {}", doc.id);
        Ok(doc)
    }

    /// Replace the editable fields of an existing document.
    ///
    /// `id` and `created_at` are preserved; `updated_at` is refreshed.
    pub async fn update(
        &mut self,
        id: &str,
        fields: DocumentFields,
    ) -> StoreResult<TransactionDocument> {
        if !oid::is_valid(id) {
            return Err(StoreError::InvalidId { id: id.to_string() });
        }
        let doc = self
            .documents
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })?;

        doc.date = fields.date;
        doc.description = fields.description;
        doc.amount = fields.amount;
        doc.kind = fields.kind;
        doc.category = fields.category;
        doc.updated_at = Utc::now();
        let updated = doc.clone();

        self.persist().await?;
        log::debug!("updated document {}", id);
        Ok(updated)
    }

    /// Remove a document permanently (hard delete, no tombstone)
    pub async fn delete(&mut self, id: &str) -> StoreResult<()> {
        if !oid::is_valid(id) {
            return Err(StoreError::InvalidId { id: id.to_string() });
        }
        let before = self.documents.len();
        self.documents.retain(|d| d.id != id);
        if self.documents.len() == before {
            return Err(StoreError::NotFound { id: id.to_string() });
        }
        self.persist().await?;
        log::debug!("deleted document {}", id);
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for JsonFileStore {
    async fn load(&mut self) -> StoreResult<()> {
        if !self.path.exists() {
            log::info!(
                "store file {} not found, starting with an empty collection",
                self.path.display()
            );
            self.documents = Vec::new();
            return Ok(());
        }

        let content = tokio::fs::read_to_string(&self.path).await?;
        self.documents = serde_json::from_str(&content)?;
        log::info!(
            "loaded {} documents from {}",
            self.documents.len(),
            self.path.display()
        );
        Ok(())
    }

    async fn persist(&self) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let content = serde_json::to_string_pretty(&self.documents)?;
        let tmp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, content).await?;
        tokio::fs::rename(&tmp_path, &self.path).await?;
        Ok(())
    }
}
