//! In-memory directory and CPF source for tests/dev.

use std::collections::HashMap;
use std::sync::Mutex;

use cpfauth_core::Cpf;

use crate::entry::DirectoryEntry;
use crate::error::DirectoryError;
use crate::{CpfSource, UserDirectory};

/// In-memory identity directory.
///
/// - No IO; safe for concurrent use behind `Arc`.
/// - Create-if-absent calls for distinct identifiers never interfere.
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    entries: Mutex<HashMap<Cpf, DirectoryEntry>>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate an entry (test setup helper).
    pub fn with_entry(self, cpf: Cpf) -> Self {
        {
            let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
            entries.insert(cpf.clone(), DirectoryEntry::new(cpf));
        }
        self
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait::async_trait]
impl UserDirectory for InMemoryDirectory {
    async fn lookup(&self, cpf: &Cpf) -> Result<DirectoryEntry, DirectoryError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| DirectoryError::transport("directory state poisoned"))?;
        entries.get(cpf).cloned().ok_or(DirectoryError::NotFound)
    }

    async fn create_if_absent(&self, cpf: &Cpf) -> Result<DirectoryEntry, DirectoryError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| DirectoryError::transport("directory state poisoned"))?;
        if entries.contains_key(cpf) {
            return Err(DirectoryError::AlreadyExists);
        }
        let entry = DirectoryEntry::new(cpf.clone());
        entries.insert(cpf.clone(), entry.clone());
        Ok(entry)
    }
}

/// Fixed in-memory listing of identifiers (test/dev stand-in for the
/// relational system of record).
#[derive(Debug, Default)]
pub struct InMemoryCpfSource {
    cpfs: Vec<Cpf>,
}

impl InMemoryCpfSource {
    pub fn new(cpfs: Vec<Cpf>) -> Self {
        Self { cpfs }
    }
}

#[async_trait::async_trait]
impl CpfSource for InMemoryCpfSource {
    async fn list_all_cpfs(&self) -> Result<Vec<Cpf>, DirectoryError> {
        Ok(self.cpfs.clone())
    }
}
