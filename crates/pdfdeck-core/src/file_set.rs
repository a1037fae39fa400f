//! Validated, deduplicated collection of uploaded files.

use std::collections::HashSet;

use crate::error::IntakeError;
use crate::models::{FileKey, FileRecord};

/// Ordered collection of accepted files.
///
/// Insertion order is preserved and no two records share a [`FileKey`].
/// Intake is all-or-nothing: a batch either lands entirely or not at all.
#[derive(Clone, Debug)]
pub struct FileSet<H> {
    records: Vec<FileRecord<H>>,
}

impl<H> Default for FileSet<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> FileSet<H> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, key: &FileKey) -> bool {
        self.position(key).is_some()
    }

    pub fn get(&self, key: &FileKey) -> Option<&FileRecord<H>> {
        self.records.iter().find(|r| r.key() == key)
    }

    /// Records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, FileRecord<H>> {
        self.records.iter()
    }

    fn position(&self, key: &FileKey) -> Option<usize> {
        self.records.iter().position(|r| r.key() == key)
    }

    /// Check a batch without modifying the collection.
    ///
    /// Type is checked first: a batch holding both a non-PDF and a duplicate
    /// reports [`IntakeError::InvalidFileType`].
    pub fn validate(&self, candidates: &[FileRecord<H>]) -> Result<(), IntakeError> {
        if candidates.iter().any(|c| !c.is_pdf()) {
            return Err(IntakeError::InvalidFileType);
        }

        let mut batch_keys = HashSet::with_capacity(candidates.len());
        for candidate in candidates {
            if self.contains(candidate.key()) || !batch_keys.insert(candidate.key()) {
                return Err(IntakeError::DuplicateFile);
            }
        }

        Ok(())
    }

    /// Append a batch of candidates, preserving their order.
    ///
    /// Returns the number of files added. On error the collection is left
    /// untouched.
    pub fn intake(&mut self, candidates: Vec<FileRecord<H>>) -> Result<usize, IntakeError> {
        self.validate(&candidates)?;
        let added = candidates.len();
        self.records.extend(candidates);
        Ok(added)
    }

    /// Remove the record with `key`, if present.
    pub fn remove(&mut self, key: &FileKey) -> Option<FileRecord<H>> {
        let index = self.position(key)?;
        Some(self.records.remove(index))
    }
}

impl<'a, H> IntoIterator for &'a FileSet<H> {
    type Item = &'a FileRecord<H>;
    type IntoIter = std::slice::Iter<'a, FileRecord<H>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
