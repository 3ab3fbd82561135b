// vscsv - Delimiter-Separated Value Tooling
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Thread-safe cache of parsed documents.

use crate::document::Document;
use crate::error::{AnalysisError, Result};
use dashmap::DashMap;
use parking_lot::{Mutex, RwLock};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};
use vscsv_core::ContentKind;

/// Default maximum number of cached documents.
pub const DEFAULT_MAX_DOCUMENTS: usize = 1000;

/// Default maximum document size in bytes (500 MB).
pub const DEFAULT_MAX_DOCUMENT_SIZE: usize = 500 * 1024 * 1024;

struct CacheEntry {
    document: Arc<Document>,
    content_hash: u64,
    last_access: Instant,
}

/// Hit, miss and eviction counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStatistics {
    /// Updates that found the document with identical content.
    pub hits: u64,
    /// Updates that had to parse.
    pub misses: u64,
    /// Documents dropped to stay under the size limit.
    pub evictions: u64,
    pub current_size: usize,
    pub max_size: usize,
}

/// Documents keyed by URI, one parsed model per document.
///
/// Safe to share between threads. When the cache is full the least
/// recently used document is evicted.
///
/// ```
/// use vscsv_analysis::DocumentCache;
/// use vscsv_core::ContentKind;
///
/// let cache = DocumentCache::default();
/// let doc = cache.update("file:///a.csv", "a,b\n1,2", ContentKind::Csv).unwrap();
/// assert_eq!(doc.data().len(), 2);
/// assert_eq!(cache.len(), 1);
/// ```
pub struct DocumentCache {
    documents: DashMap<String, CacheEntry>,
    stats: Mutex<CacheStatistics>,
    max_documents: RwLock<usize>,
    max_document_size: RwLock<usize>,
}

impl DocumentCache {
    pub fn new(max_documents: usize, max_document_size: usize) -> Self {
        Self {
            documents: DashMap::new(),
            stats: Mutex::new(CacheStatistics {
                max_size: max_documents,
                ..Default::default()
            }),
            max_documents: RwLock::new(max_documents),
            max_document_size: RwLock::new(max_document_size),
        }
    }

    pub fn max_documents(&self) -> usize {
        *self.max_documents.read()
    }

    pub fn set_max_documents(&self, max: usize) {
        *self.max_documents.write() = max;
        self.stats.lock().max_size = max;
    }

    pub fn max_document_size(&self) -> usize {
        *self.max_document_size.read()
    }

    pub fn set_max_document_size(&self, max: usize) {
        *self.max_document_size.write() = max;
    }

    /// Snapshot of the counters.
    pub fn statistics(&self) -> CacheStatistics {
        let mut stats = self.stats.lock().clone();
        stats.current_size = self.documents.len();
        stats
    }

    fn hash_content(text: &str, kind: ContentKind) -> u64 {
        let mut hasher = DefaultHasher::new();
        text.hash(&mut hasher);
        kind.hash(&mut hasher);
        hasher.finish()
    }

    /// Store `text` for `uri` and return the parsed document.
    ///
    /// Unchanged content (same text and kind) reuses the cached parse.
    pub fn update(&self, uri: &str, text: &str, kind: ContentKind) -> Result<Arc<Document>> {
        let max = self.max_document_size();
        if text.len() > max {
            warn!(uri, size = text.len(), max, "document rejected by size limit");
            return Err(AnalysisError::DocumentTooLarge {
                size: text.len(),
                max,
            });
        }

        let content_hash = Self::hash_content(text, kind);
        if let Some(mut entry) = self.documents.get_mut(uri) {
            if entry.content_hash == content_hash {
                self.stats.lock().hits += 1;
                entry.last_access = Instant::now();
                return Ok(Arc::clone(&entry.document));
            }
        }

        self.stats.lock().misses += 1;
        if !self.documents.contains_key(uri) && self.documents.len() >= self.max_documents() {
            self.evict_lru();
        }

        let document = Arc::new(Document::new(uri, text, kind));
        debug!(uri, hash = content_hash, "document cached");
        self.documents.insert(
            uri.to_string(),
            CacheEntry {
                document: Arc::clone(&document),
                content_hash,
                last_access: Instant::now(),
            },
        );
        Ok(document)
    }

    pub fn get(&self, uri: &str) -> Option<Arc<Document>> {
        let mut entry = self.documents.get_mut(uri)?;
        entry.last_access = Instant::now();
        Some(Arc::clone(&entry.document))
    }

    /// Drop a document. Returns whether it was cached.
    pub fn remove(&self, uri: &str) -> bool {
        self.documents.remove(uri).is_some()
    }

    pub fn contains(&self, uri: &str) -> bool {
        self.documents.contains_key(uri)
    }

    pub fn uris(&self) -> Vec<String> {
        self.documents.iter().map(|e| e.key().clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Drop every document and reset the counters.
    pub fn clear(&self) {
        self.documents.clear();
        let mut stats = self.stats.lock();
        stats.hits = 0;
        stats.misses = 0;
        stats.evictions = 0;
    }

    fn evict_lru(&self) {
        let oldest = self
            .documents
            .iter()
            .min_by_key(|e| e.value().last_access)
            .map(|e| e.key().clone());

        if let Some(uri) = oldest {
            debug!(uri = %uri, "evicting least recently used document");
            self.documents.remove(&uri);
            self.stats.lock().evictions += 1;
        }
    }
}

impl Default for DocumentCache {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DOCUMENTS, DEFAULT_MAX_DOCUMENT_SIZE)
    }
}

impl std::fmt::Debug for DocumentCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentCache")
            .field("documents", &self.documents.len())
            .field("max_documents", &self.max_documents())
            .field("max_document_size", &self.max_document_size())
            .finish()
    }
}
