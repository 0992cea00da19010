//! In-memory index over the DART corporation-code archive.

use std::collections::HashMap;

use super::traits::{ResolutionSource, ResolvedCompany};
use crate::models::CorpCodeEntry;

/// Legal-form markers dropped before comparing names.
const LEGAL_FORM_MARKERS: &[&str] = &["(주)", "㈜", "주식회사"];

/// Normalize a company name for matching.
///
/// Removes whitespace and legal-form markers, lower-cases ASCII.
///
/// ```
/// use hireforecast_disclosure::resolver::normalize_company_name;
///
/// assert_eq!(normalize_company_name("(주) NAVER"), "naver");
/// assert_eq!(normalize_company_name("삼성전자 주식회사"), "삼성전자");
/// ```
pub fn normalize_company_name(name: &str) -> String {
    let mut normalized: String = name.chars().filter(|c| !c.is_whitespace()).collect();
    for marker in LEGAL_FORM_MARKERS {
        normalized = normalized.replace(marker, "");
    }
    normalized.to_ascii_lowercase()
}

#[derive(Debug)]
struct IndexedEntry {
    normalized_name: String,
    entry: CorpCodeEntry,
}

/// Lookup structure built once from a corp-code download.
#[derive(Debug, Default)]
pub struct CorpCodeIndex {
    entries: Vec<IndexedEntry>,
    /// normalized name -> positions in `entries`
    by_name: HashMap<String, Vec<usize>>,
}

impl CorpCodeIndex {
    pub fn new(entries: Vec<CorpCodeEntry>) -> Self {
        let mut index = Self::default();
        for entry in entries {
            let normalized_name = normalize_company_name(&entry.corp_name);
            if normalized_name.is_empty() {
                continue;
            }
            index
                .by_name
                .entry(normalized_name.clone())
                .or_default()
                .push(index.entries.len());
            index.entries.push(IndexedEntry {
                normalized_name,
                entry,
            });
        }
        index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find the best entry for a free-text company name.
    ///
    /// Exact normalized matches are preferred over containment matches. Among
    /// candidates, listed companies win, then the shortest name.
    pub fn find(&self, company_name: &str) -> Option<&CorpCodeEntry> {
        let query = normalize_company_name(company_name);
        if query.is_empty() {
            return None;
        }

        if let Some(positions) = self.by_name.get(&query) {
            return Self::best(positions.iter().map(|&i| &self.entries[i]));
        }

        Self::best(self.entries.iter().filter(|e| {
            e.normalized_name.contains(&query) || query.contains(&e.normalized_name)
        }))
    }

    pub fn resolve(&self, company_name: &str) -> Option<ResolvedCompany> {
        self.find(company_name).map(|entry| ResolvedCompany {
            corp_code: entry.corp_code.clone(),
            corp_name: entry.corp_name.clone(),
            stock_code: entry.stock_code.clone(),
            source: ResolutionSource::CorpCodeIndex,
        })
    }

    fn best<'a>(candidates: impl Iterator<Item = &'a IndexedEntry>) -> Option<&'a CorpCodeEntry> {
        candidates
            .min_by_key(|e| (!e.entry.is_listed(), e.normalized_name.chars().count()))
            .map(|e| &e.entry)
    }
}
