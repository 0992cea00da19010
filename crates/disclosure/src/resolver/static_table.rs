//! Built-in alias table for frequently requested companies.

use async_trait::async_trait;

use super::traits::{ResolutionSource, ResolvedCompany, Resolver};
use crate::errors::DisclosureError;

/// `(alias, corp_code, canonical name)`, in match priority order.
const DEFAULT_ALIASES: &[(&str, &str, &str)] = &[
    ("삼성전자", "00126380", "삼성전자"),
    ("삼성", "00126380", "삼성전자"),
    ("SK하이닉스", "00164779", "SK하이닉스"),
    ("SK", "00164779", "SK하이닉스"),
    ("네이버", "00252450", "NAVER"),
    ("NAVER", "00252450", "NAVER"),
    ("카카오", "00356370", "카카오"),
    ("Kakao", "00356370", "카카오"),
    ("LG전자", "00101412", "LG전자"),
    ("LG", "00101412", "LG전자"),
    ("현대자동차", "00164742", "현대자동차"),
    ("현대차", "00164742", "현대자동차"),
    ("현대", "00164742", "현대자동차"),
    ("LG디스플레이", "00103054", "LG디스플레이"),
    ("SK텔레콤", "00181515", "SK텔레콤"),
    ("KT", "00164529", "KT"),
    ("포스코", "00164869", "포스코"),
    ("한화", "00121480", "한화"),
    ("롯데", "00157624", "롯데"),
];

#[derive(Clone, Debug)]
struct AliasEntry {
    alias: String,
    corp_code: String,
    corp_name: String,
}

/// Resolver over a fixed alias table.
///
/// Exact alias match wins; otherwise the first alias (in table order) that
/// contains the query or is contained in it.
#[derive(Clone, Debug)]
pub struct StaticTableResolver {
    entries: Vec<AliasEntry>,
}

impl StaticTableResolver {
    pub fn new() -> Self {
        Self::from_entries(
            DEFAULT_ALIASES
                .iter()
                .map(|(alias, code, name)| (*alias, *code, *name)),
        )
    }

    pub fn from_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str, &'a str)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(alias, code, name)| AliasEntry {
                    alias: alias.to_string(),
                    corp_code: code.to_string(),
                    corp_name: name.to_string(),
                })
                .collect(),
        }
    }

    pub fn lookup(&self, company_name: &str) -> Option<ResolvedCompany> {
        let query = company_name.trim();
        if query.is_empty() {
            return None;
        }

        let entry = self
            .entries
            .iter()
            .find(|e| e.alias == query)
            .or_else(|| {
                self.entries
                    .iter()
                    .find(|e| e.alias.contains(query) || query.contains(e.alias.as_str()))
            })?;

        Some(ResolvedCompany {
            corp_code: entry.corp_code.clone(),
            corp_name: entry.corp_name.clone(),
            stock_code: None,
            source: ResolutionSource::StaticTable,
        })
    }
}

impl Default for StaticTableResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Resolver for StaticTableResolver {
    async fn resolve(&self, company_name: &str) -> Option<Result<ResolvedCompany, DisclosureError>> {
        self.lookup(company_name).map(Ok)
    }
}
