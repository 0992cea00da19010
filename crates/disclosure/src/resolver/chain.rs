//! Resolver chain - composite resolver that tries resolvers in order.

use async_trait::async_trait;
use log::debug;

use super::static_table::StaticTableResolver;
use super::traits::{CompanyResolver, ResolvedCompany, Resolver};
use crate::errors::DisclosureError;

/// Composite resolver that tries multiple resolvers in order.
///
/// The chain stops at the first resolver that returns a result. A resolver
/// returning `None` means it has no match and the next resolver is tried.
///
/// # Example
///
/// ```ignore
/// let mut chain = ResolverChain::new();
/// chain.add_resolver(Box::new(CachedIndexResolver::new(provider.clone())));
///
/// let resolved = chain.resolve("삼성전자").await?;
/// // resolved.corp_code = "00126380"
/// // resolved.source = ResolutionSource::StaticTable
/// ```
pub struct ResolverChain {
    resolvers: Vec<Box<dyn Resolver>>,
}

impl ResolverChain {
    /// Create a chain holding only the built-in alias table.
    pub fn new() -> Self {
        Self {
            resolvers: vec![Box::new(StaticTableResolver::new())],
        }
    }

    /// Create a chain with no resolvers.
    pub fn empty() -> Self {
        Self {
            resolvers: Vec::new(),
        }
    }

    /// Append a resolver; it is tried after the ones already present.
    pub fn add_resolver(&mut self, resolver: Box<dyn Resolver>) {
        self.resolvers.push(resolver);
    }

    pub fn with_resolver(mut self, resolver: Box<dyn Resolver>) -> Self {
        self.add_resolver(resolver);
        self
    }
}

impl Default for ResolverChain {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompanyResolver for ResolverChain {
    async fn resolve(&self, company_name: &str) -> Result<ResolvedCompany, DisclosureError> {
        for resolver in &self.resolvers {
            if let Some(result) = resolver.resolve(company_name).await {
                if let Ok(resolved) = &result {
                    debug!(
                        "Resolved '{}' to {} via {:?}",
                        company_name, resolved.corp_code, resolved.source
                    );
                }
                return result;
            }
        }

        Err(DisclosureError::CompanyNotFound(company_name.trim().to_string()))
    }
}
