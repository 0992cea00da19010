//! Company-name resolution.
//!
//! Maps the free-text company name of a request to a DART corporation code.
//! Two strategies are available and can be combined in a [`ResolverChain`]:
//! the built-in [`StaticTableResolver`] and the [`CachedIndexResolver`] over
//! the downloaded corporation-code archive.

mod cached_index;
mod chain;
mod corp_index;
mod static_table;
mod traits;

pub use cached_index::{CachedIndexResolver, DEFAULT_INDEX_TTL};
pub use chain::ResolverChain;
pub use corp_index::{normalize_company_name, CorpCodeIndex};
pub use static_table::StaticTableResolver;
pub use traits::{CompanyResolver, ResolutionSource, ResolvedCompany, Resolver};
