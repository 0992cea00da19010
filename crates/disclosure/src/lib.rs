//! Hireforecast Disclosure Crate
//!
//! Client side of the DART (Data Analysis, Retrieval and Transfer System)
//! open API run by the Korean Financial Supervisory Service.
//!
//! # Overview
//!
//! The disclosure crate supports:
//! - Workforce status and key-account statements per company and year
//! - Company-name to corporation-code resolution
//! - Request throttling and retry with backoff
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |   Company name   | --> |  ResolverChain   |  (static table, cached index)
//! +------------------+     +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |    CorpCode      |
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |   DartProvider   |  (throttle + retries)
//!                          +------------------+
//!                                  |
//!                                  v
//!                       +----------------------+
//!                       | DisclosureResponse<T>|  (raw string-valued rows)
//!                       +----------------------+
//! ```
//!
//! # Core Types
//!
//! - [`RawEmployeeRecord`] - One row of the workforce status report
//! - [`RawFinancialRecord`] - One key-account line of a financial statement
//! - [`DisclosureResponse`] - DART response envelope
//! - [`CorpCodeEntry`] - One company of the corporation-code archive

pub mod errors;
pub mod models;
pub mod provider;
pub mod resolver;
pub mod throttle;

pub use errors::{DisclosureError, RetryClass};

pub use models::{
    CorpCode, CorpCodeEntry, DisclosureResponse, RawEmployeeRecord, RawFinancialRecord, ReportCode,
    STATUS_NO_DATA, STATUS_SUCCESS,
};

pub use resolver::{
    normalize_company_name, CachedIndexResolver, CompanyResolver, CorpCodeIndex,
    ResolutionSource, ResolvedCompany, Resolver, ResolverChain, StaticTableResolver,
    DEFAULT_INDEX_TTL,
};

pub use provider::{CorpCodeSource, DartConfig, DartProvider, DisclosureProvider};

pub use throttle::{Throttle, ThrottlePolicy};
