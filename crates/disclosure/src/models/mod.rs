//! Disclosure data models
//!
//! This module contains the wire types returned by the DART Open API:
//! - `types` - Type aliases and the report-code enum
//! - `response` - The common response envelope (`status`, `message`, `list`)
//! - `employee` - Rows of the workforce status report (`empSttus.json`)
//! - `financial` - Rows of the single-company key accounts report (`fnlttSinglAcnt.json`)
//! - `corp_code` - Entries of the corporation-code archive (`corpCode.xml`)

mod corp_code;
mod employee;
mod financial;
mod response;
mod types;

pub use corp_code::CorpCodeEntry;
pub use employee::RawEmployeeRecord;
pub use financial::RawFinancialRecord;
pub use response::{DisclosureResponse, STATUS_NO_DATA, STATUS_SUCCESS};
pub use types::{CorpCode, ReportCode};
