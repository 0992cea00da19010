//! Record extraction - typed per-record views over raw disclosure rows.

mod extraction_model;
mod extractor;


pub use extraction_model::{
    EmployeeRecord, FinancialRecord, KeyAccount, StatementKind, StatementType,
};
pub use extractor::{extract_employee_records, extract_financial_records};
