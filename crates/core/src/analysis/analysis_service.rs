use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use futures::future::join_all;
use hireforecast_disclosure::{CompanyResolver, DisclosureProvider};
use log::{debug, info, warn};

use super::analysis_model::{AnalysisRequest, AnalysisResponse, CompanyInfo};
use super::analysis_traits::AnalysisServiceTrait;
use crate::errors::{Error, Result};
use crate::extraction::{
    extract_employee_records, extract_financial_records, EmployeeRecord, FinancialRecord,
};
use crate::forecast::{generate_forecast_summary, generate_prediction};
use crate::series::build_annual_summaries;

/// Records extracted for one requested year.
struct YearRecords {
    employees: Vec<EmployeeRecord>,
    financials: Vec<FinancialRecord>,
}

/// Service running a complete analysis against a disclosure provider.
pub struct AnalysisService {
    provider: Arc<dyn DisclosureProvider>,
    resolver: Arc<dyn CompanyResolver>,
}

impl AnalysisService {
    pub fn new(provider: Arc<dyn DisclosureProvider>, resolver: Arc<dyn CompanyResolver>) -> Self {
        Self { provider, resolver }
    }

    /// Fetch and extract one year. Failed fetches count as a year without
    /// records.
    async fn collect_year(&self, corp_code: &str, year: &str) -> YearRecords {
        debug!("Collecting {} data for {}", year, corp_code);

        let (workforce, financial) = futures::join!(
            self.provider.fetch_workforce_records(corp_code, year),
            self.provider.fetch_financial_records(corp_code, year),
        );

        let employees = match workforce {
            Ok(response) => extract_employee_records(&response, year),
            Err(e) => {
                warn!("Workforce fetch for {} {} failed: {}", corp_code, year, e);
                Vec::new()
            }
        };
        let financials = match financial {
            Ok(response) => extract_financial_records(&response, year),
            Err(e) => {
                warn!("Financial fetch for {} {} failed: {}", corp_code, year, e);
                Vec::new()
            }
        };

        YearRecords {
            employees,
            financials,
        }
    }
}

#[async_trait]
impl AnalysisServiceTrait for AnalysisService {
    async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisResponse> {
        request.validate()?;
        let company_name = request.company_name.trim();

        let company = self.resolver.resolve(company_name).await?;
        info!(
            "Analyzing {} ({}) for {}-{} via {}",
            company_name,
            company.corp_code,
            request.start_year,
            request.end_year,
            self.provider.id()
        );

        let years = request.years();
        let per_year = join_all(
            years
                .iter()
                .map(|year| self.collect_year(&company.corp_code, year)),
        )
        .await;

        let mut employee_records = Vec::new();
        let mut financial_records = Vec::new();
        for records in per_year {
            employee_records.extend(records.employees);
            financial_records.extend(records.financials);
        }

        if employee_records.is_empty() && financial_records.is_empty() {
            return Err(Error::NoData(format!(
                "No disclosure data for '{}' between {} and {}",
                company_name, request.start_year, request.end_year
            )));
        }

        let data = build_annual_summaries(
            company_name,
            &company.corp_code,
            &employee_records,
            &financial_records,
        );
        if data.is_empty() {
            return Err(Error::NoData(format!(
                "No analyzable data for '{}'",
                company_name
            )));
        }

        let prediction = generate_prediction(&data);
        let forecast = generate_forecast_summary(&data, prediction.as_ref());

        info!(
            "Analysis of {} complete: {} years, trend {:?}",
            company.corp_code,
            data.len(),
            forecast.trend
        );

        Ok(AnalysisResponse {
            company_info: CompanyInfo {
                name: company_name.to_string(),
                code: company.corp_code,
            },
            data,
            predictions: prediction.into_iter().collect(),
            forecast,
            analyzed_at: Utc::now(),
        })
    }
}
