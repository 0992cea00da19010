//! Tests for the annual series builder.

#[cfg(test)]
mod tests {
    use crate::extraction::{
        extract_employee_records, extract_financial_records, EmployeeRecord, FinancialRecord,
        StatementKind, StatementType,
    };
    use hireforecast_disclosure::{DisclosureResponse, RawEmployeeRecord, RawFinancialRecord};
    use crate::series::build_annual_summaries;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn employee(year: &str, count: u64) -> EmployeeRecord {
        EmployeeRecord {
            year: year.to_string(),
            employment_type: "전사".to_string(),
            gender: "남".to_string(),
            employee_count: count,
            average_service_years: None,
            average_salary: None,
            total_payroll: None,
            note: String::new(),
        }
    }

    fn financial(
        year: &str,
        name: &str,
        statement_type: StatementType,
        amount: Option<Decimal>,
    ) -> FinancialRecord {
        FinancialRecord {
            year: year.to_string(),
            account_id: String::new(),
            account_name: name.to_string(),
            statement_type,
            statement_kind: StatementKind::IncomeStatement,
            current_label: String::new(),
            current_amount: amount,
            prior_label: String::new(),
            prior_amount: None,
            prior_prior_label: String::new(),
            prior_prior_amount: None,
            order: String::new(),
        }
    }

    #[test]
    fn test_empty_inputs_produce_no_rows() {
        assert!(build_annual_summaries("삼성전자", "00126380", &[], &[]).is_empty());
    }

    #[test]
    fn test_one_row_per_year_sorted() {
        let employees = vec![employee("2023", 10), employee("2021", 5), employee("2023", 7)];
        let financials = vec![financial(
            "2022",
            "매출액",
            StatementType::Consolidated,
            Some(dec!(100)),
        )];

        let summaries = build_annual_summaries("A", "1", &employees, &financials);
        let years: Vec<&str> = summaries.iter().map(|s| s.year.as_str()).collect();
        assert_eq!(years, vec!["2021", "2022", "2023"]);

        assert_eq!(summaries[0].total_employees, 5);
        assert_eq!(summaries[1].total_employees, 0);
        assert_eq!(summaries[1].revenue, dec!(100));
        assert_eq!(summaries[2].total_employees, 17);
        assert_eq!(summaries[2].revenue, Decimal::ZERO);
        assert_eq!(summaries[2].company_name, "A");
        assert_eq!(summaries[2].company_code, "1");
    }

    #[test]
    fn test_consolidated_preferred_over_standalone() {
        let financials = vec![
            financial("2023", "매출액", StatementType::Consolidated, Some(dec!(1000))),
            financial("2023", "매출액", StatementType::Standalone, Some(dec!(600))),
            financial("2023", "영업이익", StatementType::Standalone, Some(dec!(50))),
        ];

        let summaries = build_annual_summaries("A", "1", &[], &financials);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].revenue, dec!(1000));
        // Standalone lines are never mixed in, even for accounts CFS lacks.
        assert_eq!(summaries[0].operating_profit, Decimal::ZERO);
    }

    #[test]
    fn test_standalone_used_when_no_consolidated() {
        let financials = vec![
            financial("2022", "매출액", StatementType::Standalone, Some(dec!(600))),
            financial("2022", "영업이익", StatementType::Standalone, Some(dec!(-40))),
            financial("2022", "당기순이익", StatementType::Standalone, None),
            financial("2022", "자산총계", StatementType::Unknown, Some(dec!(9999))),
        ];

        let summary = &build_annual_summaries("A", "1", &[], &financials)[0];
        assert_eq!(summary.revenue, dec!(600));
        assert_eq!(summary.operating_profit, dec!(-40));
        assert_eq!(summary.net_income, Decimal::ZERO);
        assert_eq!(summary.total_assets, Decimal::ZERO);
    }

    #[test]
    fn test_amounts_summed_across_matching_lines() {
        let financials = vec![
            financial("2023", "매출액", StatementType::Consolidated, Some(dec!(300))),
            financial("2023", "매출액(수익)", StatementType::Consolidated, Some(dec!(200))),
            financial("2023", "자산총계", StatementType::Consolidated, Some(dec!(7))),
        ];

        let summary = &build_annual_summaries("A", "1", &[], &financials)[0];
        assert_eq!(summary.revenue, dec!(500));
        assert_eq!(summary.total_assets, dec!(7));
    }

    #[test]
    fn test_average_salary_weighted_by_payroll() {
        let mut a = employee("2023", 100);
        a.total_payroll = Some(dec!(10000000000));
        a.average_salary = Some(dec!(999));
        let mut b = employee("2023", 50);
        b.total_payroll = Some(dec!(2500000000));

        let summary = &build_annual_summaries("A", "1", &[a, b], &[])[0];
        // 12.5bn / 150 / 1m = 83.333...
        assert_eq!(summary.average_salary, dec!(83.33));
    }

    #[test]
    fn test_average_salary_falls_back_to_mean_of_averages() {
        let mut a = employee("2023", 0);
        a.average_salary = Some(dec!(100.005));
        let mut b = employee("2023", 0);
        b.average_salary = Some(dec!(50));
        let c = employee("2023", 0);

        let summary = &build_annual_summaries("A", "1", &[a, b, c], &[])[0];
        // (100.005 + 50) / 2 = 75.0025
        assert_eq!(summary.average_salary, dec!(75.00));
    }

    #[test]
    fn test_average_salary_rounds_half_away_from_zero() {
        let mut a = employee("2023", 0);
        a.average_salary = Some(dec!(80.125));

        let summary = &build_annual_summaries("A", "1", &[a], &[])[0];
        assert_eq!(summary.average_salary, dec!(80.13));
    }

    #[test]
    fn test_average_salary_zero_without_data() {
        let summary = &build_annual_summaries("A", "1", &[employee("2023", 10)], &[])[0];
        assert_eq!(summary.average_salary, Decimal::ZERO);
    }

    #[test]
    fn test_growth_rates() {
        let employees = vec![employee("2021", 100), employee("2022", 110), employee("2023", 99)];
        let financials = vec![
            financial("2021", "매출액", StatementType::Consolidated, Some(dec!(0))),
            financial("2022", "매출액", StatementType::Consolidated, Some(dec!(200))),
            financial("2023", "매출액", StatementType::Consolidated, Some(dec!(150))),
        ];

        let summaries = build_annual_summaries("A", "1", &employees, &financials);

        let first = &summaries[0];
        assert!(first.employee_growth_rate.is_none());
        assert!(first.salary_growth_rate.is_none());
        assert!(first.revenue_growth_rate.is_none());
        assert!(first.operating_profit_growth_rate.is_none());

        assert_eq!(summaries[1].employee_growth_rate, Some(dec!(10)));
        // Previous revenue is zero.
        assert_eq!(summaries[1].revenue_growth_rate, None);
        // Salaries and profit are zero throughout.
        assert_eq!(summaries[1].salary_growth_rate, None);
        assert_eq!(summaries[1].operating_profit_growth_rate, None);

        assert_eq!(summaries[2].employee_growth_rate, Some(dec!(-10)));
        assert_eq!(summaries[2].revenue_growth_rate, Some(dec!(-25)));
    }

    #[test]
    fn test_growth_against_negative_profit_uses_magnitude() {
        let financials = vec![
            financial("2022", "영업이익", StatementType::Consolidated, Some(dec!(-100))),
            financial("2023", "영업이익", StatementType::Consolidated, Some(dec!(50))),
        ];
        let summaries = build_annual_summaries("A", "1", &[], &financials);
        assert_eq!(summaries[1].operating_profit_growth_rate, Some(dec!(150)));
    }

    #[test]
    fn test_build_is_idempotent() {
        let employees = vec![employee("2022", 3), employee("2023", 4)];
        let financials = vec![financial(
            "2023",
            "당기순이익",
            StatementType::Standalone,
            Some(dec!(12)),
        )];

        let first = build_annual_summaries("A", "1", &employees, &financials);
        let second = build_annual_summaries("A", "1", &employees, &financials);
        assert_eq!(first, second);
    }

    #[test]
    fn test_amounts_at_decimal_limit_saturate() {
        let response = DisclosureResponse::success(vec![
            RawFinancialRecord {
                account_name: Some("매출액".to_string()),
                statement_type: Some("CFS".to_string()),
                current_amount: Some("79,228,162,514,264,337,593,543,950,335".to_string()),
                ..Default::default()
            },
            RawFinancialRecord {
                account_name: Some("매출액".to_string()),
                statement_type: Some("CFS".to_string()),
                current_amount: Some("1".to_string()),
                ..Default::default()
            },
        ]);
        let financials = extract_financial_records(&response, "2023");

        let summaries = build_annual_summaries("A", "1", &[], &financials);
        assert_eq!(summaries[0].revenue, Decimal::MAX);
    }

    #[test]
    fn test_headcount_at_integer_limit_saturates() {
        let row = RawEmployeeRecord {
            total_count: Some("18446744073709551615".to_string()),
            ..Default::default()
        };
        let response = DisclosureResponse::success(vec![row.clone(), row]);
        let employees = extract_employee_records(&response, "2023");

        let summaries = build_annual_summaries("A", "1", &employees, &[]);
        assert_eq!(summaries[0].total_employees, u64::MAX);
    }

    #[test]
    fn test_salary_inputs_at_decimal_limit_do_not_panic() {
        let mut payroll = employee("2023", 2);
        payroll.total_payroll = Some(Decimal::MAX);
        let mut averages = employee("2022", 0);
        averages.average_salary = Some(Decimal::MAX);

        let summaries = build_annual_summaries(
            "A",
            "1",
            &[payroll.clone(), payroll, averages.clone(), averages],
            &[],
        );
        assert_eq!(summaries.len(), 2);
        assert!(summaries.iter().all(|s| s.average_salary > Decimal::ZERO));
    }

    #[test]
    fn test_growth_rate_overflow_is_null() {
        let financials = vec![
            financial("2022", "영업이익", StatementType::Consolidated, Some(dec!(-1))),
            financial("2023", "영업이익", StatementType::Consolidated, Some(Decimal::MAX)),
        ];
        let summaries = build_annual_summaries("A", "1", &[], &financials);
        assert_eq!(summaries[1].operating_profit_growth_rate, None);
    }
}
