use std::fmt;

use serde::{Deserialize, Serialize};

/// Eight-digit DART corporation code (e.g. "00126380")
pub type CorpCode = String;

/// Periodic report a filing belongs to (`reprt_code`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ReportCode {
    /// Business (annual) report
    #[default]
    #[serde(rename = "11011")]
    Annual,
    /// Half-year report
    #[serde(rename = "11012")]
    HalfYear,
    /// First-quarter report
    #[serde(rename = "11013")]
    FirstQuarter,
    /// Third-quarter report
    #[serde(rename = "11014")]
    ThirdQuarter,
}

impl ReportCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportCode::Annual => "11011",
            ReportCode::HalfYear => "11012",
            ReportCode::FirstQuarter => "11013",
            ReportCode::ThirdQuarter => "11014",
        }
    }
}

impl fmt::Display for ReportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_code_wire_values() {
        assert_eq!(ReportCode::Annual.as_str(), "11011");
        assert_eq!(ReportCode::ThirdQuarter.to_string(), "11014");
        assert_eq!(
            serde_json::to_string(&ReportCode::HalfYear).unwrap(),
            "\"11012\""
        );
        assert_eq!(
            serde_json::from_str::<ReportCode>("\"11013\"").unwrap(),
            ReportCode::FirstQuarter
        );
    }

    #[test]
    fn test_report_code_default_is_annual() {
        assert_eq!(ReportCode::default(), ReportCode::Annual);
    }
}
