//! Reader for the DART corporation-code archive.
//!
//! `corpCode.xml` is served as a zip archive holding one XML document:
//!
//! ```text
//! <result>
//!   <list>
//!     <corp_code>00126380</corp_code>
//!     <corp_name>삼성전자</corp_name>
//!     <stock_code>005930</stock_code>
//!     <modify_date>20230110</modify_date>
//!   </list>
//!   ...
//! </result>
//! ```

use std::io::{Cursor, Read};

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use zip::ZipArchive;

use crate::errors::DisclosureError;
use crate::models::CorpCodeEntry;

lazy_static! {
    static ref LIST_REGEX: Regex =
        Regex::new(r"(?s)<list>(.*?)</list>").expect("Invalid regex pattern");
    static ref FIELD_REGEX: Regex =
        Regex::new(r"(?s)<(corp_code|corp_name|stock_code|modify_date)>(.*?)</")
            .expect("Invalid regex pattern");
}

/// Unpack the archive and parse the XML document inside it.
pub fn read_corp_code_archive(bytes: &[u8]) -> Result<Vec<CorpCodeEntry>, DisclosureError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| DisclosureError::CorpCodeIndex(format!("Failed to read ZIP: {}", e)))?;

    if archive.is_empty() {
        return Err(DisclosureError::CorpCodeIndex(
            "Archive contains no files".to_string(),
        ));
    }

    let mut file = archive
        .by_index(0)
        .map_err(|e| DisclosureError::CorpCodeIndex(format!("Failed to access file: {}", e)))?;

    let mut xml = String::new();
    file.read_to_string(&mut xml)
        .map_err(|e| DisclosureError::CorpCodeIndex(format!("Failed to read XML: {}", e)))?;

    Ok(parse_corp_code_xml(&xml))
}

/// Parse the `<list>` entries of the corporation-code document.
///
/// Entries without a code or a name are skipped.
pub fn parse_corp_code_xml(xml: &str) -> Vec<CorpCodeEntry> {
    LIST_REGEX
        .captures_iter(xml)
        .filter_map(|list| {
            let body = list.get(1)?.as_str();

            let mut corp_code = None;
            let mut corp_name = None;
            let mut stock_code = None;
            let mut modify_date = None;

            for field in FIELD_REGEX.captures_iter(body) {
                let value = field[2].trim();
                match &field[1] {
                    "corp_code" => corp_code = Some(value.to_string()),
                    "corp_name" => corp_name = Some(unescape_xml(value)),
                    "stock_code" => stock_code = Some(value.to_string()),
                    "modify_date" => {
                        modify_date = NaiveDate::parse_from_str(value, "%Y%m%d").ok()
                    }
                    _ => {}
                }
            }

            let corp_code = corp_code.filter(|c| !c.is_empty())?;
            let corp_name = corp_name.filter(|n| !n.is_empty())?;

            let mut entry = CorpCodeEntry::new(corp_code, corp_name)
                .with_stock_code(stock_code.unwrap_or_default());
            entry.modify_date = modify_date;
            Some(entry)
        })
        .collect()
}

fn unescape_xml(value: &str) -> String {
    value
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<result>
    <list>
        <corp_code>00126380</corp_code>
        <corp_name>삼성전자</corp_name>
        <corp_eng_name>SAMSUNG ELECTRONICS CO,.LTD</corp_eng_name>
        <stock_code>005930</stock_code>
        <modify_date>20230110</modify_date>
    </list>
    <list>
        <corp_code>00434003</corp_code>
        <corp_name>다코</corp_name>
        <corp_eng_name>Daco corporation</corp_eng_name>
        <stock_code> </stock_code>
        <modify_date>20170630</modify_date>
    </list>
    <list>
        <corp_code></corp_code>
        <corp_name>코드없음</corp_name>
    </list>
    <list>
        <corp_code>00999999</corp_code>
        <corp_name>A&amp;B 홀딩스</corp_name>
        <stock_code></stock_code>
        <modify_date>bad</modify_date>
    </list>
</result>"#;

    #[test]
    fn test_parse_corp_code_xml() {
        let entries = parse_corp_code_xml(SAMPLE_XML);
        assert_eq!(entries.len(), 3);

        assert_eq!(entries[0].corp_code, "00126380");
        assert_eq!(entries[0].corp_name, "삼성전자");
        assert_eq!(entries[0].stock_code.as_deref(), Some("005930"));
        assert_eq!(
            entries[0].modify_date,
            NaiveDate::from_ymd_opt(2023, 1, 10)
        );

        assert_eq!(entries[1].corp_name, "다코");
        assert!(!entries[1].is_listed());

        assert_eq!(entries[2].corp_name, "A&B 홀딩스");
        assert!(entries[2].modify_date.is_none());
    }

    #[test]
    fn test_read_corp_code_archive() {
        let mut buffer = Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut buffer);
            writer
                .start_file("CORPCODE.xml", zip::write::SimpleFileOptions::default())
                .unwrap();
            writer.write_all(SAMPLE_XML.as_bytes()).unwrap();
            writer.finish().unwrap();
        }

        let entries = read_corp_code_archive(buffer.get_ref()).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].corp_code, "00126380");
    }

    #[test]
    fn test_read_rejects_non_archive_body() {
        let body = br#"<?xml version="1.0"?><result><status>010</status></result>"#;
        let result = read_corp_code_archive(body);
        assert!(matches!(result, Err(DisclosureError::CorpCodeIndex(_))));
    }
}
