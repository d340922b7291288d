use crate::enums::StoreLevel;
use anyhow::{bail, Result};

/// Parsed store row from a CSV import file.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvStoreRow {
    pub name: String,
    pub level: StoreLevel,
}

/// Результат импорта
#[derive(Debug, Clone, Default)]
pub struct CsvImportResult {
    pub rows: Vec<CsvStoreRow>,
    /// 1-based line numbers that failed to parse (header is line 1).
    pub error_lines: Vec<usize>,
}

/// Parse a `name,level` CSV file into importable store rows.
///
/// The header must be exactly `name,level` (case-insensitive). Bad lines are
/// collected, not fatal; the import proceeds with whatever parsed.
pub fn parse_store_csv(text: &str) -> Result<CsvImportResult> {
    let mut lines = text
        .lines()
        .map(|line| line.trim_end_matches('\r').trim())
        .enumerate()
        .filter(|(_, line)| !line.is_empty());

    match lines.next() {
        Some((_, header)) if header.to_lowercase() == "name,level" => {}
        _ => bail!("Invalid CSV format: header must be \"name,level\""),
    }

    let mut result = CsvImportResult::default();
    for (idx, line) in lines {
        let mut cells = line.splitn(2, ',').map(str::trim);
        let name = cells.next().unwrap_or_default();
        let level = cells.next().and_then(StoreLevel::from_code);
        match (name.is_empty(), level) {
            (false, Some(level)) => result.rows.push(CsvStoreRow {
                name: name.to_string(),
                level,
            }),
            _ => result.error_lines.push(idx + 1),
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_rows_and_collects_errors() {
        let text = "name,level\r\nToko Jaya,Ritel\r\nToko Makmur,Ws 1\r\nBad Row,NoSuchLevel\r\n,Ritel\r\n";
        let result = parse_store_csv(text).unwrap();
        assert_eq!(
            result.rows,
            vec![
                CsvStoreRow {
                    name: "Toko Jaya".into(),
                    level: StoreLevel::Ritel
                },
                CsvStoreRow {
                    name: "Toko Makmur".into(),
                    level: StoreLevel::Ws1
                },
            ]
        );
        assert_eq!(result.error_lines, vec![4, 5]);
    }

    #[test]
    fn rejects_wrong_header() {
        assert!(parse_store_csv("store,tier\nToko,Ritel").is_err());
        assert!(parse_store_csv("").is_err());
    }
}
