use crate::enums::{ProductType, StoreLevel};
use anyhow::{bail, Result};

use super::{ProductDto, TargetCoverage};

const EXPECTED_HEADER: &str = "name,baseprice,targetws1,targetws2,targetritell,targetritel,targetothers";

/// Column order of the per-level target columns in the import file.
const TARGET_COLUMNS: [StoreLevel; 5] = [
    StoreLevel::Ws1,
    StoreLevel::Ws2,
    StoreLevel::RitelL,
    StoreLevel::Ritel,
    StoreLevel::Others,
];

#[derive(Debug, Clone, Default)]
pub struct CsvImportResult {
    pub rows: Vec<ProductDto>,
    /// 1-based line numbers that failed to parse (header is line 1).
    pub error_lines: Vec<usize>,
}

/// Parse a Drive-product bulk import file.
///
/// An empty target cell means "no target for that tier" (the level stays
/// absent from the coverage map); `0` means an explicit 0% target.
pub fn parse_product_csv(text: &str) -> Result<CsvImportResult> {
    let mut lines = text
        .lines()
        .map(|line| line.trim_end_matches('\r').trim())
        .enumerate()
        .filter(|(_, line)| !line.is_empty());

    match lines.next() {
        Some((_, header)) if header.to_lowercase() == EXPECTED_HEADER => {}
        _ => bail!("Invalid CSV format: header must be \"{}\"", EXPECTED_HEADER),
    }

    let mut result = CsvImportResult::default();
    for (idx, line) in lines {
        let cells: Vec<&str> = line.split(',').map(str::trim).collect();
        if cells.len() != 7 {
            result.error_lines.push(idx + 1);
            continue;
        }

        let name = cells[0];
        let base_price = cells[1].parse::<f64>().ok();
        let (name, base_price) = match (name.is_empty(), base_price) {
            (false, Some(price)) => (name, price),
            _ => {
                result.error_lines.push(idx + 1);
                continue;
            }
        };

        let mut target_coverage = TargetCoverage::new();
        for (cell, level) in cells[2..].iter().zip(TARGET_COLUMNS) {
            if let Ok(pct) = cell.parse::<f64>() {
                if (0.0..=100.0).contains(&pct) {
                    target_coverage.set(level, pct);
                }
            }
        }

        result.rows.push(ProductDto {
            id: None,
            name: name.to_string(),
            product_type: ProductType::Drive,
            base_price,
            target_coverage,
            comment: None,
        });
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rows_with_sparse_targets() {
        let text = format!(
            "{}\nSEDAAP MIE GORENG,95000,70,60,50,40,\nKOPI SUSU,12000,,,,,0\n",
            EXPECTED_HEADER
        );
        let result = parse_product_csv(&text).unwrap();
        assert_eq!(result.rows.len(), 2);
        assert!(result.error_lines.is_empty());

        let first = &result.rows[0];
        assert_eq!(first.name, "SEDAAP MIE GORENG");
        assert_eq!(first.product_type, ProductType::Drive);
        assert_eq!(first.target_coverage.get(StoreLevel::Ws1), Some(70.0));
        // Empty trailing cell: no target for Others.
        assert_eq!(first.target_coverage.get(StoreLevel::Others), None);

        // Explicit zero stays present in the map.
        let second = &result.rows[1];
        assert_eq!(second.target_coverage.get(StoreLevel::Others), Some(0.0));
        assert_eq!(second.target_coverage.len(), 1);
    }

    #[test]
    fn bad_rows_are_reported_by_line_number() {
        let text = format!("{}\nonly,two\n,95000,,,,,\nOK,1000,,,,,\n", EXPECTED_HEADER);
        let result = parse_product_csv(&text).unwrap();
        assert_eq!(result.rows.len(), 1);
        assert_eq!(result.error_lines, vec![2, 3]);
    }

    #[test]
    fn rejects_wrong_header() {
        assert!(parse_product_csv("name,price\nfoo,1").is_err());
    }
}
