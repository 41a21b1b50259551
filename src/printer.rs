// disfeat: Intrinsic disorder features from IUPred2A and DisEMBL predictions.
//
// Copyright 2026 disfeat contributors.
//
// Copyrights in this project are retained by contributors. No copyright assignment
// is required to contribute to this project.
//
// Except as otherwise noted (below and/or in individual files), this
// project is licensed under the Apache License, Version 2.0
// <LICENSE-APACHE> or <http://www.apache.org/licenses/LICENSE-2.0> or
// the MIT license, <LICENSE-MIT> or <http://opensource.org/licenses/MIT>,
// at your option.
//

//! Printer for formatting [FeatureRecord]s as delimited text.

use std::io::Write;

use crate::features::FeatureRecord;
use crate::Predictor;

type E = Box<dyn std::error::Error>;

const COLUMNS: [&str; 5] = ["Protein", "Disorder_content", "LCPL", "CDl", "CDl_position"];

/// Format the header row of the feature table
///
/// Writes the fixed feature columns plus the predictor's secondary centroid
/// column to `conn`.
///
pub fn format_feature_header<W: Write>(
    predictor: &Predictor,
    conn: &mut W,
) -> Result<(), E> {
    let separator: char = ',';
    let mut formatted: String = COLUMNS.join(&separator.to_string());

    if let Some(column) = predictor.secondary_column() {
        formatted += &separator.to_string();
        formatted += column;
    }
    formatted += "\n";

    conn.write_all(formatted.as_bytes())?;
    Ok(())
}

/// Format a single feature record as a delimited line
///
/// Writes bytes containing the formatted line with the contents of `record`
/// to `conn`. Numeric fields use the default decimal representation.
///
pub fn format_feature_line<W: Write>(
    record: &FeatureRecord,
    conn: &mut W,
) -> Result<(), E> {
    let separator: char = ',';
    let mut formatted: String = String::new();

    formatted += &record.protein;
    formatted += &separator.to_string();
    formatted += &record.disorder_content.to_string();
    formatted += &separator.to_string();
    formatted += &record.longest_region_fraction.to_string();
    formatted += &separator.to_string();
    formatted += &record.longest_region_len.to_string();
    formatted += &separator.to_string();
    formatted += &record.longest_region_centroid.to_string();

    if let Some(centroid) = record.secondary_centroid {
        formatted += &separator.to_string();
        formatted += &centroid.to_string();
    }
    formatted += "\n";

    conn.write_all(formatted.as_bytes())?;
    Ok(())
}

// Tests
#[cfg(test)]
mod tests {

    #[test]
    fn format_header_iupred2a() {
        use super::format_feature_header;
        use crate::Predictor;

        let expected: Vec<u8> = b"Protein,Disorder_content,LCPL,CDl,CDl_position,ANCHOR_position\n".to_vec();

        let mut got: Vec<u8> = Vec::new();
        format_feature_header(&Predictor::Iupred2a, &mut got).unwrap();

        assert_eq!(got, expected);
    }

    #[test]
    fn format_header_disembl() {
        use super::format_feature_header;
        use crate::Predictor;

        let expected: Vec<u8> = b"Protein,Disorder_content,LCPL,CDl,CDl_position,REMARK465_position\n".to_vec();

        let mut got: Vec<u8> = Vec::new();
        format_feature_header(&Predictor::Disembl, &mut got).unwrap();

        assert_eq!(got, expected);
    }

    #[test]
    fn format_line_with_secondary() {
        use super::format_feature_line;
        use crate::features::FeatureRecord;

        let data = FeatureRecord {
            protein: "sp|P04637|P53_HUMAN".to_string(),
            disorder_content: 0.75,
            longest_region_fraction: 0.5,
            longest_region_len: 2,
            longest_region_centroid: 0.5,
            secondary_centroid: Some(2.0),
        };

        let expected: Vec<u8> = b"sp|P04637|P53_HUMAN,0.75,0.5,2,0.5,2\n".to_vec();

        let mut got: Vec<u8> = Vec::new();
        format_feature_line(&data, &mut got).unwrap();

        assert_eq!(got, expected);
    }

    #[test]
    fn format_line_without_secondary() {
        use super::format_feature_line;
        use crate::features::FeatureRecord;

        let data = FeatureRecord {
            protein: "orf_1".to_string(),
            disorder_content: 0.0,
            longest_region_fraction: 0.0,
            longest_region_len: 0,
            longest_region_centroid: 0.0,
            secondary_centroid: None,
        };

        let expected: Vec<u8> = b"orf_1,0,0,0,0\n".to_vec();

        let mut got: Vec<u8> = Vec::new();
        format_feature_line(&data, &mut got).unwrap();

        assert_eq!(got, expected);
    }
}
