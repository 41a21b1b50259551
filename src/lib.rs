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

//! disfeat is a library and a command-line client for:
//!
//!   - Parsing the plain text output of per-residue disorder predictors.
//!   - Computing per-protein intrinsic disorder features from the parsed scores.
//!   - Emitting the features as one flat tabular record per protein.
//!
//! The following predictor outputs are supported:
//!   - [IUPred2A](https://iupred2a.elte.hu) (disorder and ANCHOR binding propensity scores)
//!   - [DisEMBL](http://dis.embl.de) (hotloops and REMARK465 scores)
//!
//! ## Usage
//!
//! ### Command line
//!
//! ```text
//! disfeat predictions.txt iupred2a -o features.csv
//! ```
//!
//! ### Rust API
//!
//! The API provides functions for operating on structs that implement
//! [Read] and/or [Write]. These are meant for use cases where an entire
//! predictor output file should be processed:
//!
//!   - [parse_from_read]: parse predictor output into [ProteinRecord]s.
//!   - [features_from_read]: parse and compute one [FeatureRecord](features::FeatureRecord) per protein.
//!   - [features_from_read_to_write]: parse, compute, and format the feature table.
//!
//! For use cases requiring access to a single record at a time, the following
//! structs are provided:
//!
//!   - [Parser](parser::Parser): takes a [Read] containing predictor output and converts it into [ProteinRecord].
//!   - [DisorderFeatures](regions::DisorderFeatures): computes region statistics over one score sequence.
//!
//! See documentation for the appropriate functions or structs for usage examples.
//!

use std::io::Read;
use std::io::Write;

use indexmap::IndexMap;

pub mod features;
pub mod parser;
pub mod printer;
pub mod regions;

use crate::features::aggregate_features;
use crate::features::FeatureRecord;
use crate::printer::format_feature_header;
use crate::printer::format_feature_line;

type E = Box<dyn std::error::Error>;

/// Per-residue scores for one prediction channel.
///
/// The 0-based index of a score is the residue offset in the protein.
pub type ScoreSequence = Vec<f64>;

/// Classification threshold: a score at or above 0.5 counts as disordered.
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Supported disorder predictors.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Predictor {
    #[default]
    Iupred2a,
    Disembl,
}

impl std::str::FromStr for Predictor {
    type Err = String; // Define an error type for parsing failures

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "iupred2a" => Ok(Predictor::Iupred2a),
            "disembl" => Ok(Predictor::Disembl),
            _ => Err(format!("'{}' is not a valid Predictor", s)),
        }
    }
}

impl Predictor {
    /// Channel names and the 0-based data line columns they are read from.
    pub fn channels(&self) -> &'static [(&'static str, usize)] {
        match self {
            Predictor::Iupred2a => &[("iupred2a", 2), ("anchor", 3)],
            Predictor::Disembl => &[("hotloops", 3), ("remark465", 4)],
        }
    }

    /// Channel the disorder statistics are computed from.
    pub fn primary_channel(&self) -> &'static str {
        self.channels()[0].0
    }

    /// Channel whose longest-region centroid is reported alongside the
    /// primary statistics.
    pub fn secondary_channel(&self) -> Option<&'static str> {
        self.channels().get(1).map(|(name, _)| *name)
    }

    /// Header label for the secondary channel centroid column.
    pub fn secondary_column(&self) -> Option<&'static str> {
        match self {
            Predictor::Iupred2a => Some("ANCHOR_position"),
            Predictor::Disembl => Some("REMARK465_position"),
        }
    }
}

/// Scores parsed for a single protein.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProteinRecord {
    /// Identifier from the header line, without the leading '>'.
    pub id: String,
    /// Channel name to per-residue scores, in predictor column order.
    pub channels: IndexMap<String, ScoreSequence>,
}

impl ProteinRecord {
    /// Scores for the named channel, or None if the channel is absent.
    pub fn channel(&self, name: &str) -> Option<&[f64]> {
        self.channels.get(name).map(|scores| scores.as_slice())
    }
}

/// Parse all protein records from [Read](std::io::Read) to memory.
///
/// Returns the records keyed by protein identifier, in file order.
///
/// ## Usage
/// ```rust
/// use disfeat::{parse_from_read, Predictor};
/// use std::io::Cursor;
///
/// // Mock IUPred2A output
/// let mut input_bytes: Vec<u8> = Vec::new();
/// input_bytes.append(&mut b"# IUPred2A long\n".to_vec());
/// input_bytes.append(&mut b">lcl|NC_038371.1_prot_ORF_96972\n".to_vec());
/// input_bytes.append(&mut b"1\tM\t0.9\t0.2\n".to_vec());
/// input_bytes.append(&mut b"2\tE\t0.6\t0.7\n".to_vec());
/// let mut input: Cursor<Vec<u8>> = Cursor::new(input_bytes);
///
/// let records = parse_from_read(Predictor::Iupred2a, &mut input).unwrap();
///
/// let record = &records["lcl|NC_038371.1_prot_ORF_96972"];
/// assert_eq!(record.channel("iupred2a").unwrap(), &[0.9, 0.6]);
/// assert_eq!(record.channel("anchor").unwrap(), &[0.2, 0.7]);
/// ```
///
pub fn parse_from_read<R: Read>(
    predictor: Predictor,
    conn: &mut R,
) -> Result<IndexMap<String, ProteinRecord>, E> {
    let mut records: IndexMap<String, ProteinRecord> = IndexMap::new();
    for record in parser::Parser::new(predictor, conn) {
        let record = record?;
        records.insert(record.id.clone(), record);
    }
    Ok(records)
}

/// Parse protein records from [Read](std::io::Read) and compute their features.
///
/// Returns the feature records in file order together with the identifiers of
/// proteins that were skipped because their features could not be computed.
///
pub fn features_from_read<R: Read>(
    predictor: Predictor,
    threshold: f64,
    conn: &mut R,
) -> Result<(Vec<FeatureRecord>, Vec<String>), E> {
    let records = parse_from_read(predictor.clone(), conn)?;
    Ok(aggregate_features(&records, &predictor, threshold))
}

/// Parse predictor output from [Read](std::io::Read) and write the feature table to [Write](std::io::Write).
///
/// Writes the header row followed by one delimited row per protein, in file
/// order. Returns the identifiers of skipped proteins.
///
/// ## Usage
/// ```rust
/// use disfeat::{features_from_read_to_write, Predictor, DEFAULT_THRESHOLD};
/// use std::io::Cursor;
///
/// // Mock IUPred2A output with one protein
/// let mut input_bytes: Vec<u8> = Vec::new();
/// input_bytes.append(&mut b"# IUPred2A long\n".to_vec());
/// input_bytes.append(&mut b">sp|P04637|P53_HUMAN\n".to_vec());
/// input_bytes.append(&mut b"1\tM\t0.9\t0.2\n".to_vec());
/// input_bytes.append(&mut b"2\tE\t0.6\t0.7\n".to_vec());
/// input_bytes.append(&mut b"3\tE\t0.1\t0.8\n".to_vec());
/// input_bytes.append(&mut b"4\tP\t0.8\t0.9\n".to_vec());
/// let mut input: Cursor<Vec<u8>> = Cursor::new(input_bytes);
///
/// let mut output: Vec<u8> = Vec::new();
/// let skipped = features_from_read_to_write(Predictor::Iupred2a, DEFAULT_THRESHOLD, &mut input, &mut output).unwrap();
///
/// // Expect this table:
/// //   disorder scores 0.9 0.6 0.1 0.8 give regions {0,1} and {3},
/// //   anchor scores 0.2 0.7 0.8 0.9 give the region {1,2,3}
/// let mut expected: Vec<u8> = Vec::new();
/// expected.append(&mut b"Protein,Disorder_content,LCPL,CDl,CDl_position,ANCHOR_position\n".to_vec());
/// expected.append(&mut b"sp|P04637|P53_HUMAN,0.75,0.5,2,0.5,2\n".to_vec());
///
/// assert!(skipped.is_empty());
/// assert_eq!(output, expected);
/// ```
///
pub fn features_from_read_to_write<R: Read, W: Write>(
    predictor: Predictor,
    threshold: f64,
    conn_in: &mut R,
    conn_out: &mut W,
) -> Result<Vec<String>, E> {
    let (features, skipped) = features_from_read(predictor.clone(), threshold, conn_in)?;

    format_feature_header(&predictor, conn_out)?;
    for record in &features {
        format_feature_line(record, conn_out)?;
    }

    conn_out.flush()?;
    Ok(skipped)
}

// Tests
#[cfg(test)]
mod tests {

    #[test]
    fn round_trip_two_proteins() {
        use super::features_from_read;
        use crate::Predictor;

        use std::io::Cursor;

        let mut data: Vec<u8> = b"# IUPred2A long\n".to_vec();
        data.append(&mut b">prot_A\n".to_vec());
        data.append(&mut b"1\tM\t0.9\t0.1\n".to_vec());
        data.append(&mut b"2\tK\t0.8\t0.9\n".to_vec());
        data.append(&mut b"3\tL\t0.2\t0.8\n".to_vec());
        data.append(&mut b"4\tS\t0.7\t0.1\n".to_vec());
        data.append(&mut b"5\tT\t0.6\t0.1\n".to_vec());
        data.append(&mut b">prot_B\n".to_vec());
        data.append(&mut b"1\tM\t0.1\t0.2\n".to_vec());
        data.append(&mut b"2\tV\t0.3\t0.4\n".to_vec());

        let mut input: Cursor<Vec<u8>> = Cursor::new(data);
        let (features, skipped) = features_from_read(Predictor::Iupred2a, 0.5, &mut input).unwrap();

        assert!(skipped.is_empty());
        assert_eq!(features.len(), 2);

        // prot_A: disordered at 0,1,3,4; regions {0,1} and {3,4}; anchor region {1,2}
        let got = &features[0];
        assert_eq!(got.protein, "prot_A");
        assert!((got.disorder_content - 0.8).abs() < 1e-9);
        assert!((got.longest_region_fraction - 0.4).abs() < 1e-9);
        assert_eq!(got.longest_region_len, 2);
        assert!((got.longest_region_centroid - 0.5).abs() < 1e-9);
        assert!((got.secondary_centroid.unwrap() - 1.5).abs() < 1e-9);

        // prot_B: nothing above the threshold on either channel
        let got = &features[1];
        assert_eq!(got.protein, "prot_B");
        assert!(got.disorder_content.abs() < 1e-9);
        assert!(got.longest_region_fraction.abs() < 1e-9);
        assert_eq!(got.longest_region_len, 0);
        assert!(got.longest_region_centroid.abs() < 1e-9);
        assert!(got.secondary_centroid.unwrap().abs() < 1e-9);
    }

    #[test]
    fn output_is_idempotent() {
        use super::features_from_read_to_write;
        use crate::Predictor;

        use std::io::Cursor;

        let mut data: Vec<u8> = b">orf_1 predicted\n".to_vec();
        data.append(&mut b"1 M 0.11 0.52 0.61\n".to_vec());
        data.append(&mut b"2 A 0.95 0.73 0.22\n".to_vec());
        data.append(&mut b"3 R 0.40 0.88 0.91\n".to_vec());
        data.append(&mut b">orf_2 predicted\n".to_vec());
        data.append(&mut b"1 M 0.33 0.21 0.12\n".to_vec());

        let mut first: Vec<u8> = Vec::new();
        let mut input: Cursor<Vec<u8>> = Cursor::new(data.clone());
        features_from_read_to_write(Predictor::Disembl, 0.5, &mut input, &mut first).unwrap();

        let mut second: Vec<u8> = Vec::new();
        let mut input: Cursor<Vec<u8>> = Cursor::new(data);
        features_from_read_to_write(Predictor::Disembl, 0.5, &mut input, &mut second).unwrap();

        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn disembl_table_columns() {
        use super::features_from_read_to_write;
        use crate::Predictor;

        use std::io::Cursor;

        // hotloops at column 3, remark465 at column 4
        let mut data: Vec<u8> = b">orf_1\n".to_vec();
        data.append(&mut b"1 M 0.11 0.52 0.61\n".to_vec());
        data.append(&mut b"2 A 0.95 0.73 0.22\n".to_vec());
        data.append(&mut b"3 R 0.40 0.18 0.91\n".to_vec());
        data.append(&mut b"4 W 0.40 0.68 0.91\n".to_vec());

        let mut input: Cursor<Vec<u8>> = Cursor::new(data);
        let mut output: Vec<u8> = Vec::new();
        features_from_read_to_write(Predictor::Disembl, 0.5, &mut input, &mut output).unwrap();

        // hotloops 0.52 0.73 0.18 0.68: regions {0,1} and {3}
        // remark465 0.61 0.22 0.91 0.91: regions {0} and {2,3}
        let mut expected: Vec<u8> = b"Protein,Disorder_content,LCPL,CDl,CDl_position,REMARK465_position\n".to_vec();
        expected.append(&mut b"orf_1,0.75,0.5,2,0.5,2.5\n".to_vec());

        assert_eq!(output, expected);
    }

    #[test]
    fn malformed_line_aborts_parse() {
        use super::features_from_read;
        use crate::Predictor;

        use std::io::Cursor;

        let mut data: Vec<u8> = b">prot_A\n".to_vec();
        data.append(&mut b"1\tM\t0.9\t0.1\n".to_vec());
        data.append(&mut b"2\tK\t0.8\n".to_vec());

        let mut input: Cursor<Vec<u8>> = Cursor::new(data);
        let got = features_from_read(Predictor::Iupred2a, 0.5, &mut input);

        assert!(got.is_err());
        let message = got.unwrap_err().to_string();
        assert!(message.contains("line 3"));
        assert!(message.contains("prot_A"));
    }

    #[test]
    fn predictor_from_str() {
        use crate::Predictor;

        assert_eq!("iupred2a".parse::<Predictor>().unwrap(), Predictor::Iupred2a);
        assert_eq!("disembl".parse::<Predictor>().unwrap(), Predictor::Disembl);
        assert!("espritz".parse::<Predictor>().is_err());
    }
}
