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

//! Parser for converting raw predictor output into [ProteinRecord]s.
//!
//! Predictor output is structured as repeated blocks: a header line starting
//! with '>' carrying the protein identifier, optionally interleaved with '#'
//! comment lines, followed by one whitespace-delimited data line per residue.
//! The columns holding the channel scores depend on the [Predictor].
//!
//! Returns 1 record at a time using next().

use std::io::BufRead;
use std::io::BufReader;
use std::io::Cursor;
use std::io::Read;

use indexmap::IndexMap;

use crate::Predictor;
use crate::ProteinRecord;

type E = Box<dyn std::error::Error>;

const HEADER_SENTINEL: char = '>';
const COMMENT_SENTINEL: char = '#';

/// A data line that does not match the predictor's column layout.
///
/// Aborts the whole parse: residue indexing downstream of a dropped line
/// would be unreliable.
#[derive(Debug, Clone)]
pub struct MalformedLine {
    pub line_number: usize,
    pub protein: String,
    pub reason: String,
}

impl std::fmt::Display for MalformedLine {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.protein.is_empty() {
            write!(f, "malformed line {}: {}", self.line_number, self.reason)
        } else {
            write!(
                f,
                "malformed line {} in record '{}': {}",
                self.line_number, self.protein, self.reason
            )
        }
    }
}

impl std::error::Error for MalformedLine {}

#[derive(Debug, Clone)]
struct MissingScoreColumn {
    column: usize,
}

impl std::fmt::Display for MissingScoreColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "no score at column {}", self.column)
    }
}

impl std::error::Error for MissingScoreColumn {}

/// Parse the channel scores from a single data line
///
/// Reads one score per `(channel, column)` pair from a whitespace-delimited
/// data line, in layout order.
///
pub fn read_scores(
    line: &str,
    columns: &[(&str, usize)],
) -> Result<Vec<f64>, E> {
    let records: Vec<&str> = line.split_whitespace().collect();

    let mut scores: Vec<f64> = Vec::with_capacity(columns.len());
    for (_, column) in columns {
        let record = records.get(*column).ok_or(MissingScoreColumn { column: *column })?;
        scores.push(record.parse::<f64>()?);
    }
    Ok(scores)
}

/// Streaming parser over one predictor output stream.
///
/// Iterates over the protein records in file order. Any [MalformedLine] ends
/// the iteration with an error.
pub struct Parser<'a, R: Read> {
    reader: BufReader<&'a mut R>,
    buf: Cursor<Vec<u8>>,
    pub predictor: Predictor,

    line_number: usize,
}

impl<'a, R: Read> Parser<'a, R> {
    pub fn new(
        predictor: Predictor,
        conn: &'a mut R,
    ) -> Self {
        let reader = BufReader::new(conn);
        let buf = Cursor::new(Vec::<u8>::new());

        Self { reader, buf, predictor, line_number: 0 }
    }

    /// Reads the next line, without the trailing linebreak. None at end of stream.
    fn read_line(&mut self) -> Option<Result<String, E>> {
        let mut line = Cursor::new(Vec::<u8>::new());
        match self.reader.read_until(b'\n', line.get_mut()) {
            Ok(0) => return None,
            Ok(_) => {},
            Err(err) => return Some(Err(Box::new(err))),
        }
        self.line_number += 1;

        let contents: String = line.get_ref().iter().map(|x| *x as char).collect();
        Some(Ok(contents.trim_end_matches(['\n', '\r']).to_string()))
    }

    /// Returns the header line opening the next record, consuming any
    /// comments before it. None at end of stream.
    fn next_header(&mut self) -> Option<Result<String, E>> {
        if !self.buf.get_ref().is_empty() {
            let header: String = self.buf.get_ref().iter().map(|x| *x as char).collect();
            self.buf.get_mut().clear();
            return Some(Ok(header))
        }

        loop {
            let line = match self.read_line()? {
                Ok(line) => line,
                Err(err) => return Some(Err(err)),
            };
            if line.is_empty() || line.starts_with(COMMENT_SENTINEL) {
                continue;
            }
            if line.starts_with(HEADER_SENTINEL) {
                return Some(Ok(line))
            }
            return Some(Err(Box::new(MalformedLine {
                line_number: self.line_number,
                protein: String::new(),
                reason: "data line before first header".to_string(),
            })))
        }
    }
}

impl<R: Read> Iterator for Parser<'_, R> {
    type Item = Result<ProteinRecord, E>;

    fn next(
        &mut self,
    ) -> Option<Self::Item> {
        let header = match self.next_header()? {
            Ok(header) => header,
            Err(err) => return Some(Err(err)),
        };

        let id = header[1..].trim().to_string();
        let mut channels: IndexMap<String, Vec<f64>> = IndexMap::new();
        for (name, _) in self.predictor.channels() {
            channels.insert(name.to_string(), Vec::new());
        }
        let mut record = ProteinRecord { id, channels };

        loop {
            let line = match self.read_line() {
                // End of stream closes the record
                None => return Some(Ok(record)),
                Some(Ok(line)) => line,
                Some(Err(err)) => return Some(Err(err)),
            };

            if line.is_empty() || line.starts_with(COMMENT_SENTINEL) {
                continue;
            }
            if line.starts_with(HEADER_SENTINEL) {
                // Next record starts here; stash the header for the next call
                *self.buf.get_mut() = line.into_bytes();
                return Some(Ok(record));
            }

            match read_scores(&line, self.predictor.channels()) {
                Ok(scores) => {
                    for ((_, sequence), score) in record.channels.iter_mut().zip(scores) {
                        sequence.push(score);
                    }
                },
                Err(err) => {
                    return Some(Err(Box::new(MalformedLine {
                        line_number: self.line_number,
                        protein: record.id.clone(),
                        reason: err.to_string(),
                    })))
                },
            }
        }
    }
}
