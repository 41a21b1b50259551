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

//! Feature aggregation: one [FeatureRecord] per parsed protein.

use indexmap::IndexMap;

use crate::regions::DisorderFeatures;
use crate::regions::EmptySequence;
use crate::Predictor;
use crate::ProteinRecord;

type E = Box<dyn std::error::Error>;

/// A channel required by the predictor layout is absent from a record.
#[derive(Debug, Clone)]
pub struct MissingChannel {
    pub protein: String,
    pub channel: String,
}

impl std::fmt::Display for MissingChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "channel '{}' missing from record '{}'", self.channel, self.protein)
    }
}

impl std::error::Error for MissingChannel {}

/// Disorder features for one protein.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeatureRecord {
    /// Protein identifier, verbatim from the predictor output.
    pub protein: String,
    /// Fraction of residues classified disordered.
    pub disorder_content: f64,
    /// Longest continuous disordered region as a fraction of protein length.
    pub longest_region_fraction: f64,
    /// Residue count of the longest continuous disordered region.
    pub longest_region_len: usize,
    /// Mean residue index of the longest region; 0.0 when there is none.
    pub longest_region_centroid: f64,
    /// Longest-region centroid of the secondary channel, if the predictor
    /// has one.
    pub secondary_centroid: Option<f64>,
}

/// Compute the feature record for a single protein.
///
/// Terminates with [MissingChannel] if a channel of the predictor layout is
/// absent, or with [EmptySequence](crate::regions::EmptySequence) if a
/// channel holds no scores.
///
pub fn features_for_record(
    record: &ProteinRecord,
    predictor: &Predictor,
    threshold: f64,
) -> Result<FeatureRecord, E> {
    let primary = predictor.primary_channel();
    let scores = record.channel(primary).ok_or_else(|| MissingChannel {
        protein: record.id.clone(),
        channel: primary.to_string(),
    })?;

    let analysis = DisorderFeatures::new(scores, threshold);
    let disorder_content = analysis.disorder_content()?;
    let longest = analysis.longest_region();

    let secondary_centroid = match predictor.secondary_channel() {
        Some(name) => {
            let scores = record.channel(name).ok_or_else(|| MissingChannel {
                protein: record.id.clone(),
                channel: name.to_string(),
            })?;
            if scores.is_empty() {
                return Err(Box::new(EmptySequence {}))
            }
            Some(DisorderFeatures::new(scores, threshold).longest_region_centroid())
        },
        None => None,
    };

    Ok(FeatureRecord {
        protein: record.id.clone(),
        disorder_content,
        longest_region_fraction: longest.len as f64 / scores.len() as f64,
        longest_region_len: longest.len,
        longest_region_centroid: longest.centroid(),
        secondary_centroid,
    })
}

/// Compute features for every parsed protein, in parser order.
///
/// A protein whose features cannot be computed does not end the run: its row
/// is skipped and its identifier returned alongside the dataset.
///
pub fn aggregate_features(
    records: &IndexMap<String, ProteinRecord>,
    predictor: &Predictor,
    threshold: f64,
) -> (Vec<FeatureRecord>, Vec<String>) {
    let mut features: Vec<FeatureRecord> = Vec::with_capacity(records.len());
    let mut skipped: Vec<String> = Vec::new();

    for record in records.values() {
        match features_for_record(record, predictor, threshold) {
            Ok(feature) => features.push(feature),
            Err(err) => {
                log::warn!("skipping record '{}': {}", record.id, err);
                skipped.push(record.id.clone());
            },
        }
    }

    (features, skipped)
}
