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

//! Region statistics over one per-residue score sequence.
//!
//! A residue is classified disordered when its score is at or above the
//! threshold. A continuous disordered region is a maximal run of consecutive
//! disordered residues; an isolated disordered residue is a run of length 1.

type E = Box<dyn std::error::Error>;

/// A score sequence with zero length.
#[derive(Debug, Clone)]
pub struct EmptySequence;

impl std::fmt::Display for EmptySequence {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "empty score sequence")
    }
}

impl std::error::Error for EmptySequence {}

/// A maximal run of consecutive disordered residues.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Region {
    /// Index of the first residue in the run.
    pub start: usize,
    /// Number of residues in the run.
    pub len: usize,
}

impl Region {
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Mean residue index of the run; 0.0 for an empty run.
    ///
    /// Callers must check [is_empty](Region::is_empty) to tell the empty
    /// sentinel apart from a run that sits at the start of the sequence.
    pub fn centroid(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.start as f64 + (self.len as f64 - 1.0) / 2.0
        }
    }
}

/// Disorder statistics over one score sequence.
pub struct DisorderFeatures<'a> {
    scores: &'a [f64],
    threshold: f64,
}

impl<'a> DisorderFeatures<'a> {
    pub fn new(
        scores: &'a [f64],
        threshold: f64,
    ) -> Self {
        Self { scores, threshold }
    }

    /// Fraction of residues with a score at or above the threshold.
    pub fn disorder_content(&self) -> Result<f64, E> {
        if self.scores.is_empty() {
            return Err(Box::new(EmptySequence {}))
        }
        let disordered = self.scores.iter().filter(|score| **score >= self.threshold).count();
        Ok(disordered as f64 / self.scores.len() as f64)
    }

    /// All maximal runs of consecutive disordered residues, in sequence order.
    pub fn regions(&self) -> Vec<Region> {
        let mut regions: Vec<Region> = Vec::new();
        let mut current: Option<Region> = None;

        for (index, score) in self.scores.iter().enumerate() {
            if *score >= self.threshold {
                match current.as_mut() {
                    Some(region) => region.len += 1,
                    None => current = Some(Region { start: index, len: 1 }),
                }
            } else if let Some(region) = current.take() {
                regions.push(region);
            }
        }
        // Close the run still open when the sequence ends disordered
        if let Some(region) = current.take() {
            regions.push(region);
        }

        regions
    }

    /// The run with the greatest residue count; ties break towards the
    /// lowest start index. Empty region if no residue is disordered.
    pub fn longest_region(&self) -> Region {
        let mut longest = Region::default();
        for region in self.regions() {
            if region.len > longest.len {
                longest = region;
            }
        }
        longest
    }

    /// Length of the longest run as a fraction of the sequence length.
    pub fn longest_region_fraction(&self) -> Result<f64, E> {
        if self.scores.is_empty() {
            return Err(Box::new(EmptySequence {}))
        }
        Ok(self.longest_region().len as f64 / self.scores.len() as f64)
    }

    /// Mean residue index of the longest run; 0.0 when there is none.
    pub fn longest_region_centroid(&self) -> f64 {
        self.longest_region().centroid()
    }
}
