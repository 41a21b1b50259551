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
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(version)]
pub struct Cli {
    // Raw predictor output
    #[arg(required = true, help = "Predictor output file")]
    pub input_file: PathBuf,

    // Program that produced the predictions
    #[arg(required = true, help = "Predictor that produced the input (iupred2a or disembl)")]
    pub predictor: String,

    // Output file path, stdout if not given
    #[arg(short = 'o', long = "output", required = false)]
    pub out_file: Option<PathBuf>,

    // Disorder classification threshold (inclusive)
    #[arg(long = "threshold", default_value_t = disfeat::DEFAULT_THRESHOLD)]
    pub threshold: f64,

    // Verbosity
    #[arg(long = "verbose", default_value_t = false)]
    pub verbose: bool,
}
