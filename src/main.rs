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
use std::fs::File;
use std::io::BufWriter;

use clap::Parser;

mod cli;

/// Initializes the logger with verbosity given in `log_max_level`.
fn init_log(log_max_level: usize) {
    stderrlog::new()
    .module(module_path!())
    .quiet(false)
    .verbosity(log_max_level)
    .timestamp(stderrlog::Timestamp::Off)
    .init()
    .unwrap();
}

fn main() {
    let cli = cli::Cli::parse();
    init_log(if cli.verbose { 2 } else { 1 });

    let predictor = cli.predictor.parse::<disfeat::Predictor>().expect("Valid predictor name");

    let mut conn_in = File::open(&cli.input_file).expect("Readable input file");

    let skipped = if let Some(file) = &cli.out_file {
        let f = File::create(file).unwrap();
        let mut conn_out = BufWriter::new(f);
        disfeat::features_from_read_to_write(predictor, cli.threshold, &mut conn_in, &mut conn_out).unwrap()
    } else {
        let stdout = std::io::stdout();
        let mut conn_out = BufWriter::new(stdout.lock());
        disfeat::features_from_read_to_write(predictor, cli.threshold, &mut conn_in, &mut conn_out).unwrap()
    };

    if !skipped.is_empty() {
        log::warn!("{} records skipped: {}", skipped.len(), skipped.join(", "));
    }
}
