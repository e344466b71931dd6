#[macro_use]
extern crate pairseq_benchmarks;
use pairseq_benchmarks::{MicroBenchmark, MicroBenchmarkArgs};
use std::fs::File;

fn main() {
    env_logger::init();

    let mut args = match MicroBenchmarkArgs::default("PairedSequence") {
        Ok(args) => args,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    microbenchmark!(
        "paired_sequence",
        args.num_pairs,
        args.bench,
        &mut args.file,
        args.header
    );
}
