use pairseq::PairedSequence;
use rand::SeedableRng;
use std::fs::File;
use std::io::Write;
use std::time::Instant;
use std::vec::IntoIter;

mod args;
pub use args::MicroBenchmarkArgs;

fn shuffled(n: usize, seed: u8) -> IntoIter<usize> {
    let mut keys: Vec<usize> = (0..n).collect();
    let mut rng = rand::rngs::StdRng::from_seed([seed; 32]);
    rand::seq::SliceRandom::shuffle(keys.as_mut_slice(), &mut rng);
    keys.into_iter()
}

/// Container type measured by the microbenchmarks.
pub type Container = PairedSequence<usize, usize>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MicroBenchmark {
    Append,
    Get,
    Iter,
}

impl MicroBenchmark {
    pub fn print_result(line: String, file: &mut Option<File>) {
        match file {
            None => println!("{}", line),
            Some(f) => {
                if let Err(e) = writeln!(f, "{}", line) {
                    log::error!("Failed to write benchmark result: {}", e);
                }
            }
        }
    }

    pub fn header(self) -> &'static str {
        match self {
            MicroBenchmark::Append => {
                "# container container.len nanoseconds"
            }
            MicroBenchmark::Get => "# container index nanoseconds",
            MicroBenchmark::Iter => "# container container.len nanoseconds",
        }
    }

    /// Measure the append of `n` pairs one by one in an empty container.
    pub fn bench_append(name: &str, n: usize, file: &mut Option<File>) {
        let mut container = Container::new();

        for (first, second) in shuffled(n, 0).zip(shuffled(n, 1)) {
            let t = Instant::now();
            container.append((first, second));
            let t = t.elapsed().as_nanos();
            MicroBenchmark::print_result(
                format!("{} {} {}", name, container.len(), t),
                file,
            );
        }
    }

    /// Fill a container with `n` pairs and measure reading each of them
    /// in a random order.
    pub fn bench_get(name: &str, n: usize, file: &mut Option<File>) {
        let mut container = Container::with_capacity(n);
        for pair in shuffled(n, 0).zip(shuffled(n, 1)) {
            container.append(pair);
        }

        for i in shuffled(n, 2) {
            let t = Instant::now();
            let pair = container.get(i);
            let t = t.elapsed().as_nanos();
            if pair.is_err() {
                log::warn!("Pair {} missing from container.", i);
            }
            MicroBenchmark::print_result(
                format!("{} {} {}", name, i, t),
                file,
            );
        }
    }

    /// Measure the walk over containers of increasing lengths up to `n`.
    pub fn bench_iter(name: &str, n: usize, file: &mut Option<File>) {
        let mut container = Container::with_capacity(n);

        for pair in shuffled(n, 0).zip(shuffled(n, 1)) {
            container.append(pair);
            let t = Instant::now();
            let sum: usize = container.iter().map(|p| *p.second()).sum();
            let t = t.elapsed().as_nanos();
            log::trace!("Sum of second parts: {}", sum);
            MicroBenchmark::print_result(
                format!("{} {} {}", name, container.len(), t),
                file,
            );
        }
    }
}

#[macro_export]
macro_rules! microbenchmark {
    ($name:expr, $n: expr, $bench: expr, $file: expr, $header: expr) => {
        let file: &mut Option<File> = $file;
        let name: &str = $name;
        let n: usize = $n;
        let bench: MicroBenchmark = $bench;
        let header: bool = $header;

        if header {
            MicroBenchmark::print_result(String::from(bench.header()), file);
        }

        match bench {
            MicroBenchmark::Append => {
                MicroBenchmark::bench_append(name, n, file);
            }
            MicroBenchmark::Get => {
                MicroBenchmark::bench_get(name, n, file);
            }
            MicroBenchmark::Iter => {
                MicroBenchmark::bench_iter(name, n, file);
            }
        }
    };
}
