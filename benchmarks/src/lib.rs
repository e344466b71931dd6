pub mod microbenchmarks;
pub use microbenchmarks::{Container, MicroBenchmark, MicroBenchmarkArgs};
