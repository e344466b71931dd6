use crate::microbenchmarks::MicroBenchmark;
use clap::{crate_authors, crate_version, Arg, ArgMatches, Command};
use std::fs::{File, OpenOptions};

pub struct MicroBenchmarkArgs {
    pub bench: MicroBenchmark,
    pub num_pairs: usize,
    pub file: Option<File>,
    pub header: bool,
}

impl MicroBenchmarkArgs {
    fn opt_arg(app: Command) -> Command {
        let bench = Arg::new("bench")
            .index(1)
            .required(true)
            .possible_values(["append", "get", "iter"])
            .help("append: measure the insertion of each pair one by one in an empty container. get: fill a container and measure reading each pair in a random order. iter: measure the walk over containers of increasing lengths.");
        app.arg(bench)
    }

    fn from_arg(args: &ArgMatches) -> MicroBenchmark {
        match args.value_of("bench") {
            Some("get") => MicroBenchmark::Get,
            Some("iter") => MicroBenchmark::Iter,
            _ => MicroBenchmark::Append,
        }
    }

    pub fn base_app(app_name: &str) -> Command {
        let app = Command::new(app_name)
            .version(crate_version!())
            .author(crate_authors!());
        let num_pairs_arg = Arg::new("num-pairs")
            .short('n')
            .help("Number of pairs appended to the container.")
            .takes_value(true)
            .required(false);
        let file_arg = Arg::new("output-file")
            .short('o')
            .help(
                "File where to write results. If not provided, results
are written to stdout.",
            )
            .takes_value(true)
            .required(false);
        let header_arg = Arg::new("with-header")
            .short('t')
            .help("Weather or not to print benchmark header.")
            .takes_value(false)
            .required(false);

        MicroBenchmarkArgs::opt_arg(app)
            .arg(num_pairs_arg)
            .arg(file_arg)
            .arg(header_arg)
    }

    pub fn build(app: Command) -> Result<(Self, ArgMatches), String> {
        let matches = app.get_matches();

        let num_pairs = match matches.value_of("num-pairs") {
            Some(n) => n.parse::<usize>().map_err(|e| {
                format!("Invalid format for arg 'num-pairs': {}", e)
            })?,
            None => 1000usize,
        };

        let file = match matches.value_of("output-file") {
            Some(f) => Some(
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(f)
                    .map_err(|e| format!("Cannot open {}: {}", f, e))?,
            ),
            None => None,
        };

        let margs = MicroBenchmarkArgs {
            bench: MicroBenchmarkArgs::from_arg(&matches),
            num_pairs,
            file,
            header: matches.is_present("with-header"),
        };

        Ok((margs, matches))
    }

    pub fn default(app_name: &str) -> Result<Self, String> {
        let about =
            format!("Run a microbenchmark for {} container.", app_name);
        let app = MicroBenchmarkArgs::base_app(app_name).about(about.as_str());
        MicroBenchmarkArgs::build(app).map(|(args, _)| args)
    }
}
