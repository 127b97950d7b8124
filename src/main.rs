use basic::mach::{Config, Undefined};
use clap::Parser;
use std::path::PathBuf;

/// Run a line-numbered BASIC program.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print each line number as it is entered, like TRON.
    #[arg(short, long)]
    trace: bool,

    /// Seed RND so runs repeat exactly.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Read unassigned variables as 0 or "" instead of failing.
    #[arg(short, long)]
    default_zero: bool,

    /// Columns per print zone.
    #[arg(short, long, default_value_t = 14)]
    zone_width: usize,

    file: PathBuf,
}

fn main() {
    let args = Args::parse();
    let undefined = if args.default_zero {
        Undefined::Default
    } else {
        Undefined::Error
    };
    let config = Config::default()
        .undefined(undefined)
        .zone_width(args.zone_width)
        .seed(args.seed)
        .trace(args.trace);
    if !basic::term::main(&args.file, config) {
        std::process::exit(1);
    }
}
