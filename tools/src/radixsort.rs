use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::io::BufWriter;
use std::io::Write;

use anyhow::Context;
use clap::{ArgGroup, Parser};
use lsd_radix::RadixSorter;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = "Sorts non-negative integers with LSD radix sort."
)]
#[command(group(ArgGroup::new("input").required(true).args(["vals", "file"])))]
struct Args {
    #[arg(
        short = 'v',
        long,
        num_args = 1..,
        allow_negative_numbers = true,
        value_name = "INT",
        help = "Input values"
    )]
    vals: Vec<String>,

    #[arg(short = 'f', long, help = "Input file containing values")]
    file: Option<String>,

    #[arg(short = 'o', long, help = "Path to an output file")]
    outfile: Option<String>,

    #[arg(short = 'd', long, help = "Print debug messages")]
    debug: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let vals = load_values(&args)?;
    let sorted = RadixSorter::new(&vals)?.verbose(args.debug).sort();

    if let Some(outfile) = args.outfile.as_ref() {
        let mut writer = BufWriter::new(File::create(outfile)?);
        writeln!(writer, "{}", lsd_radix::format_values(&sorted))?;
        writer.flush()?;
    } else {
        println!("{}", lsd_radix::format_values(&sorted));
    }

    Ok(())
}

fn load_values(args: &Args) -> anyhow::Result<Vec<u64>> {
    if let Some(file) = args.file.as_ref() {
        let file = File::open(file).with_context(|| format!("cannot open {}", file))?;
        lsd_radix::read_values(BufReader::new(file))
    } else {
        lsd_radix::parse_values(&args.vals.join(" "))
    }
}
