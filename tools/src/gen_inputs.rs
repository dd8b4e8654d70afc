use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::io::Write;

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const MAX_VALUE: u64 = 1_000_000;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = "Generates random integers in [0, 1000000] for the sorter."
)]
struct Args {
    #[arg(short = 'n', long, default_value_t = 1000, help = "Number of inputs")]
    num: usize,

    #[arg(short = 'o', long, help = "Path to an output file")]
    outfile: Option<String>,

    #[arg(short = 's', long, help = "Optional seed for reproducible output")]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let mut rng = if let Some(seed) = args.seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_entropy()
    };

    if let Some(outfile) = args.outfile.as_ref() {
        let writer = BufWriter::new(File::create(outfile)?);
        generate(&mut rng, args.num, writer)?;
    } else {
        let writer = BufWriter::new(std::io::stdout().lock());
        generate(&mut rng, args.num, writer)?;
    }

    Ok(())
}

fn generate<R: Rng, W: Write>(rng: &mut R, num: usize, mut writer: W) -> std::io::Result<()> {
    for _ in 0..num {
        write!(writer, "{} ", rng.gen_range(0..=MAX_VALUE))?;
    }
    writeln!(writer)?;
    writer.flush()
}
