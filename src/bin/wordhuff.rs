use wordhuff::report::{split_blocks, write_report, DEFAULT_INPUT};
use wordhuff::CompressPolicy;

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Input filename, blocks of text separated by empty lines
    #[clap(short, long, value_parser)]
    #[arg(default_value = "data/input.dat")]
    input_file: String,
    /// Output filename for the report
    #[clap(short, long, value_parser)]
    #[arg(default_value = "data/output.dat")]
    output_file: String,
    /// Fail on words without a code instead of skipping them
    #[arg(short, long)]
    strict: bool,
    /// Do not create a sample input file if the input is missing
    #[arg(long)]
    no_create: bool,
}

fn create_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("cannot create directory {}", parent.display()))?;
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let input_path = Path::new(&args.input_file);
    let output_path = Path::new(&args.output_file);

    create_parent_dir(output_path)?;

    if !input_path.exists() {
        if args.no_create {
            bail!("input file {} does not exist", input_path.display());
        }
        create_parent_dir(input_path)?;
        fs::write(input_path, DEFAULT_INPUT)
            .with_context(|| format!("cannot create {}", input_path.display()))?;
        println!(
            "File {} not found. Created with sample sentences.",
            input_path.display()
        );
    }

    let input = fs::read_to_string(input_path)
        .with_context(|| format!("cannot read {}", input_path.display()))?;
    let blocks = split_blocks(&input);
    log::debug!("{} blocks read from {}", blocks.len(), input_path.display());

    let policy = if args.strict {
        CompressPolicy::Strict
    } else {
        CompressPolicy::Lenient
    };

    let file = fs::File::create(output_path)
        .with_context(|| format!("cannot create {}", output_path.display()))?;
    let mut out = BufWriter::new(file);
    let stats = write_report(&mut out, &blocks, policy)
        .with_context(|| format!("cannot write report to {}", output_path.display()))?;
    out.flush()?;

    println!(
        "Encoded blocks: {}, empty blocks: {}",
        stats.blocks_encoded, stats.blocks_empty
    );
    if let Some(ratio) = stats.compression_ratio() {
        println!(
            "Input bits: {}, compressed bits: {}, ratio: {:.3}",
            stats.input_bits, stats.output_bits, ratio
        );
    }
    println!("The report is in {}", output_path.display());

    Ok(())
}
