use wordhuff::compress::{compress, CompressPolicy};
use wordhuff::frequency::{count_frequencies, total_words};
use wordhuff::huffman::HuffmanTree;
use wordhuff::perf_and_test_utils::{gen_text, type_of, TimingQueries};

use anyhow::Result;
use clap::Parser;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Number of words of the generated text
    #[clap(short, long, value_parser)]
    #[arg(default_value_t = 1000000)]
    n_words: usize,
    /// Number of distinct words
    #[clap(short, long, value_parser)]
    #[arg(default_value_t = 10000)]
    vocabulary: usize,
    #[clap(short = 'r', long, value_parser)]
    #[arg(default_value_t = 10)]
    n_runs: usize,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let text = gen_text(args.n_words, args.vocabulary.max(1));
    println!("Text length: {} words, {} bytes", args.n_words, text.len());

    let mut t = TimingQueries::new(args.n_runs, args.n_words);
    let mut freqs = count_frequencies(&text);
    for _ in 0..args.n_runs {
        t.start();
        freqs = count_frequencies(&text);
        t.stop();
    }
    let (t_min, t_max, t_avg) = t.get();
    println!(
        "[exp: count_frequencies, n_words: {}, counted: {}, distinct: {}, min_time (ns): {}, max_time (ns): {}, avg_time (ns): {}, n_runs: {}]",
        args.n_words,
        total_words(&freqs),
        freqs.len(),
        t_min,
        t_max,
        t_avg,
        args.n_runs
    );

    let mut t = TimingQueries::new(args.n_runs, freqs.len());
    let mut tree = HuffmanTree::build(&freqs)?;
    for _ in 0..args.n_runs {
        t.start();
        tree = HuffmanTree::build(&freqs)?;
        t.stop();
    }
    let (t_min, t_max, t_avg) = t.get();
    println!(
        "[ds_name: {}, exp: build, distinct: {}, depth: {}, min_time (ns): {}, max_time (ns): {}, avg_time (ns): {}, n_runs: {}]",
        type_of(&tree),
        freqs.len(),
        tree.depth(),
        t_min,
        t_max,
        t_avg,
        args.n_runs
    );

    let codes = tree.codebook();
    let mut t = TimingQueries::new(args.n_runs, args.n_words);
    let mut bits = 0;
    for _ in 0..args.n_runs {
        t.start();
        bits = compress(&text, &codes, CompressPolicy::Strict)?.len();
        t.stop();
    }
    let (t_min, t_max, t_avg) = t.get();
    println!(
        "[exp: compress, n_words: {}, bits: {}, bits per word: {:.2}, min_time (ns): {}, max_time (ns): {}, avg_time (ns): {}, n_runs: {}]",
        args.n_words,
        bits,
        bits as f64 / args.n_words.max(1) as f64,
        t_min,
        t_max,
        t_avg,
        args.n_runs
    );

    Ok(())
}
