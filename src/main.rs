use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::info;

use bioinfotools::index::bwt::{self, BwtMethod};
use bioinfotools::index::suffix_tree::{IndexMeta, SuffixTree};
use bioinfotools::io::text::resolve_sequence;
use bioinfotools::motif::{self, MotifOpt};
use bioinfotools::search::{self, SearchOpt, SearchStrategy};
use bioinfotools::stats;
use bioinfotools::util::dna::{self, Alphabet};

#[derive(Parser, Debug)]
#[command(
    name = "bioinfotools",
    author,
    version,
    about = "Exact string matching and text transforms for biological sequences",
    arg_required_else_help = true
)]
struct Cli {
    /// Log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Worker threads for batch search and motif search (0 = all cores)
    #[arg(short = 't', long = "threads", default_value_t = 0, global = true)]
    threads: usize,
    #[command(subcommand)]
    command: Commands,
}

/// Sequence arguments are literal strings, or `@path` to read a plain-text file.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the Z-array of a sequence
    Zarray { sequence: String },
    /// Print the LPS (KMP failure) array of a sequence
    Lps { sequence: String },
    /// Find every occurrence of one or more patterns in a text
    Search {
        /// Text to search in
        #[arg(long)]
        text: String,
        /// Patterns to search for
        #[arg(required = true)]
        patterns: Vec<String>,
        #[arg(short = 'a', long, value_enum, default_value_t = SearchStrategy::Kmp)]
        strategy: SearchStrategy,
        /// Separator for the Z strategy; must not occur in pattern or text
        #[arg(long, default_value_t = '$')]
        separator: char,
    },
    /// Burrows-Wheeler transform
    Bwt {
        #[command(subcommand)]
        action: BwtAction,
    },
    /// Build a suffix tree over a text and save it
    Index {
        text: String,
        /// Output prefix for the index file
        #[arg(short, long, default_value = "ref")]
        output: String,
    },
    /// Locate patterns using a saved suffix tree
    Locate {
        /// Path to suffix tree index (.stree)
        #[arg(short = 'i', long = "index")]
        index: String,
        #[arg(required = true)]
        patterns: Vec<String>,
    },
    /// Base counts and GC skew minima
    Stats {
        sequence: String,
        #[arg(long, default_value = "ACGT")]
        alphabet: String,
        /// Upper-case and map U->T, unknown->N before counting
        #[arg(long)]
        normalize: bool,
    },
    /// Greedy motif search
    Motif {
        /// Motif length
        #[arg(short, long)]
        k: usize,
        #[arg(long, default_value = "ACGT")]
        alphabet: String,
        #[arg(long)]
        normalize: bool,
        #[arg(required = true)]
        sequences: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
enum BwtAction {
    /// Encode a text (sentinel appended when absent)
    Encode {
        text: String,
        #[arg(long, default_value_t = '$')]
        sentinel: char,
        #[arg(short, long, value_enum, default_value_t = BwtMethod::Rotations)]
        method: BwtMethod,
    },
    /// Decode a transform back to the sentinel-terminated text
    Decode {
        transform: String,
        #[arg(long, default_value_t = '$')]
        sentinel: char,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("cannot configure thread pool")?;
    }

    match cli.command {
        Commands::Zarray { sequence } => {
            let seq = load(&sequence)?;
            println!("{}", join(&search::z_array(&seq)));
            Ok(())
        }
        Commands::Lps { sequence } => {
            let seq = load(&sequence)?;
            println!("{}", join(&search::lps_array(&seq)));
            Ok(())
        }
        Commands::Search { text, patterns, strategy, separator } => {
            let opt = SearchOpt { strategy, separator: ascii_byte(separator, "separator")? };
            run_search(&text, &patterns, opt)
        }
        Commands::Bwt { action } => run_bwt(action),
        Commands::Index { text, output } => run_index(&text, &output),
        Commands::Locate { index, patterns } => run_locate(&index, &patterns),
        Commands::Stats { sequence, alphabet, normalize } => run_stats(&sequence, &alphabet, normalize),
        Commands::Motif { k, alphabet, normalize, sequences } => {
            let opt = MotifOpt { k, alphabet: Alphabet::new(alphabet.as_bytes()) };
            run_motif(&sequences, opt, normalize)
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn load(arg: &str) -> Result<Vec<u8>> {
    resolve_sequence(arg).with_context(|| format!("cannot read sequence '{}'", arg))
}

fn ascii_byte(c: char, what: &str) -> Result<u8> {
    if !c.is_ascii() {
        bail!("{} must be a single ASCII character, got {:?}", what, c);
    }
    Ok(c as u8)
}

fn join(values: &[usize]) -> String {
    values.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}

fn run_search(text: &str, patterns: &[String], opt: SearchOpt) -> Result<()> {
    let text = load(text)?;
    let pats = patterns.iter().map(|p| load(p)).collect::<Result<Vec<_>>>()?;
    info!("searching {} pattern(s) in {} symbols with {:?}", pats.len(), text.len(), opt.strategy);

    let hits = search::find_all_batch(&pats, &text, opt)?;
    for (p, h) in patterns.iter().zip(&hits) {
        println!("{}\t{}\t{}", p, h.len(), join(h));
    }
    Ok(())
}

fn run_bwt(action: BwtAction) -> Result<()> {
    match action {
        BwtAction::Encode { text, sentinel, method } => {
            let text = load(&text)?;
            let out = method.encode(&text, ascii_byte(sentinel, "sentinel")?)?;
            println!("{}", String::from_utf8_lossy(&out));
        }
        BwtAction::Decode { transform, sentinel } => {
            let transform = load(&transform)?;
            let out = bwt::decode(&transform, ascii_byte(sentinel, "sentinel")?)?;
            println!("{}", String::from_utf8_lossy(&out));
        }
    }
    Ok(())
}

fn run_index(text: &str, output: &str) -> Result<()> {
    let seq = load(text)?;
    if seq.is_empty() {
        bail!("cannot index an empty text");
    }
    println!("text_len: {}", seq.len());

    let mut tree = SuffixTree::build(&seq);
    tree.set_meta(IndexMeta {
        source_file: text.strip_prefix('@').map(str::to_string),
        build_args: Some(std::env::args().collect::<Vec<_>>().join(" ")),
        build_timestamp: Some(chrono::Utc::now().to_rfc3339()),
    });
    println!("nodes: {}", tree.node_count());

    let out_path = format!("{}.stree", output);
    tree.save_to_file(&out_path)
        .with_context(|| format!("cannot write index to '{}'", out_path))?;
    println!("suffix tree saved: {}", out_path);
    Ok(())
}

fn run_locate(index_path: &str, patterns: &[String]) -> Result<()> {
    let tree = SuffixTree::load_from_file(index_path)
        .with_context(|| format!("cannot load index '{}'", index_path))?;
    if let Some(ts) = tree.meta().and_then(|m| m.build_timestamp.as_deref()) {
        info!("index built at {}", ts);
    }
    for p in patterns {
        let pat = load(p)?;
        let hits = tree.search(&pat);
        println!("{}\t{}\t{}", p, hits.len(), join(&hits));
    }
    Ok(())
}

fn run_stats(sequence: &str, alphabet: &str, normalize: bool) -> Result<()> {
    let mut seq = load(sequence)?;
    if normalize {
        seq = dna::normalize_seq(&seq);
    }
    let alphabet = Alphabet::new(alphabet.as_bytes());
    for (sym, n) in stats::base_counts(&seq, &alphabet) {
        println!("{}\t{}", sym as char, n);
    }
    let skews = stats::gc_skews(&seq);
    if let Some(&last) = skews.last() {
        println!("gc_skew\t{}", last);
    }
    println!("min_skew_at\t{}", join(&stats::minimum_gc_skew(&seq)));
    Ok(())
}

fn run_motif(sequences: &[String], opt: MotifOpt, normalize: bool) -> Result<()> {
    let mut seqs = sequences.iter().map(|s| load(s)).collect::<Result<Vec<_>>>()?;
    if normalize {
        seqs = seqs.iter().map(|s| dna::normalize_seq(s)).collect();
    }
    let motifs = motif::greedy_motif_search(&seqs, &opt)?;
    let score = motif::score(&motifs, &opt.alphabet)?;
    for m in &motifs {
        println!("{}", String::from_utf8_lossy(m));
    }
    info!("score: {}", score);
    Ok(())
}
