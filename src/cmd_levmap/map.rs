use clap::*;

use levmap::libs::eval;
use levmap::libs::fasta;
use levmap::libs::sink::StreamSink;
use levmap::libs::tier::TierPolicy;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("map")
        .about("All-pairs windowed Levenshtein distances of a genome sequence")
        .after_help(
            r###"
This command compares every ordered pair of positions (i, j), i <= j, of the
first sequence in a FASTA file. The window length compared at a pair depends
on its separation j - i:

    separation <= 100,000    -> 10 bp windows
    separation <= 1,000,000  -> 100 bp windows
    larger                   -> 1,000 bp windows

Output format:
    One record per line, `i,j,distance`, no header. Lines are appended as
    they are computed; record order is not defined between rows. Rerunning
    on the same input yields the same record set.

Notes:
* Input may be plain or gzipped FASTA; the first record is used.
* A pair whose window would cross the end of the sequence is skipped.
* Symmetric pairs (j < i) are implied and not emitted.
* The outer i axis is processed in chunks of --chunk rows (floor 1000);
  within a chunk, rows are distributed over --parallel threads.

Examples:
1. Write the distance map of a chromosome:
   levmap map chr21.fa chr21.csv

2. Gzipped input, 8 threads, larger chunks:
   levmap map chr21.fa.gz chr21.csv -p 8 -c 50000

3. Inspect a small sequence on screen:
   levmap map tests/map/tiny.fa stdout

"###,
        )
        .arg(
            Arg::new("infile")
                .required(true)
                .index(1)
                .help("Input FASTA file"),
        )
        .arg(
            Arg::new("outfile")
                .required(true)
                .index(2)
                .help("Output CSV file. [stdout] for screen"),
        )
        .arg(
            Arg::new("chunk")
                .long("chunk")
                .short('c')
                .num_args(1)
                .default_value("10000")
                .value_parser(value_parser!(usize))
                .help("Rows of the pair space per chunk"),
        )
        .arg(
            Arg::new("parallel")
                .long("parallel")
                .short('p')
                .num_args(1)
                .default_value("0")
                .value_parser(value_parser!(usize))
                .help("Number of threads, 0 for all cores"),
        )
}

// command implementation
pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    //----------------------------
    // Args
    //----------------------------
    let infile = args.get_one::<String>("infile").unwrap();
    let outfile = args.get_one::<String>("outfile").unwrap();
    let opt_chunk = *args.get_one::<usize>("chunk").unwrap();

    // Set the number of threads for rayon
    let opt_parallel = *args.get_one::<usize>("parallel").unwrap();
    if opt_parallel > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(opt_parallel)
            .build_global()?;
    }

    //----------------------------
    // Load
    //----------------------------
    let seq = fasta::load_sequence(infile)?;
    eprintln!("Loaded {} bp from {}", seq.len(), infile);

    //----------------------------
    // Evaluate
    //----------------------------
    let policy = TierPolicy::default();

    // Open the output before computing, so a bad path fails fast.
    let wtr = levmap::writer(outfile)?;
    let (sink, handle) = StreamSink::spawn(wtr);

    let computed = eval::run(&seq, &policy, opt_chunk, &sink);
    drop(sink);
    let written = handle.join();

    // A writer-side I/O error is the root cause of any sink failure seen
    // by the workers; report it first.
    let rows = match written {
        Ok(rows) => {
            computed?;
            rows
        }
        Err(e) => return Err(e),
    };

    eprintln!("{} records written to {}", rows, outfile);

    Ok(())
}
