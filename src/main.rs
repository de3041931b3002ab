use std::{
    cell::RefCell,
    fs::{read_to_string, File},
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
    rc::Rc,
    time::Instant,
};

use clap::Parser;
use tiny::{
    errors::reporter::{ErrorReporter, ListingSink},
    lexer::{lexer::tokenize, source::TokenStream},
    parser::parser::parse_with_reporter,
    render_error,
};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Syntax analyser for the TINY language",
    long_about = "Syntax analyser for the TINY language.\n\
                 Scans and parses a TINY source file, reports every syntax error\n\
                 it finds, and prints the resulting syntax tree.\n\
                 \n\
                 Example usage:\n\
                 tiny sample.tny                   # Parse and print the syntax tree\n\
                 tiny sample.tny --echo-source     # Also list the numbered source\n\
                 tiny sample.tny --trace-scan      # List every token\n\
                 tiny sample.tny -o sample.lst     # Write the listing to a file\n\
                 \n\
                 Set RUST_LOG=debug to follow the parser through the grammar."
)]
struct Cli {
    // The path to the file to parse
    path: PathBuf,

    // Print the numbered source lines first
    #[arg(long)]
    echo_source: bool,

    // Print each token as it is scanned
    #[arg(long)]
    trace_scan: bool,

    // Do not print the syntax tree
    #[arg(long)]
    no_tree: bool,

    // Listing file for traces, diagnostics and the tree (defaults to stdout)
    #[arg(short = 'o', long)]
    listing: Option<PathBuf>,

    // Show phase timing
    #[arg(short, long)]
    verbose: bool,
}

/// A listing writer shared between the diagnostics sink and the driver.
#[derive(Clone)]
struct Listing(Rc<RefCell<Box<dyn Write>>>);

impl Listing {
    fn open(path: Option<&PathBuf>) -> io::Result<Self> {
        let writer: Box<dyn Write> = match path {
            Some(path) => Box::new(File::create(path)?),
            None => Box::new(io::stdout()),
        };
        Ok(Listing(Rc::new(RefCell::new(writer))))
    }
}

impl Write for Listing {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.borrow_mut().flush()
    }
}

fn run(args: &Cli) -> io::Result<bool> {
    let source = read_to_string(&args.path)?;
    let file_name = args.path.to_string_lossy().to_string();
    let mut listing = Listing::open(args.listing.as_ref())?;

    writeln!(listing, "TINY COMPILATION: {}", file_name)?;

    if args.echo_source {
        for (number, line) in source.lines().enumerate() {
            writeln!(listing, "{:4}: {}", number + 1, line)?;
        }
    }

    let start = Instant::now();
    let tokens = tokenize(source.clone(), Some(file_name));

    if args.verbose {
        println!("Tokenized in {:?}", start.elapsed());
    }

    if args.trace_scan {
        for token in &tokens {
            writeln!(listing, "\t{}: {}", token.line(), token.describe())?;
        }
    }

    let parse_start = Instant::now();
    let reporter = ErrorReporter::with_sink(Box::new(ListingSink::new(listing.clone())));
    let (parser, tree) = parse_with_reporter(TokenStream::new(tokens), reporter);

    if args.verbose {
        println!("Parsed in {:?}", parse_start.elapsed());
        println!("Built {} syntax tree nodes", tree.node_count());
    }

    for error in parser.errors() {
        eprint!("{}", render_error(error, &source));
    }

    if !args.no_tree {
        writeln!(listing, "\nSyntax tree:")?;
        write!(listing, "{}", tree)?;
    }

    if args.verbose {
        println!("Total time: {:?}", start.elapsed());
    }

    listing.flush()?;
    Ok(!parser.has_errors())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Cli::parse();

    if let Some(ext) = args.path.extension() {
        if ext != "tny" {
            eprintln!("Warning: Input file does not have .tny extension");
        }
    }

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(error) => {
            eprintln!("Error: {}: {}", args.path.display(), error);
            ExitCode::FAILURE
        }
    }
}
