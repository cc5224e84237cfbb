mod convert;
mod interrupt;
mod tempfile_utils;

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::convert::{convert_file, Outcome, Overwrite};

const EXIT_ERROR: i32 = 1;
const EXIT_INTERRUPT: i32 = 130;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the code page for each label
    Resolve {
        /// Fail on labels that are not in the table instead of using 1252
        #[arg(long)]
        strict: bool,

        #[arg(required = true)]
        labels: Vec<String>,
    },
    /// Print every known label
    List,
    /// Convert files to UTF-8, writing FILE.utf8 next to each
    Decode {
        #[arg(short = 'I')]
        ienc: String,

        /// Overwrite existing output without asking
        #[arg(short, long)]
        force: bool,

        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

fn resolve(
    labels: &[String],
    strict: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<bool> {
    let mut success = true;
    for label in labels {
        match cplabel::lookup(label) {
            Some(code_page) => writeln!(out, "{}\t{}", label, code_page)?,
            None if strict => {
                writeln!(err, "Unknown encoding {:?}", label)?;
                success = false;
            }
            None => writeln!(out, "{}\t{}", label, cplabel::DEFAULT_CODE_PAGE)?,
        }
    }
    Ok(success)
}

fn list(out: &mut impl Write) -> io::Result<()> {
    for (label, code_page) in cplabel::label::aliases() {
        writeln!(out, "{}\t{}", code_page, label)?;
    }
    Ok(())
}

fn decode(files: &[PathBuf], ienc: &str, force: bool) {
    if cplabel::lookup(ienc).is_none() {
        eprintln!(
            "Unknown encoding {:?}, decoding as {}",
            ienc,
            cplabel::DEFAULT_CODE_PAGE
        );
    }

    for filename in files {
        if !filename.is_file() {
            eprintln!("Not found {}", filename.display());
            std::process::exit(EXIT_ERROR);
        }
    }

    let overwrite = Overwrite::from_force(force);
    for filename in files {
        let result = convert_file(filename, ienc, overwrite);
        match &result {
            Ok(Outcome::Written {
                code_page,
                encoding,
                had_errors: true,
            }) => {
                eprintln!(
                    "Warning: {} has bytes that are not valid in {} (code page {})",
                    filename.display(),
                    encoding,
                    code_page
                );
            }
            Ok(Outcome::Written { .. }) => {}
            Ok(Outcome::Skipped) => println!("skip {}", filename.display()),
            Err(err) => eprintln!("Error: {:?}", err),
        }

        if interrupt::interrupted_by(result.as_ref().err()) {
            std::process::exit(EXIT_INTERRUPT);
        }
        if result.is_err() {
            std::process::exit(EXIT_ERROR);
        }
    }
}

fn main() {
    if let Err(err) = interrupt::register_ctrlc() {
        eprintln!("Error setting Ctrl-C handler: {}", err);
        std::process::exit(EXIT_ERROR);
    }

    let args = Args::parse();

    match args.command {
        Command::Resolve { labels, strict } => {
            let success = resolve(&labels, strict, &mut io::stdout(), &mut io::stderr())
                .unwrap_or_else(|err| {
                    eprintln!("Error: {}", err);
                    false
                });
            if !success {
                std::process::exit(EXIT_ERROR);
            }
        }
        Command::List => {
            if let Err(err) = list(&mut io::stdout()) {
                eprintln!("Error: {}", err);
                std::process::exit(EXIT_ERROR);
            }
        }
        Command::Decode { ienc, force, files } => decode(&files, &ienc, force),
    }
}
