use std::fs::File;
use std::io::{BufReader, BufWriter, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};

use huffman_codec::{Codec, Report, Result};

#[derive(Subcommand)]
enum Command {
    /// Encodes the text and prints the bit-string with its statistics
    #[clap(visible_alias = "e")]
    Encode(Input),
    /// Encodes the text, decodes the bit-string and checks both match
    #[clap(visible_alias = "rt")]
    Roundtrip(Input),
    /// Prints a report stored with --snapshot
    Show {
        /// Snapshot file
        path: PathBuf,
    },
}

#[derive(Args)]
struct Input {
    /// Text to encode
    #[arg(required_unless_present = "file")]
    text: Option<String>,

    /// Read the text from a file instead
    #[arg(short = 'f', long, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Write a bincode snapshot of the report to this file
    #[arg(short = 's', long)]
    snapshot: Option<PathBuf>,
}

impl Input {
    fn read(&self) -> Result<String> {
        match (&self.text, &self.file) {
            (Some(text), _) => Ok(text.clone()),
            (None, Some(path)) => {
                let mut in_file = BufReader::new(File::open(path)?);
                let mut text = String::new();
                in_file.read_to_string(&mut text)?;
                Ok(text)
            }
            (None, None) => Ok(String::new()),
        }
    }
}

#[derive(Parser)]
#[command(author, version, about, long_about = None, infer_subcommands = true)]
/// Huffman coding of text.
struct Conf {
    #[command(subcommand)]
    command: Command,
}

fn encode(codec: &mut Codec<char>, input: &Input) -> Result<String> {
    let text = input.read()?;
    let bits = codec.encode_text(&text);
    let report = Report::new(codec.encoding());
    println!("{}", bits);
    println!();
    println!("{}", report);
    if let Some(path) = &input.snapshot {
        save_snapshot(&report, path)?;
    }
    Ok(text)
}

fn save_snapshot(report: &Report, path: &Path) -> Result<()> {
    let out_file = BufWriter::new(File::create(path)?);
    report.write_to(out_file)?;
    log::info!("report snapshot written to {}", path.display());
    Ok(())
}

fn run(conf: Conf) -> Result<bool> {
    let mut codec = Codec::new();
    match conf.command {
        Command::Encode(input) => {
            encode(&mut codec, &input)?;
            Ok(true)
        }
        Command::Roundtrip(input) => {
            let text = encode(&mut codec, &input)?;
            let decoded = codec.decode_text(codec.encoding().bits())?;
            println!();
            if decoded == text {
                println!("Decoded text matches the input ({} symbols).", text.chars().count());
                Ok(true)
            } else {
                println!("Decoded text differs from the input.");
                Ok(false)
            }
        }
        Command::Show { path } => {
            let report = Report::read_from(BufReader::new(File::open(path)?))?;
            println!("{}", report);
            Ok(true)
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    match run(Conf::parse()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
