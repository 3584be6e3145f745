use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use log::warn;

use vigenere_analysis::utils::clean_text;
use vigenere_analysis::{AnalysisConfig, Analyzer, Dictionary, EnglishThresholds};

/// Texts shorter than this rarely give usable statistics
const RELIABLE_TEXT_LENGTH: usize = 50;

/// Command-line arguments for the Vigenère analyzer program.
#[derive(Parser, Debug)]
#[command(name = "vigenere_analyzer")]
#[command(about = "Key-length estimation and per-strip candidate ranking for Vigenère ciphertext")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Estimate the key length (Kasiski examination + Friedman test)
    KeyLengths {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Rank plaintext candidates for every strip of a key length
    Analyze {
        #[command(flatten)]
        input: InputArgs,

        /// Key length to split by (defaults to the best guess)
        #[arg(short, long, conflicts_with = "guess")]
        key_length: Option<usize>,

        /// Use the n-th key-length guess instead of the best one (0 = best)
        #[arg(short, long)]
        guess: Option<usize>,

        /// Path to the output file for the report (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check whether a candidate plaintext looks like English
    Check {
        /// Path to the file containing the candidate plaintext
        #[arg(short, long)]
        file: PathBuf,

        /// Path to the word list (one word per line)
        #[arg(short, long)]
        dictionary: PathBuf,

        /// Minimum percentage of tokens that must be dictionary words
        #[arg(long, default_value_t = EnglishThresholds::default().word_percentage)]
        word_percentage: f64,

        /// Minimum percentage of characters that must be letters or whitespace
        #[arg(long, default_value_t = EnglishThresholds::default().letter_percentage)]
        letter_percentage: f64,
    },
}

/// Ciphertext source and analysis limits shared by the analysis subcommands.
#[derive(Args, Debug)]
struct InputArgs {
    /// Path to the input file containing encrypted text
    #[arg(short, long)]
    file: PathBuf,

    /// Length of the windows compared by the repetition scan
    #[arg(long, default_value_t = AnalysisConfig::default().segment_length)]
    segment_length: usize,

    /// Maximum number of letters accepted
    #[arg(long, default_value_t = AnalysisConfig::default().max_text_length)]
    max_length: usize,
}

impl InputArgs {
    fn config(&self) -> AnalysisConfig {
        AnalysisConfig {
            segment_length: self.segment_length,
            max_text_length: self.max_length,
            ..AnalysisConfig::default()
        }
    }

    /// Read the input file and strip everything but letters
    fn ciphertext(&self) -> Result<String> {
        let input = std::fs::read_to_string(&self.file)
            .with_context(|| format!("Failed to read input file {}", self.file.display()))?;
        let text = clean_text(&input);

        if text.is_empty() {
            bail!("Input file {} contains no letters", self.file.display());
        }
        if text.len() < RELIABLE_TEXT_LENGTH {
            warn!("Text may be too short for reliable analysis ({} letters)", text.len());
        }
        Ok(text)
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli: Cli = Cli::parse();

    match cli.command {
        Commands::KeyLengths { input } => key_lengths(&input),
        Commands::Analyze {
            input,
            key_length,
            guess,
            output,
            json,
        } => analyze(&input, key_length, guess, output, json),
        Commands::Check {
            file,
            dictionary,
            word_percentage,
            letter_percentage,
        } => check(
            &file,
            &dictionary,
            EnglishThresholds {
                word_percentage,
                letter_percentage,
            },
        ),
    }
}

/// Print the reconciled key-length guesses together with the raw evidence
fn key_lengths(input: &InputArgs) -> Result<()> {
    let analyzer = Analyzer::new(input.config())?;
    let text = input.ciphertext()?;
    let guesses = analyzer.key_lengths(&text)?;

    println!("Ciphertext length: {}", text.len());
    println!("Kasiski candidates: {:?}", guesses.kasiski);
    match guesses.friedman {
        Some(estimate) => println!("Friedman estimate: {}", estimate),
        None => println!("Friedman estimate: unavailable"),
    }
    println!("Key-length guesses ({:?}): {:?}", guesses.source, guesses.ordered);

    Ok(())
}

/// Produce the per-strip report for an explicit or guessed key length
fn analyze(
    input: &InputArgs,
    key_length: Option<usize>,
    guess: Option<usize>,
    output: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let analyzer = Analyzer::new(input.config())?;
    let text = input.ciphertext()?;

    let report = match key_length {
        Some(key_length) => analyzer.analyze(&text, key_length)?,
        None => analyzer.analyze_guess(&text, guess.unwrap_or(0))?,
    };
    if !report.is_conclusive() {
        warn!("Some strips could not be ranked for key length {}", report.key_length);
    }

    let rendered = if json {
        serde_json::to_string_pretty(&report).context("Failed to serialize report")?
    } else {
        report.to_string()
    };

    match output {
        Some(path) => {
            std::fs::write(&path, rendered)
                .with_context(|| format!("Failed to write output file {}", path.display()))?;
            println!("Report saved to: {}", path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

/// Run the dictionary check on a candidate plaintext
fn check(file: &Path, dictionary: &Path, thresholds: EnglishThresholds) -> Result<()> {
    let message = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read input file {}", file.display()))?;
    let dictionary = Dictionary::load(dictionary)?;

    let ratio = dictionary.word_match_ratio(&message);
    let english = dictionary.is_english(&message, &thresholds);

    println!("Dictionary words: {:.1}%", ratio * 100.0);
    println!("Looks like English: {}", if english { "yes" } else { "no" });

    Ok(())
}
