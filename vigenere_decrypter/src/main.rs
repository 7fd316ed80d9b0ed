use clap::{ArgGroup, Parser, ValueEnum};
use cryptanalysis::{AnalyzerConfig, ReferenceDistribution, Verbosity, VigenereCryptanalysis};
use vigenere::decrypt_text;

mod samples;

/// Command-line arguments for the Vigenère decryptor program.
#[derive(Parser, Debug)]
#[command(about = "Recovers the key of a Vigenère ciphertext by frequency analysis")]
#[command(group(ArgGroup::new("input").required(true).args(["id", "file"])))]
struct Cli {
    /// Id of a built-in sample ciphertext (1 to 7 French exercises, 8 English, 9 French)
    #[arg(short, long, help = "Id of a built-in sample ciphertext")]
    id: Option<usize>,

    /// Path to the input file containing encrypted text
    #[arg(short, long, help = "Path to the input file containing encrypted text")]
    file: Option<String>,

    /// Key length to use instead of guessing it (0 guesses)
    #[arg(short, long, default_value_t = 0, help = "Known key length (0 to guess)")]
    key_length: usize,

    /// Plaintext language; defaults to the sample's language, or English for files
    #[arg(short, long, value_enum, help = "Language of the plaintext")]
    language: Option<Language>,

    /// Diagnostic level: 0 quiet, 1 summary, 2 candidates, 3 letter counts
    #[arg(short, long, env = "VERBOSE", default_value_t = 1, help = "Diagnostic level (0-3)")]
    verbose: u8,

    /// Prefer the shortest key length within this fraction of the best score
    #[arg(long, help = "Prefer shorter key lengths scoring within this fraction of the best")]
    prefer_shorter: Option<f64>,

    /// Decrypt the input as written instead of its normalized letters
    #[arg(long, help = "Keep case, spacing and punctuation of the input")]
    preserve_format: bool,

    /// Path to the output file where decrypted text will be saved
    #[arg(short, long, help = "Path to the output file for decrypted text")]
    output: Option<String>,
}

/// Languages with a built-in reference distribution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Language {
    English,
    French,
    German,
}

impl Language {
    fn reference(self) -> ReferenceDistribution {
        match self {
            Language::English => ReferenceDistribution::english(),
            Language::French => ReferenceDistribution::french(),
            Language::German => ReferenceDistribution::german(),
        }
    }
}

fn main() {
    let cli: Cli = Cli::parse();
    let verbosity = Verbosity::from_level(cli.verbose);

    env_logger::Builder::new()
        .filter_level(verbosity.level_filter())
        .format_timestamp(None)
        .format_target(false)
        .init();

    if let Err(e) = run(&cli, verbosity) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli, verbosity: Verbosity) -> Result<(), Box<dyn std::error::Error>> {
    let (input, language) = load_input(cli)?;
    log::debug!("Reference language: {language:?}");

    let config = AnalyzerConfig {
        shorter_key_tolerance: cli.prefer_shorter,
        verbosity,
        ..AnalyzerConfig::default()
    };
    let analyzer = VigenereCryptanalysis::new(language.reference(), config)?;

    let known_length = (cli.key_length > 0).then_some(cli.key_length);
    let analysis = analyzer.analyze(&input, known_length)?;

    let text = if cli.preserve_format {
        decrypt_text(&input, analysis.key())
    } else {
        analysis.plaintext.to_string()
    };

    println!("Key: {}", analysis.key());
    println!("Text: {text}");

    if let Some(output) = &cli.output {
        std::fs::write(output, &text)
            .map_err(|e| format!("Failed to write output file {output}: {e}"))?;
    }

    Ok(())
}

/// Reads the ciphertext from the selected sample or file.
fn load_input(cli: &Cli) -> Result<(String, Language), String> {
    match (cli.id, &cli.file) {
        (Some(id), _) => {
            let sample = samples::sample(id).ok_or_else(|| {
                format!("Invalid id \"{id}\" (samples are 1 to {})", samples::count())
            })?;
            Ok((
                sample.ciphertext.to_string(),
                cli.language.unwrap_or(sample.language),
            ))
        }
        (None, Some(path)) => {
            let input = std::fs::read_to_string(path)
                .map_err(|e| format!("Failed to read input file {path}: {e}"))?;
            Ok((input, cli.language.unwrap_or(Language::English)))
        }
        (None, None) => Err("Missing ciphertext id or input file".to_string()),
    }
}
