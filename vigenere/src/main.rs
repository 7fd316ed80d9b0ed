use clap::{Parser, ValueEnum};
use vigenere::{decrypt_text, encrypt_text, Key};

/// Command-line arguments for the Vigenère cipher program.
#[derive(Parser, Debug)]
#[command(about = "Encrypts or decrypts a text file with the Vigenère cipher")]
struct Cli {
    /// Text file to transform; case, spacing and punctuation are kept
    #[arg(short, long, help = "Path to the input file")]
    file: String,

    /// Key letters. Case is folded and anything but A-Z is dropped, so
    /// "my key!" is the key MYKEY
    #[arg(
        short,
        long,
        help = "Key; case-insensitive, non-letters are ignored (must contain a letter)"
    )]
    key: String,

    /// Where to write the result; standard output when absent
    #[arg(short, long, help = "Path to the output file (stdout if omitted)")]
    output: Option<String>,

    /// Direction of the transformation
    #[arg(short, long, value_enum, help = "Whether to encrypt or decrypt the input")]
    mode: OperationMode,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OperationMode {
    Encrypt,
    Decrypt,
}

fn main() {
    let cli: Cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let key: Key = cli.key.parse()?;
    let content = std::fs::read_to_string(&cli.file)
        .map_err(|e| format!("Failed to read input file {}: {e}", cli.file))?;

    let result = transform(&content, &key, cli.mode);

    match &cli.output {
        Some(output) => {
            std::fs::write(output, &result)
                .map_err(|e| format!("Failed to write output file {output}: {e}"))?;
            eprintln!("{:?} with key {key}, output saved to: {output}", cli.mode);
        }
        None => print!("{result}"),
    }
    Ok(())
}

fn transform(content: &str, key: &Key, mode: OperationMode) -> String {
    match mode {
        OperationMode::Encrypt => encrypt_text(content, key),
        OperationMode::Decrypt => decrypt_text(content, key),
    }
}
