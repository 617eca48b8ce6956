use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::{Args, Parser, Subcommand};
use studybot::generate::{DEFAULT_API_BASE, DEFAULT_MODEL};
use studybot::{
    sources, Artifact, GeminiClient, GeminiConfig, Generated, Generator, StudyBot, StudyError,
    TranscriptFetcher,
};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "studybot=info";
const DEFAULT_LOG_FILE: &str = "studybot.log";

#[derive(Parser, Debug)]
#[command(version, about = "Summaries, flashcards and quizzes from your study material", long_about = None)]
struct Cli {
    /// API key for the Generative Language API
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Model used for generation
    #[arg(long, env = "STUDYBOT_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    /// Base URL of the generation API
    #[arg(long, env = "STUDYBOT_API_BASE", default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// Where to write logs (the interactive UI defaults to a file in the temp dir)
    #[arg(long, env = "STUDYBOT_LOG")]
    log_file: Option<PathBuf>,

    /// PDF or text file to load into the editor on start
    #[arg(short, long)]
    input: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate once and print the result instead of opening the UI
    Generate {
        #[arg(short, long, value_enum)]
        kind: Artifact,

        #[command(flatten)]
        source: SourceArgs,

        /// Print parsed records as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct SourceArgs {
    /// PDF or text file with the material
    #[arg(long)]
    file: Option<PathBuf>,

    /// YouTube video whose transcript is the material
    #[arg(long)]
    youtube: Option<String>,

    /// Material given inline
    #[arg(long)]
    text: Option<String>,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), StudyError> {
    let client = GeminiClient::new(GeminiConfig {
        api_key: cli.api_key,
        model: cli.model,
        api_base: cli.api_base,
    });

    match cli.command {
        Some(Command::Generate { kind, source, json }) => {
            init_logging(cli.log_file.as_deref())?;
            generate_once(client, kind, source, json).await
        }
        None => {
            let log_file = cli
                .log_file
                .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_FILE));
            init_logging(Some(&log_file))?;

            let mut bot = StudyBot::new(client);
            if let Some(path) = cli.input {
                let material = tokio::task::spawn_blocking(move || sources::load_file(path))
                    .await
                    .map_err(io::Error::other)??;
                bot = bot.with_material(material);
            }
            tracing::info!("starting interactive session");
            bot.run().await
        }
    }
}

async fn generate_once<G: Generator>(
    generator: G,
    kind: Artifact,
    source: SourceArgs,
    json: bool,
) -> Result<(), StudyError> {
    let material = if let Some(path) = source.file {
        sources::load_file(path)?
    } else if let Some(url) = source.youtube {
        TranscriptFetcher::new().fetch(&url, &generator).await?
    } else {
        source.text.unwrap_or_default()
    };

    let prompt = studybot::generate::prompts::for_artifact(kind, material.trim());
    let text = generator.generate(&prompt).await?;
    let generated = Generated::from_text(kind, &text);

    if json {
        println!("{}", serde_json::to_string_pretty(&generated)?);
    } else {
        print!("{}", generated);
    }
    Ok(())
}

/// `RUST_LOG` wins over the default filter. Logs go to stderr unless a file
/// is given.
fn init_logging(log_file: Option<&Path>) -> io::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(io::stderr).init(),
    }
    Ok(())
}
