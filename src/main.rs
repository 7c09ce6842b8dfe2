use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use quizpad::export::{self, AnswerMarking};
use quizpad::protocol::DEFAULT_PORT;
use quizpad::store::{LocalStore, QuizStore, StoreBackend};
use quizpad::{Config, QuizError, Review, Session};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Keep the `1. ` prefix in question text
    #[arg(long, global = true)]
    keep_numbers: bool,

    /// Keep questions without text or options
    #[arg(long, global = true)]
    keep_incomplete: bool,

    /// Local quiz cache directory
    #[arg(long, global = true)]
    store_dir: Option<PathBuf>,

    /// Remote store URL, e.g. ws://localhost:8712
    #[arg(long, global = true)]
    remote: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Review a quiz file in the terminal
    Review {
        /// Quiz text file, `-` for stdin
        file: PathBuf,
        /// Seconds before the review ends
        #[arg(short, long)]
        time_limit: Option<u64>,
    },
    /// Parse a quiz file and print what was recognized
    Check {
        file: PathBuf,
        /// Print the parsed quiz as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the canonical text of a quiz file
    Export {
        file: PathBuf,
        /// Mark answers with ✓ instead of an `Answer:` line
        #[arg(long)]
        inline: bool,
    },
    /// Parse a quiz file and save it to the store
    Save {
        file: PathBuf,
        #[arg(long)]
        title: String,
        /// Seconds allowed when reviewing
        #[arg(short, long)]
        time_limit: Option<u32>,
    },
    /// List saved quizzes, newest first
    List,
    /// Serve the local store to remote clients
    Serve {
        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    if let Err(e) = run(args).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), QuizError> {
    let config = load_config(&args)?;

    match args.command {
        Command::Review { file, time_limit } => {
            let session = Session::with_input(config, read_input(&file)?);
            let review = Review::new(session, title_for(&file))
                .with_time_limit(time_limit.map(Duration::from_secs));
            // The terminal UI blocks on key events.
            let score = tokio::task::block_in_place(|| review.run())?;
            println!("{} / {} correct", score.correct, score.gradable);
        }
        Command::Check { file, json } => {
            let session = Session::with_input(config, read_input(&file)?);
            if json {
                println!("{}", export::to_json(session.quiz())?);
            } else {
                print_summary(&session);
            }
        }
        Command::Export { file, inline } => {
            let mut config = config;
            if inline {
                config.export.answer_marking = AnswerMarking::Inline;
            }
            let session = Session::with_input(config, read_input(&file)?);
            print!("{}", session.export());
        }
        Command::Save {
            file,
            title,
            time_limit,
        } => {
            let session = Session::with_input(config, read_input(&file)?);
            let store = StoreBackend::from_config(&session.config().store);
            let id = store.save(session.draft(title, time_limit)).await?;
            println!("{}", id);
        }
        Command::List => {
            let store = StoreBackend::from_config(&config.store);
            for (index, quiz) in store.list().await?.iter().enumerate() {
                let title = if quiz.title.is_empty() {
                    format!("Quiz {}", index + 1)
                } else {
                    quiz.title.clone()
                };
                println!(
                    "{}  {}  {} questions  {}",
                    quiz.id,
                    quiz.created_at.format("%Y-%m-%d %H:%M"),
                    quiz.questions.len(),
                    title
                );
            }
        }
        Command::Serve { port } => {
            let store = LocalStore::new(config.store.directory.clone());
            info!(directory = %store.directory().display(), "serving local store");
            quizpad::server::run(port, store).await?;
        }
    }

    Ok(())
}

fn load_config(args: &Args) -> Result<Config, QuizError> {
    let mut config = Config::load_or_default(args.config.as_deref())?;
    if args.keep_numbers {
        config.parser.numbering = quizpad::parser::Numbering::Keep;
    }
    if args.keep_incomplete {
        config.parser.incomplete = quizpad::parser::IncompletePolicy::Keep;
    }
    if let Some(dir) = &args.store_dir {
        config.store.directory = dir.clone();
    }
    if let Some(remote) = &args.remote {
        config.store.remote = Some(remote.clone());
    }
    Ok(config)
}

fn read_input(path: &Path) -> io::Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        std::fs::read_to_string(path)
    }
}

fn title_for(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| *stem != "-")
        .unwrap_or("Quiz")
        .to_string()
}

fn print_summary(session: &Session) {
    let quiz = session.quiz();
    println!(
        "{} questions from {} lines",
        quiz.len(),
        session.input().lines().count()
    );
    for (index, question) in quiz.iter().enumerate() {
        let answer = question
            .correct_answer
            .map_or_else(|| "-".to_string(), |letter| letter.to_string());
        println!(
            "{:3}. [{}] {} ({} options)",
            index + 1,
            answer,
            question.text,
            question.options.len()
        );
    }
}
