//! quizwizard: command-line client for the QuizWizard API.

use std::io::{self, Write};
use std::process;

use clap::{Parser, Subcommand};
use quizwizard_api::client::{session, ClientError, QuizClient};
use quizwizard_api::config::ClientConfig;
use quizwizard_api::services::catalog::normalize_category;

#[derive(Parser)]
#[command(name = "quizwizard", version, about = "Take trivia quizzes from the terminal")]
struct Cli {
    /// Base URL of the QuizWizard API (overrides API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Retrieve a list of available quiz categories
    Categories,

    /// Start the quiz, optionally in a specific category
    Start {
        /// Category for the quiz; "random" mixes every category
        #[arg(short, long, default_value = "random")]
        category: String,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quizwizard_api=warn".into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let api_url = match cli.api_url {
        Some(url) => url,
        None => match ClientConfig::load() {
            Ok(config) => config.api_url,
            Err(e) => {
                tracing::debug!("Client configuration error: {}", e);
                eprintln!("Failed to load API URL");
                process::exit(1);
            }
        },
    };
    let client = QuizClient::new(api_url);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = match cli.command {
        Commands::Categories => run_categories(&client, &mut out).await,
        Commands::Start { category } => run_start(&client, &category, &mut out).await,
    };

    if let Err(e) = result.and_then(|_| writeln!(out)) {
        eprintln!("Failed to write output: {}", e);
        process::exit(1);
    }
}

async fn run_categories<W: Write>(client: &QuizClient, out: &mut W) -> io::Result<()> {
    writeln!(out, "\n+++ QuizWizard Categories +++")?;

    match client.fetch_categories().await {
        Ok(categories) => session::display_categories(&categories, out),
        Err(e) => writeln!(out, "\nFailed to fetch categories: {}", e),
    }
}

async fn run_start<W: Write>(client: &QuizClient, category: &str, out: &mut W) -> io::Result<()> {
    writeln!(out, "\n+++ QuizWizard Starting +++")?;

    let category = normalize_category(category);
    let questions = match client.fetch_questions(&category).await {
        Ok(questions) => questions,
        Err(e) => return report_fetch_failure(&category, &e, out),
    };

    if questions.is_empty() {
        return write_no_questions(&category, out);
    }

    let stdin = io::stdin();
    let submission = session::run_quiz(&category, &questions, &mut stdin.lock(), out)?;

    match client.submit(&submission).await {
        Ok(results) => session::display_results(&results, out),
        Err(e) => writeln!(out, "\nFailed to submit answers: {}", e),
    }
}

fn report_fetch_failure<W: Write>(
    category: &str,
    err: &ClientError,
    out: &mut W,
) -> io::Result<()> {
    if err.is_unknown_category() {
        writeln!(out, "\nFailure: {} is not a valid category.", category)?;
        writeln!(
            out,
            "\nUse the 'categories' command for a list of available categories."
        )
    } else if err.is_no_questions() {
        write_no_questions(category, out)
    } else {
        writeln!(out, "\nFailed to fetch questions: {}", err)
    }
}

fn write_no_questions<W: Write>(category: &str, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "\nCurrently there are no questions available for the {} category.",
        category
    )?;
    writeln!(out, "\nPlease choose a different category or try again later.")
}
