//! Wayfinder CLI binary.

use std::io::{self, BufRead, Write};
use std::process;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use wayfinder::chat::ChatEngine;
use wayfinder::intent::IntentClassifier;
use wayfinder::recommend::RecommendEngine;
use wayfinder::session::Session;
use wayfinder::vocabulary::Vocabulary;

/// Wayfinder - a conversational career guidance engine
#[derive(Parser, Debug, Clone)]
#[command(name = "wayfinder")]
#[command(about = "A conversational career and course guidance engine")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
struct WayfinderArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    quiet: bool,

    /// Preselect an interest tag (repeatable, e.g. --interest Coding)
    #[arg(short, long = "interest", value_name = "TAG")]
    interest: Vec<String>,

    /// Answer one question and exit instead of starting the chat loop
    #[arg(short, long, value_name = "QUESTION")]
    ask: Option<String>,

    /// Output format for recommendations
    #[arg(short = 'f', long = "format", default_value = "human")]
    output_format: OutputFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Human,
    Json,
}

impl WayfinderArgs {
    fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

fn main() {
    let args = WayfinderArgs::parse();

    let default_level = match args.verbosity() {
        0 => "error",
        1 => "warn",
        2 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("wayfinder={default_level}"))),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(args: WayfinderArgs) -> anyhow::Result<()> {
    let vocabulary = Vocabulary::global();
    for tag in &args.interest {
        if !vocabulary.contains(tag) {
            eprintln!("Warning: unknown interest tag '{tag}' (see known tags with :profile)");
        }
    }

    if let Some(question) = args.ask {
        let classifier = IntentClassifier::new()?;
        let answers = wayfinder::answer::AnswerEngine::new();
        println!("{}", answers.answer(&classifier.analyze(&question)));
        return Ok(());
    }

    let chat = ChatEngine::new()?;
    let recommender = RecommendEngine::new();
    let mut session = Session::new();
    session.profile.set_selected_interests(args.interest);

    println!("Wayfinder career guidance. Tell me about your interests, hobbies, and skills.");
    println!("Commands: :recommend  :profile  :reset  :quit");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match line {
            ":quit" | ":q" => break,
            ":reset" => {
                session.reset();
                println!("Session cleared.");
            }
            ":profile" => print_profile(&session),
            ":recommend" => {
                let recommendation = recommender.recommend(&session.profile);
                match args.output_format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&recommendation)?);
                    }
                    OutputFormat::Human => {
                        println!("Recommended course: {}", recommendation.course);
                        println!("Career suggestions:");
                        for career in &recommendation.careers {
                            println!("  • {career}");
                        }
                    }
                }
                session.recommendation = Some(recommendation);
            }
            text => {
                let reply = chat.process(&mut session, text);
                println!("{reply}");
            }
        }
    }

    Ok(())
}

fn print_profile(session: &Session) {
    let profile = &session.profile;
    if profile.is_empty() {
        println!("Profile is empty. Tell me about your interests first.");
        return;
    }
    if !profile.selected_interests.is_empty() {
        println!("Selected interests: {}", profile.selected_interests.join(", "));
    }
    if !profile.chat_keywords.is_empty() {
        println!("Chat keywords: {}", profile.chat_keywords.join(", "));
    }
    println!("Last sentiment: {}", profile.sentiment);
}
