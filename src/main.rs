mod config;
mod error;
mod interview;
mod logging;
mod models;
mod pipeline;
mod quiz;
mod resume;
mod tui;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::Config;
use models::{ApplicationStatus, Domain};
use pipeline::Pipeline;
use quiz::QuizSession;
use std::io::{BufRead, Write};
use tui::{App, Section};

#[derive(Parser)]
#[command(name = "interviewr")]
#[command(about = "Interview preparation dashboard - track applications, practice questions, rehearse")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the dashboard (default)
    Dashboard {
        /// Section to open first
        #[arg(short, long, value_enum)]
        tab: Option<Section>,

        /// Start with an empty pipeline instead of the sample applications
        #[arg(long)]
        empty: bool,
    },

    /// Print the sample application pipeline
    List {
        /// Filter by status (applied, interviewing, rejected, offered)
        #[arg(short, long)]
        status: Option<ApplicationStatus>,
    },

    /// Answer practice questions in the terminal
    Quiz {
        /// Domain (frontend, backend, hr, product)
        #[arg(short, long)]
        domain: Option<Domain>,
    },

    /// Show the resolved configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let (config, config_path) = Config::load()?;

    let command = cli.command.unwrap_or(Commands::Dashboard {
        tab: None,
        empty: false,
    });

    match command {
        Commands::Dashboard { tab, empty } => {
            logging::init_file(&config.log_level, &config.log_path())?;
            let pipeline = if empty || !config.seed_sample_data {
                Pipeline::new()
            } else {
                Pipeline::with_sample_data()
            };
            let app = App::new(pipeline, tab.unwrap_or(config.default_tab));
            tui::run_dashboard(app)?;
        }

        Commands::List { status } => {
            logging::init_stderr("warn")?;
            let pipeline = Pipeline::with_sample_data();
            print_pipeline(&pipeline, status, &mut std::io::stdout().lock())?;
        }

        Commands::Quiz { domain } => {
            logging::init_stderr("warn")?;
            let mut session = QuizSession::default();
            if let Some(domain) = domain {
                session.select_domain(domain);
            }
            let stdin = std::io::stdin();
            run_quiz(&mut session, stdin.lock(), std::io::stdout().lock())?;
        }

        Commands::Config => {
            println!("Config file: {}", config_path.display());
            if !config_path.exists() {
                println!("(not found - using defaults)");
            }
            println!("Log file:    {}", config.log_path().display());
            println!(
                "{}",
                serde_json::to_string_pretty(&config).context("Failed to render config")?
            );
        }
    }

    Ok(())
}

fn print_pipeline(
    pipeline: &Pipeline,
    status: Option<ApplicationStatus>,
    out: &mut impl Write,
) -> Result<()> {
    let records = pipeline.list_by(status);
    if records.is_empty() {
        writeln!(out, "No applications found.")?;
    } else {
        writeln!(
            out,
            "{:<4} {:<13} {:<14} {:<28} {:<20} {:<10}",
            "ID", "STATUS", "COMPANY", "POSITION", "LOCATION", "APPLIED"
        )?;
        writeln!(out, "{}", "-".repeat(94))?;
        for record in records {
            writeln!(
                out,
                "{:<4} {:<13} {:<14} {:<28} {:<20} {:<10}",
                record.id,
                record.status,
                truncate(&record.company, 14),
                truncate(&record.position, 28),
                truncate(&record.location, 20),
                record.applied_date
            )?;
        }
    }

    let counts = pipeline.summary_counts();
    writeln!(
        out,
        "\nApplications: {}  Interviews: {}  Rejections: {}  Offers: {}",
        counts.total, counts.interviewing, counts.rejected, counts.offered
    )?;
    Ok(())
}

fn run_quiz(session: &mut QuizSession, input: impl BufRead, mut out: impl Write) -> Result<()> {
    print_question(session, &mut out)?;

    for line in input.lines() {
        let line = line.context("Failed to read answer")?;
        let cmd = line.trim();
        match cmd {
            "" => continue,
            "q" | "quit" => break,
            "n" | "next" => {
                session.next_question();
                if session.questions_in_domain() <= 1 {
                    writeln!(out, "(Demo set: one question per domain)")?;
                }
                print_question(session, &mut out)?;
            }
            _ => {
                if let Ok(domain) = cmd.parse::<Domain>() {
                    session.select_domain(domain);
                    print_question(session, &mut out)?;
                    continue;
                }
                let Some(index) = cmd.parse::<usize>().ok().and_then(|n| n.checked_sub(1)) else {
                    writeln!(out, "Unknown input '{}'", cmd)?;
                    continue;
                };
                let outcome = session.choose(index).and_then(|()| session.submit());
                match outcome {
                    Ok(outcome) => {
                        if outcome.correct {
                            writeln!(out, "Correct! Well done!")?;
                        } else {
                            writeln!(out, "Incorrect. Keep learning! (answer: {})", outcome.correct_index + 1)?;
                        }
                        writeln!(out, "{}", textwrap::fill(outcome.explanation, 72))?;
                        let score = session.score();
                        writeln!(out, "Score: {}/{}", score.correct, score.total)?;
                        writeln!(out, "Enter 'n' for the next question, a domain to switch, or 'q' to quit.")?;
                    }
                    Err(e) => writeln!(out, "{}", e)?,
                }
            }
        }
    }

    let score = session.score();
    writeln!(out, "Final score: {}/{}", score.correct, score.total)?;
    Ok(())
}

fn print_question(session: &QuizSession, out: &mut impl Write) -> Result<()> {
    match (session.domain(), session.current_question()) {
        (Some(domain), Some(question)) => {
            writeln!(out, "\n[{}] {}", domain, question.prompt)?;
            for (i, option) in question.options.iter().enumerate() {
                writeln!(out, "  {}. {}", i + 1, option)?;
            }
            writeln!(out, "Answer with a number (or 'q' to quit):")?;
        }
        _ => writeln!(out, "Select a domain: frontend, backend, hr, product")?,
    }
    Ok(())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuizScore;
    use std::io::Cursor;

    fn quiz_transcript(session: &mut QuizSession, input: &str) -> String {
        let mut out = Vec::new();
        run_quiz(session, Cursor::new(input), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn quiz_counts_correct_then_wrong() {
        let mut session = QuizSession::default();
        session.select_domain(Domain::Frontend);

        let transcript = quiz_transcript(&mut session, "2\n2\nn\n1\nq\n");

        assert_eq!(session.score(), QuizScore { correct: 1, total: 2 });
        assert!(transcript.contains("Correct! Well done!"));
        assert!(transcript.contains("Answer already submitted"));
        assert!(transcript.contains("Incorrect. Keep learning! (answer: 2)"));
        assert!(transcript.contains("Final score: 1/2"));
    }

    #[test]
    fn quiz_asks_for_domain_first() {
        let mut session = QuizSession::default();
        let transcript = quiz_transcript(&mut session, "1\nproduct\n2\n");

        assert!(transcript.contains("Select a domain"));
        assert!(transcript.contains("Select a domain first"));
        assert!(transcript.contains("[Product]"));
        assert_eq!(session.score(), QuizScore { correct: 1, total: 1 });
    }

    #[test]
    fn quiz_rejects_unknown_input() {
        let mut session = QuizSession::default();
        session.select_domain(Domain::HR);
        let transcript = quiz_transcript(&mut session, "maybe\n0\n9\n");

        assert!(transcript.contains("Unknown input 'maybe'"));
        assert!(transcript.contains("Unknown input '0'"));
        assert!(transcript.contains("Option 9 is out of range"));
        assert_eq!(session.score(), QuizScore::default());
    }

    #[test]
    fn list_prints_filtered_table_and_counts() {
        let pipeline = Pipeline::with_sample_data();
        let mut out = Vec::new();
        print_pipeline(&pipeline, Some(ApplicationStatus::Offered), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Microsoft"));
        assert!(!text.contains("Google"));
        assert!(text.contains("Applications: 4  Interviews: 1  Rejections: 1  Offers: 1"));
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("Zürich Instruments", 9), "Zürich...");
    }
}
