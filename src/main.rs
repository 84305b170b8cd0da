mod acquire;
mod parser;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};

use parser::ner::RuleRecognizer;
use parser::record::ParsedRecord;

#[derive(Parser)]
#[command(name = "resume_scan", about = "Heuristic resume field extraction")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract fields from one document and print the record as JSON
    Parse {
        /// Path to a .txt/.text/.md document
        file: PathBuf,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Extract fields from every supported document in a directory
    Batch {
        /// Directory containing documents
        dir: PathBuf,
        /// Max documents to process (default: all)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Print the skill catalog
    Catalog,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let recognizer = RuleRecognizer::new();

    let result = match cli.command {
        Commands::Parse { file, pretty } => {
            let text = acquire::read_text(&file)?;
            let record = parser::parse_text(&text, &recognizer);
            let json = if pretty {
                serde_json::to_string_pretty(&record)?
            } else {
                serde_json::to_string(&record)?
            };
            println!("{}", json);
            Ok(())
        }
        Commands::Batch { dir, limit } => {
            let files = collect_documents(&dir, limit)?;
            if files.is_empty() {
                println!("No supported documents in {}.", dir.display());
                return Ok(());
            }
            println!("Parsing {} documents...", files.len());
            let counts = parse_batch(&files, &recognizer);
            counts.print();
            Ok(())
        }
        Commands::Catalog => {
            for skill in parser::extract::skills::SKILL_CATALOG {
                println!("{}", skill);
            }
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    result
}

struct BatchCounts {
    parsed: usize,
    failed: usize,
    empty: usize,
    names: usize,
    emails: usize,
    phones: usize,
    addresses: usize,
    linkedins: usize,
    skills: usize,
    experience: usize,
}

impl BatchCounts {
    fn print(&self) {
        println!(
            "Parsed {} documents ({} failed, {} empty): {} names, {} emails, {} phones, {} addresses, {} linkedin profiles, {} skill hits, {} experience entries.",
            self.parsed,
            self.failed,
            self.empty,
            self.names,
            self.emails,
            self.phones,
            self.addresses,
            self.linkedins,
            self.skills,
            self.experience,
        );
    }
}

fn collect_documents(dir: &PathBuf, limit: Option<usize>) -> anyhow::Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory {}", dir.display()))?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file() && acquire::is_supported(p))
        .collect();
    files.sort();

    if let Some(n) = limit {
        files.truncate(n);
    }
    Ok(files)
}

fn parse_batch(files: &[PathBuf], recognizer: &RuleRecognizer) -> BatchCounts {
    use indicatif::{ProgressBar, ProgressStyle};
    use rayon::prelude::*;

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})")
            .unwrap()
            .progress_chars("#>-"),
    );

    let results: Vec<(PathBuf, anyhow::Result<ParsedRecord>)> = files
        .par_iter()
        .map(|path| {
            let record = acquire::read_text(path).map(|text| parser::parse_text(&text, recognizer));
            pb.inc(1);
            (path.clone(), record)
        })
        .collect();
    pb.finish_and_clear();

    let mut counts = BatchCounts {
        parsed: 0,
        failed: 0,
        empty: 0,
        names: 0,
        emails: 0,
        phones: 0,
        addresses: 0,
        linkedins: 0,
        skills: 0,
        experience: 0,
    };

    println!(
        "{:<28} | {:<22} | {:<28} | {:>6}",
        "File", "Name", "Email", "Skills"
    );
    println!("{}", "-".repeat(94));

    for (path, result) in results {
        let file = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        match result {
            Ok(record) => {
                counts.parsed += 1;
                counts.empty += record.is_empty() as usize;
                counts.names += record.name.is_some() as usize;
                counts.emails += record.email.is_some() as usize;
                counts.phones += record.phone.is_some() as usize;
                counts.addresses += record.address.is_some() as usize;
                counts.linkedins += record.linkedin.is_some() as usize;
                counts.skills += record.skills.len();
                counts.experience += record.experience.len();

                println!(
                    "{:<28} | {:<22} | {:<28} | {:>6}",
                    truncate(&file, 28),
                    truncate(record.name.as_deref().unwrap_or("-"), 22),
                    truncate(record.email.as_deref().unwrap_or("-"), 28),
                    record.skills.len(),
                );
            }
            Err(e) => {
                counts.failed += 1;
                tracing::warn!(file = %file, error = %e, "skipping document");
            }
        }
    }

    counts
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}
