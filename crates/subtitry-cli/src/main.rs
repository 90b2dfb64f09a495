use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use subtitry_core::{
    DEFAULT_LANGUAGE, SubtitryError, TranscriptClient, VideoId, get_cache_dir,
    get_transcript_path, load_transcript, save_transcript,
};

const DRY_RUN_TRANSCRIPT: &str = "Welcome to this video. Today we will walk through the topic \
step by step and wrap up with a short summary of the key points.";

#[derive(Parser)]
#[command(name = "subtitry")]
#[command(about = "Fetch YouTube video transcripts as plain text")]
struct Cli {
    /// Video URL
    url: String,

    /// Caption language code (e.g., "en", "ru", "uk")
    #[arg(short, long, default_value = DEFAULT_LANGUAGE)]
    lang: String,

    /// Force re-fetching even if a cached transcript exists
    #[arg(short, long)]
    force: bool,

    /// Print a canned transcript without contacting the endpoint
    #[arg(long)]
    dry_run: bool,
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "subtitry=info".into()),
        )
        .init();

    let cli = Cli::parse();

    // Validate the URL early, before any cache or network work
    let video_id = match VideoId::from_url(&cli.url) {
        Ok(id) => id,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            std::process::exit(1);
        }
    };

    println!(
        "\n{}  {}\n",
        style("subtitry").cyan().bold(),
        style("YouTube Transcript Fetcher").dim()
    );

    let client = if cli.dry_run {
        TranscriptClient::with_stub(DRY_RUN_TRANSCRIPT)
    } else {
        TranscriptClient::new()?
    };

    let cache_dir = get_cache_dir(&video_id);
    let transcript_path = get_transcript_path(&cache_dir, &cli.lang);

    let transcript = if !cli.force && !cli.dry_run && transcript_path.exists() {
        let transcript = load_transcript(&transcript_path)?;
        println!(
            "{} Transcript: {} chars, {} {}",
            style("✓").green().bold(),
            transcript.text.chars().count(),
            style(&transcript.language).yellow(),
            style("(cached)").dim()
        );
        transcript
    } else {
        let spinner = create_spinner("Fetching transcript...");
        match client.fetch_transcript_by_id(&video_id, &cli.lang).await {
            Ok(transcript) => {
                if !cli.dry_run {
                    save_transcript(&transcript, &transcript_path)?;
                }
                spinner.finish_with_message(format!(
                    "{} Transcript: {} chars, {}",
                    style("✓").green().bold(),
                    transcript.text.chars().count(),
                    style(&transcript.language).yellow()
                ));
                transcript
            }
            Err(e) => {
                spinner.finish_with_message(format!(
                    "{} {}",
                    style("✗").red().bold(),
                    describe_error(&e)
                ));
                std::process::exit(1);
            }
        }
    };

    if !cli.dry_run {
        println!(
            "\n{} {}\n",
            style("Saved:").dim(),
            style(transcript_path.display()).cyan()
        );
    }
    println!("{}", style("─".repeat(60)).dim());
    println!("{}", transcript.text);

    Ok(())
}

/// Each failure kind implies a different corrective action; keep them apart.
fn describe_error(err: &SubtitryError) -> String {
    match err {
        SubtitryError::InvalidVideoUrl { .. } => format!("{err}. Double-check the URL."),
        SubtitryError::NoTranscriptAvailable { .. } => {
            format!("{err}. The video may have captions disabled; try another one.")
        }
        SubtitryError::Upstream { .. } | SubtitryError::Http(_) => {
            format!("{err}. Try again later.")
        }
        _ => err.to_string(),
    }
}
