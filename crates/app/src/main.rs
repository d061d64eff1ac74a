use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::json;
use services::extraction::buckets;
use services::{StudyService, extract_from_text};
use study_core::model::{ExtractedContent, UploadedFile, ValidationError};
use tracing::debug;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Debug, Parser)]
#[command(name = "study")]
#[command(about = "Generate quizzes and summaries from uploaded PDFs")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate an upload and print its extracted content and category
    Analyze(Upload),
    /// Generate a quiz set
    Quiz {
        #[command(flatten)]
        upload: Upload,
        /// Seed for option shuffling
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Generate a summary
    Summary(Upload),
}

#[derive(Debug, Args)]
struct Upload {
    path: PathBuf,
    /// Declared MIME type; the file extension is used when omitted
    #[arg(long)]
    mime: Option<String>,
    /// Plain-text file to study instead of the built-in material
    #[arg(long)]
    text: Option<PathBuf>,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_writer(io::stderr))
        .init();
}

fn upload_from_path(path: &Path, mime: Option<String>) -> anyhow::Result<UploadedFile> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let size_bytes = match fs::metadata(path) {
        Ok(meta) => meta.len(),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(ValidationError::Missing.into());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("reading {}", path.display()));
        }
    };
    Ok(UploadedFile::new(name, size_bytes, mime))
}

fn load_content(
    service: &StudyService,
    upload: &Upload,
) -> anyhow::Result<(UploadedFile, ExtractedContent)> {
    let file = upload_from_path(&upload.path, upload.mime.clone())?;
    let mut content = service.analyze_upload(&file)?;
    if let Some(text_path) = &upload.text {
        let text = fs::read_to_string(text_path)
            .with_context(|| format!("reading {}", text_path.display()))?;
        content = extract_from_text(&text, content.page_count);
        debug!(
            file = %file.name,
            text = %text_path.display(),
            words = content.word_count,
            "using supplied text instead of built-in material"
        );
    }
    Ok((file, content))
}

fn run(cli: Cli) -> anyhow::Result<String> {
    let service = StudyService::from_env();

    let output = match cli.command {
        Command::Analyze(upload) => {
            let (file, content) = load_content(&service, &upload)?;
            let category = service.classify(&content, &file.name);
            // Only built-in material comes from a bucket.
            let bucket = upload
                .text
                .is_none()
                .then(|| buckets::select(&file.name).bucket);
            json!({ "file": file, "category": category, "bucket": bucket, "content": content })
        }
        Command::Quiz { upload, seed } => {
            let (file, content) = load_content(&service, &upload)?;
            let mut rng = seed.map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64);
            let set = service.quiz_set_from_content(&content, &file.name, &mut rng)?;
            serde_json::to_value(&set)?
        }
        Command::Summary(upload) => {
            let (_, content) = load_content(&service, &upload)?;
            serde_json::to_value(service.summarize_content(&content))?
        }
    };

    Ok(serde_json::to_string_pretty(&output)?)
}

fn main() -> ExitCode {
    init_tracing();
    match run(Cli::parse()) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}
