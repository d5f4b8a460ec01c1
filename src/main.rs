use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use serde_json::to_string_pretty;
use std::env;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tagfreq::cli::Cli;
use tagfreq::corpus::SourceDocument;
use tagfreq::frequency::{CorpusMetrics, Tagset, write_csv};
use tagfreq::models::{
    CorpusSummary, ExtraData, Header, OUTPUT_FORMAT_VERSION, Output, SystemEnvironment,
};
use tagfreq::scanner::{ScanResult, collect_documents};
use tagfreq::tagger::RuleTagger;
use tagfreq::utils::file::compile_exclude_patterns;
use tagfreq::workspace::Workspace;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let start_time = Utc::now();

    let exclude_patterns = compile_exclude_patterns(&cli.exclude);
    if !cli.exclude.is_empty() {
        println!("Exclusion patterns: {:?}", cli.exclude);
    }

    let tagger = match &cli.lexicon {
        Some(path) => RuleTagger::from_lexicon_file(path)?,
        None => RuleTagger::with_default_lexicon()?,
    };
    info!(
        "Discourse lexicon: {} phrases in {} categories",
        tagger.lexicon().len(),
        tagger.lexicon().categories().len()
    );

    let mut workspace = Workspace::new();
    let mut warnings = Vec::new();

    let target_scan = collect_documents(&cli.target_dir, cli.max_depth, &exclude_patterns)?;
    println!(
        "Found {} documents in {} ({} items excluded)",
        target_scan.documents.len(),
        cli.target_dir.display(),
        target_scan.excluded_count
    );
    let progress_bar = create_progress_bar(target_scan.documents.len());
    workspace.load_target(&target_scan.documents, &tagger, &progress_bar)?;
    progress_bar.finish_with_message("Target corpus tagged");

    let mut excluded_count = target_scan.excluded_count;
    if let Some(reference_dir) = &cli.reference {
        let reference_scan = collect_documents(reference_dir, cli.max_depth, &exclude_patterns)?;
        excluded_count += reference_scan.excluded_count;
        load_reference(&mut workspace, &reference_scan.documents, &tagger)?;
    }

    if cli.categories {
        if let Err(err) = workspace.assign_categories() {
            warnings.push(err.to_string());
        }
    }

    workspace.build_frequency_tables()?;

    let target = workspace
        .target()
        .context("Target corpus missing after loading")?;
    print_corpus_info("Target corpus", &target.metrics);
    if let Some(reference) = workspace.reference() {
        print_corpus_info("Reference corpus", &reference.metrics);
    }

    let end_time = Utc::now();
    let output = create_output(
        &workspace,
        &target_scan,
        excluded_count,
        tagger.lexicon().categories().len(),
        warnings,
        start_time,
        end_time,
    )?;
    write_output(&cli.output_file, &output)?;
    println!("JSON output written to {}", cli.output_file.display());

    if let Some(csv_dir) = &cli.csv_dir {
        write_csv_tables(csv_dir, &output)?;
        println!("CSV tables written to {}", csv_dir.display());
    }

    Ok(())
}

fn load_reference(
    workspace: &mut Workspace,
    documents: &[SourceDocument],
    tagger: &RuleTagger,
) -> Result<()> {
    let progress_bar = create_progress_bar(documents.len());
    workspace.load_reference(documents, tagger, &progress_bar)?;
    progress_bar.finish_with_message("Reference corpus tagged");
    Ok(())
}

fn create_progress_bar(total_documents: usize) -> ProgressBar {
    let progress_bar = ProgressBar::new(total_documents as u64);
    match ProgressStyle::default_bar().template(
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} documents tagged ({eta})",
    ) {
        Ok(style) => progress_bar.set_style(style.progress_chars("#>-")),
        Err(err) => warn!("Failed to create progress bar style: {}", err),
    }
    progress_bar
}

fn print_corpus_info(title: &str, metrics: &CorpusMetrics) {
    println!("{}", title);
    println!("  Number of tokens in corpus: {}", metrics.tokens);
    println!("  Number of word tokens in corpus: {}", metrics.words);
    println!("  Number of documents in corpus: {}", metrics.documents);
}

fn create_output(
    workspace: &Workspace,
    target_scan: &ScanResult,
    excluded_count: usize,
    lexicon_categories: usize,
    warnings: Vec<String>,
    start_time: chrono::DateTime<Utc>,
    end_time: chrono::DateTime<Utc>,
) -> Result<Output> {
    let duration = (end_time - start_time).num_nanoseconds().unwrap_or(0) as f64 / 1_000_000_000.0;

    let target = workspace.target().context("No target corpus loaded")?;
    let frequency_tables = workspace
        .frequency_tables()
        .context("Frequency tables have not been built")?
        .clone();

    let extra_data = ExtraData {
        documents_count: target_scan.documents.len(),
        excluded_count,
        lexicon_categories,
        system_environment: SystemEnvironment {
            operating_system: sys_info::os_type().ok(),
            cpu_architecture: env::consts::ARCH.to_string(),
            platform: format!(
                "{}-{}-{}",
                sys_info::os_type().unwrap_or_else(|_| "unknown".to_string()),
                sys_info::os_release().unwrap_or_else(|_| "unknown".to_string()),
                env::consts::ARCH
            ),
            rust_version: rustc_version_runtime::version().to_string(),
        },
    };

    Ok(Output {
        headers: vec![Header {
            start_timestamp: start_time.to_rfc3339(),
            end_timestamp: end_time.to_rfc3339(),
            duration,
            extra_data,
            warnings,
            output_format_version: OUTPUT_FORMAT_VERSION.to_string(),
        }],
        target: CorpusSummary::from(target),
        reference: workspace.reference().map(CorpusSummary::from),
        categories: workspace.category_counts(),
        frequency_tables,
    })
}

fn write_output(output_file: &Path, output: &Output) -> Result<()> {
    let json_output = to_string_pretty(output)?;
    let mut file = File::create(output_file)
        .with_context(|| format!("Failed to create {}", output_file.display()))?;
    file.write_all(json_output.as_bytes())?;
    Ok(())
}

fn write_csv_tables(csv_dir: &Path, output: &Output) -> Result<()> {
    fs::create_dir_all(csv_dir)
        .with_context(|| format!("Failed to create directory {}", csv_dir.display()))?;

    for tagset in [Tagset::Pos, Tagset::Ds] {
        let path = csv_dir.join(format!("{}_frequencies.csv", tagset));
        let file =
            File::create(&path).with_context(|| format!("Failed to create {}", path.display()))?;
        write_csv(output.frequency_tables.get(tagset), BufWriter::new(file))?;
    }
    Ok(())
}
