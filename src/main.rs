// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::PathBuf;
use tracing::{error, info, warn};
use treino_sheets::exporter::rows;
use treino_sheets::utils::logging::{format_info, format_success, format_warning};
use treino_sheets::{
    BatchNormalizer, Category, Config, Exercise, ExerciseLibrary, FileImporter, ImportProgress,
    JsonExporter, SheetStore, Validator, WorkoutSheet, XlsxExporter,
};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "treino_sheets")]
#[command(version = "0.1.0")]
#[command(about = "Workout sheet builder with bulk exercise ingestion", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ExportFormat {
    Xlsx,
    Json,
    Tsv,
}

#[derive(Subcommand)]
enum Commands {
    /// Import exercises from spreadsheet or text files into a sheet
    Import {
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Category applied when the input carries no TREINO directive
        #[arg(long, default_value = "A")]
        category: String,

        /// Append to an existing sheet, addressed by id or title
        #[arg(long, value_name = "ID_OR_TITLE")]
        sheet: Option<String>,

        /// Title for a newly created sheet
        #[arg(long, value_name = "TITLE")]
        title: Option<String>,

        /// Parse and report without touching the library
        #[arg(long)]
        dry_run: bool,

        /// Override the configured per-import row cap
        #[arg(long, value_name = "NUM")]
        limit: Option<usize>,
    },

    /// Read a pasted block from stdin through the same ingestion path
    Paste {
        #[arg(long, default_value = "A")]
        category: String,

        #[arg(long, value_name = "ID_OR_TITLE")]
        sheet: Option<String>,

        #[arg(long, value_name = "TITLE")]
        title: Option<String>,

        #[arg(long)]
        dry_run: bool,
    },

    /// Export a stored sheet as a document
    Export {
        sheet: String,

        #[arg(long, value_enum, default_value = "xlsx")]
        format: ExportFormat,

        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        #[arg(long)]
        pretty: bool,
    },

    /// List stored sheets
    List,

    /// Show one sheet with its exercises per category
    Show { sheet: String },

    /// Delete a stored sheet
    Remove {
        sheet: String,

        #[arg(long)]
        confirm: bool,
    },

    /// Library statistics
    Stats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    treino_sheets::utils::logging::init_logger(cli.color, cli.verbose);

    let config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::default_config()
    };

    match cli.command {
        Commands::Import {
            files,
            category,
            sheet,
            title,
            dry_run,
            limit,
        } => {
            cmd_import(&config, files, &category, sheet, title, dry_run, limit, cli.color)?;
        }
        Commands::Paste {
            category,
            sheet,
            title,
            dry_run,
        } => {
            cmd_paste(&config, &category, sheet, title, dry_run)?;
        }
        Commands::Export {
            sheet,
            format,
            output,
            pretty,
        } => {
            cmd_export(&config, &sheet, format, output, pretty)?;
        }
        Commands::List => {
            cmd_list(&config)?;
        }
        Commands::Show { sheet } => {
            cmd_show(&config, &sheet)?;
        }
        Commands::Remove { sheet, confirm } => {
            cmd_remove(&config, &sheet, confirm)?;
        }
        Commands::Stats => {
            cmd_stats(&config)?;
        }
    }

    Ok(())
}

fn cmd_import(
    config: &Config,
    files: Vec<PathBuf>,
    category: &str,
    sheet: Option<String>,
    title: Option<String>,
    dry_run: bool,
    limit: Option<usize>,
    color: bool,
) -> Result<()> {
    let category = Validator::validate_category(category)?;
    let mut options = config.ingest_options();
    if let Some(limit) = limit {
        options.max_rows = limit;
    }
    let mut importer = FileImporter::new(BatchNormalizer::new(options));
    let mut progress = ImportProgress::new(files.len(), color);
    let mut exercises = Vec::new();

    for file in &files {
        let name = file
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| file.display().to_string());

        if let Err(e) = Validator::validate_import_file(file) {
            error!("{}", e);
            progress.file_failed(&name);
            continue;
        }

        match importer.import_file(file, category) {
            Ok(imported) => {
                progress.file_done(&name, imported.len());
                exercises.extend(imported);
            }
            Err(e) => {
                error!("Failed to import {}: {}", file.display(), e);
                progress.file_failed(&name);
            }
        }
    }

    let stats = progress.finish();
    info!(
        "Processed {} files ({} failed) in {:.2}s",
        stats.files_processed, stats.files_failed, stats.duration_secs
    );

    finish_ingestion(config, exercises, sheet, title, dry_run)
}

fn cmd_paste(
    config: &Config,
    category: &str,
    sheet: Option<String>,
    title: Option<String>,
    dry_run: bool,
) -> Result<()> {
    let category = Validator::validate_category(category)?;
    let text = std::io::read_to_string(std::io::stdin()).context("Failed to read stdin")?;

    let mut importer = FileImporter::new(BatchNormalizer::new(config.ingest_options()));
    let exercises = importer.import_paste(&text, category);

    finish_ingestion(config, exercises, sheet, title, dry_run)
}

/// Shared tail of both ingestion commands: report, then persist into a new
/// or existing sheet plus the reusable exercise library.
fn finish_ingestion(
    config: &Config,
    exercises: Vec<Exercise>,
    sheet: Option<String>,
    title: Option<String>,
    dry_run: bool,
) -> Result<()> {
    if exercises.is_empty() {
        println!("{}", format_warning("Nothing to import: 0 exercises recognized"));
        return Ok(());
    }

    print_category_breakdown(&exercises);

    if dry_run {
        println!(
            "{}",
            format_info(&format!(
                "Dry run: {} exercises parsed, nothing saved",
                exercises.len()
            ))
        );
        return Ok(());
    }

    let store = SheetStore::new(&config.library.root_dir)?;
    let mut target = match sheet {
        Some(key) => store.find(&key)?,
        None => {
            let title = title
                .unwrap_or_else(|| format!("Planilha {}", chrono::Utc::now().format("%Y-%m-%d")));
            Validator::validate_sheet_title(&title)?;
            WorkoutSheet::new(Uuid::new_v4().to_string(), title)
        }
    };

    let count = exercises.len();
    target.add_exercises(exercises.clone());
    store.save(&target)?;
    println!(
        "{}",
        format_success(&format!(
            "Saved {} exercises to sheet \"{}\" ({})",
            count, target.title, target.id
        ))
    );

    let library = ExerciseLibrary::new(&config.library.exercises_file);
    let outcome = library.add_many(exercises)?;
    println!(
        "{}",
        format_info(&format!(
            "Exercise library: {} new templates, {} duplicates skipped",
            outcome.added, outcome.duplicates
        ))
    );

    Ok(())
}

fn cmd_export(
    config: &Config,
    sheet_key: &str,
    format: ExportFormat,
    output: Option<PathBuf>,
    pretty: bool,
) -> Result<()> {
    let store = SheetStore::new(&config.library.root_dir)?;
    let sheet = store.find(sheet_key)?;
    let output_dir = output.unwrap_or_else(|| config.export.output_dir.clone());

    let path = match format {
        ExportFormat::Xlsx => XlsxExporter::new(&output_dir)?.export_sheet(&sheet)?,
        ExportFormat::Json => {
            JsonExporter::new(&output_dir)?.export_sheet(&sheet, pretty || config.export.pretty)?
        }
        ExportFormat::Tsv => {
            let tsv = rows::to_tsv(&sheet.exercises);
            if tsv.is_empty() {
                println!("{}", format_warning("Sheet has no exercises to export"));
                return Ok(());
            }
            fs::create_dir_all(&output_dir)?;
            let path = output_dir.join(format!("{}.tsv", sheet.id));
            fs::write(&path, tsv)?;
            path
        }
    };

    println!("{}", format_success(&format!("Exported {}", path.display())));
    Ok(())
}

fn cmd_list(config: &Config) -> Result<()> {
    let store = SheetStore::new(&config.library.root_dir)?;
    let summaries = store.list()?;

    if summaries.is_empty() {
        println!("{}", format_info("No sheets stored yet"));
        return Ok(());
    }

    for summary in summaries {
        let student = summary.student_name.as_deref().unwrap_or("-");
        println!(
            "{}  {:<30}  {:<20}  {:>3} exercises  {}",
            summary.id,
            summary.title,
            student,
            summary.exercise_count,
            summary.last_modified.format("%Y-%m-%d %H:%M")
        );
    }
    Ok(())
}

fn cmd_show(config: &Config, sheet_key: &str) -> Result<()> {
    let store = SheetStore::new(&config.library.root_dir)?;
    let sheet = store.find(sheet_key)?;

    println!("{} ({})", sheet.title, sheet.id);
    if let Some(student) = &sheet.student_name {
        println!("Aluno: {student}");
    }
    if let Some(objective) = &sheet.objective {
        println!("Objetivo: {objective}");
    }
    println!("Frequência: {}x por semana\n", sheet.weekly_frequency);

    for (category, group) in rows::sections(&sheet.exercises) {
        println!("TREINO {category}");
        for (index, exercise) in group.iter().enumerate() {
            let mut line = format!(
                "  {}. {}: {} x {}",
                index + 1,
                exercise.name,
                exercise.series,
                exercise.repetitions
            );
            if !exercise.rest.is_empty() {
                line.push_str(&format!(", pausa {}", exercise.rest));
            }
            if !exercise.notes.is_empty() {
                line.push_str(&format!(" ({})", exercise.notes));
            }
            println!("{line}");
        }
        println!();
    }
    Ok(())
}

fn cmd_remove(config: &Config, sheet_key: &str, confirm: bool) -> Result<()> {
    let store = SheetStore::new(&config.library.root_dir)?;
    let sheet = store.find(sheet_key)?;

    if !confirm {
        println!(
            "{}",
            format_warning(&format!(
                "This deletes sheet \"{}\" ({}). Re-run with --confirm",
                sheet.title, sheet.id
            ))
        );
        return Ok(());
    }

    store.delete(&sheet.id)?;
    println!(
        "{}",
        format_success(&format!("Removed sheet \"{}\"", sheet.title))
    );
    Ok(())
}

fn cmd_stats(config: &Config) -> Result<()> {
    let store = SheetStore::new(&config.library.root_dir)?;
    let summaries = store.list()?;

    let mut per_category = vec![0usize; Category::all().len()];
    let mut total_exercises = 0;
    for summary in &summaries {
        let sheet = store.load(&summary.id)?;
        total_exercises += sheet.exercises.len();
        for exercise in &sheet.exercises {
            per_category[exercise.category as usize] += 1;
        }
    }

    println!("Sheets stored:      {}", summaries.len());
    println!("Exercises in use:   {total_exercises}");
    for category in Category::all() {
        let count = per_category[*category as usize];
        if count > 0 {
            println!("  Treino {category}: {count}");
        }
    }

    let templates = ExerciseLibrary::new(&config.library.exercises_file).load_all()?;
    println!("Reusable templates: {}", templates.len());
    Ok(())
}

fn print_category_breakdown(exercises: &[Exercise]) {
    for category in Category::all() {
        let count = exercises
            .iter()
            .filter(|e| e.category == *category)
            .count();
        if count > 0 {
            println!("{}", format_info(&format!("Treino {category}: {count} exercises")));
        }
    }
}
