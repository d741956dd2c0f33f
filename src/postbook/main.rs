use clap::Parser;
use colored::*;
use postbook::api::{CmdMessage, ConfigAction, MessageLevel, PostbookApi, RecordDraft, RecordPatch};
use postbook::config::PostbookConfig;
use postbook::error::Result;
use postbook::model::{Record, FIELDS};
use postbook::store::fs::FileStore;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: PostbookApi<FileStore>,
    data_file: PathBuf,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add {
            name,
            age,
            street,
            city,
            postal_code,
            country,
            phone,
            email,
        }) => handle_add(
            &mut ctx,
            RecordDraft {
                name,
                age,
                street,
                city,
                postal_code,
                country,
                phone,
                email,
            },
        ),
        Some(Commands::Amend {
            id,
            name,
            age,
            street,
            city,
            postal_code,
            country,
            phone,
            email,
        }) => handle_amend(
            &mut ctx,
            id,
            RecordPatch {
                name,
                age,
                street,
                city,
                postal_code,
                country,
                phone,
                email,
            },
        ),
        Some(Commands::Delete { id }) => handle_delete(&mut ctx, id),
        Some(Commands::Show { id }) => handle_show(&mut ctx, id),
        Some(Commands::Search { term }) => handle_search(&mut ctx, &term),
        Some(Commands::Init) => handle_init(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::List) | None => handle_list(&mut ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = PostbookConfig::load(&cwd).unwrap_or_default();
    let data_file = cli.file.clone().unwrap_or_else(|| config.data_file.clone());

    init_logging(&config.log_file, cli.verbose);

    let store = FileStore::new(&data_file);
    let api = PostbookApi::new(store, cwd);

    Ok(AppContext { api, data_file })
}

fn init_logging(log_file: &Path, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    match OpenOptions::new().create(true).append(true).open(log_file) {
        Ok(sink) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Arc::new(sink))
            .with_ansi(false)
            .init(),
        // no usable log file; keep diagnostics on stderr
        Err(_) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init(),
    }
}

/// One load per invocation. Skipped rows are reported but never fatal.
fn load_records(ctx: &mut AppContext) -> Result<()> {
    let report = ctx.api.load()?;
    for diagnostic in &report.diagnostics {
        println!("{}", format!("Warning: {}", diagnostic).yellow());
    }
    Ok(())
}

fn handle_list(ctx: &mut AppContext) -> Result<()> {
    load_records(ctx)?;
    let result = ctx.api.list_records()?;
    print_records(&result.listed_records);
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &mut AppContext, id: u32) -> Result<()> {
    load_records(ctx)?;
    let result = ctx.api.show_record(id)?;
    if !result.listed_records.is_empty() {
        print_records(&result.listed_records);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(ctx: &mut AppContext, draft: RecordDraft) -> Result<()> {
    load_records(ctx)?;
    let result = ctx.api.add_record(draft)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_amend(ctx: &mut AppContext, id: u32, patch: RecordPatch) -> Result<()> {
    load_records(ctx)?;
    let result = ctx.api.amend_record(id, &patch)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: u32) -> Result<()> {
    load_records(ctx)?;
    let result = ctx.api.delete_record(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &mut AppContext, term: &str) -> Result<()> {
    load_records(ctx)?;
    let result = ctx.api.search_records(term)?;
    print_records(&result.listed_records);
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.init(&ctx.data_file)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        println!("data-file = {}", config.data_file.display());
        println!("log-file = {}", config.log_file.display());
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_records(records: &[Record]) {
    if records.is_empty() {
        println!("No records found.");
        return;
    }

    let rows: Vec<[String; 9]> = records.iter().map(Record::field_values).collect();
    let mut widths: Vec<usize> = FIELDS.iter().map(|name| name.width()).collect();
    for row in &rows {
        for (i, value) in row.iter().enumerate() {
            widths[i] = widths[i].max(value.width());
        }
    }

    let header = FIELDS
        .iter()
        .enumerate()
        .map(|(i, name)| pad_to_width(name, widths[i]))
        .collect::<Vec<_>>()
        .join("  ");
    println!("{}", header.bold());

    for row in &rows {
        let line = row
            .iter()
            .enumerate()
            .map(|(i, value)| pad_to_width(value, widths[i]))
            .collect::<Vec<_>>()
            .join("  ");
        println!("{}", line);
    }
}

fn pad_to_width(value: &str, width: usize) -> String {
    let padding = width.saturating_sub(value.width());
    format!("{}{}", value, " ".repeat(padding))
}
