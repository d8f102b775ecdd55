use clap::Parser;
use colored::*;
use labelpress::api::{CmdMessage, LabelApi, MessageLevel};
use labelpress::catalog::Catalog;
use labelpress::config::LabelpressConfig;
use labelpress::error::Result;
use labelpress::model::{CatalogRecord, FacetLevel};
use std::path::PathBuf;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = LabelpressConfig::load(".").unwrap_or_default();

    let catalog_path = cli.catalog.clone().unwrap_or_else(|| config.catalog.clone());
    let template_root = cli
        .templates
        .clone()
        .unwrap_or_else(|| config.template_root.clone());

    // Load failure is fatal to the session; there is no retry.
    let catalog = Catalog::load(&catalog_path)?;

    let mut api = LabelApi::new(catalog, template_root);
    apply_facets(&mut api, &cli);

    let result = match cli.command {
        Commands::Options { facet } => api.options(facet.into())?,
        Commands::Resolve => api.resolve()?,
        Commands::Preview { out, scale } => {
            let scale = scale.unwrap_or(config.preview_scale).max(1);
            api.preview(scale, &out)?
        }
        Commands::Export { out } => {
            let out = out.unwrap_or_else(|| PathBuf::from(&config.output));
            api.export(&out)?
        }
    };

    print_options(&result.options);
    if let Some(record) = &result.record {
        print_record(record);
    }
    print_messages(&result.messages);
    Ok(())
}

/// Facet flags are applied in cascade order so a flag at one level is never
/// wiped by a later write above it.
fn apply_facets(api: &mut LabelApi, cli: &Cli) {
    let flags: [(FacetLevel, &Option<String>); 6] = [
        (FacetLevel::Brand, &cli.brand),
        (FacetLevel::Collection, &cli.collection),
        (FacetLevel::Series, &cli.series),
        (FacetLevel::ColorName, &cli.color_name),
        (FacetLevel::ColorNumber, &cli.color_number),
        (FacetLevel::Finish, &cli.finish),
    ];
    for (level, value) in flags {
        if let Some(value) = value {
            api.set_facet(level, value);
        }
    }
}

fn print_options(options: &[String]) {
    for option in options {
        if option.is_empty() {
            // The synthetic "no collection filter" entry.
            println!("{}", "(all)".dimmed());
        } else {
            println!("{}", option);
        }
    }
}

fn print_record(record: &CatalogRecord) {
    println!("{} {}", "Brand:".bold(), record.brand);
    let collection = if record.collection.is_empty() {
        "(none)".to_string()
    } else {
        record.collection.clone()
    };
    println!("{} {}", "Collection:".bold(), collection);
    println!("{} {}", "Series:".bold(), record.series);
    println!("{} {}", "Color:".bold(), record.color_name);
    println!("{} {}", "Number:".bold(), record.color_number);
    println!(
        "{} {}",
        "Finish:".bold(),
        record.finish.as_deref().unwrap_or("(none)")
    );
    println!("{} {}", "Template:".bold(), record.template_id);
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
