use clap::Parser;
use hangsel_core::cli::{Cli, OutputFormat};
use hangsel_core::{
    parse_tag_expr, ImageSet, ProtocolEngine, ResolvedSelector, TagDictionary, TextReport,
};
use log::{error, info};
use std::process;

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    if let Some(expr) = &cli.describe {
        describe_tag(expr);
        return;
    }

    // clap guarantees the file is present when --describe is absent
    let Some(path) = &cli.file else {
        eprintln!("Error: no input file given");
        process::exit(2);
    };

    info!("Loading hanging protocol: {}", path.display());

    let doc = match ProtocolEngine::load(path) {
        Ok(doc) => doc,
        Err(e) => {
            error!("Failed to load {}: {}", path.display(), e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let image_sets = ProtocolEngine::select(&doc);
    info!("Selected {} image set(s)", image_sets.len());

    let selectors = cli
        .selectors
        .then(|| ProtocolEngine::resolved_selectors(&doc));

    output_selection(&image_sets, selectors.as_deref(), cli.format);
}

fn setup_logging(verbose: bool) {
    if verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }
}

fn describe_tag(expr: &str) {
    let tag = match parse_tag_expr(expr) {
        Ok(tag) => tag,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let dictionary = TagDictionary::new();
    match dictionary.resolve(tag) {
        Some(info) => println!("{} {}", tag, info),
        None => {
            eprintln!("Error: {} is not a known attribute tag", tag);
            process::exit(1);
        }
    }
}

fn output_selection(
    image_sets: &[ImageSet],
    selectors: Option<&[Vec<ResolvedSelector>]>,
    format: OutputFormat,
) {
    match format {
        OutputFormat::Text => {
            let mut report = TextReport::new(image_sets);
            if let Some(selectors) = selectors {
                report = report.with_selectors(selectors);
            }
            println!("{}", report);
        }
        OutputFormat::Json => {
            #[cfg(feature = "json")]
            {
                match output_json(image_sets, selectors) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        error!("Failed to serialize to JSON: {}", e);
                        eprintln!("Error: Failed to serialize to JSON: {}", e);
                        process::exit(1);
                    }
                }
            }
            #[cfg(not(feature = "json"))]
            {
                eprintln!("Error: JSON output requires the 'json' feature");
                eprintln!("Rebuild with: cargo build --features json");
                process::exit(1);
            }
        }
    }
}

#[cfg(feature = "json")]
fn output_json(
    image_sets: &[ImageSet],
    selectors: Option<&[Vec<ResolvedSelector>]>,
) -> Result<String, serde_json::Error> {
    use serde::Serialize;

    #[derive(Serialize)]
    struct SelectionJson<'a> {
        image_sets: &'a [ImageSet],
        #[serde(skip_serializing_if = "Option::is_none")]
        selectors: Option<&'a [Vec<ResolvedSelector>]>,
    }

    serde_json::to_string_pretty(&SelectionJson {
        image_sets,
        selectors,
    })
}
