mod logging;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use resgen::{
    AssetCatalog, AssetsContext, BundleReference, ExtractOptions, KeyTable, StringsContext,
    read_catalogs,
};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Commands,

    /// The project's development language (e.g. `en`)
    #[arg(long, global = true)]
    development_language: Option<String>,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the template context for string catalogs.
    Strings {
        /// A .strings/.xcstrings file or a directory to search
        #[arg(short, long)]
        input: PathBuf,

        /// Print one context per source file instead of the merged key table
        #[arg(long)]
        per_catalog: bool,
    },

    /// Print the template context for asset catalogs.
    Assets {
        /// An .xcassets directory or a directory to search
        #[arg(short, long)]
        input: PathBuf,

        /// Bundle the assets ship in (defaults to the host bundle)
        #[arg(long)]
        bundle: Option<String>,

        /// Print one context per catalog instead of the merged tree
        #[arg(long)]
        per_catalog: bool,
    },
}

fn main() -> ExitCode {
    logging::init();
    let args = Args::parse();
    let options = ExtractOptions::new().with_development_language(args.development_language);

    let result = match args.commands {
        Commands::Strings { input, per_catalog } => print_strings(&input, &options, per_catalog),
        Commands::Assets {
            input,
            bundle,
            per_catalog,
        } => {
            let bundle = bundle.map_or(BundleReference::Host, BundleReference::Named);
            print_assets(&input, &options.with_bundle(bundle), per_catalog)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn print_strings(input: &Path, options: &ExtractOptions, per_catalog: bool) -> Result<(), String> {
    let catalogs = read_catalogs(input, options).map_err(|e| e.to_string())?;
    if per_catalog {
        let contexts: Vec<StringsContext> = catalogs.iter().map(|c| c.context()).collect();
        return print_json(&contexts);
    }

    let filename = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    let table = KeyTable::from_catalogs(&catalogs);
    print_json(&StringsContext::from_table(filename, &table))
}

fn print_assets(input: &Path, options: &ExtractOptions, per_catalog: bool) -> Result<(), String> {
    let catalogs = AssetCatalog::read_all(input, options).map_err(|e| e.to_string())?;
    if catalogs.is_empty() {
        return Err(format!("no asset catalogs found in {}", input.display()));
    }
    if per_catalog {
        let contexts: Vec<AssetsContext> = catalogs.iter().map(|c| c.context()).collect();
        return print_json(&contexts);
    }

    let merged = AssetCatalog::merge_all(catalogs);
    print_json(&AssetsContext::from(&merged))
}

fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Error serializing to JSON: {}", e))?;
    println!("{}", json);
    Ok(())
}
