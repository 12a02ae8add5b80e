use clap::{Parser, Subcommand};
use shopdesk::remote::ProductsResponse;
use shopdesk::types::Status;
use shopdesk::validate::{PasswordChecks, check_product, generate_slug};
use shopdesk::{catalog, config, output};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "shopdesk")]
#[command(about = "Inspect and validate product-catalog dumps")]
#[command(long_about = "\
Inspect and validate product-catalog dumps

A catalog dump is the body of GET /products saved to disk:

  { \"products\": [ { \"productName\": ..., \"price\": ..., ... } ] }

Legacy dumps may store gallery entries as bare URL strings; both shapes are
accepted.

Commands work entirely offline against the dump — nothing talks to the API.
Run 'shopdesk gen-config' to generate a documented shopdesk.toml.")]
#[command(version)]
struct Cli {
    /// Directory holding shopdesk.toml
    #[arg(long, default_value = ".", global = true)]
    config_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate every product in a dump against persistence invariants
    Check {
        /// Catalog dump (JSON)
        file: PathBuf,
    },
    /// Filter a dump the way the dashboard does and show the result
    Filter {
        /// Catalog dump (JSON)
        file: PathBuf,
        /// Case-insensitive name search
        #[arg(long, default_value = "")]
        search: String,
        /// Keep only this status (draft, active, inactive)
        #[arg(long)]
        status: Option<Status>,
        /// Keep only this category
        #[arg(long)]
        category: Option<String>,
    },
    /// Generate a URL slug from a product name
    Slug { text: String },
    /// Score a password and show the requirement checklist
    Strength { password: String },
    /// Print a stock shopdesk.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    // A broken config should fail fast regardless of subcommand.
    let _config = config::load_config(&cli.config_dir)?;

    match cli.command {
        Command::Check { file } => {
            let dump = read_dump(&file)?;
            let report: Vec<_> = dump
                .products
                .iter()
                .map(|p| (p, check_product(p)))
                .collect();
            let problems: usize = report.iter().map(|(_, f)| f.len()).sum();
            output::print_check(&report);
            if problems > 0 {
                std::process::exit(1);
            }
        }
        Command::Filter {
            file,
            search,
            status,
            category,
        } => {
            let dump = read_dump(&file)?;
            let criteria = catalog::FilterCriteria {
                search_term: search,
                status,
                category,
            };
            let view = catalog::apply(&dump.products, &criteria);
            output::print_catalog(&view);
        }
        Command::Slug { text } => {
            println!("{}", generate_slug(&text));
        }
        Command::Strength { password } => {
            output::print_strength(PasswordChecks::of(&password));
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

fn read_dump(path: &PathBuf) -> Result<ProductsResponse, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;
    let dump: ProductsResponse = serde_json::from_str(&content)?;
    Ok(dump)
}
