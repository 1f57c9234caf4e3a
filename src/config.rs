use crate::domain::catalog::CatalogQuery;
use crate::domain::money::TaxRate;
use crate::error::Result;
use crate::infrastructure::in_memory::InMemoryCatalog;
use crate::interfaces::csv::catalog_reader::CatalogReader;
use clap::{Parser, ValueEnum};
use std::fs::File;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

/// Replays point-of-sale intents against a cart and prints the receipts.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input intents CSV file (`action, product, delta, payment`)
    #[arg(required_unless_present = "list")]
    pub input: Option<PathBuf>,

    /// Print the catalog as CSV instead of replaying intents.
    #[arg(long)]
    pub list: bool,

    /// Case-insensitive product name search for `--list`.
    #[arg(long, requires = "list")]
    pub search: Option<String>,

    /// Category for `--list`; `all` matches every product.
    #[arg(long, requires = "list")]
    pub category: Option<String>,

    /// Product catalog CSV. Defaults to the built-in furniture range.
    #[arg(long, env = "POSCART_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Sales tax rate applied to the subtotal, as a fraction.
    #[arg(long, env = "POSCART_TAX_RATE", default_value_t = TaxRate::DEFAULT)]
    pub tax_rate: TaxRate,

    /// Output format for receipts.
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,
}

impl Cli {
    /// Loads the configured catalog, falling back to the built-in one.
    pub fn load_catalog(&self) -> Result<InMemoryCatalog> {
        match &self.catalog {
            Some(path) => CatalogReader::new(File::open(path)?).into_catalog(),
            None => InMemoryCatalog::furniture(),
        }
    }

    /// The catalog filter built from `--search` and `--category`.
    pub fn query(&self) -> CatalogQuery {
        CatalogQuery {
            search: self.search.clone(),
            category: self.category.clone(),
        }
    }
}
