use clap::Parser;
use miette::{IntoDiagnostic, Result, miette};
use poscart::application::listing::list_products;
use poscart::application::session::CheckoutSession;
use poscart::config::{Cli, OutputFormat};
use poscart::interfaces::csv::catalog_writer::CatalogWriter;
use poscart::interfaces::csv::intent_reader::IntentReader;
use poscart::interfaces::csv::receipt_writer::{JsonReceiptWriter, ReceiptSink, ReceiptWriter};
use poscart::telemetry;
use std::fs::File;
use std::io;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init();
    let cli = Cli::parse();

    let catalog = cli.load_catalog().into_diagnostic()?;
    info!(products = catalog.len(), tax_rate = %cli.tax_rate, "catalog loaded");

    if cli.list {
        let products = list_products(&catalog, &cli.query())
            .await
            .into_diagnostic()?;
        CatalogWriter::new(io::stdout().lock())
            .write_products(&products)
            .into_diagnostic()?;
        return Ok(());
    }

    let input = cli
        .input
        .as_ref()
        .ok_or_else(|| miette!("an intents file is required unless --list is given"))?;
    let mut session = CheckoutSession::new(Box::new(catalog), cli.tax_rate);

    let stdout = io::stdout();
    let mut output: Box<dyn ReceiptSink> = match cli.format {
        OutputFormat::Csv => Box::new(ReceiptWriter::new(stdout.lock())),
        OutputFormat::Json => Box::new(JsonReceiptWriter::new(stdout.lock())),
    };

    // Process intents
    let file = File::open(input).into_diagnostic()?;
    let reader = IntentReader::new(file);
    for (row, intent_result) in reader.intents().enumerate() {
        match intent_result {
            Ok(intent) => match session.apply(intent).await {
                Ok(Some(receipt)) => output.write_receipt(&receipt).into_diagnostic()?,
                Ok(None) => {}
                Err(e) => warn!(row = row + 1, "Error applying intent: {e}"),
            },
            Err(e) => warn!(row = row + 1, "Error reading intent: {e}"),
        }
    }

    output.write_open_cart(session.cart()).into_diagnostic()?;
    info!(sales = session.sales(), "session finished");

    Ok(())
}
