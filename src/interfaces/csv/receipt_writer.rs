use crate::application::session::Receipt;
use crate::domain::cart::{Cart, CartLine, Totals};
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

const LINE_HEADER: [&str; 5] = ["product", "name", "price", "quantity", "amount"];
const TOTALS_HEADER: [&str; 3] = ["subtotal", "tax", "total"];

/// Destination for completed sales and the cart left open at the end.
pub trait ReceiptSink {
    fn write_receipt(&mut self, receipt: &Receipt) -> Result<()>;
    fn write_open_cart(&mut self, cart: &Cart) -> Result<()>;
}

/// Writes receipts and open carts as CSV blocks.
///
/// Each block starts with a title row (`sale,<n>,<payment>` or `open`),
/// followed by the line items and the totals, each with its own header.
/// Amounts are rendered with two decimals.
pub struct ReceiptWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ReceiptWriter<W> {
    pub fn new(sink: W) -> Self {
        let writer = csv::WriterBuilder::new()
            .flexible(true)
            .has_headers(false)
            .from_writer(sink);
        Self { writer }
    }

    fn write_body(&mut self, lines: &[CartLine], totals: &Totals) -> Result<()> {
        self.writer.write_record(LINE_HEADER)?;
        for line in lines {
            self.writer.write_record([
                line.product_id.to_string(),
                line.name.clone(),
                line.price.to_string(),
                line.quantity.to_string(),
                line.amount().to_string(),
            ])?;
        }
        self.writer.write_record(TOTALS_HEADER)?;
        self.writer.write_record([
            totals.subtotal.to_string(),
            totals.tax.to_string(),
            totals.total.to_string(),
        ])?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> ReceiptSink for ReceiptWriter<W> {
    fn write_receipt(&mut self, receipt: &Receipt) -> Result<()> {
        self.writer.write_record([
            "sale",
            receipt.sale.to_string().as_str(),
            receipt.payment.as_str(),
        ])?;
        self.write_body(&receipt.lines, &receipt.totals)
    }

    fn write_open_cart(&mut self, cart: &Cart) -> Result<()> {
        self.writer.write_record(["open"])?;
        self.write_body(cart.lines(), &cart.compute_totals())
    }
}

/// Writes receipts and the open cart as JSON lines, one object each.
pub struct JsonReceiptWriter<W: Write> {
    sink: W,
}

#[derive(Serialize)]
struct OpenCart<'a> {
    open: bool,
    lines: &'a [CartLine],
    totals: Totals,
}

impl<W: Write> JsonReceiptWriter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    fn write_line<T: Serialize>(&mut self, value: &T) -> Result<()> {
        serde_json::to_writer(&mut self.sink, value)?;
        writeln!(self.sink)?;
        self.sink.flush()?;
        Ok(())
    }
}

impl<W: Write> ReceiptSink for JsonReceiptWriter<W> {
    fn write_receipt(&mut self, receipt: &Receipt) -> Result<()> {
        self.write_line(receipt)
    }

    fn write_open_cart(&mut self, cart: &Cart) -> Result<()> {
        self.write_line(&OpenCart {
            open: true,
            lines: cart.lines(),
            totals: cart.compute_totals(),
        })
    }
}
