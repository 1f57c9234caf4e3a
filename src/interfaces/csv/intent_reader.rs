use crate::domain::intent::{CartIntent, IntentRecord};
use crate::error::{CartError, Result};
use std::io::Read;

/// Reads cart intents from a CSV source.
///
/// Expects the header `action, product, delta, payment`. Whitespace is
/// trimmed and short rows are accepted, so unused trailing columns may be
/// omitted.
pub struct IntentReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> IntentReader<R> {
    /// Creates a new `IntentReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and validates intents.
    ///
    /// A malformed row yields an error for that row only; iteration continues.
    pub fn intents(self) -> impl Iterator<Item = Result<CartIntent>> {
        self.reader.into_deserialize().map(|result| {
            let record: IntentRecord = result.map_err(CartError::from)?;
            CartIntent::try_from(record)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::intent::PaymentMethod;
    use crate::domain::product::ProductId;

    #[test]
    fn test_reader_valid_stream() {
        let data = "action, product, delta, payment\nadd, 1, , \nchange, 1, 2, \ncheckout, , , cash";
        let reader = IntentReader::new(data.as_bytes());
        let results: Vec<Result<CartIntent>> = reader.intents().collect();

        assert_eq!(results.len(), 3);
        assert_eq!(
            results[0].as_ref().unwrap(),
            &CartIntent::Add {
                product: ProductId(1)
            }
        );
        assert_eq!(
            results[2].as_ref().unwrap(),
            &CartIntent::Checkout {
                payment: PaymentMethod::Cash
            }
        );
    }

    #[test]
    fn test_reader_short_rows() {
        let data = "action, product, delta, payment\nclear\nremove, 3";
        let reader = IntentReader::new(data.as_bytes());
        let results: Vec<Result<CartIntent>> = reader.intents().collect();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].as_ref().unwrap(), &CartIntent::Clear);
        assert_eq!(
            results[1].as_ref().unwrap(),
            &CartIntent::Remove {
                product: ProductId(3)
            }
        );
    }

    #[test]
    fn test_reader_malformed_line() {
        let data = "action, product, delta, payment\nrefund, 1, , \nadd, one, , \nadd, 2, , ";
        let reader = IntentReader::new(data.as_bytes());
        let results: Vec<Result<CartIntent>> = reader.intents().collect();

        assert!(matches!(results[0], Err(CartError::Csv(_))));
        assert!(matches!(results[1], Err(CartError::Csv(_))));
        assert!(results[2].is_ok());
    }
}
