use invoicekit_core::ValueObject;

/// Order line: name, unit price, quantity.
///
/// Prices and counts are stored exactly as given; whether a price includes tax
/// is decided by the owning order, not by the line.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    name: String,
    price: f64,
    count: f64,
}

impl Item {
    pub fn new(name: impl Into<String>, price: f64, count: f64) -> Self {
        Self {
            name: name.into(),
            price,
            count,
        }
    }

    /// Line with a quantity of one.
    pub fn single(name: impl Into<String>, price: f64) -> Self {
        Self::new(name, price, 1.0)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn count(&self) -> f64 {
        self.count
    }
}

impl ValueObject for Item {}
