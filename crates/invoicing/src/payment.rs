use invoicekit_core::{DomainError, DomainResult, ValueObject};

/// Payment terms of an order.
///
/// `tax` is a fraction (`0.21` for 21 %). `None` means the order carries no tax.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentInformation {
    currency: String,
    variable_symbol: Option<String>,
    constant_symbol: Option<String>,
    tax: Option<f64>,
}

impl PaymentInformation {
    pub fn new(currency: impl Into<String>, tax: Option<f64>) -> DomainResult<Self> {
        let currency = currency.into();
        if currency.trim().is_empty() {
            return Err(DomainError::validation("currency must not be blank"));
        }
        if let Some(rate) = tax {
            // `rate + 1` is used as a divisor when backing tax out of a price.
            if !rate.is_finite() || rate <= -1.0 {
                return Err(DomainError::validation(format!(
                    "tax rate must be a finite fraction greater than -1 (got {rate})"
                )));
            }
        }
        Ok(Self {
            currency,
            variable_symbol: None,
            constant_symbol: None,
            tax,
        })
    }

    /// Payment terms without tax.
    pub fn untaxed(currency: impl Into<String>) -> DomainResult<Self> {
        Self::new(currency, None)
    }

    pub fn with_variable_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.variable_symbol = Some(symbol.into());
        self
    }

    pub fn with_constant_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.constant_symbol = Some(symbol.into());
        self
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn variable_symbol(&self) -> Option<&str> {
        self.variable_symbol.as_deref()
    }

    pub fn constant_symbol(&self) -> Option<&str> {
        self.constant_symbol.as_deref()
    }

    pub fn tax(&self) -> Option<f64> {
        self.tax
    }
}

impl ValueObject for PaymentInformation {}
