use invoicekit_core::{DomainError, DomainResult, ValueObject};

/// Bank account of the billed party.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    account_number: String,
    iban: Option<String>,
    swift: Option<String>,
}

impl Account {
    pub fn new(account_number: impl Into<String>) -> DomainResult<Self> {
        let account_number = account_number.into();
        if account_number.trim().is_empty() {
            return Err(DomainError::validation("account number must not be blank"));
        }
        Ok(Self {
            account_number,
            iban: None,
            swift: None,
        })
    }

    pub fn with_iban(mut self, iban: impl Into<String>) -> Self {
        self.iban = Some(iban.into());
        self
    }

    pub fn with_swift(mut self, swift: impl Into<String>) -> Self {
        self.swift = Some(swift.into());
        self
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn iban(&self) -> Option<&str> {
        self.iban.as_deref()
    }

    pub fn swift(&self) -> Option<&str> {
        self.swift.as_deref()
    }
}

impl ValueObject for Account {}
