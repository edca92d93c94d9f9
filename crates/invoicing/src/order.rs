use chrono::{DateTime, Utc};
use mockable::Clock;

use invoicekit_core::{DomainResult, Entity};

use crate::account::Account;
use crate::item::Item;
use crate::number::{OrderNumber, RawOrderNumber};
use crate::payment::PaymentInformation;

/// Input for creating an order.
///
/// `payment` is the only required association; everything else is optional or
/// defaulted when the order is built.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub number: RawOrderNumber,
    pub due_date: Option<DateTime<Utc>>,
    pub account: Option<Account>,
    pub payment: PaymentInformation,
    /// Creation time; taken from the clock when `None`.
    pub created: Option<DateTime<Utc>>,
    /// Whether item prices passed to `add_item` already include tax.
    pub has_price_with_tax: bool,
}

impl NewOrder {
    pub fn new(number: impl Into<RawOrderNumber>, payment: PaymentInformation) -> Self {
        Self {
            number: number.into(),
            due_date: None,
            account: None,
            payment,
            created: None,
            has_price_with_tax: false,
        }
    }

    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn with_account(mut self, account: Account) -> Self {
        self.account = Some(account);
        self
    }

    pub fn created_at(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }

    pub fn with_price_with_tax(mut self, has_price_with_tax: bool) -> Self {
        self.has_price_with_tax = has_price_with_tax;
        self
    }
}

/// Aggregate root: Order.
///
/// Identity, dates and payment terms are fixed at construction. The only
/// mutation is appending line items.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    number: OrderNumber,
    due_date: Option<DateTime<Utc>>,
    account: Option<Account>,
    payment: PaymentInformation,
    created: DateTime<Utc>,
    items: Vec<Item>,
    has_price_with_tax: bool,
}

impl Order {
    /// Validate the input and build the order.
    ///
    /// Fails with `DomainError::InvalidIdentifier` when the order number is
    /// rejected; no order exists in that case.
    pub fn new(new: NewOrder, clock: &dyn Clock) -> DomainResult<Self> {
        let number = OrderNumber::parse(new.number)?;
        let created = new.created.unwrap_or_else(|| clock.utc());

        tracing::debug!(
            number = %number,
            has_price_with_tax = new.has_price_with_tax,
            "order created"
        );

        Ok(Self {
            number,
            due_date: new.due_date,
            account: new.account,
            payment: new.payment,
            created,
            items: Vec::new(),
            has_price_with_tax: new.has_price_with_tax,
        })
    }

    pub fn number(&self) -> &OrderNumber {
        &self.number
    }

    pub fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    pub fn account(&self) -> Option<&Account> {
        self.account.as_ref()
    }

    pub fn payment(&self) -> &PaymentInformation {
        &self.payment
    }

    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn has_price_with_tax(&self) -> bool {
        self.has_price_with_tax
    }

    /// Append a line item and return it.
    pub fn add_item(&mut self, name: impl Into<String>, price: f64, count: f64) -> &Item {
        let item = Item::new(name, price, count);
        tracing::debug!(
            number = %self.number,
            item = item.name(),
            price,
            count,
            "order item added"
        );
        self.items.push(item);
        &self.items[self.items.len() - 1]
    }

    /// Append a line item with a quantity of one.
    pub fn add_single_item(&mut self, name: impl Into<String>, price: f64) -> &Item {
        self.add_item(name, price, 1.0)
    }

    /// Total over all items.
    ///
    /// | `use_tax` | prices include tax | result                          |
    /// |-----------|--------------------|---------------------------------|
    /// | false     | false              | Σ price × count                 |
    /// | false     | true               | Σ (price without tax) × count   |
    /// | true      | false              | Σ price × count × (1 + tax)     |
    /// | true      | true               | Σ price × count                 |
    ///
    /// A missing tax rate counts as no tax in every row.
    pub fn total_price(&self, use_tax: bool) -> f64 {
        let tax = self.payment.tax();

        let multiplier = match tax {
            Some(rate) if use_tax && !self.has_price_with_tax => rate + 1.0,
            _ => 1.0,
        };

        let subtotal: f64 = if !use_tax && self.has_price_with_tax {
            let rate = tax.unwrap_or_else(|| {
                tracing::debug!(
                    number = %self.number,
                    "no tax rate on tax-inclusive order, prices taken as net"
                );
                0.0
            });
            self.items
                .iter()
                .map(|item| {
                    let net = item.price() - (item.price() / (rate + 1.0)) * rate;
                    net * item.count()
                })
                .sum()
        } else {
            self.items
                .iter()
                .map(|item| item.price() * item.count())
                .sum()
        };

        subtotal * multiplier
    }
}

impl Entity for Order {
    type Id = OrderNumber;

    fn id(&self) -> &Self::Id {
        &self.number
    }
}
