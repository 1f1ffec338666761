//! Consolidated invoices
//!
//! An invoice is composed from the receipts selected on the invoices screen
//! and the office letterhead. Composition is pure: the clock's day and the
//! display timezone are passed in, and the receipts are left untouched.

use chrono::{NaiveDate, TimeZone, Utc};
use serde::Serialize;

use core_kernel::{
    arabic_long_date, format_arabic_date, format_currency, Clock, Labels, Money, ReceiptId, Timezone,
};

use crate::aggregate::total_paid;
use crate::error::BillingError;
use crate::office::OfficeDetails;
use crate::receipt::Receipt;
use crate::reference::ReferenceNumber;
use crate::selection::SelectionSet;

/// Fraction digits used for every amount printed on an invoice
const INVOICE_FRACTION_DIGITS: u32 = 2;

/// Right-to-left mark prefixed to each rendered line
const RLM: char = '\u{200F}';

/// One language block of the letterhead
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Letterhead {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub tax_number: Option<String>,
}

/// A printed receipt line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceRow {
    /// Serial number column
    pub receipt_id: ReceiptId,
    pub client_name: String,
    pub service_name: String,
    /// Paid amount formatted as dirhams with two fraction digits
    pub paid_amount: String,
    pub employee_name: String,
    /// Arabic long date of the receipt
    pub date: String,
}

/// A consolidated invoice ready for printing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceDocument {
    pub english: Letterhead,
    pub arabic: Letterhead,
    pub reference: ReferenceNumber,
    /// Arabic long date of the issue day
    pub issue_date: String,
    pub rows: Vec<InvoiceRow>,
    pub total_paid: Money,
    /// `total_paid` formatted as dirhams
    pub total: String,
}

impl InvoiceDocument {
    /// Composes an invoice for the selected receipts, in selection order
    ///
    /// # Arguments
    ///
    /// * `office` - Letterhead details
    /// * `receipts` - The selected receipts
    /// * `today` - Local issue day; also dates the reference number
    /// * `tz` - Display timezone for receipt dates
    ///
    /// # Errors
    ///
    /// - `BillingError::EmptySelection` when no receipt is selected
    /// - `BillingError::DateFormat` when a receipt carries a malformed timestamp
    pub fn compose(
        office: &OfficeDetails,
        receipts: &[&Receipt],
        today: NaiveDate,
        tz: Timezone,
    ) -> Result<Self, BillingError> {
        if receipts.is_empty() {
            return Err(BillingError::EmptySelection);
        }

        let rows = receipts
            .iter()
            .map(|receipt| InvoiceRow::for_receipt(receipt, tz))
            .collect::<Result<Vec<_>, _>>()?;

        let paid = Money::aed(total_paid(receipts.iter().copied()));

        let issue_midnight = Utc.from_utc_datetime(&today.and_time(chrono::NaiveTime::MIN));

        tracing::debug!(receipts = rows.len(), total_paid = %paid.amount(), "composed invoice");

        Ok(Self {
            english: Letterhead {
                name: office.en_office_name.clone(),
                address: office.en_office_address.clone(),
                phone: office.office_phone.clone(),
                email: office.office_email.clone(),
                tax_number: office.office_tax_number.clone(),
            },
            arabic: Letterhead {
                name: office.ar_office_name.clone(),
                address: office.ar_office_address.clone(),
                phone: office.office_phone.clone(),
                email: office.office_email.clone(),
                tax_number: office.office_tax_number.clone(),
            },
            reference: ReferenceNumber::for_receipts(receipts.iter().copied(), today),
            issue_date: arabic_long_date(&issue_midnight, false),
            rows,
            total_paid: paid,
            total: paid.to_string(),
        })
    }

    /// Composes an invoice from a selection, dated by `clock`
    ///
    /// # Errors
    ///
    /// See [`InvoiceDocument::compose`].
    pub fn from_selection(
        office: &OfficeDetails,
        selection: &SelectionSet,
        clock: &dyn Clock,
    ) -> Result<Self, BillingError> {
        Self::compose(
            office,
            &selection.selected_receipts(),
            clock.today(),
            clock.timezone(),
        )
    }

    /// Renders the invoice as right-to-left plain text
    pub fn render_text(&self, labels: &Labels) -> String {
        let mut lines = Vec::new();

        for block in [&self.english, &self.arabic] {
            lines.push(block.name.clone());
            lines.push(block.address.clone());
            lines.push(block.phone.clone());
            lines.push(block.email.clone());
            if let Some(tax_number) = &block.tax_number {
                lines.push(format!("{}: {tax_number}", labels.get("invoice-tax-number")));
            }
            lines.push(String::new());
        }

        lines.push(format!("{}: {}", labels.get("invoice-number"), self.reference));
        lines.push(format!("{}: {}", labels.get("invoice-date"), self.issue_date));
        lines.push(String::new());

        let header = [
            "invoice-column-serial",
            "invoice-column-client",
            "invoice-column-service",
            "invoice-column-paid",
            "invoice-column-employee",
            "invoice-column-date",
        ]
        .map(|id| labels.get(id));
        lines.push(header.join(" | "));

        for row in &self.rows {
            lines.push(
                [
                    row.receipt_id.to_string(),
                    row.client_name.clone(),
                    row.service_name.clone(),
                    row.paid_amount.clone(),
                    row.employee_name.clone(),
                    row.date.clone(),
                ]
                .join(" | "),
            );
        }

        lines.push(String::new());
        lines.push(format!("{}: {}", labels.get("invoice-total"), self.total));

        lines
            .into_iter()
            .map(|line| {
                if line.is_empty() {
                    line
                } else {
                    format!("{RLM}{line}")
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl InvoiceRow {
    fn for_receipt(receipt: &Receipt, tz: Timezone) -> Result<Self, BillingError> {
        Ok(Self {
            receipt_id: receipt.receipt_id,
            client_name: receipt.client_name.clone(),
            service_name: receipt.service_name.clone(),
            paid_amount: format_currency(receipt.paid_amount(), INVOICE_FRACTION_DIGITS)?,
            employee_name: receipt.employee_name.clone(),
            date: format_arabic_date(&receipt.created_at, false, tz)?,
        })
    }
}
