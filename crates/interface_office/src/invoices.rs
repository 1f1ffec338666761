//! Invoices screen
//!
//! Lists a customer's receipts with a checkbox each, keeps the selection and
//! prints one consolidated invoice for the selected receipts.

use serde::Serialize;

use core_kernel::{
    format_arabic_date, format_currency, ClientId, Clock, Labels, PortError, ReceiptId, Timezone,
};
use domain_billing::{InvoiceDocument, OfficeDetails, Receipt, SelectionSet};

use crate::directory::OfficeDirectory;
use crate::error::OfficeError;

/// One line of the receipts table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReceiptListRow {
    pub receipt_id: ReceiptId,
    pub client_name: String,
    pub service_name: String,
    pub paid_amount: String,
    pub employee_name: String,
    pub date: String,
    pub selected: bool,
}

/// State of the invoices screen for one customer
#[derive(Debug, Clone, Default)]
pub struct InvoicesScreen {
    selection: SelectionSet,
    office: Option<OfficeDetails>,
}

impl InvoicesScreen {
    pub fn new(receipts: Vec<Receipt>, office: Option<OfficeDetails>) -> Self {
        Self {
            selection: SelectionSet::new(receipts),
            office,
        }
    }

    /// Loads a customer's receipts and the letterhead
    ///
    /// A missing letterhead only disables printing; a failed receipt fetch
    /// is an error.
    pub async fn load(directory: &OfficeDirectory, customer: ClientId) -> Result<Self, OfficeError> {
        let receipts = directory.receipts_for_customer(customer).await?;
        let office = match directory.office_details().await {
            Ok(office) => Some(office),
            Err(err) => {
                tracing::warn!(error = %err, "office details unavailable");
                None
            }
        };

        tracing::info!(client_id = %customer, receipts = receipts.len(), "loaded invoices screen");
        Ok(Self::new(receipts, office))
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn office(&self) -> Option<&OfficeDetails> {
        self.office.as_ref()
    }

    pub fn toggle_one(&mut self, receipt_id: ReceiptId) {
        self.selection.toggle_one(receipt_id);
    }

    pub fn toggle_all(&mut self, checked: bool) {
        self.selection.toggle_all(checked);
    }

    /// Selects exactly `ids`, ignoring ids not on the screen
    ///
    /// Returns how many receipts ended up selected.
    pub fn select_only(&mut self, ids: &[ReceiptId]) -> usize {
        self.selection.toggle_all(false);
        for id in ids {
            if !self.selection.is_selected(*id) {
                self.selection.toggle_one(*id);
            }
        }
        self.selection.selected_count()
    }

    /// Table rows with Arabic dates in `tz`
    ///
    /// # Errors
    ///
    /// Fails on the first receipt with a malformed timestamp or amount.
    pub fn rows(&self, tz: Timezone) -> Result<Vec<ReceiptListRow>, OfficeError> {
        self.selection
            .receipts()
            .map(|receipt| {
                Ok(ReceiptListRow {
                    receipt_id: receipt.receipt_id,
                    client_name: receipt.client_name.clone(),
                    service_name: receipt.service_name.clone(),
                    paid_amount: format_currency(receipt.paid_amount(), 2)
                        .map_err(|e| OfficeError::Billing(e.into()))?,
                    employee_name: receipt.employee_name.clone(),
                    date: format_arabic_date(&receipt.created_at, false, tz)
                        .map_err(|e| OfficeError::Billing(e.into()))?,
                    selected: self.selection.is_selected(receipt.receipt_id),
                })
            })
            .collect()
    }

    /// Placeholder shown instead of the table when there are no receipts
    pub fn empty_message(&self, labels: &Labels) -> Option<String> {
        self.selection
            .is_empty()
            .then(|| labels.get("invoice-empty"))
    }

    /// The print button is enabled
    pub fn can_print(&self) -> bool {
        self.office.is_some() && self.selection.can_print()
    }

    /// Composes the invoice for the current selection
    ///
    /// # Errors
    ///
    /// - `PortError::NotFound` when no letterhead was loaded
    /// - `BillingError::EmptySelection` when nothing is selected
    pub fn invoice(&self, clock: &dyn Clock) -> Result<InvoiceDocument, OfficeError> {
        let office = self
            .office
            .as_ref()
            .ok_or_else(|| PortError::not_found("OfficeDetails", "first"))?;
        Ok(InvoiceDocument::from_selection(office, &self.selection, clock)?)
    }

    /// Renders the printable invoice text
    pub fn print(&self, clock: &dyn Clock, labels: &Labels) -> Result<String, OfficeError> {
        let invoice = self.invoice(clock)?;
        tracing::info!(
            reference = %invoice.reference,
            receipts = invoice.rows.len(),
            total = %invoice.total_paid.amount(),
            "printing invoice"
        );
        Ok(invoice.render_text(labels))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use core_kernel::{EmployeeId, FixedClock, OfficeId, ServiceId};
    use domain_billing::BillingError;

    fn receipt(id: i64) -> Receipt {
        Receipt::new(ReceiptId::new(id), ServiceId::new(1), ClientId::new(1), 100)
            .with_client_name("أحمد")
            .with_service_name("تأشيرة")
            .with_employee(EmployeeId::new(2), "سارة")
            .with_created_at("2024-01-04T08:00:00.000Z")
    }

    fn office() -> OfficeDetails {
        OfficeDetails::new(OfficeId::new(1), "مركز", "Center", "info@example.ae")
    }

    fn clock() -> FixedClock {
        FixedClock::on(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(), Timezone::default())
    }

    #[test]
    fn test_select_only_ignores_unknown_ids() {
        let mut screen = InvoicesScreen::new(vec![receipt(1), receipt(2), receipt(3)], Some(office()));
        screen.toggle_all(true);

        let count = screen.select_only(&[ReceiptId::new(3), ReceiptId::new(99), ReceiptId::new(3)]);
        assert_eq!(count, 1);
        assert!(screen.selection().is_selected(ReceiptId::new(3)));
        assert!(!screen.selection().select_all());
    }

    #[test]
    fn test_rows_carry_selection_and_arabic_dates() {
        let mut screen = InvoicesScreen::new(vec![receipt(1), receipt(2)], None);
        screen.toggle_one(ReceiptId::new(2));

        let rows = screen.rows(Timezone::default()).unwrap();
        assert_eq!(rows.len(), 2);
        assert!(!rows[0].selected);
        assert!(rows[1].selected);
        assert_eq!(rows[0].date, "الخميس، ٤ يناير ٢٠٢٤");
    }

    #[test]
    fn test_malformed_receipt_date_is_a_billing_error() {
        let screen = InvoicesScreen::new(vec![receipt(1).with_created_at("yesterday")], None);
        assert!(matches!(
            screen.rows(Timezone::default()),
            Err(OfficeError::Billing(BillingError::DateFormat(_)))
        ));
    }

    #[test]
    fn test_print_requires_letterhead() {
        let mut screen = InvoicesScreen::new(vec![receipt(1)], None);
        screen.toggle_all(true);
        assert!(!screen.can_print());
        assert!(matches!(screen.invoice(&clock()), Err(OfficeError::Port(_))));
    }

    #[test]
    fn test_print_requires_selection() {
        let screen = InvoicesScreen::new(vec![receipt(1)], Some(office()));
        assert!(matches!(
            screen.invoice(&clock()),
            Err(OfficeError::Billing(BillingError::EmptySelection))
        ));
    }

    #[test]
    fn test_empty_message() {
        let labels = Labels::arabic().unwrap();
        let screen = InvoicesScreen::default();
        assert_eq!(screen.empty_message(&labels).as_deref(), Some("لا يوجد فواتير"));
        assert_eq!(InvoicesScreen::new(vec![receipt(1)], None).empty_message(&labels), None);
    }
}
