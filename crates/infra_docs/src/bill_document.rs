//! Bill PDF rendering
//!
//! One page per bill: a heading, the guest and room details as key-value
//! rows, the charge breakdown, and a fixed thank-you footer. The caller
//! supplies everything as plain values; rendering never touches the
//! database.

use chrono::NaiveDateTime;
use tracing::debug;

use core_kernel::{Money, MonthRef};

use crate::error::DocumentError;
use crate::pdf::{amount_label, Sheet};
use crate::store::DocumentStore;

/// Everything that appears on a bill document
#[derive(Debug, Clone)]
pub struct BillSheet<'a> {
    pub guest_name: &'a str,
    pub room_number: &'a str,
    pub room_type: &'a str,
    pub billing_month: MonthRef,
    /// Local wall-clock time of generation; printed on the bill and baked
    /// into the filename
    pub bill_date: NaiveDateTime,
    pub total_days: i64,
    pub monthly_rate: Money,
    pub discount: Money,
    pub total_amount: Money,
}

/// Renders the bill PDF into the store's month folder and returns the
/// store-relative path for the bill record.
pub fn render_bill(store: &DocumentStore, sheet: &BillSheet<'_>) -> Result<String, DocumentError> {
    let target = store.bill_path(sheet.billing_month, sheet.guest_name, sheet.bill_date)?;

    let mut doc = Sheet::new("Hostel Bill")?;
    doc.heading("Hostel Bill");
    doc.rule();
    doc.gap(10.0);

    doc.key_value(
        "Bill Date",
        &sheet.bill_date.format("%d %B %Y").to_string(),
    );
    doc.key_value("Guest Name", sheet.guest_name);
    doc.key_value(
        "Room",
        &format!("{} ({})", sheet.room_number, sheet.room_type),
    );
    doc.key_value("Billing Month", &sheet.billing_month.label());
    doc.gap(5.0);

    doc.key_value("Total Days", &sheet.total_days.to_string());
    doc.key_value("Monthly Rate", &amount_label(&sheet.monthly_rate));
    doc.key_value("Discount", &amount_label(&sheet.discount));
    doc.gap(2.0);
    doc.rule();
    doc.gap(8.0);
    doc.key_value_bold("Total Amount", &amount_label(&sheet.total_amount));

    doc.footer("Thank you for staying with us!");
    doc.save(&target.absolute)?;

    debug!(path = %target.relative, "Rendered bill document");
    Ok(target.relative)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use tempfile::tempdir;

    use core_kernel::Currency;

    #[test]
    fn test_render_bill_writes_pdf_into_month_folder() {
        let dir = tempdir().unwrap();
        let store = DocumentStore::new(dir.path());

        let sheet = BillSheet {
            guest_name: "Asha Verma",
            room_number: "301",
            room_type: "4 seater",
            billing_month: MonthRef::new(2025, 8).unwrap(),
            bill_date: NaiveDate::from_ymd_opt(2025, 8, 27)
                .unwrap()
                .and_hms_opt(9, 30, 15)
                .unwrap(),
            total_days: 30,
            monthly_rate: Money::new(dec!(9000), Currency::INR),
            discount: Money::zero(Currency::INR),
            total_amount: Money::new(dec!(9000.00), Currency::INR),
        };

        let relative = render_bill(&store, &sheet).unwrap();
        assert_eq!(
            relative,
            "bills/bills for August 2025/bill_Asha_Verma_20250827_093015.pdf"
        );

        let written = std::fs::read(store.resolve(&relative).unwrap()).unwrap();
        assert!(written.starts_with(b"%PDF"));
    }
}
