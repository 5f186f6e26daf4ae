use super::draft::{ExpenseLine, InvoiceDraft, LineId};

/// Built-in demonstration invoice used by "Populate with Dummy Data".
///
/// The single line gets a fresh identity on every call.
pub fn sample_draft() -> InvoiceDraft {
    InvoiceDraft {
        vendor: "A-1 Exterminators".to_string(),
        vendor_address: "550 Main St, Lynn".to_string(),
        purchase_order_number: "PO-2024-001".to_string(),
        select_po_number: "PO-2024-001".to_string(),
        invoice_number: "INV-2024-001".to_string(),
        invoice_date: "2024-01-15".to_string(),
        payment_terms: "Net 30".to_string(),
        total_amount: "1500.00".to_string(),
        currency: "USD".to_string(),
        invoice_due_date: "2024-02-15".to_string(),
        gl_post_date: "2024-01-16".to_string(),
        invoice_description: "Quarterly pest control services for main office".to_string(),
        expense_details: vec![ExpenseLine {
            id: LineId::generate(),
            line_amount: "1500.00".to_string(),
            department: "IT".to_string(),
            account: "Office Supplies".to_string(),
            location: "Main Office".to_string(),
            description: "Pest control service".to_string(),
        }],
        comments: "Please process this invoice for Q1 2024 services.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::draft::{DraftField, LineField};

    #[test]
    fn sample_only_uses_known_options() {
        let sample = sample_draft();

        for field in DraftField::ALL {
            if let Some(options) = field.options() {
                assert!(options.accepts(sample.get(field)), "{:?}", field);
            }
        }
        let line = &sample.expense_details[0];
        for field in [LineField::Department, LineField::Account, LineField::Location] {
            let options = field.options().unwrap();
            assert!(options.accepts(line.get(field)), "{:?}", field);
        }
    }

    #[test]
    fn each_sample_gets_its_own_line_identity() {
        assert_ne!(
            sample_draft().expense_details[0].id,
            sample_draft().expense_details[0].id
        );
    }
}
