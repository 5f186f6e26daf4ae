use super::FieldErrors;
use crate::models::{DraftField, InvoiceDraft};

/// Fields that must be non-empty before a draft can be submitted.
pub const REQUIRED_FIELDS: [(DraftField, &str); 4] = [
    (DraftField::Vendor, "Vendor is required"),
    (DraftField::InvoiceNumber, "Invoice Number is required"),
    (DraftField::InvoiceDate, "Invoice Date is required"),
    (DraftField::TotalAmount, "Total Amount is required"),
];

pub fn is_required(field: DraftField) -> bool {
    REQUIRED_FIELDS.iter().any(|(required, _)| *required == field)
}

pub fn validate_draft_field(draft: &InvoiceDraft, field: DraftField) -> Option<&'static str> {
    REQUIRED_FIELDS
        .iter()
        .find(|(required, _)| *required == field)
        .filter(|_| draft.get(field).is_empty())
        .map(|(_, message)| *message)
}

pub fn validate_draft(draft: &InvoiceDraft) -> FieldErrors<DraftField> {
    REQUIRED_FIELDS
        .iter()
        .filter_map(|(field, _)| {
            validate_draft_field(draft, *field).map(|message| (*field, message))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn complete_draft() -> InvoiceDraft {
        InvoiceDraft {
            vendor: "Office Max".to_string(),
            invoice_number: "INV-9".to_string(),
            invoice_date: "2024-03-01".to_string(),
            total_amount: "12.50".to_string(),
            ..InvoiceDraft::default()
        }
    }

    #[test]
    fn complete_draft_has_no_errors() {
        assert!(validate_draft(&complete_draft()).is_empty());
    }

    #[test]
    fn default_draft_misses_three_required_fields() {
        let errors = validate_draft(&InvoiceDraft::default());

        let expected: FieldErrors<DraftField> = [
            (DraftField::Vendor, "Vendor is required"),
            (DraftField::InvoiceNumber, "Invoice Number is required"),
            (DraftField::InvoiceDate, "Invoice Date is required"),
        ]
        .into_iter()
        .collect();
        assert_eq!(errors, expected);
    }

    #[test]
    fn exactly_the_missing_fields_are_reported() {
        for (missing, message) in REQUIRED_FIELDS {
            let mut draft = complete_draft();
            draft.set(missing, String::new());

            let errors = validate_draft(&draft);

            assert_eq!(errors.len(), 1, "{:?}", missing);
            assert_eq!(errors.get(&missing), Some(&message));
        }
    }

    #[test]
    fn optional_fields_never_error() {
        let draft = InvoiceDraft {
            vendor_address: String::new(),
            comments: String::new(),
            ..complete_draft()
        };
        assert_eq!(validate_draft_field(&draft, DraftField::VendorAddress), None);
        assert_eq!(validate_draft_field(&draft, DraftField::Comments), None);
    }
}
