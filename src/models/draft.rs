use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use uuid::Uuid;

use super::options::{self, OptionSet};

pub const DEFAULT_CURRENCY: &str = "USD";
pub const DEFAULT_AMOUNT: &str = "0.00";

// ============================================================================
// EXPENSE LINES
// ============================================================================

/// Identity of one expense line.
///
/// Generated once when the line is created and never derived from its
/// position in the list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(String);

impl LineId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseLine {
    pub id: LineId,
    pub line_amount: String,
    pub department: String,
    pub account: String,
    pub location: String,
    pub description: String,
}

impl ExpenseLine {
    /// A line with a fresh identity and default values.
    pub fn blank() -> Self {
        Self {
            id: LineId::generate(),
            line_amount: DEFAULT_AMOUNT.to_string(),
            department: String::new(),
            account: String::new(),
            location: String::new(),
            description: String::new(),
        }
    }

    pub fn get(&self, field: LineField) -> &str {
        match field {
            LineField::Amount => &self.line_amount,
            LineField::Department => &self.department,
            LineField::Account => &self.account,
            LineField::Location => &self.location,
            LineField::Description => &self.description,
        }
    }

    fn field_mut(&mut self, field: LineField) -> &mut String {
        match field {
            LineField::Amount => &mut self.line_amount,
            LineField::Department => &mut self.department,
            LineField::Account => &mut self.account,
            LineField::Location => &mut self.location,
            LineField::Description => &mut self.description,
        }
    }

    pub fn set(&mut self, field: LineField, value: String) {
        *self.field_mut(field) = value;
    }
}

/// Editable properties of an expense line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LineField {
    Amount,
    Department,
    Account,
    Location,
    Description,
}

impl LineField {
    pub fn label(&self) -> &'static str {
        match self {
            LineField::Amount => "Line Amount",
            LineField::Department => "Department",
            LineField::Account => "Account",
            LineField::Location => "Location",
            LineField::Description => "Description",
        }
    }

    pub fn options(&self) -> Option<&'static OptionSet> {
        match self {
            LineField::Department => Some(&options::DEPARTMENTS),
            LineField::Account => Some(&options::ACCOUNTS),
            LineField::Location => Some(&options::LOCATIONS),
            LineField::Amount | LineField::Description => None,
        }
    }
}

// ============================================================================
// INVOICE DRAFT
// ============================================================================

/// Every value of the invoice form, serialized as the `invoiceFormData` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDraft {
    pub vendor: String,
    pub vendor_address: String,
    pub purchase_order_number: String,
    #[serde(rename = "selectPONumber")]
    pub select_po_number: String,
    pub invoice_number: String,
    pub invoice_date: String,
    pub payment_terms: String,
    pub total_amount: String,
    pub currency: String,
    pub invoice_due_date: String,
    pub gl_post_date: String,
    pub invoice_description: String,
    pub expense_details: Vec<ExpenseLine>,
    pub comments: String,
}

impl Default for InvoiceDraft {
    fn default() -> Self {
        Self {
            vendor: String::new(),
            vendor_address: String::new(),
            purchase_order_number: String::new(),
            select_po_number: String::new(),
            invoice_number: String::new(),
            invoice_date: String::new(),
            payment_terms: String::new(),
            total_amount: DEFAULT_AMOUNT.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
            invoice_due_date: String::new(),
            gl_post_date: String::new(),
            invoice_description: String::new(),
            expense_details: vec![ExpenseLine::blank()],
            comments: String::new(),
        }
    }
}

impl InvoiceDraft {
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Vendor => &self.vendor,
            DraftField::VendorAddress => &self.vendor_address,
            DraftField::PurchaseOrderNumber => &self.purchase_order_number,
            DraftField::SelectPoNumber => &self.select_po_number,
            DraftField::InvoiceNumber => &self.invoice_number,
            DraftField::InvoiceDate => &self.invoice_date,
            DraftField::PaymentTerms => &self.payment_terms,
            DraftField::TotalAmount => &self.total_amount,
            DraftField::Currency => &self.currency,
            DraftField::InvoiceDueDate => &self.invoice_due_date,
            DraftField::GlPostDate => &self.gl_post_date,
            DraftField::InvoiceDescription => &self.invoice_description,
            DraftField::Comments => &self.comments,
        }
    }

    fn field_mut(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::Vendor => &mut self.vendor,
            DraftField::VendorAddress => &mut self.vendor_address,
            DraftField::PurchaseOrderNumber => &mut self.purchase_order_number,
            DraftField::SelectPoNumber => &mut self.select_po_number,
            DraftField::InvoiceNumber => &mut self.invoice_number,
            DraftField::InvoiceDate => &mut self.invoice_date,
            DraftField::PaymentTerms => &mut self.payment_terms,
            DraftField::TotalAmount => &mut self.total_amount,
            DraftField::Currency => &mut self.currency,
            DraftField::InvoiceDueDate => &mut self.invoice_due_date,
            DraftField::GlPostDate => &mut self.gl_post_date,
            DraftField::InvoiceDescription => &mut self.invoice_description,
            DraftField::Comments => &mut self.comments,
        }
    }

    pub fn set(&mut self, field: DraftField, value: String) {
        *self.field_mut(field) = value;
    }

    pub fn line(&self, id: &LineId) -> Option<&ExpenseLine> {
        self.expense_details.iter().find(|line| &line.id == id)
    }

    pub fn line_mut(&mut self, id: &LineId) -> Option<&mut ExpenseLine> {
        self.expense_details.iter_mut().find(|line| &line.id == id)
    }

    pub fn position_of(&self, id: &LineId) -> Option<usize> {
        self.expense_details.iter().position(|line| &line.id == id)
    }
}

/// Top-level text fields of the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DraftField {
    Vendor,
    VendorAddress,
    PurchaseOrderNumber,
    SelectPoNumber,
    InvoiceNumber,
    InvoiceDate,
    PaymentTerms,
    TotalAmount,
    Currency,
    InvoiceDueDate,
    GlPostDate,
    InvoiceDescription,
    Comments,
}

impl DraftField {
    pub const ALL: [DraftField; 13] = [
        DraftField::Vendor,
        DraftField::VendorAddress,
        DraftField::PurchaseOrderNumber,
        DraftField::SelectPoNumber,
        DraftField::InvoiceNumber,
        DraftField::InvoiceDate,
        DraftField::PaymentTerms,
        DraftField::TotalAmount,
        DraftField::Currency,
        DraftField::InvoiceDueDate,
        DraftField::GlPostDate,
        DraftField::InvoiceDescription,
        DraftField::Comments,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DraftField::Vendor => "Vendor",
            DraftField::VendorAddress => "Vendor Address",
            DraftField::PurchaseOrderNumber => "Purchase Order Number",
            DraftField::SelectPoNumber => "Select PO Number",
            DraftField::InvoiceNumber => "Invoice Number",
            DraftField::InvoiceDate => "Invoice Date",
            DraftField::PaymentTerms => "Payment Terms",
            DraftField::TotalAmount => "Total Amount",
            DraftField::Currency => "Currency",
            DraftField::InvoiceDueDate => "Invoice Due Date",
            DraftField::GlPostDate => "GL Post Date",
            DraftField::InvoiceDescription => "Invoice Description",
            DraftField::Comments => "Add Comments",
        }
    }

    /// DOM name of the bound input, matching the JSON key.
    pub fn name(&self) -> &'static str {
        match self {
            DraftField::Vendor => "vendor",
            DraftField::VendorAddress => "vendorAddress",
            DraftField::PurchaseOrderNumber => "purchaseOrderNumber",
            DraftField::SelectPoNumber => "selectPONumber",
            DraftField::InvoiceNumber => "invoiceNumber",
            DraftField::InvoiceDate => "invoiceDate",
            DraftField::PaymentTerms => "paymentTerms",
            DraftField::TotalAmount => "totalAmount",
            DraftField::Currency => "currency",
            DraftField::InvoiceDueDate => "invoiceDueDate",
            DraftField::GlPostDate => "glPostDate",
            DraftField::InvoiceDescription => "invoiceDescription",
            DraftField::Comments => "comments",
        }
    }

    pub fn options(&self) -> Option<&'static OptionSet> {
        match self {
            DraftField::Vendor => Some(&options::VENDORS),
            DraftField::SelectPoNumber => Some(&options::PO_NUMBERS),
            DraftField::PaymentTerms => Some(&options::PAYMENT_TERMS),
            DraftField::Currency => Some(&options::CURRENCIES),
            _ => None,
        }
    }
}

// ============================================================================
// SAVED DRAFT - partial record read back from storage
// ============================================================================

/// Draft as found in storage. Any field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedDraft {
    pub vendor: Option<String>,
    pub vendor_address: Option<String>,
    pub purchase_order_number: Option<String>,
    #[serde(rename = "selectPONumber")]
    pub select_po_number: Option<String>,
    pub invoice_number: Option<String>,
    pub invoice_date: Option<String>,
    pub payment_terms: Option<String>,
    pub total_amount: Option<String>,
    pub currency: Option<String>,
    pub invoice_due_date: Option<String>,
    pub gl_post_date: Option<String>,
    pub invoice_description: Option<String>,
    pub expense_details: Option<Vec<SavedExpenseLine>>,
    pub comments: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedExpenseLine {
    pub id: Option<String>,
    pub line_amount: Option<String>,
    pub department: Option<String>,
    pub account: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
}

/// Overlays a saved draft on top of `defaults`.
///
/// Top-level fields present in `saved` replace the default value. A saved
/// expense list replaces the default list as a whole; an empty saved list is
/// ignored so the draft always keeps at least one line. Lines whose id is
/// missing, empty or already taken get a fresh identity.
pub fn merge_saved(defaults: InvoiceDraft, saved: Option<SavedDraft>) -> InvoiceDraft {
    let Some(saved) = saved else {
        return defaults;
    };

    let expense_details = match saved.expense_details {
        Some(lines) if !lines.is_empty() => normalize_lines(lines),
        _ => defaults.expense_details,
    };

    InvoiceDraft {
        vendor: saved.vendor.unwrap_or(defaults.vendor),
        vendor_address: saved.vendor_address.unwrap_or(defaults.vendor_address),
        purchase_order_number: saved
            .purchase_order_number
            .unwrap_or(defaults.purchase_order_number),
        select_po_number: saved.select_po_number.unwrap_or(defaults.select_po_number),
        invoice_number: saved.invoice_number.unwrap_or(defaults.invoice_number),
        invoice_date: saved.invoice_date.unwrap_or(defaults.invoice_date),
        payment_terms: saved.payment_terms.unwrap_or(defaults.payment_terms),
        total_amount: saved.total_amount.unwrap_or(defaults.total_amount),
        currency: saved.currency.unwrap_or(defaults.currency),
        invoice_due_date: saved.invoice_due_date.unwrap_or(defaults.invoice_due_date),
        gl_post_date: saved.gl_post_date.unwrap_or(defaults.gl_post_date),
        invoice_description: saved
            .invoice_description
            .unwrap_or(defaults.invoice_description),
        expense_details,
        comments: saved.comments.unwrap_or(defaults.comments),
    }
}

fn normalize_lines(lines: Vec<SavedExpenseLine>) -> Vec<ExpenseLine> {
    let mut seen = HashSet::new();

    lines
        .into_iter()
        .map(|saved| {
            let id = match saved.id {
                Some(id) if !id.is_empty() && !seen.contains(&id) => LineId(id),
                _ => LineId::generate(),
            };
            seen.insert(id.0.clone());

            let blank = ExpenseLine::blank();
            ExpenseLine {
                id,
                line_amount: saved.line_amount.unwrap_or(blank.line_amount),
                department: saved.department.unwrap_or(blank.department),
                account: saved.account.unwrap_or(blank.account),
                location: saved.location.unwrap_or(blank.location),
                description: saved.description.unwrap_or(blank.description),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn line(id: &str, amount: &str) -> SavedExpenseLine {
        SavedExpenseLine {
            id: Some(id.to_string()),
            line_amount: Some(amount.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn default_draft_has_one_blank_line() {
        let draft = InvoiceDraft::default();

        assert_eq!(draft.currency, "USD");
        assert_eq!(draft.total_amount, "0.00");
        assert_eq!(draft.expense_details.len(), 1);

        let line = &draft.expense_details[0];
        assert!(!line.id.as_str().is_empty());
        assert_eq!(line.line_amount, "0.00");
        assert_eq!(line.department, "");
        assert_eq!(line.account, "");
        assert_eq!(line.location, "");
        assert_eq!(line.description, "");
    }

    #[test]
    fn generated_line_ids_are_unique() {
        let ids: HashSet<_> = (0..64).map(|_| LineId::generate()).collect();
        assert_eq!(ids.len(), 64);
    }

    #[test]
    fn draft_serializes_with_form_keys() {
        let draft = InvoiceDraft::default();
        let json = serde_json::to_value(&draft).unwrap();

        assert_eq!(json["selectPONumber"], "");
        assert_eq!(json["totalAmount"], "0.00");
        assert_eq!(json["glPostDate"], "");
        assert_eq!(json["expenseDetails"][0]["lineAmount"], "0.00");
        assert_eq!(
            json["expenseDetails"][0]["id"],
            draft.expense_details[0].id.as_str()
        );
    }

    #[test]
    fn merge_without_saved_draft_keeps_defaults() {
        let defaults = InvoiceDraft::default();
        let merged = merge_saved(defaults.clone(), None);
        assert_eq!(merged, defaults);
    }

    #[test]
    fn merge_overrides_only_present_fields() {
        let saved: SavedDraft =
            serde_json::from_str(r#"{"vendor":"Office Max","comments":"hello"}"#).unwrap();
        let defaults = InvoiceDraft::default();

        let merged = merge_saved(defaults.clone(), Some(saved));

        assert_eq!(merged.vendor, "Office Max");
        assert_eq!(merged.comments, "hello");
        assert_eq!(merged.currency, "USD");
        assert_eq!(merged.total_amount, "0.00");
        assert_eq!(merged.expense_details, defaults.expense_details);
    }

    #[test]
    fn saved_lines_replace_default_lines_wholesale() {
        let saved = SavedDraft {
            expense_details: Some(vec![line("a", "10.00"), line("b", "20.00")]),
            ..Default::default()
        };

        let merged = merge_saved(InvoiceDraft::default(), Some(saved));

        let ids: Vec<_> = merged
            .expense_details
            .iter()
            .map(|l| l.id.as_str().to_string())
            .collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(merged.expense_details[1].line_amount, "20.00");
    }

    #[test]
    fn empty_saved_line_list_keeps_default_line() {
        let saved = SavedDraft {
            expense_details: Some(Vec::new()),
            ..Default::default()
        };
        let defaults = InvoiceDraft::default();

        let merged = merge_saved(defaults.clone(), Some(saved));

        assert_eq!(merged.expense_details, defaults.expense_details);
    }

    #[test]
    fn duplicate_or_missing_saved_ids_get_fresh_identity() {
        let saved = SavedDraft {
            expense_details: Some(vec![
                line("same", "1.00"),
                line("same", "2.00"),
                SavedExpenseLine::default(),
                line("", "4.00"),
            ]),
            ..Default::default()
        };

        let merged = merge_saved(InvoiceDraft::default(), Some(saved));
        let lines = &merged.expense_details;

        assert_eq!(lines[0].id.as_str(), "same");
        let ids: HashSet<_> = lines.iter().map(|l| l.id.clone()).collect();
        assert_eq!(ids.len(), 4);
        assert!(lines.iter().all(|l| !l.id.as_str().is_empty()));
        assert_eq!(lines[2].line_amount, "0.00");
        assert_eq!(lines[3].line_amount, "4.00");
    }

    #[test]
    fn saved_round_trip_is_lossless() {
        let mut draft = InvoiceDraft::default();
        draft.vendor = "Global Suppliers".to_string();
        draft.expense_details.push(ExpenseLine::blank());

        let json = serde_json::to_string(&draft).unwrap();
        let saved: SavedDraft = serde_json::from_str(&json).unwrap();

        assert_eq!(merge_saved(InvoiceDraft::default(), Some(saved)), draft);
    }

    #[test]
    fn field_accessors_touch_only_their_field() {
        let mut draft = InvoiceDraft::default();
        let before = draft.clone();

        draft.set(DraftField::InvoiceNumber, "INV-1".to_string());

        assert_eq!(draft.get(DraftField::InvoiceNumber), "INV-1");
        for field in DraftField::ALL {
            if field != DraftField::InvoiceNumber {
                assert_eq!(draft.get(field), before.get(field), "{:?} changed", field);
            }
        }
    }
}
