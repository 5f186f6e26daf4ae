// ============================================================================
// OPTION SETS - fixed choices for every select field of the form
// ============================================================================

/// Enumerated choices for one select field.
///
/// When `placeholder` is set the empty string is also accepted, since the
/// placeholder entry renders with an empty value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSet {
    pub placeholder: Option<&'static str>,
    pub values: &'static [&'static str],
}

impl OptionSet {
    pub fn accepts(&self, value: &str) -> bool {
        if value.is_empty() {
            return self.placeholder.is_some();
        }
        self.values.contains(&value)
    }

    /// Option a select should show for `value`. Unknown values fall back to
    /// the placeholder, or to the first option when there is none.
    pub fn displayed<'a>(&self, value: &'a str) -> &'a str {
        if self.values.contains(&value) {
            return value;
        }
        match self.placeholder {
            Some(_) => "",
            None => self.values.first().copied().unwrap_or_default(),
        }
    }
}

pub const VENDORS: OptionSet = OptionSet {
    placeholder: Some("Select Vendor"),
    values: &["A-1 Exterminators", "Office Max", "Global Suppliers"],
};

pub const PO_NUMBERS: OptionSet = OptionSet {
    placeholder: Some("Select"),
    values: &["PO-2024-001", "PO-2024-002"],
};

pub const PAYMENT_TERMS: OptionSet = OptionSet {
    placeholder: Some("Select"),
    values: &["Net 15", "Net 30", "Net 60"],
};

pub const CURRENCIES: OptionSet = OptionSet {
    placeholder: None,
    values: &["USD", "EUR", "GBP"],
};

pub const DEPARTMENTS: OptionSet = OptionSet {
    placeholder: Some("Select Department"),
    values: &["IT", "HR", "Finance"],
};

pub const ACCOUNTS: OptionSet = OptionSet {
    placeholder: Some("Select Account"),
    values: &["Office Supplies", "Utilities", "Travel"],
};

pub const LOCATIONS: OptionSet = OptionSet {
    placeholder: Some("Select Location"),
    values: &["Main Office", "Branch 1"],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_sets_accept_empty_value() {
        assert!(VENDORS.accepts(""));
        assert!(DEPARTMENTS.accepts(""));
        assert!(!CURRENCIES.accepts(""));
    }

    #[test]
    fn values_outside_the_set_are_refused() {
        assert!(VENDORS.accepts("Office Max"));
        assert!(!VENDORS.accepts("office max"));
        assert!(!CURRENCIES.accepts("JPY"));
        assert!(LOCATIONS.accepts("Branch 1"));
    }

    #[test]
    fn displayed_option_follows_the_value() {
        assert_eq!(VENDORS.displayed("Office Max"), "Office Max");
        assert_eq!(VENDORS.displayed(""), "");
        assert_eq!(VENDORS.displayed("Acme"), "");
        assert_eq!(CURRENCIES.displayed("EUR"), "EUR");
        assert_eq!(CURRENCIES.displayed("JPY"), "USD");
    }
}
