use yew::prelude::*;

use super::fields::{SelectField, TextAreaField, TextField};
use crate::models::{ExpenseLine, LineField};

#[derive(Properties, PartialEq)]
pub struct ExpenseLineCardProps {
    pub line: ExpenseLine,
    /// Zero-based position, only used for labels and input names.
    pub position: usize,
    pub removable: bool,
    pub on_change: Callback<(LineField, String)>,
    pub on_remove: Callback<()>,
}

#[function_component(ExpenseLineCard)]
pub fn expense_line_card(props: &ExpenseLineCardProps) -> Html {
    let line = &props.line;
    let name = |field: LineField| -> AttrValue {
        let key = match field {
            LineField::Amount => "lineAmount",
            LineField::Department => "department",
            LineField::Account => "account",
            LineField::Location => "location",
            LineField::Description => "description",
        };
        format!("expenseDetails.{}.{}", props.position, key).into()
    };
    let bind = |field: LineField| props.on_change.reform(move |value: String| (field, value));

    let select = |field: LineField| match field.options() {
        Some(options) => html! {
            <SelectField
                label={field.label()}
                name={name(field)}
                value={line.get(field).to_string()}
                {options}
                on_change={bind(field)}
            />
        },
        None => html! {},
    };

    html! {
        <div class="expense-item">
            <TextField
                label={LineField::Amount.label()}
                name={name(LineField::Amount)}
                value={line.line_amount.clone()}
                input_type="number"
                step={AttrValue::Static("0.01")}
                placeholder="0.00"
                on_change={bind(LineField::Amount)}
            />
            {select(LineField::Department)}
            {select(LineField::Account)}
            {select(LineField::Location)}
            <TextAreaField
                label={LineField::Description.label()}
                name={name(LineField::Description)}
                value={line.description.clone()}
                rows={2}
                on_change={bind(LineField::Description)}
            />
            if props.removable {
                <button
                    type="button"
                    class="remove-button"
                    onclick={props.on_remove.reform(|_: MouseEvent| ())}
                >
                    {"Remove"}
                </button>
            }
        </div>
    }
}
