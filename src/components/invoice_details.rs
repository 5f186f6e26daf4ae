use yew::prelude::*;

use super::expense_line_card::ExpenseLineCard;
use super::fields::DraftSectionProps;
use crate::models::{DraftField, LineField};
use crate::utils::expense_summary;

#[function_component(InvoiceDetails)]
pub fn invoice_details(props: &DraftSectionProps) -> Html {
    let draft = &props.draft;
    let add_line = props.on_add_line.reform(|_: MouseEvent| ());

    // Position -> identity translation happens here and nowhere else.
    let lines = draft.expense_details.iter().enumerate().map(|(position, line)| {
        let id = line.id.clone();
        let on_change = {
            let id = id.clone();
            props
                .on_line_change
                .reform(move |(field, value): (LineField, String)| (id.clone(), field, value))
        };
        let on_remove = props.on_remove_line.reform(move |_: ()| id.clone());
        html! {
            <ExpenseLineCard
                key={line.id.to_string()}
                line={line.clone()}
                {position}
                removable={props.can_remove_lines}
                {on_change}
                {on_remove}
            />
        }
    });

    html! {
        <div class="tab-content">
            <div class="section">
                <h2>{"Invoice Details"}</h2>
                {props.text(DraftField::PurchaseOrderNumber, "text", "Enter PO Number")}
                {props.select(DraftField::SelectPoNumber)}
            </div>

            <div class="section">
                <h3>{"Invoice Details"}</h3>
                {props.text(DraftField::InvoiceNumber, "text", "Enter invoice number")}
                {props.text(DraftField::InvoiceDate, "date", "")}
                {props.select(DraftField::PaymentTerms)}
                <div class="field-row">
                    {props.text(DraftField::TotalAmount, "number", "0.00")}
                    {props.select(DraftField::Currency)}
                </div>
                {props.text(DraftField::InvoiceDueDate, "date", "")}
                {props.text(DraftField::GlPostDate, "date", "")}
                {props.textarea(DraftField::InvoiceDescription, 3, "")}
            </div>

            <div class="section">
                <h3>{"Expense Details"}</h3>
                <div class="expense-summary">
                    {expense_summary(&draft.total_amount, &draft.currency)}
                </div>
                <div class="expense-items">
                    { for lines }
                </div>
                <button type="button" class="add-expense-button" onclick={add_line}>
                    {"+ Add Expense Coding"}
                </button>
            </div>
        </div>
    }
}
