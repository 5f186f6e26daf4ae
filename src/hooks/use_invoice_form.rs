// ============================================================================
// USE INVOICE FORM - yew bindings around FormState
// ============================================================================

use yew::prelude::*;

use crate::context::use_app_context;
use crate::models::{DraftField, LineField, LineId};
use crate::state::FormState;

pub struct UseInvoiceFormHandle {
    pub state: UseStateHandle<FormState>,
    pub set_field: Callback<(DraftField, String)>,
    pub touch: Callback<DraftField>,
    pub set_line_field: Callback<(LineId, LineField, String)>,
    pub add_line: Callback<()>,
    pub remove_line: Callback<LineId>,
    pub populate_sample: Callback<()>,
    pub submit: Callback<()>,
}

#[hook]
pub fn use_invoice_form() -> UseInvoiceFormHandle {
    let ctx = use_app_context();
    let state = {
        let drafts = ctx.drafts.clone();
        use_state(move || FormState::load(drafts))
    };

    let set_field = {
        let state = state.clone();
        Callback::from(move |(field, value): (DraftField, String)| {
            let mut next = (*state).clone();
            if next.set_field(field, value) {
                state.set(next);
            }
        })
    };

    let touch = {
        let state = state.clone();
        Callback::from(move |field: DraftField| {
            let mut next = (*state).clone();
            next.touch(field);
            state.set(next);
        })
    };

    let set_line_field = {
        let state = state.clone();
        Callback::from(move |(id, field, value): (LineId, LineField, String)| {
            let mut next = (*state).clone();
            if next.set_line_field(&id, field, value) {
                state.set(next);
            }
        })
    };

    let add_line = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            let mut next = (*state).clone();
            next.add_line();
            state.set(next);
        })
    };

    let remove_line = {
        let state = state.clone();
        Callback::from(move |id: LineId| {
            let mut next = (*state).clone();
            if next.remove_line(&id) {
                state.set(next);
            }
        })
    };

    let populate_sample = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            let mut next = (*state).clone();
            next.populate_sample();
            state.set(next);
        })
    };

    let submit = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            let mut next = (*state).clone();
            if let Err(e) = next.submit() {
                log::info!("ℹ️ Invoice not saved: {}", e);
            }
            state.set(next);
        })
    };

    UseInvoiceFormHandle {
        state,
        set_field,
        touch,
        set_line_field,
        add_line,
        remove_line,
        populate_sample,
        submit,
    }
}
