// ============================================================================
// INVOICE FORM SCREEN
// ============================================================================
// Left: preview pane + upload + sample data. Right: tabs and actions.
// ============================================================================

use yew::prelude::*;

use super::comments_section::CommentsSection;
use super::fields::DraftSectionProps;
use super::invoice_details::InvoiceDetails;
use super::pdf_viewer::PdfViewer;
use super::tab_bar::{Tab, TabBar};
use super::upload_box::UploadBox;
use super::vendor_details::VendorDetails;
use crate::hooks::{use_invoice_form, use_preview};
use crate::state::SubmitStatus;

#[derive(Properties, PartialEq)]
pub struct InvoiceFormProps {
    pub on_logout: Callback<()>,
}

#[function_component(InvoiceForm)]
pub fn invoice_form(props: &InvoiceFormProps) -> Html {
    let form = use_invoice_form();
    let preview = use_preview();
    let active_tab = use_state(Tab::default);
    let state = &*form.state;

    let section = DraftSectionProps {
        draft: state.draft().clone(),
        errors: state.errors().clone(),
        on_change: form.set_field.clone(),
        on_blur: form.touch.clone(),
        can_remove_lines: state.can_remove_lines(),
        on_line_change: form.set_line_field.clone(),
        on_add_line: form.add_line.clone(),
        on_remove_line: form.remove_line.clone(),
    };

    let tab_content = match *active_tab {
        Tab::VendorDetails => html! { <VendorDetails ..section /> },
        Tab::InvoiceDetails => html! { <InvoiceDetails ..section /> },
        Tab::Comments => html! { <CommentsSection ..section /> },
    };

    let select_tab = {
        let active_tab = active_tab.clone();
        Callback::from(move |tab: Tab| active_tab.set(tab))
    };

    let on_submit = {
        let submit = form.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(());
        })
    };

    let status = state.status().message().map(|message| {
        let class = match state.status() {
            SubmitStatus::Saved => "form-status success",
            _ => "form-status error",
        };
        html! { <div class={class} role="status">{message}</div> }
    });

    let preview_file = preview.state.data_url().map(|url| AttrValue::from(url.to_string()));

    html! {
        <div class="invoice-form-container">
            <div class="header">
                <div class="header-content">
                    <h1>{"Create New Invoice"}</h1>
                    <button
                        type="button"
                        class="logout-button"
                        onclick={props.on_logout.reform(|_: MouseEvent| ())}
                    >
                        {"Logout"}
                    </button>
                </div>
            </div>

            <form class="invoice-form" onsubmit={on_submit} novalidate=true>
                <div class="form-layout">
                    <div class="left-panel">
                        <PdfViewer file={preview_file} />
                        <UploadBox
                            loaded={preview.state.is_loaded()}
                            on_file={preview.select_file.clone()}
                            on_populate={form.populate_sample.clone()}
                        />
                    </div>

                    <div class="right-panel">
                        <TabBar active={*active_tab} on_select={select_tab} />
                        <div class="form-content">
                            {tab_content}
                        </div>
                        {status}
                        <div class="form-actions">
                            <button type="submit" class="submit-new-button">
                                {"Submit & New"}
                            </button>
                        </div>
                    </div>
                </div>
            </form>
        </div>
    }
}
