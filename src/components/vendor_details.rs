use yew::prelude::*;

use super::fields::DraftSectionProps;
use crate::models::DraftField;

#[function_component(VendorDetails)]
pub fn vendor_details(props: &DraftSectionProps) -> Html {
    html! {
        <div class="tab-content">
            <div class="section">
                <h2>{"Vendor Details"}</h2>
                {props.select(DraftField::Vendor)}
                {props.text(DraftField::VendorAddress, "text", "Enter vendor address")}
            </div>
        </div>
    }
}
