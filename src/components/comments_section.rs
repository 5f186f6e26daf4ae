use yew::prelude::*;

use super::fields::DraftSectionProps;
use crate::models::DraftField;

#[function_component(CommentsSection)]
pub fn comments_section(props: &DraftSectionProps) -> Html {
    html! {
        <div class="tab-content">
            <div class="section">
                <h2>{"Comments"}</h2>
                {props.textarea(
                    DraftField::Comments,
                    5,
                    "Add a comment and use @name to tag someone.",
                )}
            </div>
        </div>
    }
}
