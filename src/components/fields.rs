// ============================================================================
// FIELDS - controlled inputs bound to one path of the draft
// ============================================================================

use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::models::{DraftField, InvoiceDraft, LineField, LineId, OptionSet};
use crate::validation::{is_required, FieldErrors};

fn field_label(label: &str, required: bool) -> String {
    if required {
        format!("{} *", label)
    } else {
        label.to_string()
    }
}

fn error_message(error: Option<&'static str>) -> Html {
    match error {
        Some(message) => html! { <div class="error-message">{message}</div> },
        None => html! {},
    }
}

#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    pub label: AttrValue,
    pub name: AttrValue,
    pub value: AttrValue,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub step: Option<AttrValue>,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub error: Option<&'static str>,
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub on_blur: Callback<()>,
}

#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                on_change.emit(input.value());
            }
        })
    };
    let onblur = props.on_blur.reform(|_: FocusEvent| ());

    html! {
        <div class="field-group">
            <label for={props.name.clone()}>{field_label(&props.label, props.required)}</label>
            <input
                id={props.name.clone()}
                name={props.name.clone()}
                type={props.input_type.clone()}
                class={classes!(props.error.map(|_| "error"))}
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                step={props.step.clone()}
                {oninput}
                {onblur}
            />
            {error_message(props.error)}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SelectFieldProps {
    pub label: AttrValue,
    pub name: AttrValue,
    pub value: AttrValue,
    pub options: &'static OptionSet,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub error: Option<&'static str>,
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub on_blur: Callback<()>,
}

#[function_component(SelectField)]
pub fn select_field(props: &SelectFieldProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                on_change.emit(select.value());
            }
        })
    };
    let onblur = props.on_blur.reform(|_: FocusEvent| ());
    let current = props.value.as_str();
    let select_ref = use_node_ref();

    // `selected` on an option the user already picked is ignored by the
    // browser, so the element value follows the draft explicitly.
    {
        let select_ref = select_ref.clone();
        let options = props.options;
        use_effect_with(props.value.clone(), move |value| {
            if let Some(select) = select_ref.cast::<HtmlSelectElement>() {
                select.set_value(options.displayed(value));
            }
            || ()
        });
    }

    html! {
        <div class="field-group">
            <label for={props.name.clone()}>{field_label(&props.label, props.required)}</label>
            <select
                ref={select_ref}
                id={props.name.clone()}
                name={props.name.clone()}
                class={classes!(props.error.map(|_| "error"))}
                {onchange}
                {onblur}
            >
                {
                    props.options.placeholder.map(|placeholder| html! {
                        <option value="" selected={current.is_empty()}>{placeholder}</option>
                    })
                }
                { for props.options.values.iter().map(|value| html! {
                    <option value={*value} selected={current == *value}>{*value}</option>
                }) }
            </select>
            {error_message(props.error)}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TextAreaFieldProps {
    pub label: AttrValue,
    pub name: AttrValue,
    pub value: AttrValue,
    #[prop_or(3)]
    pub rows: u32,
    #[prop_or_default]
    pub placeholder: AttrValue,
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub on_blur: Callback<()>,
}

#[function_component(TextAreaField)]
pub fn text_area_field(props: &TextAreaFieldProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
                on_change.emit(area.value());
            }
        })
    };
    let onblur = props.on_blur.reform(|_: FocusEvent| ());

    html! {
        <div class="field-group">
            <label for={props.name.clone()}>{props.label.clone()}</label>
            <textarea
                id={props.name.clone()}
                name={props.name.clone()}
                rows={props.rows.to_string()}
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                {oninput}
                {onblur}
            />
        </div>
    }
}

/// Props shared by the three tab sections.
#[derive(Properties, PartialEq, Clone)]
pub struct DraftSectionProps {
    pub draft: InvoiceDraft,
    pub errors: FieldErrors<DraftField>,
    pub on_change: Callback<(DraftField, String)>,
    pub on_blur: Callback<DraftField>,
    #[prop_or_default]
    pub can_remove_lines: bool,
    #[prop_or_default]
    pub on_line_change: Callback<(LineId, LineField, String)>,
    #[prop_or_default]
    pub on_add_line: Callback<()>,
    #[prop_or_default]
    pub on_remove_line: Callback<LineId>,
}

impl DraftSectionProps {
    fn bindings(&self, field: DraftField) -> (AttrValue, Callback<String>, Callback<()>) {
        let value = AttrValue::from(self.draft.get(field).to_string());
        let on_change = self.on_change.reform(move |value: String| (field, value));
        let on_blur = self.on_blur.reform(move |_: ()| field);
        (value, on_change, on_blur)
    }

    pub fn text(
        &self,
        field: DraftField,
        input_type: &'static str,
        placeholder: &'static str,
    ) -> Html {
        let (value, on_change, on_blur) = self.bindings(field);
        let step = (input_type == "number").then(|| AttrValue::Static("0.01"));
        html! {
            <TextField
                label={field.label()}
                name={field.name()}
                {value}
                input_type={input_type}
                placeholder={placeholder}
                {step}
                required={is_required(field)}
                error={self.errors.get(&field).copied()}
                {on_change}
                {on_blur}
            />
        }
    }

    pub fn select(&self, field: DraftField) -> Html {
        let Some(options) = field.options() else {
            return self.text(field, "text", "");
        };
        let (value, on_change, on_blur) = self.bindings(field);
        html! {
            <SelectField
                label={field.label()}
                name={field.name()}
                {value}
                {options}
                required={is_required(field)}
                error={self.errors.get(&field).copied()}
                {on_change}
                {on_blur}
            />
        }
    }

    pub fn textarea(&self, field: DraftField, rows: u32, placeholder: &'static str) -> Html {
        let (value, on_change, on_blur) = self.bindings(field);
        html! {
            <TextAreaField
                label={field.label()}
                name={field.name()}
                {value}
                {rows}
                placeholder={placeholder}
                {on_change}
                {on_blur}
            />
        }
    }
}
