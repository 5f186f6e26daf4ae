use web_sys::{File, HtmlInputElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct UploadBoxProps {
    pub loaded: bool,
    pub on_file: Callback<File>,
    pub on_populate: Callback<()>,
}

#[function_component(UploadBox)]
pub fn upload_box(props: &UploadBoxProps) -> Html {
    let input_ref = use_node_ref();

    let open_picker = {
        let input_ref = input_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                input.click();
            }
        })
    };

    let onchange = {
        let on_file = props.on_file.clone();
        Callback::from(move |e: Event| {
            let Some(input) = e.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                on_file.emit(file);
            }
            // allow picking the same file again
            input.set_value("");
        })
    };

    html! {
        <>
            <div class="upload-section">
                <div class="upload-box">
                    <div class="upload-icon">{ if props.loaded { "✓" } else { "☁" } }</div>
                    <p>{"To auto-populate fields and save time."}</p>
                    <input
                        ref={input_ref}
                        type="file"
                        accept="application/pdf"
                        style="display: none"
                        {onchange}
                    />
                    <button type="button" class="upload-button" onclick={open_picker}>
                        {"📎 Upload File"}
                    </button>
                    <p class="upload-hint">{"Click to upload or Drag and drop"}</p>
                </div>
            </div>

            <div class="dummy-data-button">
                <button
                    type="button"
                    class="populate-button"
                    onclick={props.on_populate.reform(|_: MouseEvent| ())}
                >
                    {"📋 Populate with Dummy Data"}
                </button>
            </div>
        </>
    }
}
