use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PdfViewerProps {
    /// `data:` URL of the selected file
    #[prop_or_default]
    pub file: Option<AttrValue>,
}

#[function_component(PdfViewer)]
pub fn pdf_viewer(props: &PdfViewerProps) -> Html {
    html! {
        <div class="pdf-viewer">
            {
                match &props.file {
                    Some(src) => html! {
                        <iframe src={src.clone()} title="PDF Viewer" class="pdf-iframe" />
                    },
                    None => html! {
                        <div class="pdf-placeholder">
                            <div class="pdf-icon">{"📄"}</div>
                            <p>{"Upload a PDF file to view it here"}</p>
                            <p class="placeholder-hint">{"Supported format: PDF"}</p>
                        </div>
                    },
                }
            }
        </div>
    }
}
