use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{File, FileReader, ProgressEvent};

/// Reads `file` into a `data:` URL and hands the outcome to `on_done`.
///
/// `on_done` runs once, on the next `loadend`, whether the read succeeded
/// or not.
pub fn read_as_data_url<F>(file: &File, on_done: F) -> Result<(), String>
where
    F: FnOnce(Result<String, String>) + 'static,
{
    let reader = FileReader::new().map_err(|e| format!("FileReader unavailable: {:?}", e))?;

    let reader_handle = reader.clone();
    let on_loadend = Closure::once_into_js(move |_event: ProgressEvent| {
        let outcome = reader_handle
            .result()
            .ok()
            .and_then(|value| value.as_string())
            .ok_or_else(|| match reader_handle.error() {
                Some(err) => err.message(),
                None => "file could not be read".to_string(),
            });
        on_done(outcome);
    });
    reader.set_onloadend(Some(on_loadend.unchecked_ref()));

    reader
        .read_as_data_url(file)
        .map_err(|e| format!("could not start reading '{}': {:?}", file.name(), e))
}
