use web_sys::File;
use yew::prelude::*;

use crate::services::read_as_data_url;
use crate::state::PreviewState;

pub struct UsePreviewHandle {
    pub state: UseStateHandle<PreviewState>,
    pub select_file: Callback<File>,
}

/// File preview. Reads are tracked in a shared cell so a completing read
/// always sees the latest selection, not the snapshot it started from.
#[hook]
pub fn use_preview() -> UsePreviewHandle {
    let tracker = use_mut_ref(PreviewState::default);
    let state = use_state(PreviewState::default);

    let select_file = {
        let state = state.clone();
        Callback::from(move |file: File| {
            let ticket = tracker.borrow_mut().begin_read();
            let name = file.name();
            log::info!("📎 Reading {}", name);

            let tracker = tracker.clone();
            let state = state.clone();
            let started = read_as_data_url(&file, move |outcome| match outcome {
                Ok(data_url) => {
                    let mut current = tracker.borrow_mut();
                    if current.complete(ticket, name, data_url) {
                        state.set(current.clone());
                    }
                }
                Err(e) => log::error!("❌ Could not read {}: {}", name, e),
            });
            if let Err(e) = started {
                log::error!("❌ {}", e);
            }
        })
    };

    UsePreviewHandle { state, select_file }
}
