use gloo_timers::future::TimeoutFuture;
use yew::prelude::*;

use crate::context::use_app_context;
use crate::state::LoginFormState;
use crate::validation::LoginField;

pub struct UseLoginFormHandle {
    pub state: UseStateHandle<LoginFormState>,
    pub set_field: Callback<(LoginField, String)>,
    pub touch: Callback<LoginField>,
    pub submit: Callback<()>,
}

/// Login screen state. `on_login` fires once the simulated request is over.
#[hook]
pub fn use_login_form(on_login: Callback<()>) -> UseLoginFormHandle {
    let ctx = use_app_context();
    let state = use_state(LoginFormState::default);

    let set_field = {
        let state = state.clone();
        Callback::from(move |(field, value): (LoginField, String)| {
            let mut next = (*state).clone();
            next.set_field(field, value);
            state.set(next);
        })
    };

    let touch = {
        let state = state.clone();
        Callback::from(move |field: LoginField| {
            let mut next = (*state).clone();
            next.touch(field);
            state.set(next);
        })
    };

    let submit = {
        let state = state.clone();
        let sessions = ctx.sessions.clone();
        let delay_ms = ctx.config.login_delay_ms;
        Callback::from(move |_: ()| {
            let mut next = (*state).clone();
            let Some(record) = next.submit(chrono::Utc::now().timestamp_millis()) else {
                state.set(next);
                return;
            };

            if let Err(e) = sessions.save(&record) {
                log::error!("❌ Could not store session: {}", e);
                next.finish();
                state.set(next);
                return;
            }
            log::info!("🔐 Logging in as {}", record.username);
            state.set(next);

            // Screen unmounts on login; state is not written back.
            let on_login = on_login.clone();
            wasm_bindgen_futures::spawn_local(async move {
                TimeoutFuture::new(delay_ms).await;
                on_login.emit(());
            });
        })
    };

    UseLoginFormHandle {
        state,
        set_field,
        touch,
        submit,
    }
}
