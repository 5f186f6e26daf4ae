// ============================================================================
// USE SESSION GATE - login state + the two routes
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::window;
use yew::prelude::*;

use crate::context::use_app_context;
use crate::state::{Route, SessionGate};

pub struct UseSessionGateHandle {
    /// `None` until the stored session has been checked.
    pub gate: UseStateHandle<Option<SessionGate>>,
    pub requested: UseStateHandle<Route>,
    pub login: Callback<()>,
    pub logout: Callback<()>,
}

impl UseSessionGateHandle {
    /// Screen to render once redirects are applied.
    pub fn route(&self) -> Option<Route> {
        (*self.gate).map(|gate| Route::resolve(*self.requested, gate.is_authenticated()))
    }
}

fn current_route() -> Route {
    window()
        .and_then(|w| w.location().pathname().ok())
        .map(|path| Route::from_path(&path))
        .unwrap_or(Route::Form)
}

fn replace_path(route: Route) {
    let Some(history) = window().and_then(|w| w.history().ok()) else {
        return;
    };
    if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(route.path())) {
        log::warn!("⚠️ Could not update URL to {}: {:?}", route.path(), e);
    }
}

#[hook]
pub fn use_session_gate() -> UseSessionGateHandle {
    let ctx = use_app_context();
    let gate = use_state(|| None::<SessionGate>);
    let requested = use_state(current_route);

    // Check stored session on mount
    {
        let gate = gate.clone();
        let sessions = ctx.sessions.clone();
        use_effect_with((), move |_| {
            gate.set(Some(SessionGate::restore(sessions.as_ref())));
            || ()
        });
    }

    // Follow back/forward navigation
    {
        let requested = requested.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|win| {
                let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
                    requested.set(current_route());
                });
                if let Err(e) = win
                    .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())
                {
                    log::warn!("⚠️ popstate listener not registered: {:?}", e);
                }
                (win, closure)
            });

            move || {
                if let Some((win, closure)) = listener {
                    if let Err(e) = win.remove_event_listener_with_callback(
                        "popstate",
                        closure.as_ref().unchecked_ref(),
                    ) {
                        log::warn!("⚠️ popstate listener not removed: {:?}", e);
                    }
                }
            }
        });
    }

    // Keep the address bar on the route actually rendered
    {
        let requested = requested.clone();
        use_effect_with((*gate, *requested), move |(gate, wanted)| {
            if let Some(gate) = gate {
                let resolved = Route::resolve(*wanted, gate.is_authenticated());
                if resolved != *wanted {
                    log::info!("🔀 Redirect {} -> {}", wanted.path(), resolved.path());
                    replace_path(resolved);
                    requested.set(resolved);
                }
            }
            || ()
        });
    }

    let login = {
        let gate = gate.clone();
        Callback::from(move |_: ()| {
            let mut next = (*gate).unwrap_or_default();
            next.login();
            log::info!("✅ Login successful");
            gate.set(Some(next));
        })
    };

    let logout = {
        let gate = gate.clone();
        let sessions = ctx.sessions.clone();
        let drafts = ctx.drafts.clone();
        Callback::from(move |_: ()| {
            let mut next = (*gate).unwrap_or_default();
            next.logout(sessions.as_ref(), drafts.as_ref());
            gate.set(Some(next));
        })
    };

    UseSessionGateHandle {
        gate,
        requested,
        login,
        logout,
    }
}
