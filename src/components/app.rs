use yew::prelude::*;

use super::invoice_form::InvoiceForm;
use super::login_screen::LoginScreen;
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::hooks::use_session_gate;
use crate::state::Route;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    #[prop_or_default]
    pub config: AppConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let context = use_memo(props.config.clone(), |config| AppContext::browser(config.clone()));

    html! {
        <ContextProvider<AppContext> context={(*context).clone()}>
            <Shell />
        </ContextProvider<AppContext>>
    }
}

/// Picks the screen for the current route once the session is known.
#[function_component(Shell)]
fn shell() -> Html {
    let session = use_session_gate();

    match session.route() {
        None => html! { <div class="loading">{"Loading..."}</div> },
        Some(Route::Login) => html! { <LoginScreen on_login={session.login.clone()} /> },
        Some(Route::Form) => html! { <InvoiceForm on_logout={session.logout.clone()} /> },
    }
}
