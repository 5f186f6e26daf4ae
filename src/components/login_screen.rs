use yew::prelude::*;

use super::fields::TextField;
use crate::hooks::use_login_form;
use crate::validation::LoginField;

#[derive(Properties, PartialEq)]
pub struct LoginScreenProps {
    pub on_login: Callback<()>,
}

#[function_component(LoginScreen)]
pub fn login_screen(props: &LoginScreenProps) -> Html {
    let form = use_login_form(props.on_login.clone());
    let state = &*form.state;

    let on_submit = {
        let submit = form.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(());
        })
    };

    let bind = |field: LoginField| form.set_field.reform(move |value: String| (field, value));
    let blur = |field: LoginField| form.touch.reform(move |_: ()| field);

    html! {
        <div class="login-container">
            <div class="login-card">
                <h1>{"Login"}</h1>
                <p>{"Enter your credentials to access the Invoice Form"}</p>

                <form class="login-form" onsubmit={on_submit} novalidate=true>
                    <TextField
                        label="Username"
                        name="username"
                        value={state.credentials().username.clone()}
                        placeholder="Enter your username"
                        error={state.error_for(LoginField::Username)}
                        on_change={bind(LoginField::Username)}
                        on_blur={blur(LoginField::Username)}
                    />
                    <TextField
                        label="Password"
                        name="password"
                        input_type="password"
                        value={state.credentials().password.clone()}
                        placeholder="Enter your password"
                        error={state.error_for(LoginField::Password)}
                        on_change={bind(LoginField::Password)}
                        on_blur={blur(LoginField::Password)}
                    />

                    <button
                        type="submit"
                        class="submit-button"
                        disabled={state.is_submitting()}
                    >
                        {state.submit_label()}
                    </button>
                </form>
            </div>
        </div>
    }
}
