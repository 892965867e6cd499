//! Login form with username/email and password inputs.
//!
//! DESIGN
//! ======
//! Field values live in one signal owned by the component instance. The
//! form never talks to a backend: a submit hands the current values to the
//! optional `on_submit` callback and stops there.

#[cfg(test)]
#[path = "login_form_test.rs"]
mod login_form_test;

use leptos::prelude::*;

use crate::state::login::{FormFieldState, ResetPolicy, SubmissionPayload};

pub const IDENTIFIER_INPUT_ID: &str = "login-identifier";
pub const SECRET_INPUT_ID: &str = "login-secret";

const LABEL_CLASS: &str = "mb-2 block text-sm font-medium text-slate-700";
const INPUT_CLASS: &str = "w-full rounded-lg border border-slate-300 bg-white px-4 py-2.5 text-slate-900 \
                           placeholder-slate-400 focus:border-transparent focus:outline-none focus:ring-2 \
                           focus:ring-indigo-500";

/// Login form component.
///
/// `on_submit` receives the field values on every submit. `reset` decides
/// what happens to the inputs afterwards (kept by default).
#[component]
pub fn LoginForm(
    #[prop(optional)] on_submit: Option<Callback<SubmissionPayload>>,
    #[prop(optional)] reset: ResetPolicy,
) -> impl IntoView {
    let fields = RwSignal::new(FormFieldState::default());

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        handle_submit(|| ev.prevent_default(), fields, reset, on_submit);
    };

    view! {
        <section class="flex min-h-screen items-center justify-center px-4">
            <form
                class="w-full max-w-sm space-y-6 rounded-xl bg-white p-8 shadow-md"
                on:submit=on_form_submit
            >
                <h2 class="text-center text-2xl font-bold text-slate-900">"Login"</h2>
                <div>
                    <label for=IDENTIFIER_INPUT_ID class=LABEL_CLASS>
                        "Username or Email"
                    </label>
                    <input
                        id=IDENTIFIER_INPUT_ID
                        name="identifier"
                        type="text"
                        autocomplete="username"
                        class=INPUT_CLASS
                        prop:value=move || fields.with(|f| f.identifier.clone())
                        on:input=move |ev| input_identifier(fields, event_target_value(&ev))
                    />
                </div>
                <div>
                    <label for=SECRET_INPUT_ID class=LABEL_CLASS>
                        "Password"
                    </label>
                    <input
                        id=SECRET_INPUT_ID
                        name="secret"
                        type="password"
                        autocomplete="current-password"
                        class=INPUT_CLASS
                        prop:value=move || fields.with(|f| f.secret.clone())
                        on:input=move |ev| input_secret(fields, event_target_value(&ev))
                    />
                </div>
                <button
                    type="submit"
                    class="w-full rounded-lg bg-indigo-600 px-4 py-2.5 font-semibold text-white \
                           transition-colors hover:bg-indigo-700 focus:outline-none focus:ring-2 \
                           focus:ring-indigo-500 focus:ring-offset-2"
                >
                    "Login"
                </button>
            </form>
        </section>
    }
}

/// `input` handler of the username/email field.
pub fn input_identifier(fields: RwSignal<FormFieldState>, value: String) {
    fields.update(|f| f.set_identifier(value));
}

/// `input` handler of the password field.
pub fn input_secret(fields: RwSignal<FormFieldState>, value: String) {
    fields.update(|f| f.set_secret(value));
}

/// `submit` handler of the form.
///
/// `prevent_default` cancels the browser's navigation and always runs first,
/// whether or not a callback is present.
pub fn handle_submit(
    prevent_default: impl FnOnce(),
    fields: RwSignal<FormFieldState>,
    reset: ResetPolicy,
    on_submit: Option<Callback<SubmissionPayload>>,
) {
    prevent_default();
    submit_form(fields, reset, on_submit);
}

/// Forward the current field values to `on_submit`, then apply `reset`.
///
/// Without a callback only the reset happens. A panicking callback is not
/// caught.
pub fn submit_form(
    fields: RwSignal<FormFieldState>,
    reset: ResetPolicy,
    on_submit: Option<Callback<SubmissionPayload>>,
) {
    let Some(payload) = fields.try_update(|f| f.submit(reset)) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    log::debug!("login form submitted: {payload:?}");

    if let Some(on_submit) = on_submit {
        on_submit.run(payload);
    }
}
