use leptos::prelude::*;

use crate::system::auth::context::{do_login, use_auth, use_roster};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (access_code, set_access_code) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);

    let (_, set_auth_state) = use_auth();
    let roster = use_roster();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let code = access_code.get();
        match do_login(&code, roster, set_auth_state) {
            Ok(()) => set_error_message.set(None),
            Err(e) => set_error_message.set(Some(e)),
        }
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Sales Monitor"</h1>
                <h2>"Masuk dengan kode akses"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="access-code">"Kode Akses"</label>
                        <input
                            type="password"
                            id="access-code"
                            placeholder="6 digit"
                            maxlength="6"
                            inputmode="numeric"
                            prop:value=move || access_code.get()
                            on:input=move |ev| set_access_code.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <button type="submit" class="btn-primary">
                        "Masuk"
                    </button>
                </form>
            </div>
        </div>
    }
}
