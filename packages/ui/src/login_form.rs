use dioxus::prelude::*;

/// Username/password form. Submits on the button or on Enter in either field.
#[component]
pub fn LoginForm(
    on_login: EventHandler<(String, String)>,
    #[props(default)] error: Option<String>,
) -> Element {
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);

    let submit = move || on_login.call((username(), password()));

    rsx! {
        div {
            class: "login-card",
            h1 { class: "login-title", "Sign in" }

            div {
                class: "form-field",
                label { r#for: "login-username", "Username" }
                input {
                    id: "login-username",
                    r#type: "text",
                    autocomplete: "username",
                    value: username(),
                    oninput: move |evt: FormEvent| username.set(evt.value()),
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Enter {
                            submit();
                        }
                    },
                }
            }

            div {
                class: "form-field",
                label { r#for: "login-password", "Password" }
                input {
                    id: "login-password",
                    r#type: "password",
                    autocomplete: "current-password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Enter {
                            submit();
                        }
                    },
                }
            }

            if let Some(message) = error {
                p { class: "login-error", "{message}" }
            }

            button {
                class: "primary login-submit",
                onclick: move |_| submit(),
                "Login"
            }
        }
    }
}
