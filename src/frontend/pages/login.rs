//! Login page with the credential form.

use crate::backend::services::credentials;
use dioxus::prelude::*;
use dioxus_router::navigator;

const MIN_PASSWORD_LEN: usize = 8;

fn validate_email(email: &str) -> Option<&'static str> {
    if email.is_empty() {
        return Some("Enter your e-mail address");
    }
    let well_formed = email.split_once('@').is_some_and(|(local, domain)| {
        !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
    });
    if !well_formed {
        return Some("Enter a valid e-mail address");
    }
    None
}

fn validate_password(password: &str) -> Option<&'static str> {
    if password.len() < MIN_PASSWORD_LEN {
        return Some("Password must be at least 8 characters");
    }
    None
}

#[component]
pub fn LoginPage() -> Element {
    let nav = navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut email_error = use_signal(|| None::<&'static str>);
    let mut password_error = use_signal(|| None::<&'static str>);
    let mut form_error = use_signal(|| None::<&'static str>);
    let mut submitting = use_signal(|| false);

    let mut submit = move || {
        if *submitting.peek() {
            return;
        }
        let email_value = email.peek().clone();
        let password_value = password.peek().clone();

        email_error.set(validate_email(&email_value));
        password_error.set(validate_password(&password_value));
        form_error.set(None);
        if email_error.peek().is_some() || password_error.peek().is_some() {
            return;
        }

        submitting.set(true);
        spawn(async move {
            match credentials::sign_in(&email_value, &password_value).await {
                Ok(true) => {
                    nav.replace("/");
                }
                Ok(false) => {
                    form_error.set(Some("Invalid e-mail or password"));
                    submitting.set(false);
                }
                Err(e) => {
                    log::error!("Sign-in failed: {e}");
                    form_error.set(Some("Could not reach the sign-in service"));
                    submitting.set(false);
                }
            }
        });
    };

    rsx! {
        div {
            class: "login",
            form {
                class: "login-form",
                onsubmit: move |e| {
                    e.prevent_default();
                    submit();
                },
                h2 { "Sign in to your account" }
                p { class: "login-subtitle", "Welcome back!" }

                label {
                    class: "login-field",
                    "E-mail"
                    input {
                        r#type: "email",
                        value: "{email}",
                        placeholder: "Enter your e-mail address",
                        oninput: move |e| {
                            email.set(e.value());
                            email_error.set(None);
                            form_error.set(None);
                        },
                    }
                }
                if let Some(message) = email_error() {
                    p { class: "field-error", "{message}" }
                }

                label {
                    class: "login-field",
                    "Password"
                    input {
                        r#type: "password",
                        value: "{password}",
                        placeholder: "Enter your password",
                        oninput: move |e| {
                            password.set(e.value());
                            password_error.set(None);
                            form_error.set(None);
                        },
                    }
                }
                if let Some(message) = password_error() {
                    p { class: "field-error", "{message}" }
                }

                if let Some(message) = form_error() {
                    p { class: "form-error", "{message}" }
                }

                button {
                    r#type: "submit",
                    class: "login-submit",
                    disabled: submitting(),
                    if submitting() { "Signing in..." } else { "Sign in" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_credentials() {
        assert_eq!(validate_email("user@example.com"), None);
        assert_eq!(validate_password("longenough"), None);
    }

    #[test]
    fn rejects_empty_email() {
        assert!(validate_email("").is_some());
    }

    #[test]
    fn rejects_malformed_emails() {
        for email in ["plainaddress", "@example.com", "user@nodot", "user@.com"] {
            assert!(validate_email(email).is_some(), "{email} should be rejected");
        }
    }

    #[test]
    fn rejects_short_passwords() {
        assert!(validate_password("seven77").is_some());
        assert_eq!(validate_password("eight888"), None);
    }
}
