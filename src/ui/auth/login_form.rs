//! Login form component
//!
//! Email and password sign-in. On success the browser leaves this app for the
//! patient or hospital app.

use leptos::prelude::*;

use super::context::{auth_client, begin_submission, run_submission, use_auth_config};
use crate::core::FormStatus;
use crate::core::auth::{LoginDraft, is_valid_email};
use crate::ui::common::{ErrorMessage, FormField, PasswordField};
use crate::ui::icon::{Icon, icons};

/// Login form component
#[component]
pub fn LoginForm(
    /// Callback to switch to the signup form
    #[prop(optional, into)]
    on_signup_click: Option<Callback<()>>,
) -> impl IntoView {
    let config = StoredValue::new(use_auth_config());
    let status = RwSignal::new(FormStatus::default());

    // Form state
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    // Form validation
    let email_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);

    let validate_email = move || {
        let value = email.get_untracked();
        if value.trim().is_empty() {
            email_error.set(Some("Email is required".to_string()));
            false
        } else if !is_valid_email(value.trim()) {
            email_error.set(Some("Please enter a valid email".to_string()));
            false
        } else {
            email_error.set(None);
            true
        }
    };

    let validate_password = move || {
        if password.get_untracked().is_empty() {
            password_error.set(Some("Password is required".to_string()));
            false
        } else {
            password_error.set(None);
            true
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_valid = validate_email();
        let password_valid = validate_password();
        if !email_valid || !password_valid {
            return;
        }

        if !begin_submission(status) {
            return;
        }

        let draft = LoginDraft {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let client = auth_client(config.get_value());

        run_submission(status, None, async move { client.login(&draft).await });
    };

    view! {
        <form on:submit=on_submit class="space-y-5" novalidate=true>
            // Header
            <div class="text-center">
                <h2 class="text-3xl font-bold text-theme-primary">
                    "Welcome Back"
                </h2>
                <p class="mt-2 text-sm text-theme-secondary">
                    "Sign in to your PulseSync account"
                </p>
            </div>

            <ErrorMessage error=Signal::derive(move || status.get().error) />

            <FormField
                label="Email Address"
                name="email"
                icon=icons::MAIL
                input_type="email"
                autocomplete="email"
                placeholder="you@example.com"
                value=email
                on_input=move |value: String| {
                    email.set(value);
                    email_error.set(None);
                }
                on_blur=move |_: ()| { validate_email(); }
                error=email_error
            />

            <PasswordField
                label="Password"
                name="password"
                placeholder="Enter your password"
                value=password
                on_input=move |value: String| {
                    password.set(value);
                    password_error.set(None);
                }
                error=password_error
            />

            // Submit button
            <button
                type="submit"
                class="w-full py-3 px-4 bg-accent-primary hover:bg-accent-primary-hover
                       text-white font-bold rounded-lg mt-8
                       focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-accent-primary
                       disabled:opacity-70 disabled:cursor-not-allowed
                       transition-colors"
                disabled=move || status.get().is_busy()
            >
                {move || {
                    if status.get().is_busy() {
                        view! {
                            <span class="flex items-center justify-center">
                                <Icon name=icons::LOADER class="animate-spin -ml-1 mr-2 h-4 w-4 text-white" />
                                "Signing in..."
                            </span>
                        }.into_any()
                    } else {
                        view! { <span class="block">"Sign In"</span> }.into_any()
                    }
                }}
            </button>

            // Signup link
            <div class="text-center text-sm text-theme-secondary">
                "Don't have an account? "
                <button
                    type="button"
                    class="text-accent-primary hover:text-accent-primary-hover font-medium"
                    on:click=move |_| {
                        if let Some(callback) = on_signup_click.as_ref() {
                            callback.run(());
                        }
                    }
                >
                    "Create an account"
                </button>
            </div>
        </form>
    }
}
