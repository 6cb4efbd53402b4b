//! Signup form component
//!
//! Patient or hospital account creation. Hospital accounts get five extra
//! fields; their values survive switching the role back and forth but are
//! only submitted for hospitals.

use leptos::prelude::*;

use super::context::{auth_client, begin_submission, run_submission, use_auth_config};
use crate::core::FormStatus;
use crate::core::auth::{Department, Role, SignupDraft, StaffPosition};
use crate::ui::common::{ErrorMessage, FormField, PasswordField, SelectField, SuccessMessage};
use crate::ui::icon::{Icon, icons};

const SIGNUP_SUCCESS: &str = "Account created successfully! Redirecting...";

/// Patient / hospital toggle
#[component]
fn RoleSelector(role: RwSignal<Role>) -> impl IntoView {
    let option = move |value: Role, icon: &'static str, title: &'static str, hint: &'static str| {
        view! {
            <button
                type="button"
                class="flex-1 p-3 rounded-lg border transition-colors text-left"
                class:border-accent-primary=move || role.get() == value
                class:bg-theme-secondary=move || role.get() == value
                class:border-theme=move || role.get() != value
                aria-pressed=move || (role.get() == value).to_string()
                on:click=move |_| role.set(value)
            >
                <div class="flex items-center gap-2">
                    <Icon name=icon class="h-5 w-5" />
                    <span class="font-semibold text-theme-primary">{title}</span>
                </div>
                <p class="mt-1 text-xs text-theme-secondary">{hint}</p>
            </button>
        }
    };

    view! {
        <div class="flex gap-3">
            {option(Role::Patient, icons::HEART, "Patient", "Manage your health")}
            {option(Role::Hospital, icons::BUILDING, "Hospital", "Manage patients")}
        </div>
    }
}

/// Signup form component
#[component]
pub fn SignupForm(
    /// Callback to switch to the login form
    #[prop(optional, into)]
    on_login_click: Option<Callback<()>>,
) -> impl IntoView {
    let config = StoredValue::new(use_auth_config());
    let status = RwSignal::new(FormStatus::default());

    // Form state
    let role = RwSignal::new(Role::default());
    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());

    // Hospital-only fields
    let registration_number = RwSignal::new(String::new());
    let department = RwSignal::new(String::new());
    let license_number = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let staff_position = RwSignal::new(String::new());

    let is_hospital = move || role.get().is_hospital();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        if !begin_submission(status) {
            return;
        }

        let draft = SignupDraft {
            role: role.get_untracked(),
            full_name: full_name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
            registration_number: registration_number.get_untracked(),
            department: department.get_untracked(),
            license_number: license_number.get_untracked(),
            address: address.get_untracked(),
            staff_position: staff_position.get_untracked(),
        };
        let client = auth_client(config.get_value());

        run_submission(status, Some(SIGNUP_SUCCESS), async move {
            client.signup(&draft).await
        });
    };

    let department_options = Department::ALL
        .iter()
        .map(|d| (d.code(), d.label()))
        .collect::<Vec<_>>();
    let position_options = StaffPosition::ALL
        .iter()
        .map(|p| (p.code(), p.label()))
        .collect::<Vec<_>>();

    view! {
        <form on:submit=on_submit class="space-y-5" novalidate=true>
            // Header
            <div class="text-center">
                <h2 class="text-3xl font-bold text-theme-primary">
                    "Get Started"
                </h2>
                <p class="mt-2 text-sm text-theme-secondary">
                    "Create your PulseSync account"
                </p>
            </div>

            <RoleSelector role=role />

            <ErrorMessage error=Signal::derive(move || status.get().error) />
            <SuccessMessage message=Signal::derive(move || status.get().success) />

            <FormField
                label=Signal::derive(move || role.get().name_label().to_string())
                name="full_name"
                icon=icons::USER
                autocomplete="name"
                placeholder=Signal::derive(move || {
                    let example = if is_hospital() { "City Hospital" } else { "John Doe" };
                    example.to_string()
                })
                value=full_name
                on_input=move |value: String| full_name.set(value)
            />

            <FormField
                label="Email Address"
                name="email"
                icon=icons::MAIL
                input_type="email"
                autocomplete="email"
                placeholder="you@example.com"
                value=email
                on_input=move |value: String| email.set(value)
            />

            <Show when=is_hospital>
                <FormField
                    label="Hospital Registration Number"
                    name="registration_number"
                    icon=icons::FILE_TEXT
                    placeholder="e.g., HR-2024-001"
                    value=registration_number
                    on_input=move |value: String| registration_number.set(value)
                />

                <SelectField
                    label="Department"
                    name="department"
                    icon=icons::STETHOSCOPE
                    placeholder="Select Department"
                    value=department
                    on_change=move |value: String| department.set(value)
                    options=department_options.clone()
                />

                <FormField
                    label="License Number"
                    name="license_number"
                    icon=icons::FILE_TEXT
                    placeholder="e.g., LIC-2024-123456"
                    value=license_number
                    on_input=move |value: String| license_number.set(value)
                />

                <FormField
                    label="Hospital Address"
                    name="address"
                    icon=icons::MAP_PIN
                    autocomplete="street-address"
                    placeholder="123 Medical Street, City"
                    value=address
                    on_input=move |value: String| address.set(value)
                />

                <SelectField
                    label="Staff Position"
                    name="staff_position"
                    icon=icons::BRIEFCASE
                    placeholder="Select Position"
                    value=staff_position
                    on_change=move |value: String| staff_position.set(value)
                    options=position_options.clone()
                />
            </Show>

            <PasswordField
                label="Password"
                name="password"
                autocomplete="new-password"
                placeholder="Create a strong password"
                value=password
                on_input=move |value: String| password.set(value)
            />

            <PasswordField
                label="Confirm Password"
                name="confirm_password"
                autocomplete="new-password"
                placeholder="Confirm your password"
                value=confirm_password
                on_input=move |value: String| confirm_password.set(value)
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
                                "Creating account..."
                            </span>
                        }.into_any()
                    } else {
                        view! { <span class="block">"Sign Up"</span> }.into_any()
                    }
                }}
            </button>

            // Login link
            <div class="text-center text-sm text-theme-secondary">
                "Already have an account? "
                <button
                    type="button"
                    class="text-accent-primary hover:text-accent-primary-hover font-medium"
                    on:click=move |_| {
                        if let Some(callback) = on_login_click.as_ref() {
                            callback.run(());
                        }
                    }
                >
                    "Sign in instead"
                </button>
            </div>
        </form>
    }
}
