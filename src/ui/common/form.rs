use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

const INPUT_CLASS: &str = "w-full pl-10 pr-3 py-2.5 bg-theme-secondary border border-theme rounded-lg
                           text-theme-primary placeholder-theme-tertiary
                           focus:outline-none focus:ring-2 focus:ring-accent-primary focus:border-transparent
                           transition-colors";

/// Inline field error below an input
#[component]
fn FieldError(error: Option<Signal<Option<String>>>) -> impl IntoView {
    move || {
        error.and_then(|e| e.get()).map(|err| {
            view! {
                <div class="mt-1 flex items-center text-sm text-theme-error">
                    <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                    <span>{err}</span>
                </div>
            }
        })
    }
}

/// Text input with a leading icon and label
#[component]
pub fn FormField(
    /// Field label text
    #[prop(into)]
    label: Signal<String>,
    /// Input id and name
    name: &'static str,
    /// Leading icon
    icon: &'static str,
    /// Input type (text, email, ...)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Browser autocomplete hint
    #[prop(default = "off")]
    autocomplete: &'static str,
    /// Placeholder text
    #[prop(into, default = Signal::derive(String::new))]
    placeholder: Signal<String>,
    /// Current value signal
    #[prop(into)]
    value: Signal<String>,
    /// Input event callback
    #[prop(into)]
    on_input: Callback<String>,
    /// Blur event callback
    #[prop(optional, into)]
    on_blur: Option<Callback<()>>,
    /// Optional error message to display
    #[prop(optional, into)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div>
            <label for=name class="block text-sm font-medium text-theme-primary mb-1">
                {move || label.get()}
            </label>
            <div class="relative">
                <span class="absolute inset-y-0 left-0 pl-3 flex items-center pointer-events-none">
                    <Icon name=icon class="h-4 w-4 opacity-60" />
                </span>
                <input
                    type=input_type
                    id=name
                    name=name
                    autocomplete=autocomplete
                    required=true
                    class=INPUT_CLASS
                    class:border-red-500=move || error.and_then(|e| e.get()).is_some()
                    placeholder=move || placeholder.get()
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                    on:blur=move |_| {
                        if let Some(callback) = on_blur.as_ref() {
                            callback.run(());
                        }
                    }
                />
            </div>
            <FieldError error=error />
        </div>
    }
}

/// Password input with a show/hide toggle
#[component]
pub fn PasswordField(
    /// Field label text
    label: &'static str,
    /// Input id and name
    name: &'static str,
    /// Browser autocomplete hint
    #[prop(default = "current-password")]
    autocomplete: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Current value signal
    #[prop(into)]
    value: Signal<String>,
    /// Input event callback
    #[prop(into)]
    on_input: Callback<String>,
    /// Optional error message to display
    #[prop(optional, into)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    let visible = RwSignal::new(false);

    view! {
        <div>
            <label for=name class="block text-sm font-medium text-theme-primary mb-1">
                {label}
            </label>
            <div class="relative">
                <span class="absolute inset-y-0 left-0 pl-3 flex items-center pointer-events-none">
                    <Icon name=icons::LOCK class="h-4 w-4 opacity-60" />
                </span>
                <input
                    type=move || if visible.get() { "text" } else { "password" }
                    id=name
                    name=name
                    autocomplete=autocomplete
                    required=true
                    placeholder=placeholder
                    class=INPUT_CLASS
                    class:border-red-500=move || error.and_then(|e| e.get()).is_some()
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                />
                <button
                    type="button"
                    class="absolute inset-y-0 right-0 pr-3 flex items-center text-theme-tertiary hover:text-theme-secondary"
                    on:click=move |_| visible.update(|v| *v = !*v)
                >
                    {move || {
                        if visible.get() {
                            view! { <Icon name=icons::EYE_CLOSED class="h-5 w-5" /> }.into_any()
                        } else {
                            view! { <Icon name=icons::EYE class="h-5 w-5" /> }.into_any()
                        }
                    }}
                </button>
            </div>
            <FieldError error=error />
        </div>
    }
}

/// Select field with an empty "choose one" option first
#[component]
pub fn SelectField(
    /// Field label text
    label: &'static str,
    /// Select id and name
    name: &'static str,
    /// Leading icon
    icon: &'static str,
    /// Text of the empty first option
    placeholder: &'static str,
    /// Current value signal
    #[prop(into)]
    value: Signal<String>,
    /// Change event callback
    #[prop(into)]
    on_change: Callback<String>,
    /// Options as (value, display_text) pairs
    options: Vec<(&'static str, &'static str)>,
) -> impl IntoView {
    view! {
        <div>
            <label for=name class="block text-sm font-medium text-theme-primary mb-1">
                {label}
            </label>
            <div class="relative">
                <span class="absolute inset-y-0 left-0 pl-3 flex items-center pointer-events-none">
                    <Icon name=icon class="h-4 w-4 opacity-60" />
                </span>
                <select
                    id=name
                    name=name
                    required=true
                    class=INPUT_CLASS
                    prop:value=move || value.get()
                    on:change=move |ev| on_change.run(event_target_value(&ev))
                >
                    <option value="">{placeholder}</option>
                    {options.into_iter().map(|(val, text)| {
                        view! {
                            <option value=val>{text}</option>
                        }
                    }).collect_view()}
                </select>
            </div>
        </div>
    }
}
