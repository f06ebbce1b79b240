use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};

/// Labelled text input bound to a value signal
#[component]
pub fn FormField(
    /// Field label text
    label: &'static str,
    /// Input type (text, number, url)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="flex flex-col gap-1">
            <span class="text-[11px] font-bold uppercase tracking-wider text-slate-400">{label}</span>
            <input
                type=input_type
                class="border border-slate-200 rounded-lg px-3 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-blue-100"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </label>
    }
}

/// [`FormField`] editing one string field of a draft held in a signal
pub fn draft_field<T: Send + Sync + 'static>(
    draft: RwSignal<T>,
    label: &'static str,
    placeholder: &'static str,
    get: fn(&T) -> &String,
    get_mut: fn(&mut T) -> &mut String,
) -> impl IntoView {
    view! {
        <FormField
            label=label
            placeholder=placeholder
            value=Signal::derive(move || draft.with(|d| get(d).clone()))
            on_input=Callback::new(move |v: String| draft.update(|d| *get_mut(d) = v))
        />
    }
}

/// Validation message under a form, hidden while `error` is `None`
#[component]
pub fn ErrorNote(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    move || {
        error.get().map(|err| {
            view! {
                <div class="flex items-center gap-2 text-sm text-red-600">
                    <Icon name=icons::ALERT_CIRCLE class="w-4 h-4"/>
                    <span>{err}</span>
                </div>
            }
        })
    }
}
