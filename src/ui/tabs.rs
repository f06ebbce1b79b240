use leptos::prelude::*;

/// Pill-style tab button used by the dashboard and both live rooms
#[component]
pub fn TabButton(
    /// Display label
    label: &'static str,
    /// Whether this tab is the selected one
    #[prop(into)]
    active: Signal<bool>,
    /// Called when the tab is clicked
    on_select: Callback<()>,
    /// Optional counter shown after the label
    #[prop(optional, into)]
    badge: Option<Signal<usize>>,
) -> impl IntoView {
    view! {
        <button
            class=move || {
                if active.get() {
                    "px-4 py-2 rounded-xl text-sm font-bold bg-slate-900 text-white shadow"
                } else {
                    "px-4 py-2 rounded-xl text-sm font-bold text-slate-500 hover:bg-slate-100"
                }
            }
            on:click=move |_| on_select.run(())
        >
            {label}
            {badge.map(|count| view! {
                <span class="ml-2 text-xs opacity-70">"(" {move || count.get()} ")"</span>
            })}
        </button>
    }
}
