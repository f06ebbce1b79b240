//! Catalog tools in the instructor control room
//!
//! Launch and edit batches, manage a batch's study material and edit the
//! landing-page banners. Every save goes through the app context; drafts stay
//! local until they validate.

use leptos::prelude::*;

use crate::core::forms::{BatchDraft, MaterialDraft, SiteConfigDraft};
use crate::core::{Batch, MaterialCategory};
use crate::ui::context::use_app_context;
use crate::ui::form::{ErrorNote, FormField, draft_field};
use crate::ui::icon::{Icon, icons};

fn batch_form(draft: RwSignal<BatchDraft>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-3">
            {draft_field(draft, "Batch name", "Physics Excellence 2025", |d| &d.name, |d| &mut d.name)}
            {draft_field(draft, "Subject", "Physics", |d| &d.subject, |d| &mut d.subject)}
            {draft_field(draft, "Teacher", "Dr. Sarah Smith", |d| &d.teacher, |d| &mut d.teacher)}
            {draft_field(draft, "Next class", "Today, 4:00 PM", |d| &d.next_class, |d| &mut d.next_class)}
            {draft_field(draft, "Price (₹)", "4999", |d| &d.price, |d| &mut d.price)}
            {draft_field(draft, "Validity", "12 Months", |d| &d.validity, |d| &mut d.validity)}
            {draft_field(draft, "Progress (%)", "0", |d| &d.progress, |d| &mut d.progress)}
            {draft_field(draft, "Tag", "NEW", |d| &d.tag, |d| &mut d.tag)}
            <div class="md:col-span-2">
                {draft_field(draft, "Cover image URL", "https://...", |d| &d.image, |d| &mut d.image)}
            </div>
        </div>
    }
}

/// Batch list with edit and launch forms plus the materials of the selection
#[component]
pub fn BatchManager(
    /// Batch selected when the panel opens
    initial_batch_id: String,
) -> impl IntoView {
    let ctx = use_app_context();
    let batches = Memo::new(move |_| ctx.batches());
    let selected_id = RwSignal::new(initial_batch_id);
    let selected = Memo::new(move |_| selected_id.with(|id| ctx.batch(id)));

    let edit_draft = RwSignal::new(
        selected
            .get_untracked()
            .map(|b| BatchDraft::from_batch(&b))
            .unwrap_or_default(),
    );
    let (edit_error, set_edit_error) = signal(None::<String>);
    let (edit_saved, set_edit_saved) = signal(false);

    let launch_draft = RwSignal::new(BatchDraft::default());
    let (launch_error, set_launch_error) = signal(None::<String>);
    let (show_launch, set_show_launch) = signal(false);

    let select = move |batch: &Batch| {
        selected_id.set(batch.id.clone());
        edit_draft.set(BatchDraft::from_batch(batch));
        set_edit_error.set(None);
        set_edit_saved.set(false);
    };

    let save_edit = move || {
        let Some(current) = selected.get_untracked() else {
            return;
        };
        let result = edit_draft
            .with_untracked(|d| d.apply_to(&current))
            .map_err(|e| e.to_string())
            .and_then(|batch| ctx.update_batch(batch).map_err(|e| e.to_string()));
        match result {
            Ok(()) => {
                set_edit_error.set(None);
                set_edit_saved.set(true);
            }
            Err(err) => {
                set_edit_error.set(Some(err));
                set_edit_saved.set(false);
            }
        }
    };

    let launch = move || {
        let result = launch_draft
            .with_untracked(BatchDraft::into_batch)
            .map_err(|e| e.to_string())
            .and_then(|batch| {
                let launched = batch.clone();
                ctx.add_batch(batch).map(|_| launched).map_err(|e| e.to_string())
            });
        match result {
            Ok(batch) => {
                launch_draft.set(BatchDraft::default());
                set_launch_error.set(None);
                set_show_launch.set(false);
                select(&batch);
            }
            Err(err) => set_launch_error.set(Some(err)),
        }
    };

    view! {
        <section class="bg-white p-6 rounded-[2rem] border border-slate-100 shadow-sm space-y-5">
            <div class="flex items-center justify-between">
                <h2 class="font-bold text-lg text-slate-800">"Batches"</h2>
                <button
                    class="px-3 py-1.5 rounded-lg bg-blue-600 text-white text-xs font-bold flex items-center gap-1"
                    on:click=move |_| set_show_launch.update(|s| *s = !*s)
                >
                    <Icon name=icons::PLUS class="w-3 h-3 invert"/>
                    "Launch New Batch"
                </button>
            </div>

            <Show when=move || show_launch.get()>
                <div class="border border-blue-100 bg-blue-50/40 rounded-2xl p-4 space-y-3">
                    {batch_form(launch_draft)}
                    <ErrorNote error=launch_error/>
                    <button class="px-4 py-2 rounded-lg bg-blue-600 text-white text-sm font-bold" on:click=move |_| launch()>
                        "Launch Batch"
                    </button>
                </div>
            </Show>

            <div class="flex flex-wrap gap-2">
                <For
                    each=move || batches.get()
                    key=|b| (b.id.clone(), b.name.clone())
                    children=move |batch| {
                        let id = batch.id.clone();
                        view! {
                            <button
                                class=move || {
                                    if selected_id.with(|s| *s == id) {
                                        "px-3 py-1.5 rounded-full text-xs font-bold bg-slate-900 text-white"
                                    } else {
                                        "px-3 py-1.5 rounded-full text-xs font-bold bg-slate-100 text-slate-600 hover:bg-slate-200"
                                    }
                                }
                                on:click=move |_| select(&batch)
                            >
                                {batch.name.clone()}
                            </button>
                        }
                    }
                />
            </div>

            {move || selected.get().map(|batch| view! {
                <div class="space-y-3">
                    <p class="text-xs text-slate-400 flex items-center gap-1">
                        <Icon name=icons::EDIT class="w-3 h-3"/>
                        "Editing " <span class="font-bold text-slate-700">{batch.name.clone()}</span>
                        " · " {batch.students_count} " students · ₹" {batch.price}
                    </p>
                    {batch_form(edit_draft)}
                    <ErrorNote error=edit_error/>
                    <div class="flex items-center gap-3">
                        <button class="px-4 py-2 rounded-lg bg-slate-900 text-white text-sm font-bold" on:click=move |_| save_edit()>
                            "Save Changes"
                        </button>
                        <Show when=move || edit_saved.get()>
                            <span class="text-xs text-green-600 font-bold">"Saved"</span>
                        </Show>
                    </div>
                </div>
            })}
        </section>

        {move || selected.get().map(|batch| view! { <MaterialManager batch=batch/> })}
    }
}

/// Study material of one batch
#[component]
fn MaterialManager(batch: Batch) -> impl IntoView {
    let ctx = use_app_context();
    let draft = RwSignal::new(MaterialDraft::default());
    let (error, set_error) = signal(None::<String>);
    let batch_id = StoredValue::new(batch.id.clone());

    let add = move || {
        let result = batch_id.with_value(|id| {
            draft
                .with_untracked(|d| d.validate(id))
                .map_err(|e| e.to_string())
                .and_then(|material| ctx.add_material(id, material).map_err(|e| e.to_string()))
        });
        match result {
            Ok(()) => {
                draft.set(MaterialDraft::default());
                set_error.set(None);
            }
            Err(err) => set_error.set(Some(err)),
        }
    };

    let rows = batch
        .materials
        .iter()
        .map(|material| {
            let material_id = material.id.clone();
            view! {
                <div class="flex items-center justify-between py-2">
                    <div>
                        <p class="text-sm font-semibold text-slate-800">{material.title.clone()}</p>
                        <p class="text-xs text-slate-400">
                            {material.category.label()} " · " {material.file_count} " files"
                        </p>
                    </div>
                    <button
                        class="p-2 text-slate-400 hover:text-red-500"
                        title="Delete material"
                        on:click=move |_| batch_id.with_value(|id| ctx.delete_material(id, &material_id))
                    >
                        <Icon name=icons::TRASH class="w-4 h-4"/>
                    </button>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="bg-white p-6 rounded-[2rem] border border-slate-100 shadow-sm space-y-4">
            <h2 class="font-bold text-lg text-slate-800">
                "Study Material · " {batch.name.clone()}
            </h2>
            {if batch.materials.is_empty() {
                view! { <p class="text-sm text-slate-400">"No material uploaded yet."</p> }.into_any()
            } else {
                view! { <div class="divide-y divide-slate-100">{rows}</div> }.into_any()
            }}

            <div class="grid grid-cols-1 md:grid-cols-3 gap-3 items-end">
                {draft_field(draft, "Title", "Electrostatics Notes", |d| &d.title, |d| &mut d.title)}
                <label class="flex flex-col gap-1">
                    <span class="text-[11px] font-bold uppercase tracking-wider text-slate-400">"Category"</span>
                    <select
                        class="border border-slate-200 rounded-lg px-3 py-2 text-sm"
                        on:change=move |e| {
                            if let Some(category) = MaterialCategory::from_label(&event_target_value(&e)) {
                                draft.update(|d| d.category = category);
                            }
                        }
                    >
                        {MaterialCategory::ALL
                            .into_iter()
                            .map(|c| view! {
                                <option value=c.label() selected=move || draft.with(|d| d.category == c)>
                                    {c.label()}
                                </option>
                            })
                            .collect_view()}
                    </select>
                </label>
                {draft_field(draft, "Files", "1", |d| &d.file_count, |d| &mut d.file_count)}
            </div>
            <ErrorNote error=error/>
            <button class="px-4 py-2 rounded-lg bg-slate-900 text-white text-sm font-bold" on:click=move |_| add()>
                "Add Material"
            </button>
        </section>
    }
}

/// Landing-page banner editor; saving replaces the whole configuration
#[component]
pub fn SiteConfigEditor() -> impl IntoView {
    let ctx = use_app_context();
    let draft = RwSignal::new(SiteConfigDraft::from(&ctx.state.with_untracked(|s| s.site_config().clone())));
    let (error, set_error) = signal(None::<String>);
    let (saved, set_saved) = signal(false);

    let save = move || match draft.with_untracked(SiteConfigDraft::validate) {
        Ok(config) => {
            draft.set(SiteConfigDraft::from(&config));
            ctx.update_site_config(config);
            set_error.set(None);
            set_saved.set(true);
        }
        Err(err) => {
            set_error.set(Some(err.to_string()));
            set_saved.set(false);
        }
    };

    let reset = move || {
        draft.set(SiteConfigDraft::from(&ctx.site_config()));
        set_error.set(None);
        set_saved.set(false);
    };

    view! {
        <section class="bg-white p-6 rounded-[2rem] border border-slate-100 shadow-sm space-y-4">
            <h2 class="font-bold text-lg text-slate-800">"Landing Page Banners"</h2>
            <FormField
                label="Hero banner"
                input_type="url"
                placeholder="https://..."
                value=Signal::derive(move || draft.with(|d| d.hero_banner.clone()))
                on_input=Callback::new(move |v: String| {
                    set_saved.set(false);
                    draft.update(|d| d.hero_banner = v);
                })
            />

            <div class="space-y-2">
                <span class="text-[11px] font-bold uppercase tracking-wider text-slate-400">"Trending banners"</span>
                {move || {
                    let count = draft.with(|d| d.trending_banners.len());
                    (0..count)
                        .map(|i| view! {
                            <div class="flex items-center gap-2">
                                <input
                                    type="url"
                                    class="flex-1 border border-slate-200 rounded-lg px-3 py-2 text-sm"
                                    placeholder="https://..."
                                    prop:value=move || draft.with(|d| d.trending_banners.get(i).cloned().unwrap_or_default())
                                    on:input=move |e| {
                                        set_saved.set(false);
                                        draft.update(|d| d.set_banner(i, event_target_value(&e)));
                                    }
                                />
                                <button
                                    class="p-2 text-slate-400 hover:text-red-500"
                                    title="Remove banner"
                                    on:click=move |_| draft.update(|d| d.remove_banner(i))
                                >
                                    <Icon name=icons::TRASH class="w-4 h-4"/>
                                </button>
                            </div>
                        })
                        .collect_view()
                }}
                <button
                    class="text-xs font-bold text-blue-600 flex items-center gap-1"
                    on:click=move |_| draft.update(SiteConfigDraft::add_banner)
                >
                    <Icon name=icons::PLUS class="w-3 h-3"/>
                    "Add banner"
                </button>
            </div>

            <ErrorNote error=error/>
            <div class="flex items-center gap-3">
                <button class="px-4 py-2 rounded-lg bg-slate-900 text-white text-sm font-bold" on:click=move |_| save()>
                    "Save Banners"
                </button>
                <button class="px-4 py-2 rounded-lg border text-sm font-bold text-slate-600" on:click=move |_| reset()>
                    "Reset"
                </button>
                <Show when=move || saved.get()>
                    <span class="text-xs text-green-600 font-bold">"Saved"</span>
                </Show>
            </div>
        </section>
    }
}
