//! Dashboard page component
//!
//! Signed-in home: greeting, stats, enrolled batches with "Join Live Now",
//! and the study material library. Students also get the AI tutor.

use leptos::prelude::*;

use crate::core::{Batch, DashboardTab, MaterialCategory, StudyMaterial, User, UserRole};
use crate::ui::ai_tutor_chat::AiTutorChat;
use crate::ui::context::use_app_context;
use crate::ui::icon::{Icon, icons};
use crate::ui::tabs::TabButton;

/// Dashboard page component
#[component]
pub fn DashboardPage(user: User) -> impl IntoView {
    let ctx = use_app_context();
    let batches = Memo::new(move |_| ctx.batches());
    let (tab, set_tab) = signal(DashboardTab::default());

    let material_total =
        Signal::derive(move || batches.with(|b| b.iter().map(Batch::material_count).sum::<usize>()));
    let batch_total = Signal::derive(move || batches.with(Vec::len));

    let tutor = match user.role {
        UserRole::Student => view! { <AiTutorChat user=user.clone()/> }.into_any(),
        UserRole::Admin => ().into_any(),
    };

    view! {
        <div class="relative flex-1 overflow-y-auto">
            <div class="p-6 md:p-10 max-w-7xl mx-auto w-full">
                <header class="mb-10 flex flex-col md:flex-row md:items-end justify-between gap-6">
                    <div>
                        <h1 class="text-3xl font-bold text-slate-900">
                            "Welcome back, " {user.name.clone()} "! 👋"
                        </h1>
                        <p class="text-slate-500 mt-1">
                            {match user.role {
                                UserRole::Student => "Pick a batch and join the live class.",
                                UserRole::Admin => "Open a batch to start teaching live.",
                            }}
                        </p>
                    </div>
                </header>

                // Stats Cards
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6 mb-12">
                    <StatCard label="Active Batches" icon="📚" color="bg-blue-500" value=batch_total/>
                    <StatCard label="Study Materials" icon="📝" color="bg-amber-500" value=material_total/>
                </div>

                <div class="flex items-center gap-2 mb-8">
                    <TabButton
                        label="My Batches"
                        active=Signal::derive(move || tab.get() == DashboardTab::Batches)
                        on_select=Callback::new(move |_| set_tab.set(DashboardTab::Batches))
                    />
                    <TabButton
                        label="Study Material"
                        active=Signal::derive(move || tab.get() == DashboardTab::StudyMaterial)
                        on_select=Callback::new(move |_| set_tab.set(DashboardTab::StudyMaterial))
                        badge=material_total
                    />
                </div>

                {move || match tab.get() {
                    DashboardTab::Batches => view! { <BatchGrid batches=batches/> }.into_any(),
                    DashboardTab::StudyMaterial => view! { <MaterialLibrary batches=batches/> }.into_any(),
                }}
            </div>

            {tutor}
        </div>
    }
}

#[component]
fn StatCard(
    label: &'static str,
    icon: &'static str,
    color: &'static str,
    #[prop(into)] value: Signal<usize>,
) -> impl IntoView {
    view! {
        <div class="bg-white p-6 rounded-3xl border border-slate-100 shadow-sm flex items-center gap-5">
            <div class=format!("w-12 h-12 rounded-2xl {} flex items-center justify-center text-xl text-white", color)>
                {icon}
            </div>
            <div>
                <p class="text-xs font-bold text-slate-400 uppercase tracking-wider">{label}</p>
                <p class="text-2xl font-black text-slate-800">{move || value.get()}</p>
            </div>
        </div>
    }
}

#[component]
fn BatchGrid(batches: Memo<Vec<Batch>>) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8 mb-20">
            <For
                each=move || batches.get()
                key=|batch| (batch.id.clone(), batch.name.clone(), batch.next_class.clone(), batch.image.clone())
                children=move |batch| {
                    let join = batch.clone();
                    view! {
                        <div class="bg-white rounded-[2rem] border border-slate-100 shadow-sm hover:shadow-xl transition-all overflow-hidden">
                            <div class="relative h-48 overflow-hidden">
                                <img src=batch.image.clone() class="w-full h-full object-cover" alt=batch.name.clone()/>
                                <div class="absolute top-4 left-4 flex gap-2">
                                    <span class="bg-white/90 px-3 py-1 rounded-full text-xs font-bold text-slate-800 shadow-sm">
                                        {batch.subject.clone()}
                                    </span>
                                    {batch.tag.clone().map(|tag| view! {
                                        <span class="bg-amber-400 px-3 py-1 rounded-full text-xs font-black text-slate-900 shadow-sm">
                                            {tag}
                                        </span>
                                    })}
                                </div>
                                <div class="absolute inset-0 bg-gradient-to-t from-black/60 to-transparent"></div>
                                <div class="absolute bottom-4 left-4 text-white">
                                    <p class="text-sm font-medium opacity-80">{batch.teacher.clone()}</p>
                                    <h3 class="text-lg font-bold">{batch.name.clone()}</h3>
                                </div>
                            </div>
                            <div class="p-6">
                                <div class="flex items-center justify-between mb-4">
                                    <div class="flex items-center gap-2 text-slate-500">
                                        <Icon name=icons::USERS class="w-4 h-4"/>
                                        <span class="text-xs font-semibold">{batch.students_count} " Students"</span>
                                    </div>
                                    <span class="text-xs font-bold text-blue-600 bg-blue-50 px-3 py-1 rounded-full">
                                        {batch.next_class.clone()}
                                    </span>
                                </div>
                                <div class="h-2 bg-slate-100 rounded-full mb-6 overflow-hidden">
                                    <div class="h-full bg-blue-600" style=format!("width: {}%", batch.progress)></div>
                                </div>
                                <button
                                    class="w-full py-4 bg-slate-900 text-white rounded-2xl font-bold hover:bg-blue-600 transition-colors flex items-center justify-center gap-2"
                                    on:click=move |_| ctx.join_live(join.clone())
                                >
                                    "Join Live Now"
                                    <Icon name=icons::VIDEO class="w-5 h-5"/>
                                </button>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[component]
fn MaterialLibrary(batches: Memo<Vec<Batch>>) -> impl IntoView {
    let (filter, set_filter) = signal(None::<MaterialCategory>);

    let materials = Memo::new(move |_| {
        let selected = filter.get();
        batches.with(|batches| {
            batches
                .iter()
                .flat_map(|b| b.materials.iter().map(move |m| (b.name.clone(), m.clone())))
                .filter(|(_, m)| selected.is_none_or(|c| m.category == c))
                .collect::<Vec<(String, StudyMaterial)>>()
        })
    });

    view! {
        <div class="mb-20">
            <div class="flex flex-wrap gap-2 mb-6">
                <TabButton
                    label="All"
                    active=Signal::derive(move || filter.get().is_none())
                    on_select=Callback::new(move |_| set_filter.set(None))
                />
                {MaterialCategory::ALL
                    .into_iter()
                    .map(|category| view! {
                        <TabButton
                            label=category.label()
                            active=Signal::derive(move || filter.get() == Some(category))
                            on_select=Callback::new(move |_| set_filter.set(Some(category)))
                            badge=Signal::derive(move || {
                                batches.with(|batches| {
                                    batches
                                        .iter()
                                        .map(|b| b.materials_by_category(category).count())
                                        .sum::<usize>()
                                })
                            })
                        />
                    })
                    .collect_view()}
            </div>

            <Show
                when=move || !materials.with(Vec::is_empty)
                fallback=|| view! {
                    <p class="text-slate-400 text-center py-16">"No study material in this category yet."</p>
                }
            >
                <div class="bg-white rounded-3xl border border-slate-100 divide-y divide-slate-100">
                    <For
                        each=move || materials.get()
                        key=|(_, m)| m.id.clone()
                        children=move |(batch_name, material)| {
                            view! {
                                <div class="flex items-center justify-between px-6 py-4">
                                    <div class="flex items-center gap-4">
                                        <Icon name=icons::BOOK class="w-5 h-5"/>
                                        <div>
                                            <p class="font-semibold text-slate-800">{material.title.clone()}</p>
                                            <p class="text-xs text-slate-400">{batch_name}</p>
                                        </div>
                                    </div>
                                    <div class="flex items-center gap-3">
                                        <span class="text-xs font-bold px-2 py-1 rounded bg-slate-100 text-slate-600">
                                            {material.category.label()}
                                        </span>
                                        <span class="text-xs text-slate-500">{material.file_count} " files"</span>
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
