use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::core::Screen;
use crate::ui::pages::{AdminPanel, DashboardPage, LandingPage, LiveClassRoom, NotFoundPage};
use crate::ui::{Navbar, provide_app_context, use_app_context};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // Application state shared by every screen
    provide_app_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/nexttoppers.css"/>

        <Title text="NextToppers - Learn Live from India's Best Teachers"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=Home/>
            </Routes>
        </Router>
    }
}

/// Identity of the current screen. Edits to the active batch keep the key
/// stable so an open room keeps its local chat and polls.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ScreenKey {
    Landing,
    Dashboard(String),
    LiveClass(String, String),
    AdminPanel(String, String),
}

impl From<&Screen> for ScreenKey {
    fn from(screen: &Screen) -> Self {
        match screen {
            Screen::Landing => Self::Landing,
            Screen::Dashboard(user) => Self::Dashboard(user.id.clone()),
            Screen::LiveClass { user, batch } => Self::LiveClass(user.id.clone(), batch.id.clone()),
            Screen::AdminPanel { user, batch } => {
                Self::AdminPanel(user.id.clone(), batch.id.clone())
            }
        }
    }
}

/// Renders whichever screen the application state resolves to
#[component]
fn Home() -> impl IntoView {
    let ctx = use_app_context();
    let key = Memo::new(move |_| ctx.state.with(|s| ScreenKey::from(&s.screen())));

    view! {
        <div class="min-h-screen bg-slate-50 text-slate-900">
            <Navbar/>
            {move || {
                key.track();
                match ctx.state.with_untracked(|s| s.screen()) {
                    Screen::Landing => view! { <LandingPage/> }.into_any(),
                    Screen::Dashboard(user) => view! { <DashboardPage user=user/> }.into_any(),
                    Screen::LiveClass { user, batch } => {
                        view! { <LiveClassRoom user=user batch=batch/> }.into_any()
                    }
                    Screen::AdminPanel { user, batch } => {
                        view! { <AdminPanel user=user batch=batch/> }.into_any()
                    }
                }
            }}
        </div>
    }
}
