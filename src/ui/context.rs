//! App context shared by every screen
//!
//! Wraps the reactive [`AppState`] so that views only ever change global state
//! through the methods below. A transition that the state rejects is logged
//! and otherwise ignored, which leaves the screen exactly as it was.

use leptos::logging::warn;
use leptos::prelude::*;

use crate::core::{
    AppAction, AppState, AppView, Batch, SiteConfig, StateError, StudyMaterial, User, UserRole,
};

/// Handle to the application state
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Read-only for views; write through the methods on this type
    pub state: RwSignal<AppState>,
}

impl AppContext {
    /// Apply a transition. Rejected transitions are logged.
    pub fn dispatch(&self, action: AppAction) -> Result<(), StateError> {
        let result = self
            .state
            .try_update(|state| state.apply(action))
            .unwrap_or(Ok(()));
        if let Err(err) = &result {
            warn!("Ignored state change: {}", err);
        }
        result
    }

    pub fn login(&self, role: UserRole) {
        let _ = self.dispatch(AppAction::Login(role));
    }

    pub fn logout(&self) {
        let _ = self.dispatch(AppAction::Logout);
    }

    pub fn navigate(&self, view: AppView) {
        let _ = self.dispatch(AppAction::Navigate(view));
    }

    /// Brand logo target
    pub fn go_home(&self) {
        let home = self.state.with_untracked(|s| s.home_view());
        self.navigate(home);
    }

    pub fn join_live(&self, batch: Batch) {
        let _ = self.dispatch(AppAction::JoinLive(batch));
    }

    pub fn add_batch(&self, batch: Batch) -> Result<(), StateError> {
        self.dispatch(AppAction::AddBatch(batch))
    }

    pub fn update_batch(&self, batch: Batch) -> Result<(), StateError> {
        self.dispatch(AppAction::UpdateBatch(batch))
    }

    pub fn add_material(&self, batch_id: &str, material: StudyMaterial) -> Result<(), StateError> {
        self.dispatch(AppAction::AddMaterial {
            batch_id: batch_id.to_string(),
            material,
        })
    }

    pub fn delete_material(&self, batch_id: &str, material_id: &str) {
        let _ = self.dispatch(AppAction::DeleteMaterial {
            batch_id: batch_id.to_string(),
            material_id: material_id.to_string(),
        });
    }

    pub fn update_site_config(&self, config: SiteConfig) {
        let _ = self.dispatch(AppAction::UpdateSiteConfig(config));
    }

    pub fn broadcast(&self, message: Option<String>) {
        let _ = self.dispatch(AppAction::Broadcast(message));
    }

    // Tracked reads

    pub fn view(&self) -> AppView {
        self.state.with(|s| s.view())
    }

    pub fn user(&self) -> Option<User> {
        self.state.with(|s| s.user().cloned())
    }

    pub fn batches(&self) -> Vec<Batch> {
        self.state.with(|s| s.batches().to_vec())
    }

    pub fn batch(&self, batch_id: &str) -> Option<Batch> {
        self.state.with(|s| s.batch(batch_id).cloned())
    }

    pub fn active_batch(&self) -> Option<Batch> {
        self.state.with(|s| s.active_batch().cloned())
    }

    pub fn announcement(&self) -> Option<String> {
        self.state.with(|s| s.announcement().map(str::to_string))
    }

    pub fn site_config(&self) -> SiteConfig {
        self.state.with(|s| s.site_config().clone())
    }
}

/// Provide the app context to the component tree
pub fn provide_app_context() -> AppContext {
    let ctx = AppContext {
        state: RwSignal::new(AppState::new()),
    };
    provide_context(ctx);
    ctx
}

/// Get the app context from the component tree
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
