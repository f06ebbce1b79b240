//! Application state controller
//!
//! [`AppState`] is the single owner of cross-screen state: current view,
//! signed-in user, batch collection, active batch, broadcast announcement and
//! site banner configuration. Every transition goes through one of its
//! methods (or [`AppState::apply`] with an [`AppAction`]). A mutation that
//! references a missing id returns a [`StateError`] and leaves the state
//! exactly as it was.

use super::mock_data;
use super::models::{AppView, Batch, SiteConfig, StudyMaterial, User, UserRole};

/// Errors returned by state transitions
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("No user is signed in")]
    NotSignedIn,

    #[error("Batch not found: {0}")]
    BatchNotFound(String),

    #[error("Batch id already exists: {0}")]
    DuplicateBatchId(String),

    #[error("Material {material_id} not found in batch {batch_id}")]
    MaterialNotFound {
        batch_id: String,
        material_id: String,
    },
}

/// A state transition requested by a view
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    Login(UserRole),
    Logout,
    Navigate(AppView),
    JoinLive(Batch),
    AddBatch(Batch),
    UpdateBatch(Batch),
    AddMaterial {
        batch_id: String,
        material: StudyMaterial,
    },
    DeleteMaterial {
        batch_id: String,
        material_id: String,
    },
    UpdateSiteConfig(SiteConfig),
    Broadcast(Option<String>),
}

/// The screen that is actually rendered, with the data it needs
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Landing,
    Dashboard(User),
    LiveClass { user: User, batch: Batch },
    AdminPanel { user: User, batch: Batch },
}

/// Cross-screen application state
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    view: AppView,
    user: Option<User>,
    batches: Vec<Batch>,
    active_batch: Option<Batch>,
    announcement: Option<String>,
    site_config: SiteConfig,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Start-up state: landing page, seed batches, default banners
    pub fn new() -> Self {
        Self::with_batches(mock_data::seed_batches())
    }

    pub fn with_batches(batches: Vec<Batch>) -> Self {
        Self {
            view: AppView::Landing,
            user: None,
            batches,
            active_batch: None,
            announcement: None,
            site_config: mock_data::default_site_config(),
        }
    }

    pub fn view(&self) -> AppView {
        self.view
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn batches(&self) -> &[Batch] {
        &self.batches
    }

    pub fn batch(&self, batch_id: &str) -> Option<&Batch> {
        self.batches.iter().find(|b| b.id == batch_id)
    }

    pub fn active_batch(&self) -> Option<&Batch> {
        self.active_batch.as_ref()
    }

    pub fn announcement(&self) -> Option<&str> {
        self.announcement.as_deref()
    }

    pub fn site_config(&self) -> &SiteConfig {
        &self.site_config
    }

    /// Where the brand logo leads
    pub fn home_view(&self) -> AppView {
        if self.user.is_some() {
            AppView::Dashboard
        } else {
            AppView::Landing
        }
    }

    /// Sign in as the mock user for `role` and open the dashboard
    pub fn login(&mut self, role: UserRole) {
        self.user = Some(mock_data::mock_user(role));
        self.view = AppView::Dashboard;
    }

    /// Drop all per-user state and return to the landing page
    pub fn logout(&mut self) {
        self.user = None;
        self.active_batch = None;
        self.announcement = None;
        self.view = AppView::Landing;
    }

    /// Switch screens. The active batch is kept.
    pub fn navigate(&mut self, view: AppView) {
        self.view = view;
    }

    /// Open a batch's live session. Admins land in the control room,
    /// students in the live class.
    pub fn join_live(&mut self, batch: Batch) -> Result<(), StateError> {
        let role = self.user.as_ref().ok_or(StateError::NotSignedIn)?.role;
        self.view = match role {
            UserRole::Admin => AppView::AdminPanel,
            UserRole::Student => AppView::LiveClass,
        };
        self.active_batch = Some(batch);
        Ok(())
    }

    /// Prepend a newly launched batch with an empty material list
    pub fn add_batch(&mut self, mut batch: Batch) -> Result<(), StateError> {
        if self.batch(&batch.id).is_some() {
            return Err(StateError::DuplicateBatchId(batch.id));
        }
        batch.materials.clear();
        self.batches.insert(0, batch);
        Ok(())
    }

    /// Replace the batch with the same id, keeping its position
    pub fn update_batch(&mut self, batch: Batch) -> Result<(), StateError> {
        let slot = self
            .batches
            .iter_mut()
            .find(|b| b.id == batch.id)
            .ok_or_else(|| StateError::BatchNotFound(batch.id.clone()))?;
        *slot = batch;
        let updated = slot.clone();
        self.sync_active(&updated);
        Ok(())
    }

    /// Append a material to one batch's list
    pub fn add_material(
        &mut self,
        batch_id: &str,
        mut material: StudyMaterial,
    ) -> Result<(), StateError> {
        let batch = self.batch_mut(batch_id)?;
        material.batch_id = batch.id.clone();
        batch.materials.push(material);
        let updated = batch.clone();
        self.sync_active(&updated);
        Ok(())
    }

    /// Remove a material from one batch's list
    pub fn delete_material(&mut self, batch_id: &str, material_id: &str) -> Result<(), StateError> {
        let batch = self.batch_mut(batch_id)?;
        let index = batch
            .materials
            .iter()
            .position(|m| m.id == material_id)
            .ok_or_else(|| StateError::MaterialNotFound {
                batch_id: batch_id.to_string(),
                material_id: material_id.to_string(),
            })?;
        batch.materials.remove(index);
        let updated = batch.clone();
        self.sync_active(&updated);
        Ok(())
    }

    /// Replace the banner configuration wholesale
    pub fn update_site_config(&mut self, config: SiteConfig) {
        self.site_config = config;
    }

    /// Set or clear the announcement shown in the live room. Blank text clears.
    pub fn broadcast(&mut self, message: Option<String>) {
        self.announcement = message
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty());
    }

    /// Apply a view-requested transition
    pub fn apply(&mut self, action: AppAction) -> Result<(), StateError> {
        match action {
            AppAction::Login(role) => self.login(role),
            AppAction::Logout => self.logout(),
            AppAction::Navigate(view) => self.navigate(view),
            AppAction::JoinLive(batch) => return self.join_live(batch),
            AppAction::AddBatch(batch) => return self.add_batch(batch),
            AppAction::UpdateBatch(batch) => return self.update_batch(batch),
            AppAction::AddMaterial { batch_id, material } => {
                return self.add_material(&batch_id, material);
            }
            AppAction::DeleteMaterial {
                batch_id,
                material_id,
            } => return self.delete_material(&batch_id, &material_id),
            AppAction::UpdateSiteConfig(config) => self.update_site_config(config),
            AppAction::Broadcast(message) => self.broadcast(message),
        }
        Ok(())
    }

    /// Resolve the view into a renderable screen.
    ///
    /// The live room and the control room need both a user and an active
    /// batch, and only open for the matching role. Anything else falls back
    /// to the dashboard when signed in or the landing page otherwise.
    pub fn screen(&self) -> Screen {
        let Some(user) = self.user.clone() else {
            return Screen::Landing;
        };

        match (self.view, self.active_batch.clone(), user.role) {
            (AppView::Landing, _, _) => Screen::Landing,
            (AppView::LiveClass, Some(batch), UserRole::Student) => {
                Screen::LiveClass { user, batch }
            }
            (AppView::AdminPanel, Some(batch), UserRole::Admin) => {
                Screen::AdminPanel { user, batch }
            }
            (AppView::Dashboard | AppView::LiveClass | AppView::AdminPanel, _, _) => {
                Screen::Dashboard(user)
            }
        }
    }

    fn batch_mut(&mut self, batch_id: &str) -> Result<&mut Batch, StateError> {
        self.batches
            .iter_mut()
            .find(|b| b.id == batch_id)
            .ok_or_else(|| StateError::BatchNotFound(batch_id.to_string()))
    }

    fn sync_active(&mut self, updated: &Batch) {
        if let Some(active) = self.active_batch.as_mut()
            && active.id == updated.id
        {
            *active = updated.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_starts_on_landing() {
        let state = AppState::new();
        assert_eq!(state.view(), AppView::Landing);
        assert!(state.user().is_none());
        assert!(state.active_batch().is_none());
        assert!(state.announcement().is_none());
        assert_eq!(state.batches().len(), 3);
        assert_eq!(state.screen(), Screen::Landing);
    }

    #[test]
    fn test_home_view_depends_on_user() {
        let mut state = AppState::new();
        assert_eq!(state.home_view(), AppView::Landing);
        state.login(UserRole::Student);
        assert_eq!(state.home_view(), AppView::Dashboard);
    }

    #[test]
    fn test_join_live_requires_user() {
        let mut state = AppState::new();
        let batch = state.batches()[0].clone();
        assert_eq!(state.join_live(batch), Err(StateError::NotSignedIn));
        assert_eq!(state.view(), AppView::Landing);
        assert!(state.active_batch().is_none());
    }

    #[test]
    fn test_navigate_keeps_active_batch() {
        let mut state = AppState::new();
        state.login(UserRole::Student);
        let batch = state.batches()[1].clone();
        state.join_live(batch.clone()).unwrap();
        state.navigate(AppView::Dashboard);
        assert_eq!(state.active_batch(), Some(&batch));
        state.navigate(AppView::LiveClass);
        assert!(matches!(state.screen(), Screen::LiveClass { .. }));
    }

    #[test]
    fn test_screen_guard_without_active_batch() {
        let mut state = AppState::new();
        state.login(UserRole::Student);
        state.navigate(AppView::LiveClass);
        assert!(matches!(state.screen(), Screen::Dashboard(_)));
    }

    #[test]
    fn test_screen_guard_rejects_role_mismatch() {
        let mut state = AppState::new();
        state.login(UserRole::Student);
        let batch = state.batches()[0].clone();
        state.join_live(batch).unwrap();
        state.navigate(AppView::AdminPanel);
        assert!(matches!(state.screen(), Screen::Dashboard(_)));
    }

    #[test]
    fn test_screen_guard_without_user() {
        let mut state = AppState::new();
        state.navigate(AppView::Dashboard);
        assert_eq!(state.screen(), Screen::Landing);
    }

    #[test]
    fn test_add_batch_rejects_duplicate_id() {
        let mut state = AppState::new();
        let mut dup = state.batches()[2].clone();
        dup.name = "Clone".to_string();
        let before = state.clone();
        assert_eq!(
            state.add_batch(dup),
            Err(StateError::DuplicateBatchId("b3".to_string()))
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_add_batch_clears_materials() {
        let mut state = AppState::new();
        let mut batch = state.batches()[0].clone();
        batch.id = "b9".to_string();
        state.add_batch(batch).unwrap();
        assert_eq!(state.batches()[0].id, "b9");
        assert!(state.batches()[0].materials.is_empty());
    }

    #[test]
    fn test_update_batch_refreshes_active_batch() {
        let mut state = AppState::new();
        state.login(UserRole::Admin);
        let batch = state.batches()[1].clone();
        state.join_live(batch.clone()).unwrap();

        let mut edited = batch;
        edited.next_class = "Friday, 6:00 PM".to_string();
        state.update_batch(edited.clone()).unwrap();

        assert_eq!(state.batches()[1], edited);
        assert_eq!(state.active_batch(), Some(&edited));
    }

    #[test]
    fn test_add_material_normalises_owner() {
        let mut state = AppState::new();
        let material = StudyMaterial {
            id: "mx".to_string(),
            title: "Optics Notes".to_string(),
            category: crate::core::MaterialCategory::Notes,
            file_count: 1,
            batch_id: "elsewhere".to_string(),
        };
        state.add_material("b1", material).unwrap();
        let added = state.batch("b1").and_then(|b| b.find_material("mx"));
        assert_eq!(added.map(|m| m.batch_id.as_str()), Some("b1"));
    }

    #[test]
    fn test_delete_material_unknown_batch() {
        let mut state = AppState::new();
        let before = state.clone();
        assert_eq!(
            state.delete_material("nope", "m1"),
            Err(StateError::BatchNotFound("nope".to_string()))
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_broadcast_blank_clears() {
        let mut state = AppState::new();
        state.broadcast(Some("Class starts in 5 minutes".to_string()));
        assert_eq!(state.announcement(), Some("Class starts in 5 minutes"));
        state.broadcast(Some("   ".to_string()));
        assert!(state.announcement().is_none());
        state.broadcast(Some("Back".to_string()));
        state.broadcast(None);
        assert!(state.announcement().is_none());
    }

    #[test]
    fn test_apply_dispatches_actions() {
        let mut state = AppState::new();
        state.apply(AppAction::Login(UserRole::Admin)).unwrap();
        let batch = state.batches()[0].clone();
        state.apply(AppAction::JoinLive(batch)).unwrap();
        assert_eq!(state.view(), AppView::AdminPanel);

        state
            .apply(AppAction::Broadcast(Some("Quiz at 5".to_string())))
            .unwrap();
        assert_eq!(state.announcement(), Some("Quiz at 5"));

        let err = state.apply(AppAction::DeleteMaterial {
            batch_id: "b1".to_string(),
            material_id: "missing".to_string(),
        });
        assert!(matches!(err, Err(StateError::MaterialNotFound { .. })));

        state.apply(AppAction::Logout).unwrap();
        assert_eq!(state.view(), AppView::Landing);
    }
}
