use std::fmt;
use std::sync::Arc;

use rbac_model::{Role, User, UserDraft, UserId, UserStatus};
use tracing::{debug, error, info};

use super::form::{FormState, SubmitOutcome};
use super::list::{ListEffect, ListPhase, ListState, Patch};
use super::roles::LOAD_ROLES_FAILED;
use crate::api::{RolesApi, UsersApi};
use crate::error::AdminError;

pub const LOAD_USERS_FAILED: &str = "Failed to load users";
pub const DELETE_USER_FAILED: &str = "Failed to delete user";
pub const ADD_USER_FAILED: &str = "Failed to add user";
pub const UPDATE_USER_FAILED: &str = "Failed to update user";

/// A request produced by [`UserForm::begin_submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserSubmission {
    Create(UserDraft),
    Update(UserId, UserDraft),
}

impl UserSubmission {
    pub async fn send(self, api: &dyn UsersApi) -> Result<User, AdminError> {
        match self {
            UserSubmission::Create(draft) => api.create_user(draft).await,
            UserSubmission::Update(id, draft) => api.update_user(id, draft).await,
        }
    }

    pub fn is_update(&self) -> bool {
        matches!(self, UserSubmission::Update(..))
    }
}

/// Field input for creating or editing a user.
///
/// The role choices are fetched once on mount from the roles access layer.
#[derive(Debug, Clone)]
pub struct UserForm {
    name: String,
    role: String,
    status: String,
    role_options: Vec<Role>,
    role_options_phase: ListPhase,
    state: FormState,
}

impl Default for UserForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            role: String::new(),
            status: UserStatus::Active.as_str().to_string(),
            role_options: Vec::new(),
            role_options_phase: ListPhase::Loading,
            state: FormState::default(),
        }
    }
}

impl UserForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn load_role_options(&mut self, api: &dyn RolesApi) {
        self.role_options_phase = ListPhase::Loading;
        match api.list_roles().await {
            Ok(roles) => {
                self.role_options = roles;
                self.role_options_phase = ListPhase::Ready;
            }
            Err(err) => {
                error!(error = %err, "error loading roles for user form");
                self.role_options_phase = ListPhase::Failed(LOAD_ROLES_FAILED.to_string());
            }
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn role_options(&self) -> &[Role] {
        &self.role_options
    }

    pub fn role_options_phase(&self) -> &ListPhase {
        &self.role_options_phase
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_role(&mut self, role: impl Into<String>) {
        self.role = role.into();
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    /// Pre-fill from the entity being edited, or reset for create mode.
    pub fn load_target(&mut self, target: Option<&User>) {
        match target {
            Some(user) => {
                let draft = user.to_draft();
                self.name = draft.name;
                self.role = draft.role;
                self.status = draft.status;
            }
            None => self.reset_fields(),
        }
    }

    pub fn draft(&self) -> UserDraft {
        UserDraft::new(self.name.clone(), self.role.clone(), self.status.clone())
    }

    /// Enter `Submitting` and build the request: update when `editing` is
    /// set, create otherwise. `None` while a submit is in flight.
    pub fn begin_submit(&mut self, editing: Option<&User>) -> Option<UserSubmission> {
        if !self.state.begin() {
            debug!("user form submit ignored while submitting");
            return None;
        }

        let draft = self.draft();
        Some(match editing {
            Some(user) => UserSubmission::Update(user.id, draft),
            None => UserSubmission::Create(draft),
        })
    }

    /// Settle a submit. On success the fields reset and the returned
    /// effects (patch, then reload) are for the owning list view.
    pub fn finish_submit(
        &mut self,
        was_update: bool,
        result: Result<User, AdminError>,
    ) -> (SubmitOutcome<User>, Vec<ListEffect<User>>) {
        match result {
            Ok(user) => {
                self.state.succeed();
                self.reset_fields();
                let patch = if was_update {
                    Patch::Replace(user.clone())
                } else {
                    Patch::Append(user.clone())
                };
                (
                    SubmitOutcome::Saved(user),
                    vec![ListEffect::Patch(patch), ListEffect::Reload],
                )
            }
            Err(err) => {
                error!(error = %err, update = was_update, "error submitting user");
                let message = if was_update {
                    UPDATE_USER_FAILED
                } else {
                    ADD_USER_FAILED
                };
                self.state.fail(message);
                (SubmitOutcome::Failed(message.to_string()), Vec::new())
            }
        }
    }

    fn reset_fields(&mut self) {
        self.name.clear();
        self.role.clear();
        self.status = UserStatus::Active.as_str().to_string();
    }
}

/// The users panel: owns the collection, the edit target and the form.
pub struct UserListView {
    users_api: Arc<dyn UsersApi>,
    roles_api: Arc<dyn RolesApi>,
    list: ListState<User>,
    form: UserForm,
}

impl fmt::Debug for UserListView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserListView")
            .field("list", &self.list)
            .field("form", &self.form)
            .finish()
    }
}

impl UserListView {
    /// Build the view without fetching anything; it stays `Loading` until
    /// [`UserListView::reload`] runs.
    pub fn new(users_api: Arc<dyn UsersApi>, roles_api: Arc<dyn RolesApi>) -> Self {
        Self {
            users_api,
            roles_api,
            list: ListState::new(),
            form: UserForm::new(),
        }
    }

    /// Build the view and run its on-mount loads.
    pub async fn mount(users_api: Arc<dyn UsersApi>, roles_api: Arc<dyn RolesApi>) -> Self {
        let mut view = Self::new(users_api, roles_api);
        view.reload().await;
        view.form.load_role_options(view.roles_api.as_ref()).await;
        view
    }

    pub fn users(&self) -> &[User] {
        self.list.records()
    }

    pub fn phase(&self) -> &ListPhase {
        self.list.phase()
    }

    pub fn editing(&self) -> Option<&User> {
        self.list.editing()
    }

    pub fn form(&self) -> &UserForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut UserForm {
        &mut self.form
    }

    pub fn list(&self) -> &ListState<User> {
        &self.list
    }

    pub async fn reload(&mut self) {
        self.list.begin_load();
        let result = self.users_api.list_users().await;
        self.list.finish_load(result, LOAD_USERS_FAILED);
    }

    /// Switch to edit mode for a listed user. Returns `false` when the id
    /// is not in local state.
    pub fn edit(&mut self, id: UserId) -> bool {
        let Some(user) = self.list.find(id).cloned() else {
            return false;
        };
        self.form.load_target(Some(&user));
        self.list.set_editing(Some(user));
        true
    }

    pub fn cancel_edit(&mut self) {
        self.list.set_editing(None);
        self.form.load_target(None);
    }

    /// Submit the form and apply the resulting effects in order.
    pub async fn submit(&mut self) -> SubmitOutcome<User> {
        let Some(submission) = self.form.begin_submit(self.list.editing()) else {
            return SubmitOutcome::Refused;
        };
        let was_update = submission.is_update();
        let result = submission.send(self.users_api.as_ref()).await;

        let (outcome, effects) = self.form.finish_submit(was_update, result);
        for effect in effects {
            self.apply(effect).await;
        }
        outcome
    }

    pub async fn apply(&mut self, effect: ListEffect<User>) {
        match effect {
            ListEffect::Patch(patch) => self.list.apply_patch(patch),
            ListEffect::Reload => {
                self.list.set_editing(None);
                self.reload().await;
            }
        }
    }

    /// Delete immediately, then drop the user from local state without a
    /// reload.
    pub async fn delete(&mut self, id: UserId) {
        match self.users_api.delete_user(id).await {
            Ok(()) => {
                info!(user.id = %id, "user removed from list");
                self.list.apply_patch(Patch::Remove(id));
            }
            Err(err) => {
                error!(user.id = %id, error = %err, "error deleting user");
                self.list.fail(DELETE_USER_FAILED);
            }
        }
    }
}
