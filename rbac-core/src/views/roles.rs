use std::fmt;
use std::sync::Arc;

use rbac_model::{Role, RoleDraft, RoleId};
use tracing::error;

use super::form::{FormState, SubmitOutcome};
use super::list::{ListEffect, ListPhase, ListState, Patch};
use crate::api::RolesApi;
use crate::error::AdminError;

pub const LOAD_ROLES_FAILED: &str = "Failed to load roles";
pub const ADD_ROLE_FAILED: &str = "Failed to add role";
pub const UPDATE_ROLE_FAILED: &str = "Failed to update role";

/// Split comma-separated input into trimmed, non-empty permission names.
pub fn parse_permissions(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleSubmission {
    Create(RoleDraft),
    Update(RoleId, RoleDraft),
}

impl RoleSubmission {
    pub async fn send(self, api: &dyn RolesApi) -> Result<Role, AdminError> {
        match self {
            RoleSubmission::Create(draft) => api.create_role(draft).await,
            RoleSubmission::Update(id, draft) => api.update_role(id, draft).await,
        }
    }

    pub fn is_update(&self) -> bool {
        matches!(self, RoleSubmission::Update(..))
    }
}

/// Field input for creating or editing a role.
#[derive(Debug, Clone, Default)]
pub struct RoleForm {
    name: String,
    permissions: Vec<String>,
    state: FormState,
}

impl RoleForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn permissions(&self) -> &[String] {
        &self.permissions
    }

    /// Permissions as shown in the text input.
    pub fn permissions_text(&self) -> String {
        self.permissions.join(", ")
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_permissions_text(&mut self, text: &str) {
        self.permissions = parse_permissions(text);
    }

    pub fn load_target(&mut self, target: Option<&Role>) {
        match target {
            Some(role) => {
                let draft = role.to_draft();
                self.name = draft.name;
                self.permissions = draft.permissions;
            }
            None => self.reset_fields(),
        }
    }

    pub fn draft(&self) -> RoleDraft {
        RoleDraft::new(self.name.clone(), self.permissions.clone())
    }

    pub fn begin_submit(&mut self, editing: Option<&Role>) -> Option<RoleSubmission> {
        if !self.state.begin() {
            return None;
        }

        let draft = self.draft();
        Some(match editing {
            Some(role) => RoleSubmission::Update(role.id, draft),
            None => RoleSubmission::Create(draft),
        })
    }

    pub fn finish_submit(
        &mut self,
        was_update: bool,
        result: Result<Role, AdminError>,
    ) -> (SubmitOutcome<Role>, Vec<ListEffect<Role>>) {
        match result {
            Ok(role) => {
                self.state.succeed();
                self.reset_fields();
                let patch = if was_update {
                    Patch::Replace(role.clone())
                } else {
                    Patch::Append(role.clone())
                };
                (
                    SubmitOutcome::Saved(role),
                    vec![ListEffect::Patch(patch), ListEffect::Reload],
                )
            }
            Err(err) => {
                error!(error = %err, update = was_update, "error submitting role");
                let message = if was_update {
                    UPDATE_ROLE_FAILED
                } else {
                    ADD_ROLE_FAILED
                };
                self.state.fail(message);
                (SubmitOutcome::Failed(message.to_string()), Vec::new())
            }
        }
    }

    fn reset_fields(&mut self) {
        self.name.clear();
        self.permissions.clear();
    }
}

/// The roles panel. Roles have no delete action.
pub struct RoleListView {
    api: Arc<dyn RolesApi>,
    list: ListState<Role>,
    form: RoleForm,
}

impl fmt::Debug for RoleListView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoleListView")
            .field("list", &self.list)
            .field("form", &self.form)
            .finish()
    }
}

impl RoleListView {
    pub fn new(api: Arc<dyn RolesApi>) -> Self {
        Self {
            api,
            list: ListState::new(),
            form: RoleForm::new(),
        }
    }

    pub async fn mount(api: Arc<dyn RolesApi>) -> Self {
        let mut view = Self::new(api);
        view.reload().await;
        view
    }

    pub fn roles(&self) -> &[Role] {
        self.list.records()
    }

    pub fn phase(&self) -> &ListPhase {
        self.list.phase()
    }

    pub fn editing(&self) -> Option<&Role> {
        self.list.editing()
    }

    pub fn form(&self) -> &RoleForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut RoleForm {
        &mut self.form
    }

    pub fn list(&self) -> &ListState<Role> {
        &self.list
    }

    pub async fn reload(&mut self) {
        self.list.begin_load();
        let result = self.api.list_roles().await;
        self.list.finish_load(result, LOAD_ROLES_FAILED);
    }

    pub fn edit(&mut self, id: RoleId) -> bool {
        let Some(role) = self.list.find(id).cloned() else {
            return false;
        };
        self.form.load_target(Some(&role));
        self.list.set_editing(Some(role));
        true
    }

    pub fn cancel_edit(&mut self) {
        self.list.set_editing(None);
        self.form.load_target(None);
    }

    pub async fn submit(&mut self) -> SubmitOutcome<Role> {
        let Some(submission) = self.form.begin_submit(self.list.editing()) else {
            return SubmitOutcome::Refused;
        };
        let was_update = submission.is_update();
        let result = submission.send(self.api.as_ref()).await;

        let (outcome, effects) = self.form.finish_submit(was_update, result);
        for effect in effects {
            self.apply(effect).await;
        }
        outcome
    }

    pub async fn apply(&mut self, effect: ListEffect<Role>) {
        match effect {
            ListEffect::Patch(patch) => self.list.apply_patch(patch),
            ListEffect::Reload => {
                self.list.set_editing(None);
                self.reload().await;
            }
        }
    }
}
