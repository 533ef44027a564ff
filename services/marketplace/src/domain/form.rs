use super::types::Role;

pub const RESTRICTED_ACCESS: &str = "Restricted Access";

pub const WORKOUT_PUBLISHERS: &[Role] = &[Role::Trainer];
pub const NUTRITION_PUBLISHERS: &[Role] = &[Role::Nutritionist];
pub const ADVICE_PUBLISHERS: &[Role] = &[Role::Trainer, Role::Nutritionist];
pub const PURCHASERS: &[Role] = &[Role::Client];

pub struct RoleGate;

impl RoleGate {
    pub fn allows(role: Role, required: &[Role]) -> bool {
        required.contains(&role)
    }
}

/// Lifecycle of a role-gated publishing form.
///
/// ```text
/// LoadingRole ─► Denied
///      └──────► Ready ─► Submitting ─► Success ─► Ready
///                              └─────► Error ───► Ready (draft kept)
/// ```
///
/// Transitions that the diagram does not allow leave the state unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState<D> {
    LoadingRole { draft: D },
    Denied,
    Ready { draft: D },
    Submitting { draft: D },
    Success,
    Error { message: String, draft: D },
}

impl<D: Default> FormState<D> {
    pub fn new() -> Self {
        Self::LoadingRole {
            draft: D::default(),
        }
    }

    pub fn with_draft(draft: D) -> Self {
        Self::LoadingRole { draft }
    }

    pub fn role_resolved(self, role: Role, required: &[Role]) -> Self {
        match self {
            Self::LoadingRole { draft } if RoleGate::allows(role, required) => {
                Self::Ready { draft }
            }
            Self::LoadingRole { .. } => Self::Denied,
            other => other,
        }
    }

    pub fn submit(self) -> Self {
        match self {
            Self::Ready { draft } => Self::Submitting { draft },
            other => other,
        }
    }

    pub fn succeeded(self) -> Self {
        match self {
            Self::Submitting { .. } => Self::Success,
            other => other,
        }
    }

    pub fn failed(self, message: impl Into<String>) -> Self {
        match self {
            Self::Submitting { draft } => Self::Error {
                message: message.into(),
                draft,
            },
            other => other,
        }
    }

    /// Back to `Ready`: empty after a success, with the draft after an error.
    pub fn reset(self) -> Self {
        match self {
            Self::Success => Self::Ready {
                draft: D::default(),
            },
            Self::Error { draft, .. } => Self::Ready { draft },
            other => other,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::LoadingRole { .. } => "loading_role",
            Self::Denied => "denied",
            Self::Ready { .. } => "ready",
            Self::Submitting { .. } => "submitting",
            Self::Success => "success",
            Self::Error { .. } => "error",
        }
    }

    pub fn is_denied(&self) -> bool {
        matches!(self, Self::Denied)
    }
}

impl<D: Default> Default for FormState<D> {
    fn default() -> Self {
        Self::new()
    }
}
