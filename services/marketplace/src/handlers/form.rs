use serde::Serialize;

use crate::domain::form::{FormState, RESTRICTED_ACCESS};
use crate::domain::types::{AdviceCategory, Role, Session};
use crate::domain::validation::{AssetKind, AssetLimits};

#[derive(Debug, Clone, Copy, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_chars: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset: Option<AssetLimits>,
}

impl FieldSpec {
    pub const fn text(name: &'static str, max_chars: usize) -> Self {
        Self {
            name,
            required: true,
            max_chars: Some(max_chars),
            asset: None,
        }
    }

    pub const fn optional(name: &'static str) -> Self {
        Self {
            name,
            required: false,
            max_chars: None,
            asset: None,
        }
    }

    pub fn file(name: &'static str, kind: AssetKind, required: bool) -> Self {
        Self {
            name,
            required,
            max_chars: None,
            asset: Some(kind.limits()),
        }
    }
}

/// What a publishing form shows the caller: either the restricted-access
/// notice or the empty form with its field limits.
#[derive(Debug, Serialize)]
pub struct FormResponse {
    pub state: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldSpec>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<AdviceCategory>,
}

pub fn form_view(
    session: &Session,
    required: &[Role],
    fields: Vec<FieldSpec>,
    categories: Vec<AdviceCategory>,
) -> FormResponse {
    let state = FormState::<()>::new().role_resolved(session.role(), required);
    if state.is_denied() {
        return FormResponse {
            state: state.name(),
            message: Some(RESTRICTED_ACCESS),
            fields: vec![],
            categories: vec![],
        };
    }
    FormResponse {
        state: state.name(),
        message: None,
        fields,
        categories,
    }
}
