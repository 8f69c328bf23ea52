use thiserror::Error;

use crate::classify::Kind;

pub type RenderResult<T> = Result<T, RenderError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    /// A value reached dispatch that is not null/false, a string/number,
    /// or an element with a usable type.
    #[error("unsupported description ({kind}): {detail}")]
    Unsupported { kind: Kind, detail: String },

    #[error("component `{component}` does not implement render")]
    MissingRender { component: String },

    /// Position ids ran past `u32::MAX`.
    #[error("position id overflow after {last}")]
    IdOverflow { last: u32 },
}

impl RenderError {
    pub fn unsupported(kind: Kind, detail: impl Into<String>) -> Self {
        RenderError::Unsupported {
            kind,
            detail: detail.into(),
        }
    }
}
