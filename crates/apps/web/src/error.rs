use runtime::RuntimeError;
use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum MountError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("missing canvas element #{0}")]
    CanvasMissing(String),
    #[error("#{0} is not a canvas element")]
    NotACanvas(String),
    #[error("2d context unavailable")]
    ContextUnavailable,
    #[error("listener registration failed: {0}")]
    Listener(String),
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl MountError {
    /// The page has no usable surface. Mounting degrades to an inert
    /// no-op instead of failing.
    pub fn is_surface_unavailable(&self) -> bool {
        matches!(
            self,
            MountError::NoWindow
                | MountError::NoDocument
                | MountError::CanvasMissing(_)
                | MountError::NotACanvas(_)
                | MountError::ContextUnavailable
        )
    }

    pub(crate) fn listener(what: &str, err: JsValue) -> Self {
        MountError::Listener(format!("{what}: {err:?}"))
    }
}

impl From<MountError> for JsValue {
    fn from(err: MountError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::MountError;
    use runtime::{LifecycleState, RuntimeError};

    #[test]
    fn missing_surface_is_inert() {
        assert!(MountError::CanvasMissing("bg".into()).is_surface_unavailable());
        assert!(MountError::ContextUnavailable.is_surface_unavailable());
        assert!(!MountError::Listener("resize".into()).is_surface_unavailable());
    }

    #[test]
    fn messages_name_the_element() {
        assert_eq!(
            MountError::CanvasMissing("blueprint-background".into()).to_string(),
            "missing canvas element #blueprint-background"
        );
        assert_eq!(MountError::NotACanvas("x".into()).to_string(), "#x is not a canvas element");
    }

    #[test]
    fn runtime_errors_pass_through() {
        let err: MountError = RuntimeError::InvalidTransition {
            from: LifecycleState::Disposed,
            to: LifecycleState::Running,
        }
        .into();
        assert_eq!(
            err.to_string(),
            RuntimeError::InvalidTransition {
                from: LifecycleState::Disposed,
                to: LifecycleState::Running,
            }
            .to_string()
        );
    }
}
