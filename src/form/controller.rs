use crate::error::FormError;
use crate::export::PayloadSink;
use crate::form::assemble::{assemble, validate};
use crate::form::field::{FieldId, ELEMENT_TYPE_KEY, HAS_VOID_KEY};
use crate::form::state::FormState;
use crate::form::visibility::{visibility, Visibility};
use crate::model::WallDataPayload;
use tracing::{debug, info, warn};

/// How [`FormController::generate`] treats the inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AssemblyMode {
    /// Anything goes; unparsable numbers become NaN.
    #[default]
    Lenient,
    /// Inputs are validated and generation fails on the first bad one.
    Strict,
}

/// Owns the form inputs and reacts to the three form events:
/// element type change, void checkbox change and generate.
pub struct FormController<S> {
    state: FormState,
    mode: AssemblyMode,
    sink: S,
}

impl<S: PayloadSink> FormController<S> {
    pub fn new(sink: S) -> Self {
        Self::with_state(FormState::new(), sink)
    }

    pub fn with_state(state: FormState, sink: S) -> Self {
        Self {
            state,
            mode: AssemblyMode::default(),
            sink,
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: AssemblyMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Text of one text input, for in-place edits. `None` for the checkbox,
    /// which only changes through [`Self::void_toggled`].
    pub fn field_mut(&mut self, id: FieldId) -> Option<&mut String> {
        self.state.field_mut(id)
    }

    /// Field groups shown for the current inputs.
    #[must_use]
    pub fn visibility(&self) -> Visibility {
        visibility(&self.state)
    }

    #[must_use]
    pub fn mode(&self) -> AssemblyMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: AssemblyMode) {
        self.mode = mode;
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Selector changed: hide the element group, then show the one mapped to
    /// `value`, if any.
    pub fn element_type_changed(&mut self, value: &str) {
        self.state.element_type = value.to_string();
        debug!(element_type = value, group = ?self.visibility().element_group, "element type changed");
    }

    /// Void checkbox changed.
    pub fn void_toggled(&mut self, checked: bool) {
        self.state.has_void = checked;
        debug!(checked, "void fields toggled");
    }

    /// Sets any input by key, routing the selector and checkbox through
    /// their change handlers.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<(), FormError> {
        match key {
            ELEMENT_TYPE_KEY => {
                self.element_type_changed(value);
                Ok(())
            }
            HAS_VOID_KEY => {
                self.state.set_value(key, value)?;
                self.void_toggled(self.state.has_void);
                Ok(())
            }
            _ => self.state.set_value(key, value),
        }
    }

    pub fn add_void(&mut self) {
        self.state.add_void();
    }

    pub fn remove_void(&mut self, index: usize) -> bool {
        self.state.remove_void(index)
    }

    /// Reads the inputs as they are now, builds one payload and hands it to
    /// the sink. The payload is returned, not kept.
    pub fn generate(&mut self) -> Result<WallDataPayload, FormError> {
        let payload = match self.mode {
            AssemblyMode::Lenient => assemble(&self.state),
            AssemblyMode::Strict => validate(&self.state).inspect_err(|e| {
                warn!(error = %e, "wall data rejected");
            })?,
        };

        self.sink.accept(&payload)?;
        info!(
            wall_id = %payload.element_data.wall_id,
            voids = payload.void_count(),
            "wall data generated"
        );
        Ok(payload)
    }
}
