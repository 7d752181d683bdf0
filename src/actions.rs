//! Discrete input-action state machine and dispatcher.
//!
//! Each [`InputAction`] is a named behavior bound to one physical control
//! with two states, Idle and Active. The dispatcher evaluates every action
//! once per tick, in registration order, against the latest raw snapshot:
//!
//! | state  | pressed | next   | hooks fired                       |
//! |--------|---------|--------|-----------------------------------|
//! | Idle   | false   | Idle   | none                              |
//! | Idle   | true    | Active | `on_action_begin`, then `on_action` |
//! | Active | true    | Active | `on_action`                       |
//! | Active | false   | Idle   | `on_action_end`                   |
//!
//! Hooks run synchronously on the caller's thread, never concurrently with
//! each other. Several actions may share one binding; each is evaluated
//! independently, with no mutual exclusion.

use log::debug;

use crate::error::CoreError;
use crate::inputs::{ControlId, ControlSnapshot};

/// Per-binding behavior hooks. All three default to no-ops so an
/// implementation overrides only what it needs.
pub trait ActionHandler {
    /// Fired exactly once per press edge, before that tick's `on_action`.
    fn on_action_begin(&mut self) {}
    /// Fired every tick the control is held, including the press-edge tick.
    fn on_action(&mut self) {}
    /// Fired exactly once per release edge.
    fn on_action_end(&mut self) {}
}

/// Closure-based handler for hosts that prefer function values over a trait
/// impl. Unset hooks are no-ops.
#[derive(Default)]
pub struct Hooks {
    begin: Option<Box<dyn FnMut()>>,
    action: Option<Box<dyn FnMut()>>,
    end: Option<Box<dyn FnMut()>>,
}

impl Hooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_begin(mut self, f: impl FnMut() + 'static) -> Self {
        self.begin = Some(Box::new(f));
        self
    }

    pub fn on_action(mut self, f: impl FnMut() + 'static) -> Self {
        self.action = Some(Box::new(f));
        self
    }

    pub fn on_end(mut self, f: impl FnMut() + 'static) -> Self {
        self.end = Some(Box::new(f));
        self
    }
}

impl ActionHandler for Hooks {
    fn on_action_begin(&mut self) {
        if let Some(f) = &mut self.begin {
            f();
        }
    }

    fn on_action(&mut self) {
        if let Some(f) = &mut self.action {
            f();
        }
    }

    fn on_action_end(&mut self) {
        if let Some(f) = &mut self.end {
            f();
        }
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum ActionState {
    #[default]
    Idle,
    Active,
}

/// A named behavior bound to one physical control.
pub struct InputAction {
    name: String,
    binding: ControlId,
    state: ActionState,
    handler: Box<dyn ActionHandler>,
}

impl InputAction {
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn binding(&self) -> ControlId {
        self.binding
    }

    #[inline]
    pub fn state(&self) -> ActionState {
        self.state
    }
}

/// Owns registered actions and turns raw control edges into hook calls.
///
/// Registration order is fixed at setup time and drives evaluation order at
/// every tick. The dispatcher lives for the whole process and is reset only
/// at shutdown.
pub struct ActionDispatcher {
    controls: Vec<ControlId>,
    actions: Vec<InputAction>,
}

impl ActionDispatcher {
    /// The set of recognized physical controls is fixed at construction.
    pub fn new(controls: impl IntoIterator<Item = ControlId>) -> Self {
        Self {
            controls: controls.into_iter().collect(),
            actions: Vec::new(),
        }
    }

    /// Register a named action against a control. Names must be unique and
    /// the binding must be a recognized control; both are checked up front
    /// so a bad registration never enters service.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        binding: ControlId,
        handler: impl ActionHandler + 'static,
    ) -> Result<(), CoreError> {
        let name = name.into();
        if self.actions.iter().any(|a| a.name == name) {
            return Err(CoreError::DuplicateActionName(name));
        }
        if !self.controls.contains(&binding) {
            return Err(CoreError::UnknownControl(binding));
        }
        debug!("registered action '{name}' on {binding:?}");
        self.actions.push(InputAction {
            name,
            binding,
            state: ActionState::Idle,
            handler: Box::new(handler),
        });
        Ok(())
    }

    /// Evaluate the transition table for every action against the latest
    /// snapshot, firing hooks synchronously in registration order. Total:
    /// never fails, regardless of snapshot contents.
    pub fn tick(&mut self, snapshot: &ControlSnapshot) {
        for action in &mut self.actions {
            let pressed = snapshot.is_pressed(action.binding);
            match (action.state, pressed) {
                (ActionState::Idle, false) => {}
                (ActionState::Idle, true) => {
                    action.state = ActionState::Active;
                    action.handler.on_action_begin();
                    action.handler.on_action();
                }
                (ActionState::Active, true) => action.handler.on_action(),
                (ActionState::Active, false) => {
                    action.state = ActionState::Idle;
                    action.handler.on_action_end();
                }
            }
        }
    }

    /// Registered action names, in registration order.
    pub fn action_names(&self) -> impl Iterator<Item = &str> {
        self.actions.iter().map(|a| a.name.as_str())
    }

    /// Whether the named action is currently held.
    pub fn is_active(&self, name: &str) -> bool {
        self.actions
            .iter()
            .any(|a| a.name == name && a.state == ActionState::Active)
    }
}
