//! Converter resolution rules
//!
//! Rules are evaluated in order and the first match wins:
//!
//! | # | Rule | Matches | Converter |
//! |---|------|---------|-----------|
//! | 1 | CommandCapability | `ty.is_command()` | command |
//! | 2 | ReactiveOrigin | generic origin is reactive | reactive-property |
//! | 3 | VoidDelegate | delegate returning nothing | command |
//! | 4 | Fallback | anything else | host default |
//!
//! Rule 1 must precede rule 3: a command that is also a void delegate is
//! resolved as a command.

use crate::converters::{command_converter, reactive_property_converter};
use std::fmt;
use std::sync::Arc;
use vmwire_core::TypeHandle;
use vmwire_wire::{default_converter, Converter};

/// Which rule bound a type to its converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolutionRule {
    /// The type implements the command capability
    CommandCapability,
    /// The type instantiates a reactive generic definition
    ReactiveOrigin,
    /// The type is a delegate whose signature returns nothing
    VoidDelegate,
    /// No rule matched; the host encodes structurally
    Fallback,
}

impl ResolutionRule {
    /// All rules, in evaluation order
    pub const ALL: [ResolutionRule; 4] = [
        ResolutionRule::CommandCapability,
        ResolutionRule::ReactiveOrigin,
        ResolutionRule::VoidDelegate,
        ResolutionRule::Fallback,
    ];

    /// Whether this rule matches `ty`, ignoring the rules before it
    pub fn matches(self, ty: &TypeHandle) -> bool {
        match self {
            ResolutionRule::CommandCapability => ty.is_command(),
            ResolutionRule::ReactiveOrigin => ty.has_reactive_origin(),
            ResolutionRule::VoidDelegate => ty.is_void_delegate(),
            ResolutionRule::Fallback => true,
        }
    }

    /// The converter this rule binds
    pub fn converter(self) -> Arc<dyn Converter> {
        match self {
            ResolutionRule::CommandCapability | ResolutionRule::VoidDelegate => command_converter(),
            ResolutionRule::ReactiveOrigin => reactive_property_converter(),
            ResolutionRule::Fallback => default_converter(),
        }
    }

    /// Stable name, for logs
    pub fn as_str(self) -> &'static str {
        match self {
            ResolutionRule::CommandCapability => "command_capability",
            ResolutionRule::ReactiveOrigin => "reactive_origin",
            ResolutionRule::VoidDelegate => "void_delegate",
            ResolutionRule::Fallback => "fallback",
        }
    }
}

impl fmt::Display for ResolutionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// First rule matching `ty`.
pub fn classify(ty: &TypeHandle) -> ResolutionRule {
    ResolutionRule::ALL
        .into_iter()
        .find(|rule| rule.matches(ty))
        .unwrap_or(ResolutionRule::Fallback)
}

/// A type's converter binding and the rule that produced it.
#[derive(Debug, Clone)]
pub struct Resolution {
    rule: ResolutionRule,
    converter: Arc<dyn Converter>,
}

impl Resolution {
    /// Resolve `ty` from scratch
    pub fn of(ty: &TypeHandle) -> Self {
        let rule = classify(ty);
        Self {
            rule,
            converter: rule.converter(),
        }
    }

    /// The matching rule
    pub fn rule(&self) -> ResolutionRule {
        self.rule
    }

    /// The bound converter
    pub fn converter(&self) -> &Arc<dyn Converter> {
        &self.converter
    }
}
