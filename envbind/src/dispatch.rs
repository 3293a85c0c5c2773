//! Per-field strategy selection.
//!
//! Generated code asks, for each field type `T`, which capability applies, in
//! priority order:
//!
//! | Strategy | Bound on `T` |
//! |----------|--------------|
//! | [`HookStrategy`] | [`UnmarshalEnv`] |
//! | [`RecordStrategy`] | [`Unmarshal`] |
//! | [`CoerceStrategy`] | [`Coerce`] |
//! | [`HookWithoutDefaultStrategy`] | `T = Option<U>`, `U: UnmarshalEnv` |
//! | [`UnsupportedStrategy`] | none |
//!
//! The query is `(&&&&Probe::<T>::new()).strategy()`. Method resolution tries
//! the receiver with four references first and drops one reference per step,
//! so the first trait whose bound `T` satisfies wins. All five `Via*` traits
//! must be in scope at the call site.

use std::marker::PhantomData;

use crate::coerce::Coerce;
use crate::env::Env;
use crate::error::FieldError;
use crate::hook::UnmarshalEnv;
use crate::walk::{Binding, Unmarshal};

/// Zero-sized stand-in for a field type.
pub struct Probe<T>(PhantomData<T>);

impl<T> Probe<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for Probe<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Probe<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Probe<T> {}

pub trait ViaHook {
    fn strategy(self) -> HookStrategy;
}

impl<T: UnmarshalEnv> ViaHook for &&&&Probe<T> {
    fn strategy(self) -> HookStrategy {
        HookStrategy
    }
}

pub trait ViaRecord {
    fn strategy(self) -> RecordStrategy;
}

impl<T: Unmarshal> ViaRecord for &&&Probe<T> {
    fn strategy(self) -> RecordStrategy {
        RecordStrategy
    }
}

pub trait ViaCoerce {
    fn strategy(self) -> CoerceStrategy;
}

impl<T: Coerce> ViaCoerce for &&Probe<T> {
    fn strategy(self) -> CoerceStrategy {
        CoerceStrategy
    }
}

pub trait ViaHookWithoutDefault {
    fn strategy(self) -> HookWithoutDefaultStrategy;
}

// Reached only when `Option<T>: UnmarshalEnv` failed, i.e. `T: !Default`.
impl<T: UnmarshalEnv> ViaHookWithoutDefault for &Probe<Option<T>> {
    fn strategy(self) -> HookWithoutDefaultStrategy {
        HookWithoutDefaultStrategy
    }
}

pub trait ViaUnsupported {
    fn strategy(self) -> UnsupportedStrategy;
}

impl<T> ViaUnsupported for Probe<T> {
    fn strategy(self) -> UnsupportedStrategy {
        UnsupportedStrategy
    }
}

/// Defer to the type's [`UnmarshalEnv`] hook.
pub struct HookStrategy;

impl HookStrategy {
    pub fn apply<T: UnmarshalEnv>(
        self,
        slot: &mut T,
        binding: &Binding,
        _env: &Env,
        _unwrapped: &'static str,
    ) -> Result<(), FieldError> {
        binding.apply_hook(slot)
    }
}

/// Walk the nested record.
pub struct RecordStrategy;

impl RecordStrategy {
    pub fn apply<T: Unmarshal>(
        self,
        slot: &mut T,
        binding: &Binding,
        env: &Env,
        _unwrapped: &'static str,
    ) -> Result<(), FieldError> {
        binding.apply_record(slot, env)
    }
}

/// Use the built-in coercion table.
pub struct CoerceStrategy;

impl CoerceStrategy {
    pub fn apply<T: Coerce>(
        self,
        slot: &mut T,
        binding: &Binding,
        _env: &Env,
        _unwrapped: &'static str,
    ) -> Result<(), FieldError> {
        binding.apply_coerce(slot)
    }
}

/// Fail: the hook type behind `Option` cannot be default-constructed.
pub struct HookWithoutDefaultStrategy;

impl HookWithoutDefaultStrategy {
    pub fn apply<T>(
        self,
        _slot: &mut T,
        binding: &Binding,
        _env: &Env,
        unwrapped: &'static str,
    ) -> Result<(), FieldError> {
        Err(binding.reject_hook_without_default(unwrapped))
    }
}

/// Fail: nothing can populate this type.
pub struct UnsupportedStrategy;

impl UnsupportedStrategy {
    pub fn apply<T>(
        self,
        _slot: &mut T,
        binding: &Binding,
        _env: &Env,
        unwrapped: &'static str,
    ) -> Result<(), FieldError> {
        Err(binding.reject(unwrapped))
    }
}
