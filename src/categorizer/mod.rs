//! Categorizer tagging
//!
//! A categorizer is a method of a disease stage that classifies one risk
//! factor of a [`Patient`]. Methods are carried as [`Method`] values pairing
//! the callable with its identifier and, once tagged, the name of the risk
//! factor it produces. Tagging normally happens at definition time through the
//! `#[categorizer("...")]` helper attribute of `#[disease_stage]`; the free
//! functions below are the same operations for hand-built stages.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::error::{Result, StageError};
use crate::patient::Patient;

/// Discrete risk category produced by a categorizer (0 and 1 in the bundled stages)
pub type Category = i32;

type CategorizeFn<S> = dyn Fn(&S, &Patient) -> Category + Send + Sync;

/// A stage method that may be tagged as the categorizer of a risk factor
pub struct Method<S> {
    ident: &'static str,
    func: Arc<CategorizeFn<S>>,
    risk_factor: Option<Cow<'static, str>>,
}

impl<S: 'static> Method<S> {
    /// Wrap an untagged method
    pub fn new<F>(ident: &'static str, func: F) -> Self
    where
        F: Fn(&S, &Patient) -> Category + Send + Sync + 'static,
    {
        Self {
            ident,
            func: Arc::new(func),
            risk_factor: None,
        }
    }

    /// Re-express this method on a stage type that embeds `S`
    ///
    /// The identifier and tag are kept, so a parent's categorizer keeps
    /// classifying under the same risk factor on the derived stage.
    #[must_use]
    pub fn lift<D>(self) -> Method<D>
    where
        D: AsRef<S> + 'static,
    {
        let func = self.func;
        Method {
            ident: self.ident,
            func: Arc::new(move |stage: &D, patient: &Patient| func(stage.as_ref(), patient)),
            risk_factor: self.risk_factor,
        }
    }
}

impl<S> Method<S> {
    /// Identifier of the wrapped method
    #[must_use]
    pub const fn ident(&self) -> &'static str {
        self.ident
    }

    /// Risk factor this method is tagged with, if any
    #[must_use]
    pub fn risk_factor(&self) -> Option<&str> {
        self.risk_factor.as_deref()
    }

    /// Tag this method, replacing any earlier tag
    #[must_use]
    pub fn tagged(mut self, risk_factor: impl Into<Cow<'static, str>>) -> Self {
        self.risk_factor = Some(risk_factor.into());
        self
    }

    /// Invoke the method on `stage`
    pub fn invoke(&self, stage: &S, patient: &Patient) -> Category {
        (self.func)(stage, patient)
    }

    /// Whether both methods wrap the same callable
    pub(crate) fn same_callable(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }

    pub(crate) fn into_tagged(self) -> Result<(Cow<'static, str>, Self)> {
        match self.risk_factor.clone() {
            Some(risk_factor) => Ok((risk_factor, self)),
            None => Err(StageError::Untagged { method: self.ident }),
        }
    }
}

impl<S> Clone for Method<S> {
    fn clone(&self) -> Self {
        Self {
            ident: self.ident,
            func: Arc::clone(&self.func),
            risk_factor: self.risk_factor.clone(),
        }
    }
}

impl<S> fmt::Debug for Method<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Method")
            .field("ident", &self.ident)
            .field("risk_factor", &self.risk_factor)
            .finish_non_exhaustive()
    }
}

/// Tag `method` as the categorizer of `risk_factor`
///
/// The method is returned, not invoked. Tagging an already tagged method
/// replaces its risk factor.
pub fn tag<S>(risk_factor: impl Into<Cow<'static, str>>, method: Method<S>) -> Method<S> {
    method.tagged(risk_factor)
}

/// Whether `method` carries a categorizer tag
pub fn is_tagged<S>(method: &Method<S>) -> bool {
    method.risk_factor.is_some()
}

/// Risk factor `method` was tagged with
pub fn tag_name<S>(method: &Method<S>) -> Result<&str> {
    method
        .risk_factor
        .as_deref()
        .ok_or(StageError::Untagged {
            method: method.ident,
        })
}
