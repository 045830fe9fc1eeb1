//! Categorizer registries and disease-stage declarations
//!
//! Every disease-stage type implements [`DiseaseStage`], normally through the
//! `#[disease_stage]` attribute, whose `declare_categorizers` fills a
//! [`Registry`] with the type's tagged methods. A derived stage first inherits
//! the complete declarations of its parent (which in turn inherits its own
//! parent), lifted onto the derived type, and then declares its own methods.
//! Because installation overwrites on an exact risk-factor match, the most
//! derived declaration is always the one left in the registry.

use std::borrow::Cow;
use std::fmt;

use log::debug;
use rustc_hash::FxHashMap;

use crate::categorizer::Method;
use crate::error::Result;

/// A disease-stage type that declares categorizers
pub trait DiseaseStage: Sized + 'static {
    /// Display name of the stage
    const NAME: &'static str;

    /// Install this type's categorizers, inherited ones first
    fn declare_categorizers(registry: &mut Registry<Self>);
}

/// Insertion-ordered mapping from risk factor to categorizer
///
/// Replacing an existing risk factor keeps its original position, so
/// iteration follows first declaration order with overrides in place.
pub struct Registry<S> {
    entries: Vec<(Cow<'static, str>, Method<S>)>,
    index: FxHashMap<Cow<'static, str>, usize>,
}

impl<S: 'static> Registry<S> {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Build the registry `S` declares for itself
    #[must_use]
    pub fn declared() -> Self
    where
        S: DiseaseStage,
    {
        let mut registry = Self::new();
        S::declare_categorizers(&mut registry);
        registry
    }

    /// Install a tagged method, replacing any categorizer for the same risk factor
    ///
    /// Installing the same method twice leaves the registry as installing it once.
    pub fn install(&mut self, method: Method<S>) -> Result<&mut Self> {
        let (risk_factor, method) = method.into_tagged()?;
        self.insert(risk_factor, method);
        Ok(self)
    }

    /// Tag `method` with `risk_factor` and install it
    pub fn declare(
        &mut self,
        risk_factor: impl Into<Cow<'static, str>>,
        method: Method<S>,
    ) -> &mut Self {
        let risk_factor = risk_factor.into();
        let method = method.tagged(risk_factor.clone());
        self.insert(risk_factor, method);
        self
    }

    /// Install every categorizer `P` declares, lifted onto `S`
    pub fn inherit<P>(&mut self) -> &mut Self
    where
        P: DiseaseStage,
        S: AsRef<P>,
    {
        for (risk_factor, method) in Registry::<P>::declared().entries {
            self.insert(risk_factor, method.lift::<S>());
        }
        self
    }

    fn insert(&mut self, risk_factor: Cow<'static, str>, method: Method<S>) {
        if let Some(&slot) = self.index.get(&*risk_factor) {
            let replaced = &self.entries[slot].1;
            if !replaced.same_callable(&method) {
                debug!(
                    "Categorizer for '{}' overridden: {} -> {}",
                    risk_factor,
                    replaced.ident(),
                    method.ident()
                );
            }
            self.entries[slot].1 = method;
        } else {
            debug!("Installing categorizer {} for '{}'", method.ident(), risk_factor);
            self.index.insert(risk_factor.clone(), self.entries.len());
            self.entries.push((risk_factor, method));
        }
    }

    /// Categorizer registered for `risk_factor`
    #[must_use]
    pub fn get(&self, risk_factor: &str) -> Option<&Method<S>> {
        self.index
            .get(risk_factor)
            .map(|&slot| &self.entries[slot].1)
    }

    /// Registered risk factor and categorizer for `risk_factor`
    #[must_use]
    pub fn get_key_value(&self, risk_factor: &str) -> Option<(&str, &Method<S>)> {
        self.index.get(risk_factor).map(|&slot| {
            let (registered, method) = &self.entries[slot];
            (&**registered, method)
        })
    }

    /// Whether a categorizer is registered for `risk_factor`
    #[must_use]
    pub fn contains(&self, risk_factor: &str) -> bool {
        self.index.contains_key(risk_factor)
    }

    /// Number of registered risk factors
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no categorizer is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered risk factors in registry order
    pub fn risk_factors(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(risk_factor, _)| &**risk_factor)
    }

    /// Registered (risk factor, categorizer) pairs in registry order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Method<S>)> + '_ {
        self.entries
            .iter()
            .map(|(risk_factor, method)| (&**risk_factor, method))
    }
}

impl<S: 'static> Default for Registry<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Clone for Registry<S> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            index: self.index.clone(),
        }
    }
}

impl<S> fmt::Debug for Registry<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(risk_factor, method)| (risk_factor, method.ident())))
            .finish()
    }
}
