//! Disease-stage instances
//!
//! A [`Stage`] owns a disease-stage value together with the registry its type
//! declares. The registry is built exactly once, when the stage is created,
//! and is only mutable through [`Stage::install`], which requires exclusive
//! access. Sharing a built stage across threads for reads is the caller's
//! decision; the stage itself holds no interior mutability.

use std::fmt;

use itertools::Itertools;
use log::{debug, trace};
use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::categorizer::{Category, Method};
use crate::error::{Result, StageError};
use crate::patient::Patient;
use crate::registry::{DiseaseStage, Registry};

/// A disease stage with its categorizer registry
pub struct Stage<S> {
    definition: S,
    registry: Registry<S>,
}

impl<S: DiseaseStage> Stage<S> {
    /// Create the stage from its default definition
    #[must_use]
    pub fn new() -> Self
    where
        S: Default,
    {
        Self::from_definition(S::default())
    }

    /// Create the stage around an existing definition value
    #[must_use]
    pub fn from_definition(definition: S) -> Self {
        let registry = Registry::<S>::declared();
        debug!(
            "Built stage {} with {} categorizers: {}",
            S::NAME,
            registry.len(),
            registry.risk_factors().join(", ")
        );
        Self {
            definition,
            registry,
        }
    }

    /// Display name of the stage
    #[must_use]
    pub const fn name(&self) -> &'static str {
        S::NAME
    }

    /// The wrapped definition value
    #[must_use]
    pub const fn definition(&self) -> &S {
        &self.definition
    }

    /// The stage's registry
    #[must_use]
    pub const fn registry(&self) -> &Registry<S> {
        &self.registry
    }

    /// Install a tagged method on this stage only
    pub fn install(&mut self, method: Method<S>) -> Result<&mut Self> {
        self.registry.install(method)?;
        Ok(self)
    }

    /// Categorizer for `risk_factor`, bound to this stage
    pub fn categorizer(&self, risk_factor: &str) -> Result<BoundCategorizer<'_, S>> {
        let Some((registered, method)) = self.registry.get_key_value(risk_factor) else {
            debug!("Stage {} has no categorizer for '{}'", S::NAME, risk_factor);
            return Err(StageError::unknown_risk_factor(S::NAME, risk_factor));
        };
        Ok(BoundCategorizer {
            risk_factor: registered,
            stage: &self.definition,
            method,
        })
    }

    /// Categorize `patient` for `risk_factor`
    pub fn categorize(&self, risk_factor: &str, patient: &Patient) -> Result<Category> {
        let category = self.categorizer(risk_factor)?.call(patient);
        trace!("{}, {} -> {}", S::NAME, risk_factor, category);
        Ok(category)
    }

    /// Registered risk factor names
    #[must_use]
    pub fn risk_factors(&self) -> FxHashSet<&str> {
        self.registry.risk_factors().collect()
    }

    /// Registered (risk factor, bound categorizer) pairs in registry order
    pub fn categorizer_entries(&self) -> impl Iterator<Item = (&str, BoundCategorizer<'_, S>)> + '_ {
        self.registry.iter().map(move |(risk_factor, method)| {
            (
                risk_factor,
                BoundCategorizer {
                    risk_factor,
                    stage: &self.definition,
                    method,
                },
            )
        })
    }

    /// Categorize `patient` for every registered risk factor
    #[must_use]
    pub fn categorize_all(&self, patient: &Patient) -> Vec<Categorization> {
        self.categorizer_entries()
            .map(|(risk_factor, categorizer)| Categorization {
                stage: S::NAME,
                risk_factor: risk_factor.to_string(),
                category: categorizer.call(patient),
            })
            .collect()
    }
}

impl<S: DiseaseStage + Default> Default for Stage<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: DiseaseStage> fmt::Debug for Stage<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stage")
            .field("name", &S::NAME)
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

/// A categorizer bound to the stage it was registered on
pub struct BoundCategorizer<'a, S> {
    risk_factor: &'a str,
    stage: &'a S,
    method: &'a Method<S>,
}

impl<S> BoundCategorizer<'_, S> {
    /// Risk factor this categorizer classifies
    #[must_use]
    pub const fn risk_factor(&self) -> &str {
        self.risk_factor
    }

    /// Identifier of the underlying method
    #[must_use]
    pub const fn ident(&self) -> &'static str {
        self.method.ident()
    }

    /// Categorize `patient`
    pub fn call(&self, patient: &Patient) -> Category {
        self.method.invoke(self.stage, patient)
    }
}

impl<S> fmt::Debug for BoundCategorizer<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundCategorizer")
            .field("risk_factor", &self.risk_factor)
            .field("method", self.method)
            .finish_non_exhaustive()
    }
}

/// Outcome of one categorizer applied to one patient
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Categorization {
    /// Display name of the stage
    pub stage: &'static str,
    /// Classified risk factor
    pub risk_factor: String,
    /// Resulting category
    pub category: Category,
}

impl fmt::Display for Categorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {} -> {}", self.stage, self.risk_factor, self.category)
    }
}

/// Object-safe view of a [`Stage`] for holding stages of different types together
pub trait Classify {
    /// Display name of the stage
    fn stage_name(&self) -> &'static str;

    /// Categorize `patient` for `risk_factor`
    fn classify(&self, risk_factor: &str, patient: &Patient) -> Result<Category>;

    /// Registered risk factors in registry order
    fn registered_risk_factors(&self) -> Vec<&str>;

    /// Categorize `patient` for every registered risk factor
    fn classify_all(&self, patient: &Patient) -> Vec<Categorization>;
}

impl<S: DiseaseStage> Classify for Stage<S> {
    fn stage_name(&self) -> &'static str {
        S::NAME
    }

    fn classify(&self, risk_factor: &str, patient: &Patient) -> Result<Category> {
        self.categorize(risk_factor, patient)
    }

    fn registered_risk_factors(&self) -> Vec<&str> {
        self.registry.risk_factors().collect()
    }

    fn classify_all(&self, patient: &Patient) -> Vec<Categorization> {
        self.categorize_all(patient)
    }
}

impl fmt::Debug for dyn Classify {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Classify({})", self.stage_name())
    }
}
