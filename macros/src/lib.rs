//! Procedural macros for the disease-stage crate
//!
//! This crate provides the definition-time tagging of categorizer methods,
//! so disease-stage types never register their categorizers by hand.

use proc_macro::TokenStream;

// Import modules
mod disease_stage_impl;
mod utils;

/// Attribute macro declaring a disease stage from an inherent `impl` block
///
/// Methods marked `#[categorizer("risk_factor")]` (or
/// `#[categorizer(risk_factor = "...")]`) are tagged as the categorizer of
/// that risk factor. Each must take `&self` and a `&Patient` and return a
/// `Category`. The macro generates the `DiseaseStage` implementation that
/// declares them, after the categorizers of the parent stage named by
/// `extends`, if any.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Debug, Default)]
/// pub struct StrokeStageA;
///
/// #[disease_stage]
/// impl StrokeStageA {
///     #[categorizer("age")]
///     fn categorize_age(&self, patient: &Patient) -> Category {
///         if patient.age < 50.0 { 0 } else { 1 }
///     }
/// }
///
/// #[derive(Debug, Default)]
/// pub struct HemorrhagicStrokeStageA {
///     base: StrokeStageA,
/// }
///
/// impl AsRef<StrokeStageA> for HemorrhagicStrokeStageA {
///     fn as_ref(&self) -> &StrokeStageA {
///         &self.base
///     }
/// }
///
/// #[disease_stage(extends = "StrokeStageA")]
/// impl HemorrhagicStrokeStageA {
///     #[categorizer("blood_pressure")]
///     fn categorize_blood_pressure(&self, patient: &Patient) -> Category {
///         if patient.systolic_blood_pressure < 170.0 { 0 } else { 1 }
///     }
/// }
/// ```
#[proc_macro_attribute]
pub fn disease_stage(args: TokenStream, input: TokenStream) -> TokenStream {
    disease_stage_impl::process_disease_stage(args, input)
}
