// src/application/ports/codes.rs

/// Produces short-code candidates. Uniqueness is checked by the caller
/// against the backing store, not here.
pub trait CodeGenerator: Send + Sync {
    fn generate(&self) -> String;
}
