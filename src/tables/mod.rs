// src/tables/mod.rs
pub mod builtin;
pub mod emit;
pub mod escape;
pub mod io;
pub mod order;
pub mod registry;
pub mod tokens;

use std::path::Path;

use thiserror::Error;

pub use emit::{CHeader, EmitOptions, Emitter, RustModule};
pub use escape::{UnescapeError, escape_literal, unescape_literal};
pub use io::{WriteError, load_registry_file, load_registry_json_bytes, save_manifest_json, write_atomic};
pub use order::{OrderedTokens, assign_ids, emission_order, first_match, shadowed_literals};
pub use registry::{RawDefinition, Registry, RegistryError, RegistrySpec};
pub use tokens::{Category, TokenDefinition, TokenDescriptor};

#[derive(Debug, Error)]
pub enum TableError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("`{shadowing}` would shadow `{shadowed}` in the descriptor table")]
    Shadowed { shadowing: String, shadowed: String },

    #[error(transparent)]
    Write(#[from] WriteError),
}

fn order_checked(registry: &Registry) -> Result<OrderedTokens, TableError> {
    let ordered = assign_ids(registry);
    if let Some((shadowing, shadowed)) = shadowed_literals(ordered.descriptors()).first() {
        return Err(TableError::Shadowed {
            shadowing: shadowing.literal.clone(),
            shadowed: shadowed.literal.clone(),
        });
    }
    Ok(ordered)
}

/// Validates and orders a registry, then proves no literal is shadowed.
pub fn order_registry(spec: &RegistrySpec) -> Result<OrderedTokens, TableError> {
    order_checked(&Registry::validate(spec)?)
}

fn compile_ordered(
    spec: &RegistrySpec,
    emitter: &dyn Emitter,
) -> Result<(OrderedTokens, String), TableError> {
    let registry = Registry::validate(spec)?;
    registry.check_reserved(emitter.reserved_names().as_slice())?;
    let ordered = order_checked(&registry)?;
    let text = emitter.emit(&ordered);
    log::info!(
        "[tables] {} descriptors, {} ids, {} bytes of .{}",
        ordered.descriptors().len(),
        ordered.len(),
        text.len(),
        emitter.extension()
    );
    Ok((ordered, text))
}

/// The whole pipeline as one pure function: registry in, source text out.
pub fn compile_tables(spec: &RegistrySpec, emitter: &dyn Emitter) -> Result<String, TableError> {
    compile_ordered(spec, emitter).map(|(_, text)| text)
}

/// Compiles and atomically replaces `path`. Nothing is written unless the
/// whole compile succeeds. Returns the ordered tokens for follow-up outputs.
pub fn write_tables(
    spec: &RegistrySpec,
    emitter: &dyn Emitter,
    path: &Path,
) -> Result<OrderedTokens, TableError> {
    let (ordered, text) = compile_ordered(spec, emitter)?;
    write_atomic(path, text.as_bytes())?;
    Ok(ordered)
}
