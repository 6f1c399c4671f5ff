// src/tables/order.rs
//
// Emission order and identifier assignment.
//
// The scanner walks the descriptor array front to back and takes the first
// literal that matches at the cursor. A literal therefore has to come before
// every literal that is a proper prefix of it ("===" before "==" before "=").

use std::cmp::Ordering;

use super::registry::Registry;
use super::tokens::{TokenDefinition, TokenDescriptor};

/// Longer literals first; equal lengths by ascending bytes.
///
/// A proper prefix is always strictly shorter than the literal it prefixes,
/// so length-descending alone enforces the prefix rule. The byte tie-break
/// only makes the order total.
pub fn emission_order(a: &TokenDefinition, b: &TokenDefinition) -> Ordering {
    b.literal
        .len()
        .cmp(&a.literal.len())
        .then_with(|| a.literal.as_bytes().cmp(b.literal.as_bytes()))
}

/// Result of ordering a registry: descriptors in emission order plus every
/// symbolic name with its identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedTokens {
    descriptors: Vec<TokenDescriptor>,
    extra: Vec<(String, u32)>,
}

impl OrderedTokens {
    /// Literal-backed descriptors, in emission order. Ids are `0..len`.
    pub fn descriptors(&self) -> &[TokenDescriptor] {
        &self.descriptors
    }

    /// Extra names with their ids, continuing after the descriptors.
    pub fn extra_names(&self) -> &[(String, u32)] {
        &self.extra
    }

    /// Every `(name, id)` in id order.
    pub fn names(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.descriptors
            .iter()
            .map(|d| (d.name.as_str(), d.id))
            .chain(self.extra.iter().map(|(n, id)| (n.as_str(), *id)))
    }

    /// Total number of identifiers.
    pub fn len(&self) -> usize {
        self.descriptors.len() + self.extra.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn assign_ids(registry: &Registry) -> OrderedTokens {
    let mut sorted: Vec<&TokenDefinition> = registry.definitions().iter().collect();
    sorted.sort_by(|a, b| emission_order(a, b));

    let descriptors: Vec<TokenDescriptor> = sorted
        .into_iter()
        .enumerate()
        .map(|(i, def)| TokenDescriptor::from_definition(def, i as u32))
        .collect();

    let base = descriptors.len() as u32;
    let extra: Vec<(String, u32)> = registry
        .extra_names()
        .iter()
        .enumerate()
        .map(|(i, name)| (name.clone(), base + i as u32))
        .collect();
    debug_assert_eq!(descriptors.len() + extra.len(), registry.id_count());

    log::debug!(
        "[order] assigned {} ids ({} literal-backed)",
        registry.id_count(),
        descriptors.len()
    );

    OrderedTokens { descriptors, extra }
}

/// What the downstream scanner does at one position: the first descriptor
/// whose literal starts `input`.
pub fn first_match<'a>(descriptors: &'a [TokenDescriptor], input: &[u8]) -> Option<&'a TokenDescriptor> {
    descriptors
        .iter()
        .find(|d| input.starts_with(d.literal.as_bytes()))
}

/// Pairs `(earlier, later)` where `earlier` is a proper prefix of `later` and
/// so keeps the scanner from ever producing `later`.
pub fn shadowed_literals(descriptors: &[TokenDescriptor]) -> Vec<(&TokenDescriptor, &TokenDescriptor)> {
    let mut out = Vec::new();
    for (i, earlier) in descriptors.iter().enumerate() {
        for later in &descriptors[i + 1..] {
            if later.literal.len() > earlier.literal.len()
                && later.literal.as_bytes().starts_with(earlier.literal.as_bytes())
            {
                out.push((earlier, later));
            }
        }
    }
    out
}
