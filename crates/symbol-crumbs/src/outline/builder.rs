use tower_lsp::lsp_types::{DocumentSymbol, DocumentSymbolResponse, Range, SymbolInformation};
use tracing::debug;

use crate::text_pos::position_key;

use super::types::{NodeId, Outline, SymbolNode};

impl Outline {
    /// Build an outline from a nested `documentSymbol` result.
    pub fn build(symbols: &[DocumentSymbol]) -> Self {
        let mut outline = Self::default();
        outline.roots = outline.build_level(symbols, None);
        outline
    }

    /// Build from either response shape. Flat `SymbolInformation` lists are
    /// nested by range containment first.
    pub fn from_response(response: DocumentSymbolResponse) -> Self {
        match response {
            DocumentSymbolResponse::Nested(symbols) => Self::build(&symbols),
            DocumentSymbolResponse::Flat(information) => {
                let count = information.len();
                let nested = nest_flat_symbols(information);
                debug!("[outline] nested {count} flat symbols into {} roots", nested.len());
                Self::build(&nested)
            },
        }
    }

    /// Append `symbols` as nodes under `parent`, mirroring input order.
    ///
    /// Returns the new ids in order; the caller stores them as the parent's
    /// children (or as roots).
    pub(crate) fn build_level(
        &mut self,
        symbols: &[DocumentSymbol],
        parent: Option<NodeId>,
    ) -> Vec<NodeId> {
        let depth = parent.map_or(0, |p| self.node(p).depth + 1);
        let mut ids = Vec::with_capacity(symbols.len());

        for (offset, symbol) in symbols.iter().enumerate() {
            let id = NodeId(self.nodes.len());
            self.nodes.push(SymbolNode {
                name: symbol.name.clone(),
                detail: symbol.detail.clone(),
                kind: symbol.kind,
                range: symbol.range,
                selection_range: symbol.selection_range,
                parent,
                children: Vec::new(),
                index: offset + 1,
                depth,
            });

            let children = symbol.children.as_deref().unwrap_or_default();
            let child_ids = self.build_level(children, Some(id));
            self.nodes[id.0].children = child_ids;
            ids.push(id);
        }

        ids
    }
}

fn encloses(
    outer: &Range,
    inner: &Range,
) -> bool {
    position_key(outer.start) <= position_key(inner.start) && position_key(inner.end) <= position_key(outer.end)
}

/// Turn a flat symbol list into a hierarchy using range containment.
pub(crate) fn nest_flat_symbols(mut information: Vec<SymbolInformation>) -> Vec<DocumentSymbol> {
    // Outer symbols first when two start at the same place.
    information.sort_by_key(|info| {
        let range = info.location.range;
        (position_key(range.start), std::cmp::Reverse(position_key(range.end)))
    });

    let mut roots = Vec::new();
    let mut stack: Vec<DocumentSymbol> = Vec::new();

    for info in information {
        let symbol = document_symbol_from_information(info);
        while let Some(top) = stack.last() {
            if encloses(&top.range, &symbol.range) {
                break;
            }
            if let Some(done) = stack.pop() {
                attach(&mut stack, &mut roots, done);
            }
        }
        stack.push(symbol);
    }

    while let Some(done) = stack.pop() {
        attach(&mut stack, &mut roots, done);
    }

    roots
}

fn attach(
    stack: &mut [DocumentSymbol],
    roots: &mut Vec<DocumentSymbol>,
    symbol: DocumentSymbol,
) {
    match stack.last_mut() {
        Some(parent) => parent.children.get_or_insert_with(Vec::new).push(symbol),
        None => roots.push(symbol),
    }
}

fn document_symbol_from_information(info: SymbolInformation) -> DocumentSymbol {
    let range = info.location.range;
    DocumentSymbol {
        name: info.name,
        detail: info.container_name,
        kind: info.kind,
        tags: info.tags,
        #[allow(deprecated)]
        deprecated: None,
        range,
        selection_range: range,
        children: None,
    }
}

#[cfg(test)]
#[path = "../../tests/src/outline/builder_tests.rs"]
mod tests;
