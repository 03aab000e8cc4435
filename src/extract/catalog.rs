//! Type declarations and the methods bound to them.

use std::collections::HashMap;

use crate::analysis::FileTree;

/// Literal type declarations and per-type method names for one file.
#[derive(Debug, Clone, Default)]
pub struct SymbolCatalog {
    /// Type name -> declaration text (whole source lines).
    pub type_defs: HashMap<String, String>,
    /// Type name -> method names in declaration order.
    pub type_methods: HashMap<String, Vec<String>>,
}

impl SymbolCatalog {
    /// Declaration text of a cataloged type.
    pub fn definition(&self, type_name: &str) -> Option<&str> {
        self.type_defs.get(type_name).map(String::as_str)
    }

    /// Methods bound to a type, if any were declared.
    pub fn methods(&self, type_name: &str) -> Option<&[String]> {
        self.type_methods.get(type_name).map(Vec::as_slice)
    }

    /// The `// Methods:` listing, one `- name` line per method.
    pub fn method_block(&self, type_name: &str) -> Option<String> {
        let methods = self.methods(type_name)?;
        let mut block = String::from("// Methods:\n");
        for method in methods {
            block.push_str("- ");
            block.push_str(method);
            block.push('\n');
        }
        Some(block)
    }
}

/// Build the catalog in one pass over the tree.
///
/// A repeated type name keeps its last declaration.
pub fn build_catalog(tree: &FileTree, lines: &[String]) -> SymbolCatalog {
    let mut catalog = SymbolCatalog::default();

    for spec in tree.type_specs() {
        if let Some(text) = spec.span.slice_lines(lines) {
            catalog.type_defs.insert(spec.name.clone(), text);
        }
    }

    for func in tree.functions() {
        let Some(receiver) = &func.receiver else {
            continue;
        };
        for field in &receiver.fields {
            catalog
                .type_methods
                .entry(field.ty.base_name())
                .or_default()
                .push(func.name.clone());
        }
    }

    tracing::debug!(
        types = catalog.type_defs.len(),
        receivers = catalog.type_methods.len(),
        "built symbol catalog"
    );

    catalog
}
