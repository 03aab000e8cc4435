//! Function discovery and type-context enrichment.

use crate::analysis::{FieldList, FileTree, FuncDecl};

use super::catalog::SymbolCatalog;
use super::record::{FunctionRecord, RecordArena, RecordId, NOT_EXIST};

/// A declaration bound to the record created for it.
#[derive(Debug, Clone, Copy)]
pub struct Binding<'t> {
    pub id: RecordId,
    pub decl: &'t FuncDecl,
}

/// Output of the discovery pass.
#[derive(Debug)]
pub struct Collected<'t> {
    pub records: RecordArena,
    pub bindings: Vec<Binding<'t>>,
}

/// Create one record per function/method declaration, in declaration order.
///
/// `imports` is copied verbatim into every record.
pub fn collect<'t>(tree: &'t FileTree, catalog: &SymbolCatalog, imports: &str) -> Collected<'t> {
    let mut records = RecordArena::new();
    let mut bindings = Vec::new();

    for decl in tree.functions() {
        let record = FunctionRecord {
            name: decl.name.clone(),
            receiver: describe_receiver(decl, catalog),
            params: describe_params(&decl.params, catalog),
            returns: decl
                .results
                .as_ref()
                .map(|results| append_type_context(results.render(), results, catalog))
                .filter(|text| !text.is_empty()),
            doc: decl.doc.clone(),
            body: String::new(),
            start_line: decl.span.start_line,
            end_line: decl.span.end_line,
            signature: build_signature(decl),
            import_package: imports.to_string(),
            before_funcs: Vec::new(),
            after_funcs: Vec::new(),
        };
        let id = records.push(record);
        bindings.push(Binding { id, decl });
    }

    tracing::debug!(records = records.len(), "collected function records");

    Collected { records, bindings }
}

/// Receiver type text; a cataloged type is replaced by its declaration and methods.
fn describe_receiver(decl: &FuncDecl, catalog: &SymbolCatalog) -> Option<String> {
    let field = decl.receiver.as_ref()?.fields.first()?;
    let rendered = field.ty.to_string();
    let type_name = field.ty.base_name();

    let Some(def) = catalog.definition(&type_name) else {
        return Some(rendered);
    };
    let mut text = def.to_string();
    if let Some(block) = catalog.method_block(&type_name) {
        text.push_str("\n\n");
        text.push_str(&block);
    }
    Some(text)
}

fn describe_params(params: &FieldList, catalog: &SymbolCatalog) -> String {
    let rendered = params.render();
    if rendered.is_empty() {
        return NOT_EXIST.to_string();
    }
    append_type_context(rendered, params, catalog)
}

/// Append the declaration and methods of every cataloged field type.
fn append_type_context(mut text: String, fields: &FieldList, catalog: &SymbolCatalog) -> String {
    for field in &fields.fields {
        let type_name = field.ty.base_name();
        let Some(def) = catalog.definition(&type_name) else {
            continue;
        };
        text.push_str(&format!("\n\n// Type {} definition:\n{}", type_name, def));
        if let Some(block) = catalog.method_block(&type_name) {
            text.push('\n');
            text.push_str(&block);
        }
    }
    text
}

/// Rebuild `func (recv) Name(params) results` from the declaration.
///
/// Each list is rendered as a whole, so a list with several entries keeps its
/// own parentheses inside the wrapper: `func F((a int, b int)) ((int, error))`.
pub fn build_signature(decl: &FuncDecl) -> String {
    let mut sig = String::from("func ");

    if let Some(receiver) = decl.receiver.as_ref().filter(|r| !r.is_empty()) {
        sig.push('(');
        sig.push_str(&receiver.render());
        sig.push_str(") ");
    }

    sig.push_str(&decl.name);
    sig.push('(');
    sig.push_str(&decl.params.render());
    sig.push(')');

    if let Some(results) = &decl.results {
        let returns = results.render();
        if returns.contains(',') {
            sig.push_str(" (");
            sig.push_str(&returns);
            sig.push(')');
        } else {
            sig.push(' ');
            sig.push_str(&returns);
        }
    }

    sig
}
