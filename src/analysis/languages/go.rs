//! Go front end using tree-sitter.
//!
//! Lowers a Go source file into a [`FileTree`]:
//! - Imports (path literals, verbatim)
//! - Type specs, including those declared inside function bodies
//! - Function and method declarations with receiver/parameter/result lists
//! - Body spans and doc comments

use std::path::Path;

use streaming_iterator::StreamingIterator;
use tree_sitter::{Language, Node, Parser, Query, QueryCursor};

use crate::analysis::{
    Declaration, Field, FieldList, FileTree, FuncDecl, Import, LanguageAnalyzer, ParsedFile,
    Span, TypeExpr, TypeSpec,
};

/// Tree-sitter query for extracting imports.
const IMPORT_QUERY: &str = r#"
(import_spec
  name: (_)? @alias
  path: (_) @path
) @import
"#;

/// Tree-sitter query for package declaration.
const PACKAGE_QUERY: &str = r#"
(package_clause
  (package_identifier) @package_name
)
"#;

/// Go language front end.
pub struct GoAnalyzer {
    language: Language,
}

impl GoAnalyzer {
    /// Create a new Go analyzer.
    pub fn new() -> Self {
        Self {
            language: tree_sitter_go::LANGUAGE.into(),
        }
    }

    /// Create a new parser for this call.
    fn create_parser(&self) -> anyhow::Result<Parser> {
        let mut parser = Parser::new();
        parser.set_language(&self.language)?;
        Ok(parser)
    }

    /// Extract the package name from a parsed file.
    fn extract_package(&self, parsed: &ParsedFile) -> Option<String> {
        let query = Query::new(&self.language, PACKAGE_QUERY).ok()?;
        let mut cursor = QueryCursor::new();
        let mut matches = cursor.matches(&query, parsed.tree.root_node(), &parsed.source[..]);

        if let Some(m) = matches.next() {
            for capture in m.captures {
                let name = query.capture_names()[capture.index as usize];
                if name == "package_name" {
                    return Some(parsed.node_text(capture.node).to_string());
                }
            }
        }
        None
    }

    /// Extract imports in source order. Duplicates are kept.
    fn extract_imports(&self, parsed: &ParsedFile) -> anyhow::Result<Vec<Import>> {
        let query = Query::new(&self.language, IMPORT_QUERY)?;
        let mut cursor = QueryCursor::new();
        let mut matches = cursor.matches(&query, parsed.tree.root_node(), &parsed.source[..]);

        let mut imports = Vec::new();

        while let Some(m) = matches.next() {
            let mut path = String::new();
            let mut alias = None;
            let mut import_node = None;

            for capture in m.captures {
                let name = query.capture_names()[capture.index as usize];
                match name {
                    "path" => path = parsed.node_text(capture.node).to_string(),
                    "alias" => alias = Some(parsed.node_text(capture.node).to_string()),
                    "import" => import_node = Some(capture.node),
                    _ => {}
                }
            }

            if path.is_empty() {
                continue;
            }
            if let Some(node) = import_node {
                imports.push(Import {
                    path,
                    alias,
                    span: Span::from_node(node),
                });
            }
        }

        imports.sort_by_key(|i| i.span.start_byte);

        Ok(imports)
    }

    /// Lower top-level declarations in source order.
    fn extract_declarations(&self, parsed: &ParsedFile) -> Vec<Declaration> {
        let root = parsed.tree.root_node();
        let mut declarations = Vec::new();

        for node in root.named_children(&mut root.walk()) {
            match node.kind() {
                "function_declaration" | "method_declaration" => {
                    declarations.push(Declaration::Function(self.lower_function(parsed, node)));
                }
                "type_declaration" => {
                    for spec in node.named_children(&mut node.walk()) {
                        if let Some(spec) = self.lower_type_spec(parsed, spec) {
                            declarations.push(Declaration::Type(spec));
                        }
                    }
                }
                _ => {}
            }
        }

        declarations
    }

    fn lower_type_spec(&self, parsed: &ParsedFile, node: Node) -> Option<TypeSpec> {
        if !matches!(node.kind(), "type_spec" | "type_alias") {
            return None;
        }
        let name = node.child_by_field_name("name")?;
        Some(TypeSpec {
            name: parsed.node_text(name).to_string(),
            span: Span::from_node(node),
        })
    }

    fn lower_function(&self, parsed: &ParsedFile, node: Node) -> FuncDecl {
        let name = node
            .child_by_field_name("name")
            .map(|n| parsed.node_text(n).to_string())
            .unwrap_or_default();

        let receiver = node
            .child_by_field_name("receiver")
            .map(|n| self.lower_field_list(parsed, n));

        let params = node
            .child_by_field_name("parameters")
            .map(|n| self.lower_field_list(parsed, n))
            .unwrap_or_default();

        // `func f() int` has a bare type as its result; treat it as a one-field list.
        let results = node.child_by_field_name("result").map(|n| {
            if n.kind() == "parameter_list" {
                self.lower_field_list(parsed, n)
            } else {
                FieldList::new(vec![Field::unnamed(self.lower_type(parsed, n))])
            }
        });

        let body_node = node.child_by_field_name("body");
        let mut nested_types = Vec::new();
        if let Some(body) = body_node {
            self.collect_nested_types(parsed, body, &mut nested_types);
        }

        FuncDecl {
            name,
            span: Span::from_node(node),
            receiver,
            params,
            results,
            body: body_node.map(Span::from_node),
            doc: self.extract_doc(parsed, node),
            nested_types,
        }
    }

    fn lower_field_list(&self, parsed: &ParsedFile, node: Node) -> FieldList {
        let mut fields = Vec::new();

        for child in node.named_children(&mut node.walk()) {
            let names: Vec<String> = child
                .children_by_field_name("name", &mut child.walk())
                .map(|n| parsed.node_text(n).to_string())
                .collect();

            match child.kind() {
                "parameter_declaration" => {
                    if let Some(ty) = child.child_by_field_name("type") {
                        fields.push(Field {
                            names,
                            ty: self.lower_type(parsed, ty),
                        });
                    }
                }
                "variadic_parameter_declaration" => {
                    fields.push(Field {
                        names,
                        ty: TypeExpr::Other("variadic".to_string()),
                    });
                }
                _ => {}
            }
        }

        FieldList::new(fields)
    }

    fn lower_type(&self, parsed: &ParsedFile, node: Node) -> TypeExpr {
        match node.kind() {
            "type_identifier" | "identifier" => TypeExpr::Ident(parsed.node_text(node).to_string()),
            "qualified_type" => {
                let package = node.child_by_field_name("package");
                let name = node.child_by_field_name("name");
                match (package, name) {
                    (Some(package), Some(name)) => TypeExpr::Qualified {
                        package: parsed.node_text(package).to_string(),
                        name: parsed.node_text(name).to_string(),
                    },
                    _ => TypeExpr::Other(node.kind().to_string()),
                }
            }
            "pointer_type" => match node.named_child(0) {
                Some(inner) => TypeExpr::Pointer(Box::new(self.lower_type(parsed, inner))),
                None => TypeExpr::Other(node.kind().to_string()),
            },
            kind => TypeExpr::Other(kind.to_string()),
        }
    }

    /// Pre-order walk collecting type specs declared inside a function body.
    fn collect_nested_types(&self, parsed: &ParsedFile, node: Node, out: &mut Vec<TypeSpec>) {
        for child in node.named_children(&mut node.walk()) {
            if let Some(spec) = self.lower_type_spec(parsed, child) {
                out.push(spec);
            }
            self.collect_nested_types(parsed, child, out);
        }
    }

    /// Comment lines ending directly above `node`, with no blank line between.
    fn extract_doc(&self, parsed: &ParsedFile, node: Node) -> Option<String> {
        let mut lines = Vec::new();
        let mut expected_row = node.start_position().row;
        let mut current = node.prev_sibling();

        while let Some(prev) = current {
            if prev.kind() != "comment" || prev.end_position().row + 1 != expected_row {
                break;
            }
            // trailing comment on a code line
            if let Some(before) = prev.prev_sibling() {
                if before.end_position().row == prev.start_position().row {
                    break;
                }
            }
            lines.push(parsed.node_text(prev).to_string());
            expected_row = prev.start_position().row;
            current = prev.prev_sibling();
        }

        if lines.is_empty() {
            return None;
        }
        lines.reverse();
        Some(lines.join("\n"))
    }
}

impl Default for GoAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// First ERROR or MISSING node in document order.
fn first_syntax_error(root: Node) -> Option<Node> {
    if root.is_error() || root.is_missing() {
        return Some(root);
    }
    for child in root.children(&mut root.walk()) {
        if child.has_error() || child.is_missing() {
            if let Some(found) = first_syntax_error(child) {
                return Some(found);
            }
        }
    }
    None
}

impl LanguageAnalyzer for GoAnalyzer {
    fn language_id(&self) -> &'static str {
        "go"
    }

    fn file_extensions(&self) -> &'static [&'static str] {
        &["go"]
    }

    fn parse(&self, path: &Path, source: &[u8]) -> anyhow::Result<ParsedFile> {
        let mut parser = self.create_parser()?;
        let tree = parser
            .parse(source, None)
            .ok_or_else(|| anyhow::anyhow!("failed to parse Go source: {}", path.display()))?;

        let root = tree.root_node();
        if root.has_error() {
            let location = match first_syntax_error(root) {
                Some(node) if node.is_missing() => {
                    format!("{}: missing {:?}", Span::from_node(node), node.kind())
                }
                Some(node) => format!("{}: syntax error", Span::from_node(node)),
                None => "syntax error".to_string(),
            };
            anyhow::bail!("{}:{}", path.display(), location);
        }

        Ok(ParsedFile {
            tree,
            source: source.to_vec(),
            path: path.to_string_lossy().to_string(),
        })
    }

    fn extract_tree(&self, parsed: &ParsedFile) -> anyhow::Result<FileTree> {
        let package = self.extract_package(parsed);
        let imports = self.extract_imports(parsed)?;
        let declarations = self.extract_declarations(parsed);

        Ok(FileTree {
            path: parsed.path.clone(),
            package,
            imports,
            declarations,
        })
    }
}
