//! Declaration tree lowered from the tree-sitter parse.
//!
//! The extraction pipeline never touches tree-sitter nodes directly; it works
//! on the plain value types in this module.

use std::fmt;

/// Source location span with byte offsets and line/column positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Start byte offset (0-indexed).
    pub start_byte: usize,
    /// End byte offset (0-indexed, exclusive).
    pub end_byte: usize,
    /// Start line (1-indexed).
    pub start_line: usize,
    /// Start column (1-indexed).
    pub start_col: usize,
    /// End line (1-indexed).
    pub end_line: usize,
    /// End column (1-indexed).
    pub end_col: usize,
}

impl Span {
    /// Create a span from a tree-sitter node.
    pub fn from_node(node: tree_sitter::Node) -> Self {
        let start = node.start_position();
        let end = node.end_position();
        Self {
            start_byte: node.start_byte(),
            end_byte: node.end_byte(),
            start_line: start.row + 1, // tree-sitter is 0-indexed
            start_col: start.column + 1,
            end_line: end.row + 1,
            end_col: end.column + 1,
        }
    }

    /// Span covering whole lines, used by tests and synthetic trees.
    pub fn lines(start_line: usize, end_line: usize) -> Self {
        Self {
            start_byte: 0,
            end_byte: 0,
            start_line,
            start_col: 1,
            end_line,
            end_col: 1,
        }
    }

    /// Slice the inclusive line range out of `lines`.
    ///
    /// Returns `None` when the span falls outside the source.
    pub fn slice_lines(&self, lines: &[String]) -> Option<String> {
        if self.start_line == 0 || self.end_line > lines.len() || self.start_line > self.end_line {
            return None;
        }
        Some(lines[self.start_line - 1..self.end_line].join("\n"))
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start_line, self.start_col)
    }
}

/// A rendered-on-demand type expression.
///
/// Only the shapes that matter for catalog lookups are kept structurally;
/// everything else collapses to its syntactic kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    /// `T`
    Ident(String),
    /// `pkg.T`
    Qualified { package: String, name: String },
    /// `*T`
    Pointer(Box<TypeExpr>),
    /// Any other expression, named by its syntax kind (e.g. `slice_type`).
    Other(String),
}

impl TypeExpr {
    /// Rendered type name with one leading reference marker removed.
    pub fn base_name(&self) -> String {
        let rendered = self.to_string();
        match rendered.strip_prefix('*') {
            Some(stripped) => stripped.to_string(),
            None => rendered,
        }
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Ident(name) => write!(f, "{}", name),
            TypeExpr::Qualified { package, name } => write!(f, "{}.{}", package, name),
            TypeExpr::Pointer(inner) => write!(f, "*{}", inner),
            TypeExpr::Other(kind) => write!(f, "<{}>", kind),
        }
    }
}

/// One entry of a receiver, parameter or result list.
///
/// `a, b int` is a single field with two names; `int` in `func() int` is a
/// field with no names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub names: Vec<String>,
    pub ty: TypeExpr,
}

impl Field {
    pub fn named(name: &str, ty: TypeExpr) -> Self {
        Self {
            names: vec![name.to_string()],
            ty,
        }
    }

    pub fn unnamed(ty: TypeExpr) -> Self {
        Self { names: Vec::new(), ty }
    }
}

/// An ordered list of fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldList {
    pub fields: Vec<Field>,
}

impl FieldList {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// One `name type` entry per declared name (or a bare type for unnamed fields).
    pub fn entries(&self) -> Vec<String> {
        let mut entries = Vec::new();
        for field in &self.fields {
            if field.names.is_empty() {
                entries.push(field.ty.to_string());
            } else {
                for name in &field.names {
                    entries.push(format!("{} {}", name, field.ty));
                }
            }
        }
        entries
    }

    /// Comma-joined entries; wrapped in parentheses unless there is exactly one.
    pub fn render(&self) -> String {
        let entries = self.entries();
        match entries.len() {
            0 => String::new(),
            1 => entries.into_iter().next().unwrap_or_default(),
            _ => format!("({})", entries.join(", ")),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A `type` spec (definition or alias).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSpec {
    pub name: String,
    pub span: Span,
}

/// An import spec; `path` is the literal including its quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    pub path: String,
    pub alias: Option<String>,
    pub span: Span,
}

/// A function or method declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncDecl {
    pub name: String,
    /// Span from the `func` keyword to the closing brace.
    pub span: Span,
    pub receiver: Option<FieldList>,
    pub params: FieldList,
    pub results: Option<FieldList>,
    /// Span of the body block, braces included.
    pub body: Option<Span>,
    /// Comment lines directly above the declaration.
    pub doc: Option<String>,
    /// Type specs declared inside the body.
    pub nested_types: Vec<TypeSpec>,
}

/// A top-level declaration node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    Type(TypeSpec),
    Function(FuncDecl),
}

/// Everything the pipeline needs from one parsed Go file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileTree {
    /// File path.
    pub path: String,
    /// Package name (if present).
    pub package: Option<String>,
    /// Imports in source order.
    pub imports: Vec<Import>,
    /// Top-level declarations in source order.
    pub declarations: Vec<Declaration>,
}

impl FileTree {
    /// All function and method declarations in source order.
    pub fn functions(&self) -> impl Iterator<Item = &FuncDecl> {
        self.declarations.iter().filter_map(|d| match d {
            Declaration::Function(f) => Some(f),
            Declaration::Type(_) => None,
        })
    }

    /// All type specs, nested ones included, in source order.
    pub fn type_specs(&self) -> Vec<&TypeSpec> {
        let mut specs = Vec::new();
        for decl in &self.declarations {
            match decl {
                Declaration::Type(spec) => specs.push(spec),
                Declaration::Function(func) => specs.extend(func.nested_types.iter()),
            }
        }
        specs
    }

    /// Import literals joined with `; `.
    pub fn import_list(&self) -> String {
        self.imports
            .iter()
            .map(|i| i.path.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_expr_rendering() {
        let ptr = TypeExpr::Pointer(Box::new(TypeExpr::Ident("Config".to_string())));
        assert_eq!(ptr.to_string(), "*Config");
        assert_eq!(ptr.base_name(), "Config");

        let qualified = TypeExpr::Qualified {
            package: "http".to_string(),
            name: "Request".to_string(),
        };
        assert_eq!(qualified.to_string(), "http.Request");

        let other = TypeExpr::Other("slice_type".to_string());
        assert_eq!(other.to_string(), "<slice_type>");
        assert_eq!(other.base_name(), "<slice_type>");
    }

    #[test]
    fn test_field_list_render() {
        let empty = FieldList::default();
        assert_eq!(empty.render(), "");

        let single = FieldList::new(vec![Field::named("x", TypeExpr::Ident("T".to_string()))]);
        assert_eq!(single.render(), "x T");

        let grouped = FieldList::new(vec![Field {
            names: vec!["a".to_string(), "b".to_string()],
            ty: TypeExpr::Ident("int".to_string()),
        }]);
        assert_eq!(grouped.render(), "(a int, b int)");

        let unnamed = FieldList::new(vec![
            Field::unnamed(TypeExpr::Ident("int".to_string())),
            Field::unnamed(TypeExpr::Ident("error".to_string())),
        ]);
        assert_eq!(unnamed.render(), "(int, error)");
    }

    #[test]
    fn test_span_slice_lines() {
        let lines: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        assert_eq!(Span::lines(2, 3).slice_lines(&lines), Some("b\nc".to_string()));
        assert_eq!(Span::lines(0, 1).slice_lines(&lines), None);
        assert_eq!(Span::lines(2, 4).slice_lines(&lines), None);
    }
}
