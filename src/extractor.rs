use crate::registry;
use rustpython_ast::{self as ast, Stmt};
use rustpython_parser::{parse, Mode, ParseError};
use std::collections::HashSet;

/// Parses a unit of Python source and returns the base names of every
/// third-party module it imports.
///
/// The whole tree is walked, not just the top level: imports nested inside
/// functions, conditionals, and try-blocks count the same as module-level
/// ones. Standard-library modules are filtered out via the registry.
/// Deterministic, no side effects; a syntax error is returned to the caller
/// so it can decide whether to skip a file or a cell.
pub fn extract_imports(source: &str) -> Result<HashSet<String>, ParseError> {
    let tree = parse(source, Mode::Module, "<scan>")?;
    let mut visitor = ImportVisitor::new();
    if let ast::Mod::Module(module) = &tree {
        for stmt in &module.body {
            visitor.visit_stmt(stmt);
        }
    }
    Ok(visitor.modules)
}

/// Visitor that collects imported module bases from the AST.
pub struct ImportVisitor {
    /// Base names of third-party modules seen so far.
    pub modules: HashSet<String>,
}

impl ImportVisitor {
    pub fn new() -> Self {
        Self {
            modules: HashSet::new(),
        }
    }

    /// Records one dotted module reference, keeping only its base.
    fn add_module(&mut self, dotted: &str) {
        let base = registry::base_name(dotted);
        if !base.is_empty() && !registry::is_stdlib(base) {
            self.modules.insert(base.to_string());
        }
    }

    /// Visits a statement, recording imports and recursing into every
    /// nested statement list.
    pub fn visit_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            // `import a.b.c [as x]` - the alias target is irrelevant,
            // the dependency is identified by the dotted name itself.
            Stmt::Import(node) => {
                for alias in &node.names {
                    self.add_module(alias.name.as_str());
                }
            }
            // `from a.b import x` - only absolute imports (level 0) refer
            // to an external dependency. Relative imports (`from . import x`)
            // point back into the project and are ignored.
            Stmt::ImportFrom(node) => {
                let level = node.level.as_ref().map_or(0, |level| level.to_u32());
                if level == 0 {
                    if let Some(module) = &node.module {
                        self.add_module(module.as_str());
                    }
                }
            }
            Stmt::FunctionDef(node) => self.visit_body(&node.body),
            Stmt::AsyncFunctionDef(node) => self.visit_body(&node.body),
            Stmt::ClassDef(node) => self.visit_body(&node.body),
            Stmt::If(node) => {
                self.visit_body(&node.body);
                self.visit_body(&node.orelse);
            }
            Stmt::For(node) => {
                self.visit_body(&node.body);
                self.visit_body(&node.orelse);
            }
            Stmt::AsyncFor(node) => {
                self.visit_body(&node.body);
                self.visit_body(&node.orelse);
            }
            Stmt::While(node) => {
                self.visit_body(&node.body);
                self.visit_body(&node.orelse);
            }
            Stmt::With(node) => self.visit_body(&node.body),
            Stmt::AsyncWith(node) => self.visit_body(&node.body),
            Stmt::Try(node) => {
                self.visit_body(&node.body);
                for handler in &node.handlers {
                    if let ast::ExceptHandler::ExceptHandler(handler_node) = handler {
                        self.visit_body(&handler_node.body);
                    }
                }
                self.visit_body(&node.orelse);
                self.visit_body(&node.finalbody);
            }
            Stmt::TryStar(node) => {
                self.visit_body(&node.body);
                for handler in &node.handlers {
                    if let ast::ExceptHandler::ExceptHandler(handler_node) = handler {
                        self.visit_body(&handler_node.body);
                    }
                }
                self.visit_body(&node.orelse);
                self.visit_body(&node.finalbody);
            }
            Stmt::Match(node) => {
                for case in &node.cases {
                    self.visit_body(&case.body);
                }
            }
            _ => {}
        }
    }

    fn visit_body(&mut self, body: &[Stmt]) {
        for stmt in body {
            self.visit_stmt(stmt);
        }
    }
}

impl Default for ImportVisitor {
    fn default() -> Self {
        Self::new()
    }
}
