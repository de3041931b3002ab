/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the tree the parser builds
///
/// Submodules:
/// - ast: The statement sequence that roots every tree
/// - expressions: Definitions for the expression variants
/// - statements: Definitions for the statement variants
/// - printer: The indented tree listing
pub mod ast;
pub mod expressions;
pub mod printer;
pub mod statements;
