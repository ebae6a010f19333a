use crate::ast;

/// Very similar to the parser's [Pos](ast::AstPos), but owned by
/// this crate so it can be built without an AST (e.g. in tests).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SourcePosition {
    pub col: usize,
    pub line: usize,
}
impl SourcePosition {
    pub fn new(line: usize, col: usize) -> Self {
        Self { col, line }
    }

    pub(crate) fn from_ast_pos(pos: &ast::AstPos) -> Self {
        Self {
            col: pos.column,
            line: pos.line,
        }
    }
}
impl std::fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}
