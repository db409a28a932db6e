//! Canonical node kinds understood by the lowering pass.

pub const FILE: &str = "file";
pub const PACKAGE: &str = "package";
pub const IMPORT: &str = "import";
pub const CLASS: &str = "class";
pub const SUPERTYPE: &str = "supertype";
pub const FUNCTION: &str = "function";
pub const PARAM: &str = "param";
pub const PROPERTY: &str = "property";
pub const BLOCK: &str = "block";
pub const TYPE: &str = "type";

pub const NAME: &str = "name";
pub const MEMBER: &str = "member";
pub const BINARY: &str = "binary";
pub const UNARY: &str = "unary";
pub const CALL: &str = "call";
pub const ARG: &str = "arg";
pub const LAMBDA: &str = "lambda";
pub const COLLECTION: &str = "collection";
pub const CALLABLE_REF: &str = "callable_ref";
pub const RETURN: &str = "return";
pub const PAREN: &str = "paren";

// Literal forms.
pub const INT: &str = "int";
pub const FLOAT: &str = "float";
pub const BOOL: &str = "bool";
pub const STRING: &str = "string";
pub const CHAR: &str = "char";
pub const NULL: &str = "null";
/// A literal the front end could not classify further.
pub const LITERAL: &str = "literal";

// Field names.
pub mod field {
    pub const NAME: &str = "name";
    pub const TYPE: &str = "type";
    pub const BINDING: &str = "binding";
    pub const VALUE: &str = "value";
    pub const DESTRUCTURE: &str = "destructure";
    pub const SUPERTYPES: &str = "supertypes";
    pub const CONSTRUCTOR: &str = "constructor";
    pub const BODY: &str = "body";
    pub const PARAMS: &str = "params";
    pub const LEFT: &str = "left";
    pub const OP: &str = "op";
    pub const RIGHT: &str = "right";
    pub const OPERAND: &str = "operand";
    pub const POSTFIX: &str = "postfix";
    pub const CALLEE: &str = "callee";
    pub const ARGS: &str = "args";
    pub const LAMBDA: &str = "lambda";
    pub const RECEIVER: &str = "receiver";
}
