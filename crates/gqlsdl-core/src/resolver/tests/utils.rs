use gqlsdl_parser::SdlParser;
use gqlsdl_parser::ast::Declaration;

pub fn parse_declarations(source: &str) -> Vec<Declaration> {
    match SdlParser::new(source).parse_schema_document() {
        Ok(document) => document.declarations,
        Err(error) => panic!("{}", error.format_detailed(Some(source))),
    }
}

/// Type names bound in `table`, excluding the built-in scalars.
pub fn declared_names(table: &crate::resolver::SymbolTable) -> Vec<&str> {
    table.types()
        .values()
        .filter(|type_| !type_.is_builtin())
        .map(|type_| type_.name())
        .collect()
}
