use crate::ast::EnumTypeDeclaration;
use crate::ast::FieldDeclaration;
use crate::ast::InputObjectTypeDeclaration;
use crate::ast::InterfaceTypeDeclaration;
use crate::ast::ObjectTypeDeclaration;
use crate::ast::ScalarTypeDeclaration;
use crate::ast::SchemaDeclaration;
use crate::ast::UnionTypeDeclaration;

/// One top-level declaration.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Declaration {
    Object(ObjectTypeDeclaration),
    Interface(InterfaceTypeDeclaration),
    InputObject(InputObjectTypeDeclaration),
    Union(UnionTypeDeclaration),
    Enum(EnumTypeDeclaration),
    Scalar(ScalarTypeDeclaration),
    Schema(SchemaDeclaration),
}

/// The variant of a [`Declaration`], without its payload.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum DeclarationKind {
    Object,
    Interface,
    InputObject,
    Union,
    Enum,
    Scalar,
    Schema,
}

impl Declaration {
    /// The declared type name. `None` for `schema { ... }`, which declares
    /// no type.
    pub fn name(&self) -> Option<&str> {
        match self {
            Declaration::Object(decl) => Some(&decl.name),
            Declaration::Interface(decl) => Some(&decl.name),
            Declaration::InputObject(decl) => Some(&decl.name),
            Declaration::Union(decl) => Some(&decl.name),
            Declaration::Enum(decl) => Some(&decl.name),
            Declaration::Scalar(decl) => Some(&decl.name),
            Declaration::Schema(_) => None,
        }
    }

    /// 1-based line of the declaration's keyword.
    pub fn line(&self) -> usize {
        match self {
            Declaration::Object(decl) => decl.line,
            Declaration::Interface(decl) => decl.line,
            Declaration::InputObject(decl) => decl.line,
            Declaration::Union(decl) => decl.line,
            Declaration::Enum(decl) => decl.line,
            Declaration::Scalar(decl) => decl.line,
            Declaration::Schema(decl) => decl.line,
        }
    }

    pub fn kind(&self) -> DeclarationKind {
        match self {
            Declaration::Object(_) => DeclarationKind::Object,
            Declaration::Interface(_) => DeclarationKind::Interface,
            Declaration::InputObject(_) => DeclarationKind::InputObject,
            Declaration::Union(_) => DeclarationKind::Union,
            Declaration::Enum(_) => DeclarationKind::Enum,
            Declaration::Scalar(_) => DeclarationKind::Scalar,
            Declaration::Schema(_) => DeclarationKind::Schema,
        }
    }

    /// Every type name this declaration refers to, with the 1-based line of
    /// each reference, in source order. May contain repeats.
    pub fn referenced_type_names(&self) -> Vec<(&str, usize)> {
        fn field_refs<'a>(fields: &'a [FieldDeclaration], out: &mut Vec<(&'a str, usize)>) {
            for field in fields {
                for arg in &field.arguments {
                    out.push((arg.type_ref.name.as_str(), arg.type_ref.line));
                }
                out.push((field.type_ref.name.as_str(), field.type_ref.line));
            }
        }

        let mut names = vec![];
        match self {
            Declaration::Object(decl) => {
                for iface in &decl.implements {
                    names.push((iface.name.as_str(), iface.line));
                }
                field_refs(&decl.fields, &mut names);
            }
            Declaration::Interface(decl) => field_refs(&decl.fields, &mut names),
            Declaration::InputObject(decl) => field_refs(&decl.fields, &mut names),
            Declaration::Union(decl) => {
                for member in &decl.members {
                    names.push((member.as_str(), decl.line));
                }
            }
            Declaration::Schema(decl) => {
                for type_ref in [&decl.query, &decl.mutation].into_iter().flatten() {
                    names.push((type_ref.name.as_str(), type_ref.line));
                }
            }
            Declaration::Enum(_) | Declaration::Scalar(_) => (),
        }
        names
    }
}

impl std::fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            DeclarationKind::Object => "type",
            DeclarationKind::Interface => "interface",
            DeclarationKind::InputObject => "input",
            DeclarationKind::Union => "union",
            DeclarationKind::Enum => "enum",
            DeclarationKind::Scalar => "scalar",
            DeclarationKind::Schema => "schema",
        })
    }
}
