//! Declaration records produced by the parser.
//!
//! Every node owns its data (`String`s rather than borrowed slices) so a
//! [`SchemaDocument`] can outlive the source text and be handed to other
//! threads or tasks for resolution. Type references are kept raw: a
//! [`RawTypeRef`] names a type but does not know whether it exists.

mod declaration;
mod enum_type_declaration;
mod field_declaration;
mod input_object_type_declaration;
mod interface_type_declaration;
mod object_type_declaration;
mod raw_type_ref;
mod root_operation_kind;
mod scalar_type_declaration;
mod schema_declaration;
mod schema_document;
mod union_type_declaration;

pub use declaration::Declaration;
pub use declaration::DeclarationKind;
pub use enum_type_declaration::EnumTypeDeclaration;
pub use enum_type_declaration::EnumValueDeclaration;
pub use field_declaration::ArgumentDeclaration;
pub use field_declaration::FieldDeclaration;
pub use input_object_type_declaration::InputObjectTypeDeclaration;
pub use interface_type_declaration::InterfaceTypeDeclaration;
pub use object_type_declaration::ObjectTypeDeclaration;
pub use raw_type_ref::RawTypeRef;
pub use root_operation_kind::RootOperationKind;
pub use scalar_type_declaration::ScalarTypeDeclaration;
pub use schema_declaration::SchemaDeclaration;
pub use schema_document::SchemaDocument;
pub use union_type_declaration::UnionTypeDeclaration;
