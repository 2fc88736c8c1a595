use crate::schema::SchemaBuildError;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::InputField;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::NamedTypeLookup;
use crate::types::ObjectType;
use crate::types::Parameter;
use crate::types::ResolvedType;
use crate::types::ScalarType;
use crate::types::UnionType;
use gqlsdl_parser::ast::Declaration;
use gqlsdl_parser::ast::EnumTypeDeclaration;
use gqlsdl_parser::ast::FieldDeclaration;
use gqlsdl_parser::ast::InputObjectTypeDeclaration;
use gqlsdl_parser::ast::InterfaceTypeDeclaration;
use gqlsdl_parser::ast::ObjectTypeDeclaration;
use gqlsdl_parser::ast::RawTypeRef;
use gqlsdl_parser::ast::UnionTypeDeclaration;
use indexmap::IndexMap;
use indexmap::map::Entry;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Builds one [`GraphQLType`] from one [`Declaration`], resolving every
/// type name the declaration mentions through a [`NamedTypeLookup`].
///
/// Both resolution policies funnel through here; they differ only in what
/// the lookup can see when a declaration is built.
pub struct TypeFactory<'a, TLookup: NamedTypeLookup + ?Sized> {
    lookup: &'a TLookup,
}
impl<'a, TLookup: NamedTypeLookup + ?Sized> TypeFactory<'a, TLookup> {
    pub fn new(lookup: &'a TLookup) -> Self {
        Self { lookup }
    }

    /// # Panics
    ///
    /// On a `schema { ... }` declaration, which declares no type. Callers
    /// handle those separately.
    pub fn build(&self, declaration: &Declaration) -> Result<GraphQLType> {
        Ok(match declaration {
            Declaration::Object(decl) => GraphQLType::Object(Box::new(self.build_object(decl)?)),
            Declaration::Interface(decl) => {
                GraphQLType::Interface(Box::new(self.build_interface(decl)?))
            }
            Declaration::InputObject(decl) => {
                GraphQLType::InputObject(Box::new(self.build_input_object(decl)?))
            }
            Declaration::Union(decl) => GraphQLType::Union(Box::new(self.build_union(decl)?)),
            Declaration::Enum(decl) => GraphQLType::Enum(Box::new(Self::build_enum(decl)?)),
            Declaration::Scalar(decl) => GraphQLType::Scalar(Box::new(ScalarType {
                def_line: decl.line,
                description: decl.description.clone(),
                name: decl.name.clone(),
            })),
            Declaration::Schema(_) => {
                unreachable!("schema declarations are assembled, not built as types")
            }
        })
    }

    fn build_object(&self, decl: &ObjectTypeDeclaration) -> Result<ObjectType> {
        let mut interfaces: Vec<NamedGraphQLTypeRef> = vec![];
        for iface in &decl.implements {
            let iface_ref = self.lookup_named(&iface.name, iface.line)?;
            Self::expect_kind(&iface_ref, iface.line, "an interface", |kind| {
                kind == GraphQLTypeKind::Interface
            })?;
            if interfaces.contains(&iface_ref) {
                return Err(SchemaBuildError::DuplicateMemberName {
                    type_name: decl.name.clone(),
                    member_name: iface.name.clone(),
                    line: iface.line,
                });
            }
            interfaces.push(iface_ref);
        }

        let parent = NamedGraphQLTypeRef::new(&decl.name, GraphQLTypeKind::Object);
        Ok(ObjectType {
            def_line: decl.line,
            description: decl.description.clone(),
            fields: self.build_fields(&parent, &decl.fields)?,
            interfaces,
            name: decl.name.clone(),
        })
    }

    fn build_interface(&self, decl: &InterfaceTypeDeclaration) -> Result<InterfaceType> {
        let parent = NamedGraphQLTypeRef::new(&decl.name, GraphQLTypeKind::Interface);
        Ok(InterfaceType {
            def_line: decl.line,
            description: decl.description.clone(),
            fields: self.build_fields(&parent, &decl.fields)?,
            name: decl.name.clone(),
        })
    }

    fn build_fields(
        &self,
        parent: &NamedGraphQLTypeRef,
        fields: &[FieldDeclaration],
    ) -> Result<IndexMap<String, Field>> {
        let mut field_map = IndexMap::new();
        for field in fields {
            let mut parameters = IndexMap::new();
            for arg in &field.arguments {
                let param_type = self.resolve_type_ref(&arg.type_ref)?;
                Self::expect_kind(
                    param_type.innermost_named_type_ref(),
                    arg.type_ref.line,
                    "an input type",
                    |kind| kind.is_input_type(),
                )?;
                let param = Parameter {
                    def_line: arg.line,
                    default_value: arg.default_value.clone(),
                    name: arg.name.clone(),
                    param_type,
                };
                Self::insert_unique(&mut parameters, parent.name(), &arg.name, arg.line, param)?;
            }

            let field_type = self.resolve_type_ref(&field.type_ref)?;
            Self::expect_kind(
                field_type.innermost_named_type_ref(),
                field.type_ref.line,
                "an output type",
                |kind| kind != GraphQLTypeKind::InputObject,
            )?;

            let built = Field {
                def_line: field.line,
                description: field.description.clone(),
                field_type,
                name: field.name.clone(),
                parameters,
                parent_type: parent.clone(),
            };
            Self::insert_unique(&mut field_map, parent.name(), &field.name, field.line, built)?;
        }
        Ok(field_map)
    }

    fn build_input_object(&self, decl: &InputObjectTypeDeclaration) -> Result<InputObjectType> {
        let mut fields = IndexMap::new();
        for field in &decl.fields {
            let field_type = self.resolve_type_ref(&field.type_ref)?;
            Self::expect_kind(
                field_type.innermost_named_type_ref(),
                field.type_ref.line,
                "an input type",
                |kind| kind.is_input_type(),
            )?;
            let input_field = InputField {
                def_line: field.line,
                description: field.description.clone(),
                field_type,
                name: field.name.clone(),
            };
            Self::insert_unique(&mut fields, &decl.name, &field.name, field.line, input_field)?;
        }
        Ok(InputObjectType {
            def_line: decl.line,
            description: decl.description.clone(),
            fields,
            name: decl.name.clone(),
        })
    }

    fn build_union(&self, decl: &UnionTypeDeclaration) -> Result<UnionType> {
        let mut members = IndexMap::new();
        for member in &decl.members {
            let member_ref = self.lookup_named(member, decl.line)?;
            Self::expect_kind(&member_ref, decl.line, "an object type", |kind| {
                kind == GraphQLTypeKind::Object
            })?;
            Self::insert_unique(&mut members, &decl.name, member, decl.line, member_ref)?;
        }
        Ok(UnionType {
            def_line: decl.line,
            description: decl.description.clone(),
            members,
            name: decl.name.clone(),
        })
    }

    fn build_enum(decl: &EnumTypeDeclaration) -> Result<EnumType> {
        let mut values = IndexMap::new();
        for value in &decl.values {
            let enum_value = EnumValue {
                def_line: value.line,
                description: value.description.clone(),
                name: value.name.clone(),
            };
            Self::insert_unique(&mut values, &decl.name, &value.name, value.line, enum_value)?;
        }
        Ok(EnumType {
            def_line: decl.line,
            description: decl.description.clone(),
            name: decl.name.clone(),
            values,
        })
    }

    fn resolve_type_ref(&self, raw: &RawTypeRef) -> Result<ResolvedType> {
        let named = self.lookup_named(&raw.name, raw.line)?;
        Ok(ResolvedType::from_raw(raw, named))
    }

    fn lookup_named(&self, name: &str, line: usize) -> Result<NamedGraphQLTypeRef> {
        self.lookup
            .lookup_named_type(name)
            .ok_or_else(|| SchemaBuildError::UndeclaredType {
                name: name.to_string(),
                line,
            })
    }

    fn expect_kind(
        type_ref: &NamedGraphQLTypeRef,
        line: usize,
        expected: &'static str,
        accepts: impl Fn(GraphQLTypeKind) -> bool,
    ) -> Result<()> {
        if accepts(type_ref.kind()) {
            return Ok(());
        }
        Err(SchemaBuildError::InvalidTypeReference {
            type_name: type_ref.name().to_string(),
            expected,
            found: type_ref.kind(),
            line,
        })
    }

    fn insert_unique<T>(
        map: &mut IndexMap<String, T>,
        type_name: &str,
        member_name: &str,
        line: usize,
        value: T,
    ) -> Result<()> {
        match map.entry(member_name.to_string()) {
            Entry::Occupied(_) => Err(SchemaBuildError::DuplicateMemberName {
                type_name: type_name.to_string(),
                member_name: member_name.to_string(),
                line,
            }),
            Entry::Vacant(entry) => {
                entry.insert(value);
                Ok(())
            }
        }
    }
}
