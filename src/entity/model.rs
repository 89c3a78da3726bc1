// Mon Oct 12 2026 - Alex

use crate::declarator::{is_primitive, Declarator, DeclaratorError};
use crate::entity::{ClassMember, EntityClass, FunctionValue, StructField, TemplateValue};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of an entity inside a resolution cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub usize);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Outcome of resolving one referenced identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resolved {
    Found(EntityId),
    NotFound,
}

impl Resolved {
    pub fn id(self) -> Option<EntityId> {
        match self {
            Self::Found(id) => Some(id),
            Self::NotFound => None,
        }
    }
}

pub type Subtypes = IndexMap<String, Resolved>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeEntityKind {
    Typedef(String),
    Struct(Vec<StructField>),
    Union(Vec<StructField>),
    Enum(IndexMap<String, i64>),
    Macro(String),
    Function(FunctionValue),
    Class(Vec<ClassMember>),
    Template(TemplateValue),
    Namespace(Vec<String>),
}

impl TypeEntityKind {
    pub fn class(&self) -> EntityClass {
        match self {
            Self::Typedef(_) => EntityClass::Typedef,
            Self::Struct(_) => EntityClass::Struct,
            Self::Union(_) => EntityClass::Union,
            Self::Enum(_) => EntityClass::Enum,
            Self::Macro(_) => EntityClass::Macro,
            Self::Function(_) => EntityClass::Function,
            Self::Class(_) => EntityClass::Class,
            Self::Template(_) => EntityClass::Template,
            Self::Namespace(_) => EntityClass::Namespace,
        }
    }
}

/// Identifier referenced by an entity, and whether the reference goes
/// through a pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub identifier: String,
    pub through_pointer: bool,
}

impl Reference {
    fn direct(identifier: &str) -> Self {
        Self {
            identifier: identifier.to_string(),
            through_pointer: false,
        }
    }

    fn of(decl: &Declarator) -> Self {
        Self {
            identifier: decl.base().to_string(),
            through_pointer: decl.is_ptr(),
        }
    }
}

/// What a macro body stands for.
#[derive(Debug, Clone, PartialEq)]
pub enum MacroValue {
    Type(Declarator),
    Integer(i64),
    Literal(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeEntity {
    identifier: String,
    kind: TypeEntityKind,
    source: Option<String>,
    tag: Option<String>,
    subtypes: Option<Subtypes>,
}

impl TypeEntity {
    pub fn new(identifier: &str, kind: TypeEntityKind) -> Self {
        Self {
            identifier: identifier.to_string(),
            kind,
            source: None,
            tag: None,
            subtypes: None,
        }
    }

    pub fn with_source(mut self, source: &str) -> Self {
        self.source = Some(source.to_string());
        self
    }

    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tag = Some(tag.to_string());
        self
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn kind(&self) -> &TypeEntityKind {
        &self.kind
    }

    pub fn class(&self) -> EntityClass {
        self.kind.class()
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// `None` until the entity has been unfolded.
    pub fn subtypes(&self) -> Option<&Subtypes> {
        self.subtypes.as_ref()
    }

    pub fn is_unfolded(&self) -> bool {
        self.subtypes.is_some()
    }

    pub(crate) fn subtypes_mut(&mut self) -> &mut Option<Subtypes> {
        &mut self.subtypes
    }

    pub fn subtype(&self, identifier: &str) -> Option<Resolved> {
        self.subtypes.as_ref()?.get(identifier).copied()
    }

    /// Fields of a struct or union.
    pub fn fields(&self) -> Option<&[StructField]> {
        match &self.kind {
            TypeEntityKind::Struct(f) | TypeEntityKind::Union(f) => Some(f),
            _ => None,
        }
    }

    pub fn members(&self) -> Option<&[ClassMember]> {
        match &self.kind {
            TypeEntityKind::Class(m) => Some(m),
            TypeEntityKind::Template(t) => t.class.as_deref(),
            _ => None,
        }
    }

    /// Identifier without its `struct`/`union`/`enum`/`class` keyword and
    /// namespace.
    pub fn base_name(&self) -> &str {
        let symbol = match self.identifier.split_once(' ') {
            Some((kw, rest)) if matches!(kw, "struct" | "union" | "enum" | "class") => rest,
            _ => &self.identifier,
        };
        let symbol = strip_template_args(symbol);
        match symbol.rfind("::") {
            Some(pos) => &symbol[pos + 2..],
            None => symbol,
        }
    }

    /// Template identifier without its argument list, unless the template is
    /// a partial specialization.
    pub fn basename(&self) -> &str {
        match &self.kind {
            TypeEntityKind::Template(t) if !t.partial_specialization => {
                match self.identifier.rfind('<') {
                    Some(pos) if pos > 0 => &self.identifier[..pos],
                    _ => &self.identifier,
                }
            }
            _ => &self.identifier,
        }
    }

    pub fn template_params(&self) -> Option<String> {
        match &self.kind {
            TypeEntityKind::Template(t) => Some(t.template_params()),
            _ => None,
        }
    }

    pub fn macro_value(&self) -> Option<MacroValue> {
        let TypeEntityKind::Macro(text) = &self.kind else {
            return None;
        };
        let text = text.trim();
        if let Some(n) = parse_integer(text) {
            return Some(MacroValue::Integer(n));
        }
        match Declarator::parse_any(text) {
            Ok(d) if is_primitive(d.base()) || d.keyword().is_some() => Some(MacroValue::Type(d)),
            _ => Some(MacroValue::Literal(text.to_string())),
        }
    }

    /// Identifiers this entity refers to, in declaration order. Primitive
    /// types and the entity itself are left out; duplicates are kept so that
    /// pointer and embedded uses of the same type can be told apart.
    pub fn references(&self) -> Result<Vec<Reference>, DeclaratorError> {
        let mut refs = Vec::new();
        match &self.kind {
            TypeEntityKind::Typedef(spelling) => {
                refs.push(Reference::of(&Declarator::parse_any(spelling)?));
            }
            TypeEntityKind::Struct(fields) | TypeEntityKind::Union(fields) => {
                for f in fields {
                    refs.push(Reference::of(&f.declarator()?));
                }
            }
            TypeEntityKind::Function(func) => function_references(func, &mut refs)?,
            TypeEntityKind::Class(members) => class_references(members, &mut refs)?,
            TypeEntityKind::Template(t) => {
                if let Some(members) = &t.class {
                    class_references(members, &mut refs)?;
                }
                if let Some(func) = &t.function {
                    function_references(func, &mut refs)?;
                }
            }
            TypeEntityKind::Namespace(ids) => {
                refs.extend(ids.iter().map(|id| Reference::direct(id)));
                return Ok(refs);
            }
            TypeEntityKind::Enum(_) | TypeEntityKind::Macro(_) => {}
        }
        refs.retain(|r| !is_primitive(&r.identifier) && r.identifier != self.identifier);
        Ok(refs)
    }
}

fn function_references(
    func: &FunctionValue,
    refs: &mut Vec<Reference>,
) -> Result<(), DeclaratorError> {
    let mut spellings = vec![func.return_type()?];
    spellings.extend(func.argument_types()?);
    for s in spellings {
        refs.push(Reference::of(&Declarator::parse_any(&s)?));
    }
    Ok(())
}

fn class_references(
    members: &[ClassMember],
    refs: &mut Vec<Reference>,
) -> Result<(), DeclaratorError> {
    for m in members {
        match m {
            ClassMember::Parent(p) => refs.push(Reference::direct(&p.name)),
            ClassMember::Using(u) => refs.extend(u.types.iter().map(|t| Reference::direct(t))),
            ClassMember::Field(f) if f.is_template() => {}
            ClassMember::Field(f) => refs.push(Reference::of(&f.declarator()?)),
        }
    }
    Ok(())
}

fn strip_template_args(symbol: &str) -> &str {
    match symbol.find('<') {
        Some(pos) if pos > 0 => &symbol[..pos],
        _ => symbol,
    }
}

fn parse_integer(text: &str) -> Option<i64> {
    let t = text.trim_start_matches('(').trim_end_matches(')');
    let t = t.trim_end_matches(['u', 'U', 'l', 'L']);
    let (neg, t) = match t.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, t),
    };
    let n = if let Some(hex) = t.strip_prefix("0x").or_else(|| t.strip_prefix("0X")) {
        i64::from_str_radix(hex, 16).ok()?
    } else {
        t.parse::<i64>().ok()?
    };
    Some(if neg { -n } else { n })
}
