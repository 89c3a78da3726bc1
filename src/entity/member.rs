// Mon Oct 12 2026 - Alex

use crate::declarator::{Declarator, DeclaratorError};
use crate::entity::EntityError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One `(type, name, comment)` entry of a struct or union.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String, Option<String>)", into = "(String, String, Option<String>)")]
pub struct StructField {
    pub type_spelling: String,
    pub name: String,
    pub comment: Option<String>,
}

impl StructField {
    pub fn new(type_spelling: &str, name: &str) -> Self {
        Self {
            type_spelling: type_spelling.to_string(),
            name: name.to_string(),
            comment: None,
        }
    }

    pub fn with_comment(mut self, comment: &str) -> Self {
        self.comment = Some(comment.to_string());
        self
    }

    pub fn declarator(&self) -> Result<Declarator, DeclaratorError> {
        Declarator::parse_any(&self.type_spelling)
    }
}

impl From<(String, String, Option<String>)> for StructField {
    fn from((type_spelling, name, comment): (String, String, Option<String>)) -> Self {
        Self {
            type_spelling,
            name,
            comment,
        }
    }
}

impl From<StructField> for (String, String, Option<String>) {
    fn from(f: StructField) -> Self {
        (f.type_spelling, f.name, f.comment)
    }
}

/// Data member, method, friend or member template of a C++ class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMember {
    /// `""`, `static`, `virtual`, `virtual, final`, `virtual, override`,
    /// `friend` or `template<...>`.
    pub attribute: String,
    pub type_spelling: String,
    pub mangled: String,
    pub name: String,
    pub access: String,
    pub comment: Option<String>,
}

impl FieldMember {
    pub fn new(type_spelling: &str, name: &str) -> Self {
        Self {
            attribute: String::new(),
            type_spelling: type_spelling.to_string(),
            mangled: String::new(),
            name: name.to_string(),
            access: "PUBLIC".to_string(),
            comment: None,
        }
    }

    pub fn with_attribute(mut self, attribute: &str) -> Self {
        self.attribute = attribute.to_string();
        self
    }

    pub fn with_mangled(mut self, mangled: &str) -> Self {
        self.mangled = mangled.to_string();
        self
    }

    pub fn with_access(mut self, access: &str) -> Self {
        self.access = access.to_string();
        self
    }

    pub fn is_static(&self) -> bool {
        self.attribute == "static"
    }

    pub fn is_virtual(&self) -> bool {
        self.attribute.starts_with("virtual")
    }

    pub fn is_friend(&self) -> bool {
        self.attribute == "friend"
    }

    pub fn is_template(&self) -> bool {
        self.attribute.starts_with("template")
    }

    pub fn declarator(&self) -> Result<Declarator, DeclaratorError> {
        Declarator::parse_cxx(&self.type_spelling)
    }

    /// Methods have a function type; data members never do.
    pub fn is_method(&self) -> Result<bool, DeclaratorError> {
        if self.is_template() {
            return Ok(true);
        }
        Ok(self.declarator()?.is_function())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentClass {
    pub is_virtual: bool,
    pub name: String,
    pub access: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsingDecl {
    pub types: Vec<String>,
    pub name: String,
}

/// Stored as a triple of pairs:
/// `((attribute, type), (mangled, name), (access, comment))` for fields,
/// `(("parent", virtual), ("", base), (access, ""))` for base classes and
/// `(("using", [types]), ("", name), ("", ""))` for using-declarations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMember", into = "RawMember")]
pub enum ClassMember {
    Field(FieldMember),
    Parent(ParentClass),
    Using(UsingDecl),
}

type RawMember = ((String, Value), (Option<String>, String), (String, Option<String>));

impl ClassMember {
    pub fn field(type_spelling: &str, name: &str) -> Self {
        Self::Field(FieldMember::new(type_spelling, name))
    }

    pub fn parent(name: &str, is_virtual: bool) -> Self {
        Self::Parent(ParentClass {
            is_virtual,
            name: name.to_string(),
            access: "PUBLIC".to_string(),
        })
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Field(f) => &f.name,
            Self::Parent(p) => &p.name,
            Self::Using(u) => &u.name,
        }
    }
}

impl TryFrom<RawMember> for ClassMember {
    type Error = EntityError;

    fn try_from(raw: RawMember) -> Result<Self, Self::Error> {
        let ((attribute, value), (mangled, name), (access, comment)) = raw;
        match (attribute.as_str(), value) {
            ("parent", Value::String(flag)) => Ok(Self::Parent(ParentClass {
                is_virtual: flag.contains("virtual"),
                name,
                access,
            })),
            ("using", Value::Array(items)) => {
                let types = items
                    .into_iter()
                    .map(|v| match v {
                        Value::String(s) => Ok(s),
                        other => Err(EntityError::MalformedMember(other.to_string())),
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Self::Using(UsingDecl { types, name }))
            }
            (_, Value::String(type_spelling)) => Ok(Self::Field(FieldMember {
                attribute,
                type_spelling,
                mangled: mangled.unwrap_or_default(),
                name,
                access,
                comment,
            })),
            (_, other) => Err(EntityError::MalformedMember(format!(
                "{}: {}",
                attribute, other
            ))),
        }
    }
}

impl From<ClassMember> for RawMember {
    fn from(member: ClassMember) -> Self {
        match member {
            ClassMember::Field(f) => (
                (f.attribute, Value::String(f.type_spelling)),
                (Some(f.mangled), f.name),
                (f.access, f.comment),
            ),
            ClassMember::Parent(p) => {
                let flag = if p.is_virtual { "virtual" } else { "" };
                (
                    ("parent".to_string(), Value::String(flag.to_string())),
                    (Some(String::new()), p.name),
                    (p.access, Some(String::new())),
                )
            }
            ClassMember::Using(u) => (
                (
                    "using".to_string(),
                    Value::Array(u.types.into_iter().map(Value::String).collect()),
                ),
                (Some(String::new()), u.name),
                (String::new(), Some(String::new())),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_struct_field_tuple_form() {
        let f: StructField = serde_json::from_value(json!(["int *", "next", null])).unwrap();
        assert_eq!(f, StructField::new("int *", "next"));
        assert_eq!(
            serde_json::to_value(f.with_comment("link")).unwrap(),
            json!(["int *", "next", "link"])
        );
    }

    #[test]
    fn test_class_member_forms() {
        let members: Vec<ClassMember> = serde_json::from_value(json!([
            [["parent", "virtual"], ["", "class G"], ["PUBLIC", ""]],
            [["using", ["class B"]], ["", "f"], ["", ""]],
            [["virtual", "void ()"], ["_ZN1J2vjEv", "vj"], ["PUBLIC", null]],
            [["", "int"], ["", "j"], ["PRIVATE", "counter"]]
        ]))
        .unwrap();

        assert_eq!(members[0], ClassMember::parent("class G", true));
        match &members[1] {
            ClassMember::Using(u) => assert_eq!(u.types, vec!["class B"]),
            other => panic!("unexpected {:?}", other),
        }
        match &members[2] {
            ClassMember::Field(f) => {
                assert!(f.is_virtual());
                assert!(f.is_method().unwrap());
            }
            other => panic!("unexpected {:?}", other),
        }
        match &members[3] {
            ClassMember::Field(f) => {
                assert!(!f.is_method().unwrap());
                assert_eq!(f.comment.as_deref(), Some("counter"));
            }
            other => panic!("unexpected {:?}", other),
        }

        let back = serde_json::to_value(&members[0]).unwrap();
        assert_eq!(back, json!([["parent", "virtual"], ["", "class G"], ["PUBLIC", ""]]));
    }

    #[test]
    fn test_malformed_member() {
        let bad = serde_json::from_value::<ClassMember>(json!([["", 3], ["", "x"], ["", ""]]));
        assert!(bad.is_err());
    }
}
