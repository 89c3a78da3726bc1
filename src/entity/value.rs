// Mon Oct 12 2026 - Alex

use crate::declarator::{Declarator, DeclaratorError};
use crate::entity::ClassMember;
use serde::{Deserialize, Serialize};

/// Prototype of a function plus what the collector saw in its body.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FunctionValue {
    pub prototype: String,
    #[serde(default)]
    pub params: Vec<String>,
    #[serde(default)]
    pub locs: Vec<(String, String)>,
    #[serde(default)]
    pub calls: Vec<String>,
}

impl FunctionValue {
    pub fn new(prototype: &str) -> Self {
        Self {
            prototype: prototype.to_string(),
            ..Default::default()
        }
    }

    pub fn with_params(mut self, params: &[&str]) -> Self {
        self.params = params.iter().map(|p| p.to_string()).collect();
        self
    }

    pub fn declarator(&self) -> Result<Declarator, DeclaratorError> {
        Declarator::parse_any(&self.prototype)
    }

    pub fn return_type(&self) -> Result<String, DeclaratorError> {
        let d = self.declarator()?;
        d.return_type()
            .ok_or_else(|| DeclaratorError::parse(&self.prototype, &self.prototype))
    }

    pub fn argument_types(&self) -> Result<Vec<String>, DeclaratorError> {
        let d = self.declarator()?;
        d.arguments()
            .ok_or_else(|| DeclaratorError::parse(&self.prototype, &self.prototype))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateValue {
    pub params: Vec<String>,
    #[serde(rename = "cClass", default, skip_serializing_if = "Option::is_none")]
    pub class: Option<Vec<ClassMember>>,
    #[serde(rename = "cFunc", default, skip_serializing_if = "Option::is_none")]
    pub function: Option<FunctionValue>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub partial_specialization: bool,
}

impl TemplateValue {
    pub fn class(params: &[&str], members: Vec<ClassMember>) -> Self {
        Self {
            params: params.iter().map(|p| p.to_string()).collect(),
            class: Some(members),
            function: None,
            partial_specialization: false,
        }
    }

    pub fn function(params: &[&str], function: FunctionValue) -> Self {
        Self {
            params: params.iter().map(|p| p.to_string()).collect(),
            class: None,
            function: Some(function),
            partial_specialization: false,
        }
    }

    /// `<typename T,int N>` form of the parameter list.
    pub fn template_params(&self) -> String {
        format!("<{}>", self.params.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_function_value() {
        let f: FunctionValue =
            serde_json::from_value(json!({"prototype": "char *(int, struct X *)"})).unwrap();
        assert_eq!(f.return_type().unwrap(), "char *");
        assert_eq!(f.argument_types().unwrap(), vec!["int", "struct X *"]);
        assert!(f.params.is_empty());
        assert!(FunctionValue::new("int").return_type().is_err());
    }

    #[test]
    fn test_template_value() {
        let t: TemplateValue = serde_json::from_value(json!({
            "params": ["typename T", "int N"],
            "cFunc": {"prototype": "T (T)"}
        }))
        .unwrap();
        assert_eq!(t.template_params(), "<typename T,int N>");
        assert!(t.class.is_none());
        let back = serde_json::to_value(&t).unwrap();
        assert!(back.get("partial_specialization").is_none());
        assert_eq!(back["cFunc"]["prototype"], "T (T)");
    }
}
