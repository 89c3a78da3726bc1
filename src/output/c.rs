// Mon Oct 12 2026 - Alex

use crate::declarator::Declarator;
use crate::entity::{
    ClassMember, EntityClass, Resolved, StructField, TemplateValue, TypeEntity, TypeEntityKind,
};
use crate::output::{FormatError, Formatter};
use crate::resolve::ResolutionCache;
use itertools::Itertools;

const ACCESS_ORDER: [&str; 4] = ["PUBLIC", "PROTECTED", "PRIVATE", ""];

/// C and C++ declarations.
#[derive(Debug, Default)]
pub struct CFormatter;

impl Formatter for CFormatter {
    fn name(&self) -> &str {
        "C"
    }

    fn supports(&self, _class: EntityClass) -> bool {
        true
    }

    fn format(&self, entity: &TypeEntity) -> Result<String, FormatError> {
        Scope { entity, cache: None }.render()
    }

    fn format_in(&self, entity: &TypeEntity, cache: &ResolutionCache) -> Result<String, FormatError> {
        Scope {
            entity,
            cache: Some(cache),
        }
        .render()
    }

    fn inlines_anonymous(&self) -> bool {
        true
    }
}

/// Entity being written, and the cache its anonymous subtypes live in.
struct Scope<'a> {
    entity: &'a TypeEntity,
    cache: Option<&'a ResolutionCache>,
}

impl Scope<'_> {
    fn render(&self) -> Result<String, FormatError> {
        let entity = self.entity;
        let id = entity.identifier();
        match entity.kind() {
            TypeEntityKind::Typedef(spelling) => {
                let d = Declarator::parse_any(spelling)?;
                Ok(format!("typedef {};", self.declare(&d, id, "")?))
            }
            TypeEntityKind::Macro(text) => Ok(format!("#define {} {}", id, text)),
            TypeEntityKind::Function(f) => Ok(format!("{};", f.declarator()?.show(id))),
            TypeEntityKind::Enum(values) => {
                let body = values
                    .iter()
                    .sorted_by_key(|(_, v)| **v)
                    .map(|(k, v)| format!("  {} = {}", k, v))
                    .join(",\n");
                Ok(format!("{} {{\n{}\n}};", id, body))
            }
            TypeEntityKind::Struct(fields) => self.record("struct", fields),
            TypeEntityKind::Union(fields) => self.record("union", fields),
            TypeEntityKind::Class(members) => self.class(id, members),
            TypeEntityKind::Namespace(ids) => {
                let body = ids.iter().map(|i| format!("  // {}", i)).join("\n");
                Ok(format!("{} {{\n{}\n}}", id, body))
            }
            TypeEntityKind::Template(t) => self.template(t),
        }
    }

    /// Definition of the anonymous type named by `base`, without its final
    /// `;`, when it can be found in the cache.
    fn anonymous(&self, base: &str) -> Result<Option<String>, FormatError> {
        let Some(cache) = self.cache else {
            return Ok(None);
        };
        if !base.contains("?_") || base == self.entity.identifier() {
            return Ok(None);
        }
        let id = match self.entity.subtype(base) {
            Some(Resolved::Found(id)) => Some(id),
            Some(Resolved::NotFound) => None,
            None => cache.lookup(base),
        };
        let Some(inner) = id.and_then(|id| cache.get(id)) else {
            return Ok(None);
        };
        let body = Scope {
            entity: inner,
            cache: self.cache,
        }
        .render()?;
        Ok(Some(body.trim_end_matches(';').to_string()))
    }

    /// `d` applied to `name`, with an anonymous base written out in full.
    /// Continuation lines of an inlined body get `indent`.
    fn declare(&self, d: &Declarator, name: &str, indent: &str) -> Result<String, FormatError> {
        Ok(match self.anonymous(d.base())? {
            Some(body) => {
                let body = body.replace('\n', &format!("\n{}", indent));
                d.show_inline(&body, name)
            }
            None => d.show(name),
        })
    }

    fn record(&self, keyword: &str, fields: &[StructField]) -> Result<String, FormatError> {
        let id = self.entity.identifier();
        // anonymous records are printed without their generated name
        let name = if id.contains("?_") { keyword } else { id };
        let mut lines = vec![format!("{} {{", name)];
        for f in fields.iter().filter(|f| !f.name.is_empty()) {
            lines.push(format!("  {};", self.declare(&f.declarator()?, &f.name, "  ")?));
        }
        lines.push("};".to_string());
        Ok(lines.join("\n"))
    }

    fn class(&self, header: &str, members: &[ClassMember]) -> Result<String, FormatError> {
        let own = self.entity.base_name();
        let mut parents = Vec::new();
        let mut usings = Vec::new();
        let mut sections: Vec<(&str, Vec<String>)> =
            ACCESS_ORDER.iter().map(|a| (*a, Vec::new())).collect();

        for member in members {
            match member {
                ClassMember::Parent(p) => {
                    let base = Declarator::parse_cxx(&p.name)?.show_base(false, true);
                    let access = p.access.to_lowercase();
                    let specifier = [p.is_virtual.then_some("virtual"), Some(access.as_str())]
                        .into_iter()
                        .flatten()
                        .filter(|s| !s.is_empty())
                        .join(" ");
                    parents.push(format!("{} {}", specifier, base).trim_start().to_string());
                }
                ClassMember::Using(u) => {
                    let scope = u
                        .types
                        .iter()
                        .map(|t| Declarator::parse_cxx(t).map(|d| d.show_base(false, true)))
                        .collect::<Result<Vec<_>, _>>()?
                        .join("::");
                    if u.name == own {
                        usings.push(format!("  using {};", scope));
                    } else {
                        usings.push(format!("  using {}::{};", scope, u.name));
                    }
                }
                ClassMember::Field(f) => {
                    let (prefix, suffix) = match f.attribute.split_once(',') {
                        Some((a, s)) => (a, s),
                        None => (f.attribute.as_str(), ""),
                    };
                    let prefix = if prefix.is_empty() {
                        String::new()
                    } else {
                        format!("{} ", prefix)
                    };
                    let decl = self.declare(&f.declarator()?, &f.name, "    ")?;
                    let line = format!("    {}{}{};", prefix, decl, suffix);
                    let slot = ACCESS_ORDER
                        .iter()
                        .position(|a| *a == f.access)
                        .unwrap_or(ACCESS_ORDER.len() - 1);
                    sections[slot].1.push(line);
                }
            }
        }

        let mut header = header.to_string();
        if !parents.is_empty() {
            header = format!("{} : {}", header, parents.join(", "));
        }
        let mut lines = vec![format!("{} {{", header)];
        lines.extend(usings);
        for (access, fields) in sections {
            if fields.is_empty() {
                continue;
            }
            if !access.is_empty() {
                lines.push(format!("  {}:", access.to_lowercase()));
            }
            lines.extend(fields);
        }
        lines.push("};".to_string());
        Ok(lines.join("\n"))
    }

    /// `template<...>` line followed by the wrapped class or function.
    fn template(&self, t: &TemplateValue) -> Result<String, FormatError> {
        let name = self.entity.basename();
        let body = match (&t.class, &t.function) {
            (Some(members), _) => self.class(name, members)?,
            (None, Some(f)) => format!("{};", f.declarator()?.show(name)),
            (None, None) => {
                return Err(FormatError::EmptyTemplate(
                    self.entity.identifier().to_string(),
                ))
            }
        };
        Ok(format!("template{}\n{}", t.template_params(), body))
    }
}
