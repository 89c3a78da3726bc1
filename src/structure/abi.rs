// Mon Oct 12 2026 - Alex

use crate::declarator::Declarator;
use crate::entity::{ClassMember, EntityId, StructField, TypeEntity, TypeEntityKind};
use crate::resolve::{ResolutionCache, TypeStore};
use crate::structure::layout::{starts_with_vptr, vptr_field};
use crate::structure::{LayoutError, StructLayout};
use indexmap::IndexMap;
use std::collections::HashSet;

/// Where a class needs a vtable pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VptrKind {
    #[default]
    None,
    /// The class or one of its non-virtual bases declares virtual methods.
    Direct,
    /// The class has virtual bases laid out after its own fields.
    VirtualBases,
}

impl VptrKind {
    pub fn is_set(self) -> bool {
        self != Self::None
    }

    pub fn merge(self, other: VptrKind) -> Self {
        if self.is_set() {
            self
        } else {
            other
        }
    }
}

/// Region of a virtual base: whether it carries a vtable pointer, and its
/// fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualBase {
    pub vptr: VptrKind,
    pub fields: Vec<StructField>,
}

/// Result of `layout_of`: the non-virtual part of a class plus its virtual
/// bases in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClassLayout {
    pub vptr: VptrKind,
    pub fields: Vec<StructField>,
    pub virtual_bases: IndexMap<String, VirtualBase>,
}

impl ClassLayout {
    fn merge_virtual_bases(&mut self, bases: IndexMap<String, VirtualBase>) {
        for (name, base) in bases {
            self.virtual_bases.entry(name).or_insert(base);
        }
    }
}

/// Flattens C++ classes into plain structs following the Itanium layout of
/// single and virtual inheritance.
pub struct AbiLayoutBuilder<'a, S: TypeStore + ?Sized> {
    cache: &'a mut ResolutionCache,
    store: &'a S,
    visiting: HashSet<EntityId>,
}

impl<'a, S: TypeStore + ?Sized> AbiLayoutBuilder<'a, S> {
    pub fn new(cache: &'a mut ResolutionCache, store: &'a S) -> Self {
        Self {
            cache,
            store,
            visiting: HashSet::new(),
        }
    }

    pub fn layout_of(&mut self, id: EntityId) -> Result<ClassLayout, LayoutError> {
        self.cache.unfold(id, self.store, None)?;
        let entity = &self.cache[id];
        let name = entity.identifier().to_string();
        let members = entity
            .members()
            .ok_or_else(|| LayoutError::TypeConsistency {
                name: name.clone(),
                found: entity.class(),
            })?
            .to_vec();

        if !self.visiting.insert(id) {
            return Err(LayoutError::InheritanceCycle(name));
        }
        let result = self.collect(&members);
        self.visiting.remove(&id);
        result
    }

    fn collect(&mut self, members: &[ClassMember]) -> Result<ClassLayout, LayoutError> {
        let mut layout = ClassLayout::default();

        for member in members {
            match member {
                ClassMember::Parent(parent) => {
                    let pid = self.base_class(&parent.name)?;
                    let pname = self.cache[pid].base_name().to_string();
                    let p = self.layout_of(pid)?;

                    if parent.is_virtual {
                        layout
                            .virtual_bases
                            .entry(pname)
                            .or_insert(VirtualBase {
                                vptr: p.vptr,
                                fields: p.fields,
                            });
                        layout.merge_virtual_bases(p.virtual_bases);
                        layout.vptr = VptrKind::VirtualBases;
                    } else {
                        let mut fields = p.fields;
                        if p.vptr.is_set() && !starts_with_vptr(&fields) {
                            fields.insert(0, vptr_field(&pname));
                        }
                        layout.fields.extend(fields);
                        layout.vptr = layout.vptr.merge(p.vptr);
                        layout.merge_virtual_bases(p.virtual_bases);
                    }
                }
                ClassMember::Using(_) => {}
                ClassMember::Field(f) => {
                    if f.is_virtual() {
                        layout.vptr = layout.vptr.merge(VptrKind::Direct);
                        continue;
                    }
                    // static data and friends live outside the object
                    if f.is_static() || f.is_friend() || f.is_method()? {
                        continue;
                    }
                    layout.fields.push(StructField {
                        type_spelling: f.type_spelling.clone(),
                        name: f.name.clone(),
                        comment: f.comment.clone(),
                    });
                }
            }
        }
        Ok(layout)
    }

    /// Flattened struct of class `id`, named `struct __layout$<Name>`.
    /// A `__vptr$` field is only added in front of data members, so a class
    /// with nothing but virtual methods flattens to an empty struct.
    pub fn struct_layout(&mut self, id: EntityId) -> Result<StructLayout, LayoutError> {
        let class = self.layout_of(id)?;
        let name = self.cache[id].base_name().to_string();
        let mut out = StructLayout::new(&format!("struct __layout${}", name));

        if !class.fields.is_empty() && class.vptr.is_set() && !starts_with_vptr(&class.fields) {
            out.push(vptr_field(&name));
        }
        out.extend(class.fields);

        for (base, region) in class.virtual_bases {
            if region.vptr.is_set() && !starts_with_vptr(&region.fields) {
                out.push(vptr_field(&base));
            }
            out.extend(region.fields);
        }
        log::debug!("{} flattened into {} fields", out.name(), out.len());
        Ok(out)
    }

    pub fn as_struct(&mut self, id: EntityId) -> Result<TypeEntity, LayoutError> {
        Ok(self.struct_layout(id)?.into_entity())
    }

    /// Finds the class named by a base specifier. A typedef is followed
    /// once.
    fn base_class(&mut self, name: &str) -> Result<EntityId, LayoutError> {
        let id = self
            .find(name)?
            .ok_or_else(|| LayoutError::UnknownBaseType(name.to_string()))?;

        let target = match self.cache[id].kind() {
            TypeEntityKind::Typedef(spelling) => {
                let base = Declarator::parse_any(spelling)?.base().to_string();
                self.find(&base)?
                    .ok_or_else(|| LayoutError::UnknownBaseType(name.to_string()))?
            }
            _ => id,
        };

        let entity = &self.cache[target];
        if entity.members().is_none() {
            return Err(LayoutError::TypeConsistency {
                name: name.to_string(),
                found: entity.class(),
            });
        }
        Ok(target)
    }

    fn find(&mut self, name: &str) -> Result<Option<EntityId>, LayoutError> {
        let bare = name
            .strip_prefix("class ")
            .or_else(|| name.strip_prefix("struct "))
            .unwrap_or(name);
        for candidate in [
            name.to_string(),
            format!("class {}", bare),
            format!("struct {}", bare),
        ] {
            if let Some(id) = self.cache.load(&candidate, self.store)? {
                return Ok(Some(id));
            }
        }
        Ok(None)
    }
}
