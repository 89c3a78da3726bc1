// Mon Oct 12 2026 - Alex

use crate::declarator::{is_primitive, ArrayLength, Declarator, Derivation};
use crate::entity::{EntityId, MacroValue, TypeEntityKind};
use crate::resolve::{ResolutionCache, TypeStore};
use crate::structure::{AbiLayoutBuilder, Alignment, BitRange, FieldPlacement, LayoutError, StructOffsets};
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TypeInfo {
    pub size: u64,
    pub alignment: Alignment,
}

impl TypeInfo {
    fn new(size: u64, alignment: u64) -> Self {
        Self {
            size,
            alignment: Alignment::new(alignment).unwrap_or_default(),
        }
    }
}

/// Computes field offsets and sizes of structs and unions for a given
/// pointer width, following the System V ABI. Bit-fields are packed into
/// storage units of their declared type and never straddle a unit boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetCalculator {
    pointer_size: u64,
    pack: Option<Alignment>,
}

impl OffsetCalculator {
    pub fn new(pointer_size: u64) -> Result<Self, LayoutError> {
        if pointer_size != 4 && pointer_size != 8 {
            return Err(LayoutError::InvalidPointerSize(pointer_size));
        }
        Ok(Self {
            pointer_size,
            pack: None,
        })
    }

    /// Caps every member alignment at `pack` bytes.
    pub fn with_pack(mut self, pack: u64) -> Result<Self, LayoutError> {
        self.pack = Some(Alignment::new(pack).ok_or(LayoutError::InvalidPack(pack))?);
        Ok(self)
    }

    pub fn pointer_size(&self) -> u64 {
        self.pointer_size
    }

    /// Field placement of the struct, union or class `id`.
    pub fn offsets<S: TypeStore + ?Sized>(
        &self,
        cache: &mut ResolutionCache,
        store: &S,
        id: EntityId,
    ) -> Result<StructOffsets, LayoutError> {
        Walker::new(self, cache, store).record(id)
    }

    pub fn type_info<S: TypeStore + ?Sized>(
        &self,
        cache: &mut ResolutionCache,
        store: &S,
        spelling: &str,
    ) -> Result<TypeInfo, LayoutError> {
        let d = Declarator::parse_any(spelling)?;
        Walker::new(self, cache, store).declarator(&d)
    }

    fn primitive(&self, base: &str) -> Option<TypeInfo> {
        let p = self.pointer_size;
        // i386 aligns 8 byte scalars on 4
        let wide = if p == 8 { 8 } else { 4 };
        let words: Vec<&str> = base.split_whitespace().collect();
        let has = |w: &str| words.contains(&w);
        let longs = words.iter().filter(|w| **w == "long").count();

        let info = if has("void") || base == "..." {
            return None;
        } else if has("double") {
            match (longs > 0, p) {
                (true, 8) => TypeInfo::new(16, 16),
                (true, _) => TypeInfo::new(12, 4),
                (false, _) => TypeInfo::new(8, wide),
            }
        } else if has("float") || has("char32_t") || has("wchar_t") {
            TypeInfo::new(4, 4)
        } else if has("char16_t") || has("short") {
            TypeInfo::new(2, 2)
        } else if has("char") || has("char8_t") || has("bool") || has("_Bool") {
            TypeInfo::new(1, 1)
        } else if has("__int128") {
            TypeInfo::new(16, 16)
        } else if longs >= 2 {
            TypeInfo::new(8, wide)
        } else if longs == 1 || has("size_t") || has("ssize_t") {
            TypeInfo::new(p, p)
        } else {
            TypeInfo::new(4, 4)
        };
        Some(info)
    }
}

struct Walker<'a, S: TypeStore + ?Sized> {
    calc: &'a OffsetCalculator,
    cache: &'a mut ResolutionCache,
    store: &'a S,
    visiting: HashSet<EntityId>,
}

impl<'a, S: TypeStore + ?Sized> Walker<'a, S> {
    fn new(calc: &'a OffsetCalculator, cache: &'a mut ResolutionCache, store: &'a S) -> Self {
        Self {
            calc,
            cache,
            store,
            visiting: HashSet::new(),
        }
    }

    fn record(&mut self, id: EntityId) -> Result<StructOffsets, LayoutError> {
        let entity = &self.cache[id];
        let name = entity.identifier().to_string();
        let plain = match entity.kind() {
            TypeEntityKind::Struct(f) => Some((f.clone(), false)),
            TypeEntityKind::Union(f) => Some((f.clone(), true)),
            TypeEntityKind::Class(_) | TypeEntityKind::Template(_) => None,
            _ => return Err(LayoutError::NotAStruct(name)),
        };
        let Some((fields, is_union)) = plain else {
            let flat = AbiLayoutBuilder::new(self.cache, self.store).as_struct(id)?;
            let flat_id = self.cache.insert(flat);
            return self.record(flat_id);
        };

        if !self.visiting.insert(id) {
            return Err(LayoutError::RecursiveType(name));
        }
        let pack = self.calc.pack;
        let mut placed = Vec::with_capacity(fields.len());
        let mut bits: u64 = 0;
        let mut largest: u64 = 0;
        let mut alignment = Alignment::BYTE;

        for f in &fields {
            let d = f.declarator()?;
            let info = self.declarator(&d)?;
            let align = info.alignment.packed(pack);
            alignment = alignment.max(align);

            let (offset, range) = match d.bitfield() {
                Some(width) => {
                    let width = u64::from(width);
                    let unit = info.size * 8;
                    if unit == 0 || width > unit {
                        return Err(LayoutError::Unsized(f.type_spelling.clone()));
                    }
                    let mut start = if is_union { 0 } else { bits };
                    if start % unit + width > unit {
                        start = Alignment::new(unit)
                            .map(|u| u.align(start))
                            .unwrap_or(start);
                    }
                    let offset = start / unit * info.size;
                    if !is_union {
                        bits = start + width;
                    }
                    let range = BitRange {
                        position: (start - offset * 8) as u32,
                        width: width as u32,
                    };
                    (offset, Some(range))
                }
                None if is_union => (0, None),
                None => {
                    let offset = align.align(bits.div_ceil(8));
                    bits = (offset + info.size) * 8;
                    (offset, None)
                }
            };
            largest = largest.max(info.size);
            placed.push(FieldPlacement {
                name: f.name.clone(),
                type_spelling: f.type_spelling.clone(),
                offset,
                size: info.size,
                alignment: align,
                bits: range,
            });
        }
        self.visiting.remove(&id);

        let used = if is_union { largest } else { bits.div_ceil(8) };
        Ok(StructOffsets {
            name,
            fields: placed,
            size: alignment.align(used),
            alignment,
        })
    }

    fn declarator(&mut self, d: &Declarator) -> Result<TypeInfo, LayoutError> {
        let derivations = d.derivations();
        let ptr = TypeInfo::new(self.calc.pointer_size, self.calc.pointer_size);

        // the base only matters below the outermost pointer
        let (start, mut info) = match derivations.iter().rposition(Derivation::is_pointer) {
            Some(p) => (p + 1, Some(ptr)),
            None => (0, self.base(d)?),
        };
        for step in &derivations[start..] {
            info = match step {
                Derivation::Array {
                    length: ArrayLength::Fixed(n),
                } => info.map(|i| TypeInfo {
                    size: i.size * u64::from(*n),
                    alignment: i.alignment,
                }),
                Derivation::Array { .. } | Derivation::FunctionSignature { .. } => None,
                Derivation::Pointer { .. } => Some(ptr),
            };
        }
        info.ok_or_else(|| LayoutError::Unsized(d.show("")))
    }

    fn base(&mut self, d: &Declarator) -> Result<Option<TypeInfo>, LayoutError> {
        let base = d.base();
        if is_primitive(base) {
            return Ok(self.calc.primitive(base));
        }
        let id = self
            .cache
            .load(base, self.store)?
            .ok_or_else(|| LayoutError::UnknownType(base.to_string()))?;
        self.entity(id).map(Some)
    }

    fn entity(&mut self, id: EntityId) -> Result<TypeInfo, LayoutError> {
        let kind = self.cache[id].kind().clone();
        match kind {
            TypeEntityKind::Struct(_)
            | TypeEntityKind::Union(_)
            | TypeEntityKind::Class(_)
            | TypeEntityKind::Template(_) => {
                let r = self.record(id)?;
                Ok(TypeInfo {
                    size: r.size,
                    alignment: r.alignment,
                })
            }
            TypeEntityKind::Enum(_) => Ok(TypeInfo::new(4, 4)),
            TypeEntityKind::Typedef(spelling) => {
                let d = Declarator::parse_any(&spelling)?;
                self.declarator(&d)
            }
            TypeEntityKind::Macro(_) => {
                let value = self.cache[id].macro_value();
                match value {
                    Some(MacroValue::Type(d)) => self.declarator(&d),
                    _ => Err(LayoutError::Unsized(self.cache[id].identifier().to_string())),
                }
            }
            TypeEntityKind::Function(_) | TypeEntityKind::Namespace(_) => {
                Err(LayoutError::Unsized(self.cache[id].identifier().to_string()))
            }
        }
    }
}
