// Mon Oct 12 2026 - Alex

use crate::structure::Alignment;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BitRange {
    /// First bit inside the storage unit at `offset`.
    pub position: u32,
    pub width: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldPlacement {
    pub name: String,
    #[serde(rename = "type")]
    pub type_spelling: String,
    pub offset: u64,
    pub size: u64,
    pub alignment: Alignment,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bits: Option<BitRange>,
}

impl FieldPlacement {
    pub fn end(&self) -> u64 {
        self.offset + self.size
    }
}

impl fmt::Display for FieldPlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ 0x{:x}: {} ({} bytes)", self.name, self.offset, self.type_spelling, self.size)?;
        if let Some(b) = self.bits {
            write!(f, " bits {}..{}", b.position, b.position + b.width)?;
        }
        Ok(())
    }
}

/// Placed fields of one struct, union or flattened class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructOffsets {
    pub name: String,
    pub fields: Vec<FieldPlacement>,
    pub size: u64,
    pub alignment: Alignment,
}

impl StructOffsets {
    pub fn field(&self, name: &str) -> Option<&FieldPlacement> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn offsets(&self) -> Vec<u64> {
        self.fields.iter().map(|f| f.offset).collect()
    }

    /// Bytes of padding between fields and at the tail.
    pub fn padding(&self) -> u64 {
        let mut end = 0;
        let mut used = 0;
        for f in &self.fields {
            if f.offset >= end {
                used += f.size;
            } else if f.end() > end {
                used += f.end() - end;
            }
            end = end.max(f.end());
        }
        self.size.saturating_sub(used)
    }
}

impl fmt::Display for StructOffsets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} (size {}, align {})", self.name, self.size, self.alignment.as_u64())?;
        for field in &self.fields {
            writeln!(f, "  {}", field)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placed(name: &str, offset: u64, size: u64) -> FieldPlacement {
        FieldPlacement {
            name: name.to_string(),
            type_spelling: "int".to_string(),
            offset,
            size,
            alignment: Alignment::new(size).unwrap_or_default(),
            bits: None,
        }
    }

    #[test]
    fn test_padding() {
        let s = StructOffsets {
            name: "struct S".to_string(),
            fields: vec![placed("c", 0, 1), placed("i", 4, 4), placed("s", 8, 2)],
            size: 12,
            alignment: Alignment::new(4).unwrap(),
        };
        assert_eq!(s.padding(), 5);
        assert_eq!(s.field("i").map(|f| f.end()), Some(8));
        assert_eq!(s.to_string().lines().nth(2), Some("  i @ 0x4: int (4 bytes)"));
    }

    #[test]
    fn test_union_padding() {
        let s = StructOffsets {
            name: "union U".to_string(),
            fields: vec![placed("c", 0, 1), placed("l", 0, 8)],
            size: 8,
            alignment: Alignment::new(8).unwrap(),
        };
        assert_eq!(s.padding(), 0);
    }
}
