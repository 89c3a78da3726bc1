// Mon Oct 12 2026 - Alex

use crate::resolve::{ResolutionCache, TypeStore};
use crate::structure::OffsetCalculator;
use crate::xref::{GraphError, TypeGraph};
use std::fmt;

/// Parsed edge label: `<derefs><field>[<index>]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accessor {
    pub derefs: String,
    pub name: String,
    pub index: u64,
}

impl Accessor {
    pub fn parse(label: &str) -> Result<Self, GraphError> {
        let (rest, index) = match label.rfind('[') {
            Some(i) if i > 0 => {
                let digits = label[i + 1..]
                    .strip_suffix(']')
                    .ok_or_else(|| GraphError::InvalidAccessor(label.to_string()))?;
                let index = digits
                    .trim()
                    .parse()
                    .map_err(|_| GraphError::InvalidAccessor(label.to_string()))?;
                (&label[..i], index)
            }
            _ => (label, 0),
        };
        let (derefs, name) = match rest.rfind('*') {
            Some(i) if rest.starts_with('*') => rest.split_at(i + 1),
            _ => ("", rest),
        };
        Ok(Self {
            derefs: derefs.to_string(),
            name: name.to_string(),
            index,
        })
    }

    pub fn deref_count(&self) -> usize {
        self.derefs.chars().filter(|c| *c == '*').count()
    }
}

impl fmt::Display for Accessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.derefs, self.name)?;
        if self.index > 0 {
            write!(f, "[{}]", self.index)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleStep {
    Field { offset: u64, name: String },
    Deref,
}

impl fmt::Display for CycleStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field { offset, name } => write!(f, "+0x{:x} ({})", offset, name),
            Self::Deref => write!(f, "*"),
        }
    }
}

impl TypeGraph {
    /// Translates a cycle found from `root` into field offsets and
    /// dereferences, computing layouts with `calculator`.
    pub fn cycle_offsets<S: TypeStore + ?Sized>(
        &self,
        root: &str,
        cycle: &[String],
        cache: &mut ResolutionCache,
        store: &S,
        calculator: &OffsetCalculator,
    ) -> Result<Vec<CycleStep>, GraphError> {
        let mut current = self
            .find(root)
            .ok_or_else(|| GraphError::NodeNotFound(root.to_string()))?;
        let mut steps = Vec::new();

        for label in cycle {
            let accessor = Accessor::parse(label)?;
            let node = self
                .node(current)
                .ok_or_else(|| GraphError::NodeNotFound(root.to_string()))?;
            if !accessor.name.is_empty() {
                let id = node
                    .entity()
                    .ok_or_else(|| GraphError::NodeNotFound(node.identifier().to_string()))?;
                let layout = calculator.offsets(cache, store, id)?;
                let field = layout.field(&accessor.name).ok_or_else(|| GraphError::FieldNotFound {
                    entity: node.identifier().to_string(),
                    field: accessor.name.clone(),
                })?;
                steps.push(CycleStep::Field {
                    offset: field.offset,
                    name: accessor.name.clone(),
                });
            }
            steps.extend(std::iter::repeat(CycleStep::Deref).take(accessor.deref_count()));
            current = self.step(current, label).ok_or_else(|| GraphError::EdgeNotFound {
                from: node.identifier().to_string(),
                label: label.clone(),
            })?;
        }
        Ok(steps)
    }
}
