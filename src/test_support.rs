// Mon Oct 12 2026 - Alex

use crate::entity::{EntityClass, RawDocument};
use crate::resolve::MemoryStore;
use serde_json::{json, Value};

fn class(id: &str, members: Value) -> RawDocument {
    RawDocument::new(id, EntityClass::Class, members)
}

fn record(id: &str, fields: Value) -> RawDocument {
    RawDocument::new(id, EntityClass::Struct, fields)
}

/// B <- G (virtual methods), J : virtual G, H : B, K : virtual G, J, H.
pub(crate) fn class_hierarchy_store() -> MemoryStore {
    MemoryStore::from_documents(vec![
        class("class B", json!([[["", "int"], ["", "b"], ["PUBLIC", null]]])),
        class(
            "class G",
            json!([
                [["parent", ""], ["", "class B"], ["PUBLIC", ""]],
                [["", "int"], ["", "g"], ["PUBLIC", null]],
                [["", "int"], ["", "i"], ["PUBLIC", null]],
                [["virtual", "void ()"], ["_ZN1G2vgEv", "vg"], ["PUBLIC", null]]
            ]),
        ),
        class(
            "class J",
            json!([
                [["parent", "virtual"], ["", "class G"], ["PUBLIC", ""]],
                [["", "int"], ["", "j"], ["PUBLIC", null]],
                [["", "int"], ["", "k"], ["PUBLIC", null]],
                [["", "int"], ["", "a"], ["PUBLIC", null]],
                [["virtual", "void ()"], ["_ZN1J2vjEv", "vj"], ["PUBLIC", null]]
            ]),
        ),
        class(
            "class H",
            json!([
                [["parent", ""], ["", "class B"], ["PUBLIC", ""]],
                [["", "int"], ["", "h"], ["PUBLIC", null]],
                [["virtual", "void ()"], ["_ZN1H2vhEv", "vh"], ["PUBLIC", null]]
            ]),
        ),
        class(
            "class K",
            json!([
                [["parent", "virtual"], ["", "class G"], ["PUBLIC", ""]],
                [["parent", "virtual"], ["", "class J"], ["PUBLIC", ""]],
                [["parent", "virtual"], ["", "class H"], ["PUBLIC", ""]]
            ]),
        ),
    ])
}

/// Two pointer cycles: grG -> gA -> gB -> grG and gC -> gD -> gE -> gF -> gC,
/// joined by grG.c.
pub(crate) fn pointer_cycles_store() -> MemoryStore {
    MemoryStore::from_documents(vec![
        record(
            "struct grG",
            json!([["struct gA *", "a", null], ["struct gC *", "c", null]]),
        ),
        record("struct gA", json!([["int", "x", null], ["struct gB *", "b", null]])),
        record("struct gB", json!([["struct grG *", "g", null]])),
        record("struct gC", json!([["struct gD *", "d", null]])),
        record("struct gD", json!([["char [3]", "pad", null], ["struct gE *", "e", null]])),
        record("struct gE", json!([["struct gF *", "f", null]])),
        record("struct gF", json!([["long", "n", null], ["struct gC **", "c", null]])),
    ])
}
