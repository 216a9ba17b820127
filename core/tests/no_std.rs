//! Test that sqlbatch-core compiles and works in no_std environments
//!
//! Run with: cargo test -p sqlbatch-core --no-default-features --features "alloc"

#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use sqlbatch_core::{
    Attribute, BatchError, BatchPlan, Element, QueryGroup, Record, Shape, placeholders,
    resolve_columns, validate_collection,
};

struct Feeder {
    id: u32,
    circuit: u32,
}

impl Record<u32> for Feeder {
    fn attributes(&self) -> &'static [Attribute] {
        const ATTRIBUTES: &[Attribute] = &[
            Attribute::new("id", "id"),
            Attribute::new("circuit", "circuit_no"),
        ];
        ATTRIBUTES
    }

    fn value(&self, attribute: &str) -> Option<u32> {
        match attribute {
            "id" => Some(self.id),
            "circuit" => Some(self.circuit),
            _ => None,
        }
    }
}

impl Element<u32> for Feeder {
    fn shape(&self) -> Shape<'_, u32> {
        Shape::Struct(self)
    }
}

#[test]
fn test_plan_no_std() {
    let plan = BatchPlan::new(5000, 15, 65535);
    assert_eq!(plan.rows_per_batch, 4369);
    assert_eq!(plan.batch_count, 2);
}

#[test]
fn test_placeholders_no_std() {
    assert_eq!(placeholders(2, 5), "($5,$6)");
}

#[test]
fn test_inspection_no_std() {
    let feeders = vec![Feeder { id: 1, circuit: 12 }, Feeder { id: 2, circuit: 14 }];
    let collection = validate_collection(&feeders).unwrap();
    assert_eq!(collection.items.len(), 2);

    let fields = resolve_columns::<u32, _>(&collection.items[0], &["circuit_no", "id"][..]).unwrap();
    assert_eq!(fields, ["circuit", "id"]);

    assert!(matches!(
        validate_collection(&7u32),
        Err(BatchError::NotAnArray)
    ));
}

#[test]
fn test_scatter_no_std() {
    let group: QueryGroup<u32> = QueryGroup {
        sql: String::from("INSERT"),
        rows: Vec::new(),
        args: Vec::new(),
        start: 1,
        end: 2,
    };
    let mut dest = [0u32; 3];
    assert_eq!(group.scatter(&mut dest, [9]).unwrap(), 1);
    assert_eq!(dest, [0, 9, 0]);
}
