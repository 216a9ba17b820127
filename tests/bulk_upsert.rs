use common::{EchoExecutor, SAMPLE_COLUMNS, SAMPLE_TABLE, SampleTable, sample_rows, substations};
use sqlbatch::error::BatchError;
use sqlbatch::postgres::{BulkUpsert, PostgresValue};

mod common;

#[test]
fn bulk_upsert_statement_text() {
    let data = substations(2);
    let op = BulkUpsert::new(
        &data,
        "substations",
        ["asset_id"],
        ["asset_id", "display_name", "capacity_mva"],
        Some(["display_name", "capacity_mva"]),
    )
    .unwrap();
    let groups = op.queries().unwrap();

    assert_eq!(groups.len(), 1);
    assert_eq!(
        groups[0].sql,
        "INSERT INTO \"substations\" (\"asset_id\",\"display_name\",\"capacity_mva\")\n\
         VALUES\n\
         ($1,$2,$3),\n\
         ($4,$5,$6)\n\
         ON CONFLICT (\"asset_id\")\n\
         DO UPDATE SET\n    \
         \"display_name\" = \"excluded\".\"display_name\",\n    \
         \"capacity_mva\" = \"excluded\".\"capacity_mva\"\n\
         RETURNING (\"asset_id\",\"display_name\",\"capacity_mva\")"
    );
    assert_eq!(groups[0].args[2], PostgresValue::DoublePrecision(0.0));
    assert_eq!(groups[0].args[5], PostgresValue::Null);
}

#[test]
fn bulk_upsert_defaults_update_columns() {
    let data = substations(1);
    let op = BulkUpsert::new(
        &data,
        "substations",
        ["id"],
        ["id", "asset_id"],
        None::<[&str; 0]>,
    )
    .unwrap();

    assert_eq!(op.update_columns(), ["id", "asset_id"]);
    assert_eq!(op.conflict_targets(), ["id"]);
    assert!(op.queries().unwrap()[0].sql.contains(
        "DO UPDATE SET\n    \"id\" = \"excluded\".\"id\",\n    \"asset_id\" = \"excluded\".\"asset_id\"\n"
    ));
}

#[test]
fn bulk_upsert_5000_rows_splits_like_insert() {
    let mut data = sample_rows(5000);
    let groups = BulkUpsert::new(
        &data,
        SAMPLE_TABLE,
        ["id"],
        SAMPLE_COLUMNS,
        Some(SAMPLE_COLUMNS[1..].iter().copied()),
    )
    .unwrap()
    .queries()
    .unwrap();

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].range(), 0..4369);
    assert_eq!(groups[1].range(), 4369..5000);

    let mut executor = EchoExecutor::default();
    for group in &groups {
        group
            .bind(&mut executor, &mut data[..], |row| {
                SampleTable::decode(row).map(Box::new)
            })
            .unwrap();
    }
    assert_eq!(*data[4999], SampleTable::row(4999));
    assert!(
        executor
            .statements
            .iter()
            .all(|(sql, _)| sql.contains("ON CONFLICT (\"id\")"))
    );
}

#[test]
fn bulk_upsert_rejects_invalid_collections() {
    let empty: Vec<SampleTable> = Vec::new();
    let err = BulkUpsert::new(&empty, SAMPLE_TABLE, ["id"], SAMPLE_COLUMNS, None::<Vec<String>>)
        .unwrap_err();
    assert!(matches!(err, BatchError::EmptyData));

    let scalars = vec![1i64, 2, 3];
    let err = BulkUpsert::new(&scalars, SAMPLE_TABLE, ["id"], ["id"], None::<Vec<String>>)
        .unwrap_err();
    assert!(matches!(err, BatchError::NotAStruct));
}
