#![allow(dead_code)]

use sqlbatch::Record;
use sqlbatch::core::{AsyncExecutor, Executor, RawQuery};
use sqlbatch::error::BatchError;
use sqlbatch::postgres::{BoundValue, PostgresValue};

pub const SAMPLE_TABLE: &str = "sample";

pub const SAMPLE_COLUMNS: [&str; 15] = [
    "id", "col_01", "col_02", "col_03", "col_04", "col_05", "col_06", "col_07", "col_08", "col_09",
    "col_10", "col_11", "col_12", "col_13", "col_14",
];

/// Fifteen published columns: 4369 rows fit under the PostgreSQL ceiling.
#[derive(Record, Debug, Clone, PartialEq, Default)]
pub struct SampleTable {
    #[column("id")]
    pub id: i64,
    #[column("col_01")]
    pub col_01: String,
    #[column("col_02")]
    pub col_02: String,
    #[column("col_03")]
    pub col_03: String,
    #[column("col_04")]
    pub col_04: String,
    #[column("col_05")]
    pub col_05: String,
    #[column("col_06")]
    pub col_06: String,
    #[column("col_07")]
    pub col_07: String,
    #[column("col_08")]
    pub col_08: String,
    #[column("col_09")]
    pub col_09: String,
    #[column("col_10")]
    pub col_10: String,
    #[column("col_11")]
    pub col_11: String,
    #[column("col_12")]
    pub col_12: String,
    #[column("col_13")]
    pub col_13: String,
    #[column("col_14")]
    pub col_14: String,
}

impl SampleTable {
    pub fn row(idx: usize) -> Self {
        let value = format!("DataRow__{idx}");
        Self {
            id: idx as i64,
            col_01: value.clone(),
            col_02: value.clone(),
            col_03: value.clone(),
            col_04: value.clone(),
            col_05: value.clone(),
            col_06: value.clone(),
            col_07: value.clone(),
            col_08: value.clone(),
            col_09: value.clone(),
            col_10: value.clone(),
            col_11: value.clone(),
            col_12: value.clone(),
            col_13: value.clone(),
            col_14: value,
        }
    }

    /// Rebuilds a record from one returned row in `SAMPLE_COLUMNS` order.
    pub fn decode(row: &[BoundValue]) -> sqlbatch::Result<Self> {
        let text = |idx: usize| match row.get(idx) {
            Some(PostgresValue::Text(value)) => Ok(value.to_string()),
            other => Err(BatchError::Mapping(format!(
                "column {idx} is not text: {other:?}"
            ))),
        };
        let id = match row.first() {
            Some(PostgresValue::Bigint(id)) => *id,
            other => {
                return Err(BatchError::Mapping(format!("id is not bigint: {other:?}")));
            }
        };

        Ok(Self {
            id,
            col_01: text(1)?,
            col_02: text(2)?,
            col_03: text(3)?,
            col_04: text(4)?,
            col_05: text(5)?,
            col_06: text(6)?,
            col_07: text(7)?,
            col_08: text(8)?,
            col_09: text(9)?,
            col_10: text(10)?,
            col_11: text(11)?,
            col_12: text(12)?,
            col_13: text(13)?,
            col_14: text(14)?,
        })
    }
}

pub fn sample_rows(count: usize) -> Vec<Box<SampleTable>> {
    (0..count).map(|idx| Box::new(SampleTable::row(idx))).collect()
}

#[derive(Record, Debug, Clone, PartialEq)]
pub struct Substation {
    #[column("id")]
    pub id: i64,
    #[column("asset_id")]
    pub asset_id: String,
    #[column("display_name")]
    pub name: String,
    #[column("capacity_mva")]
    pub capacity: Option<f64>,
    #[column(skip)]
    pub notes: String,
    pub cache: Vec<u8>,
}

pub fn substations(count: usize) -> Vec<Substation> {
    (0..count)
        .map(|idx| Substation {
            id: idx as i64 + 1,
            asset_id: format!("SUB-{idx:03}"),
            name: format!("Substation {idx}"),
            capacity: (idx % 2 == 0).then_some(idx as f64 * 10.0),
            notes: String::from("internal"),
            cache: vec![0xff],
        })
        .collect()
}

/// Stands in for a database: echoes every bound row back as if it were
/// returned by `RETURNING`, and records the statements it ran.
#[derive(Debug, Default)]
pub struct EchoExecutor {
    pub statements: Vec<(String, usize)>,
    /// Fail the statement with this index
    pub fail_at: Option<usize>,
}

impl EchoExecutor {
    fn run(&mut self, query: RawQuery<'_, BoundValue>) -> sqlbatch::Result<Vec<Vec<BoundValue>>> {
        if self.fail_at == Some(self.statements.len()) {
            return Err(BatchError::Execution(String::from("connection reset")));
        }
        self.statements.push((query.sql.to_string(), query.params.len()));

        let width = returning_width(query.sql);
        if width == 0 {
            return Ok(Vec::new());
        }
        Ok(query.params.chunks(width).map(<[_]>::to_vec).collect())
    }
}

fn returning_width(sql: &str) -> usize {
    sql.rsplit_once("RETURNING (")
        .and_then(|(_, cols)| cols.strip_suffix(')'))
        .map_or(0, |cols| cols.split(',').count())
}

impl<'a> Executor<PostgresValue<'a>> for EchoExecutor {
    type Row = Vec<BoundValue>;

    fn execute(&mut self, query: RawQuery<'_, PostgresValue<'a>>) -> sqlbatch::Result<u64> {
        let owned = owned_params(query.params);
        let rows = self.run(RawQuery {
            sql: query.sql,
            params: &owned,
        })?;
        Ok(rows.len() as u64)
    }

    fn fetch(
        &mut self,
        query: RawQuery<'_, PostgresValue<'a>>,
    ) -> sqlbatch::Result<Vec<Vec<BoundValue>>> {
        let owned = owned_params(query.params);
        self.run(RawQuery {
            sql: query.sql,
            params: &owned,
        })
    }
}

impl<'a> AsyncExecutor<PostgresValue<'a>> for EchoExecutor {
    type Row = Vec<BoundValue>;

    async fn execute(&mut self, query: RawQuery<'_, PostgresValue<'a>>) -> sqlbatch::Result<u64> {
        Executor::execute(self, query)
    }

    async fn fetch(
        &mut self,
        query: RawQuery<'_, PostgresValue<'a>>,
    ) -> sqlbatch::Result<Vec<Vec<BoundValue>>> {
        Executor::fetch(self, query)
    }
}

fn owned_params(params: &[PostgresValue<'_>]) -> Vec<BoundValue> {
    params.iter().cloned().map(PostgresValue::into_owned).collect()
}
