//! Shared diagnostic messages for macros.

pub(crate) const STRUCTS_ONLY: &str = "Record can only be derived for structs";

pub(crate) const NAMED_FIELDS_ONLY: &str = "Record can only be derived for structs with named fields.\n\
     Tuple and unit structs have no field names to map onto columns";

pub(crate) const COLUMN_USAGE: &str = "expected a column name or `skip`.\n\
     Example: #[column(\"asset_id\")], #[column(name = \"asset_id\")] or #[column(skip)]";

pub(crate) const DUPLICATE_COLUMN_ATTRIBUTE: &str = "a field may carry at most one `column` attribute";

pub(crate) fn duplicate_column_message(column: &str) -> String {
    format!("column `{column}` is already published by another field")
}
