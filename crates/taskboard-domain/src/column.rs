pub type ColumnId = String;
