//! Dining Table Model

/// Table number as printed on the floor plan
pub type TableId = u32;

/// Every table on the floor plan. There is no table 4.
pub const TABLE_NUMBERS: [TableId; 8] = [1, 2, 3, 5, 6, 7, 8, 9];

/// Check whether a table number exists on the floor plan
pub fn table_exists(table_id: TableId) -> bool {
    TABLE_NUMBERS.contains(&table_id)
}
