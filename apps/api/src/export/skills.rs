//! Skills grid — packs short skill strings row-major into a borderless table.

/// Item count at which the grid widens from two to three columns.
pub const THREE_COLUMN_THRESHOLD: usize = 9;

/// Glyph printed before each populated cell.
pub const SKILL_BULLET: &str = "•";

/// Row-major layout of skill items. Trailing cells of a short final row are `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillsGrid {
    pub columns: usize,
    pub rows: Vec<Vec<Option<String>>>,
}

/// Column count from item count alone.
pub fn column_count(item_count: usize) -> usize {
    if item_count < THREE_COLUMN_THRESHOLD {
        2
    } else {
        3
    }
}

/// Lays the items out in their original order, never reflowing a short last row.
pub fn layout_skills(items: &[String]) -> SkillsGrid {
    let columns = column_count(items.len());
    let rows = items
        .chunks(columns)
        .map(|chunk| {
            let mut row: Vec<Option<String>> = chunk.iter().cloned().map(Some).collect();
            row.resize(columns, None);
            row
        })
        .collect();

    SkillsGrid { columns, rows }
}

/// Splits `total_width` evenly across `columns`.
pub fn column_widths(total_width: usize, columns: usize) -> Vec<usize> {
    if columns == 0 {
        return Vec::new();
    }
    vec![total_width / columns; columns]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("skill {i}")).collect()
    }

    #[test]
    fn test_column_threshold() {
        assert_eq!(column_count(0), 2);
        assert_eq!(column_count(8), 2);
        assert_eq!(column_count(9), 3);
        assert_eq!(column_count(30), 3);
    }

    #[test]
    fn test_ten_items_three_columns_row_major() {
        let grid = layout_skills(&items(10));
        assert_eq!(grid.columns, 3);
        assert_eq!(grid.rows.len(), 4);
        assert_eq!(grid.rows[0][0].as_deref(), Some("skill 1"));
        assert_eq!(grid.rows[0][2].as_deref(), Some("skill 3"));
        assert_eq!(grid.rows[1][0].as_deref(), Some("skill 4"));
        assert_eq!(grid.rows[3], vec![Some("skill 10".to_string()), None, None]);
    }

    #[test]
    fn test_odd_count_two_columns_leaves_trailing_cell_empty() {
        let grid = layout_skills(&items(5));
        assert_eq!(grid.columns, 2);
        assert_eq!(grid.rows.len(), 3);
        assert_eq!(grid.rows[2], vec![Some("skill 5".to_string()), None]);
    }

    #[test]
    fn test_every_row_has_full_width() {
        let grid = layout_skills(&items(11));
        assert!(grid.rows.iter().all(|row| row.len() == grid.columns));
    }

    #[test]
    fn test_column_widths_even_split() {
        assert_eq!(column_widths(10800, 3), vec![3600, 3600, 3600]);
        assert_eq!(column_widths(10800, 2), vec![5400, 5400]);
        assert!(column_widths(10800, 0).is_empty());
    }
}
