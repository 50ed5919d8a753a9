/// Move focus one cell forward, wrapping to the first cell.
pub fn select_next(selected: usize, item_count: usize) -> usize {
    if selected + 1 < item_count {
        selected + 1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::select_next;

    #[test]
    fn advances_within_ring() {
        assert_eq!(select_next(0, 7), 1);
        assert_eq!(select_next(5, 7), 6);
    }

    #[test]
    fn wraps_from_last_cell() {
        assert_eq!(select_next(6, 7), 0);
    }

    #[test]
    fn out_of_range_or_empty_resets() {
        assert_eq!(select_next(9, 7), 0);
        assert_eq!(select_next(0, 0), 0);
        assert_eq!(select_next(0, 1), 0);
    }
}
