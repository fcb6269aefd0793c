// THEORY:
// A `Band` is one of three horizontal slices of an image. When the photographs are
// taken from a consistent viewpoint, the upper, middle and lower thirds stand in for
// three distinct visual fields (dorsal, lateral and ventral).
//
// The split is purely row-based: boundaries sit at `floor(H/3)` and `floor(2H/3)`,
// so the three ranges are contiguous, never overlap, and always cover `[0, H)`.
// Images shorter than three rows produce one or more empty bands; those are left
// empty here and surface as an undefined statistic further up.

use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Band {
    /// Rows `[0, floor(H/3))`.
    Upper,
    /// Rows `[floor(H/3), floor(2H/3))`.
    Middle,
    /// Rows `[floor(2H/3), H)`.
    Lower,
}

impl Band {
    pub const ALL: [Band; 3] = [Band::Upper, Band::Middle, Band::Lower];

    /// One-based position, matching the `BandN_Contrast` column names.
    pub fn number(self) -> usize {
        match self {
            Band::Upper => 1,
            Band::Middle => 2,
            Band::Lower => 3,
        }
    }

    /// The half-open row range this band covers in an image of `height` rows.
    pub fn rows(self, height: usize) -> Range<usize> {
        let [first_cut, second_cut] = cuts(height);
        match self {
            Band::Upper => 0..first_cut,
            Band::Middle => first_cut..second_cut,
            Band::Lower => second_cut..height,
        }
    }
}

/// Row indices where the upper/middle and middle/lower bands meet.
pub fn cuts(height: usize) -> [usize; 2] {
    [height / 3, (2 * height) / 3]
}

/// Row ranges of all three bands, top to bottom.
pub fn partition(height: usize) -> [Range<usize>; 3] {
    Band::ALL.map(|band| band.rows(height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partition_is_contiguous_and_complete() {
        for height in 0..200 {
            let [upper, middle, lower] = partition(height);
            assert_eq!(upper.start, 0);
            assert_eq!(upper.end, middle.start);
            assert_eq!(middle.end, lower.start);
            assert_eq!(lower.end, height);
            assert_eq!(upper.len() + middle.len() + lower.len(), height);
        }
    }

    #[test]
    fn bands_are_non_empty_from_three_rows() {
        for height in 3..200 {
            assert!(partition(height).iter().all(|rows| !rows.is_empty()));
        }
    }

    #[test]
    fn short_images_leave_bands_empty() {
        assert_eq!(partition(1), [0..0, 0..0, 0..1]);
        assert_eq!(partition(2), [0..0, 0..1, 1..2]);
    }

    #[test]
    fn cuts_use_floor_division() {
        assert_eq!(cuts(3), [1, 2]);
        assert_eq!(cuts(10), [3, 6]);
        assert_eq!(cuts(11), [3, 7]);
        assert_eq!(cuts(1080), [360, 720]);
    }

    #[test]
    fn numbers_follow_top_to_bottom_order() {
        let numbers: Vec<usize> = Band::ALL.iter().map(|band| band.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }
}
