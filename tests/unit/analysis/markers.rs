//! Tests for marker shape parsing and orientation search

#[cfg(test)]
mod tests {
    use tileseam::AlgorithmError;
    use tileseam::algorithm::assembly::Assembly;
    use tileseam::analysis::markers::{MarkerShape, find_anchors, search};
    use tileseam::spatial::grid::PixelGrid;
    use tileseam::spatial::orientation::Orientation;

    const SAMPLE: &str = include_str!("../../data/sample_tiles.txt");

    // Tests the default sea monster shape
    // Verified by trimming pattern lines before parsing
    #[test]
    fn test_sea_monster_shape() {
        let shape = MarkerShape::sea_monster();
        assert_eq!(shape.len(), 15);
        assert_eq!(shape.width(), 20);
        assert_eq!(shape.height(), 3);
        assert!(shape.offsets().contains(&[18, 0]));
        assert!(shape.offsets().contains(&[0, 1]));
    }

    // Tests leading spaces shift cells instead of being discarded
    // Verified by trimming each line
    #[test]
    fn test_leading_spaces_are_significant() {
        let shape = MarkerShape::from_pattern("  #\n#. ").unwrap();
        assert_eq!(shape.offsets(), &[[2, 0], [0, 1]]);
        assert_eq!(shape.width(), 3);
        assert_eq!(shape.height(), 2);
    }

    // Tests unknown characters and empty patterns are rejected
    // Verified by treating unknown characters as blanks
    #[test]
    fn test_invalid_patterns() {
        assert!(matches!(
            MarkerShape::from_pattern("#x#"),
            Err(AlgorithmError::InvalidParameter { .. })
        ));
        assert!(matches!(
            MarkerShape::from_pattern(" . \n..."),
            Err(AlgorithmError::InvalidParameter { .. })
        ));
    }

    // Tests a horizontal pair is found only after turning a vertical pair
    // Verified by scanning identity last
    #[test]
    fn test_search_finds_first_orientation() {
        let image = PixelGrid::from_rows(&["#..", "#..", "..."]).unwrap();
        let shape = MarkerShape::from_pattern("##").unwrap();

        assert!(find_anchors(&image, &shape).is_empty());

        let report = search(&image, &shape).unwrap();
        assert_eq!(report.orientation, Orientation::Rotate90);
        assert_eq!(report.anchors, vec![[1, 0]]);
        assert_eq!(report.set_pixels, 2);
        assert_eq!(report.marker_size, 2);
        assert_eq!(report.roughness, 0);
    }

    // Tests a marker absent from every orientation is reported
    // Verified by returning an empty report
    #[test]
    fn test_marker_not_found() {
        let image = PixelGrid::from_rows(&["#..", "...", "..#"]).unwrap();
        let shape = MarkerShape::from_pattern("##").unwrap();

        match search(&image, &shape) {
            Err(AlgorithmError::MarkerNotFound {
                marker_size,
                image_side,
            }) => {
                assert_eq!(marker_size, 2);
                assert_eq!(image_side, 3);
            }
            other => unreachable!("Expected MarkerNotFound, got {other:?}"),
        }
    }

    // Tests a shape larger than the image has no anchors
    // Verified by removing the size guard
    #[test]
    fn test_oversized_shape() {
        let image = PixelGrid::from_rows(&["##", "##"]).unwrap();
        assert!(find_anchors(&image, &MarkerShape::sea_monster()).is_empty());
    }

    // Tests the sample image holds two sea monsters and the known roughness
    // Verified by counting marker cells twice
    #[test]
    fn test_sample_roughness() {
        let image = Assembly::parse(SAMPLE).unwrap().compose().unwrap();
        let shape = MarkerShape::sea_monster();
        let report = search(&image, &shape).unwrap();

        assert_eq!(report.orientation, Orientation::Rotate90);
        assert_eq!(report.hits(), 2);
        assert_eq!(report.set_pixels, 303);
        assert_eq!(report.roughness, 273);

        let mask = report.marker_mask(&shape);
        assert_eq!(mask.iter().filter(|&&cell| cell).count(), 30);
        assert_eq!(mask.dim(), (24, 24));
    }
}
