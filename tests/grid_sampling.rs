mod grid_sampling {
  use polygrid::algorithms::interior_grid_points;
  use polygrid::data::{Point, Polygon};
  use polygrid::Error;

  use rand::Rng;
  use rand::SeedableRng;

  fn pt(x: f64, y: f64) -> Point {
    Point::new_unchecked(x, y)
  }

  // Vertices in convex position on a circle, counter-clockwise.
  fn random_convex_polygon<R: Rng + ?Sized>(n: usize, radius: f64, rng: &mut R) -> Polygon {
    let mut angles: Vec<f64> = (0..n)
      .map(|_| rng.gen_range(0.0..std::f64::consts::TAU))
      .collect();
    angles.sort_by(f64::total_cmp);
    angles.dedup();
    let vertices = angles
      .iter()
      .map(|&t| pt(radius * t.cos(), radius * t.sin()))
      .collect();
    Polygon::new(vertices).unwrap()
  }

  #[test]
  fn unit_square_half_spacing() -> Result<(), Error> {
    let square = Polygon::new(vec![
      pt(0.0, 0.0),
      pt(1.0, 0.0),
      pt(1.0, 1.0),
      pt(0.0, 1.0),
    ])?;
    let interior = interior_grid_points(&square, (0.5, 0.5))?;
    // The four vertices are inside via the fast path. Of the non-vertex
    // boundary points the bottom and left midpoints classify inside and the
    // top and right midpoints outside: on-edge classification is approximate
    // by design, but deterministic.
    assert!(interior.contains(&pt(0.5, 0.5)));
    for v in square.iter() {
      assert!(interior.contains(v));
    }
    assert!(interior.contains(&pt(0.5, 0.0)));
    assert!(interior.contains(&pt(0.0, 0.5)));
    assert!(!interior.contains(&pt(1.0, 0.5)));
    assert!(!interior.contains(&pt(0.5, 1.0)));
    assert_eq!(interior.len(), 7);
    Ok(())
  }

  #[test]
  fn square_with_negative_extent() -> Result<(), Error> {
    let square = Polygon::new(vec![
      pt(-2.0, -2.0),
      pt(2.0, -2.0),
      pt(2.0, 2.0),
      pt(-2.0, 2.0),
    ])?;
    let interior = interior_grid_points(&square, (1.0, 1.0))?;
    assert!(interior.contains(&pt(0.0, 0.0)));
    assert!(interior.contains(&pt(-1.0, 1.0)));
    assert!(interior.contains(&pt(-2.0, -2.0)));
    Ok(())
  }

  #[test]
  fn random_convex_polygons_sample_consistently() -> Result<(), Error> {
    let mut rng = rand::rngs::SmallRng::seed_from_u64(1);
    for _ in 0..10 {
      let poly = random_convex_polygon(12, 8.0, &mut rng);
      let interior = interior_grid_points(&poly, (1.0, 1.0))?;
      assert!(!interior.is_empty());
      let bbox = poly.bounding_box();
      for p in &interior {
        assert!(bbox.contains(p));
        assert!(poly.contains(p));
      }
      // The centroid of a convex polygon is interior but almost surely not a
      // grid point; containment still holds for it.
      assert!(poly.contains(&poly.centroid()));
    }
    Ok(())
  }

  #[test]
  fn rejects_degenerate_intervals_eagerly() {
    let triangle =
      Polygon::new(vec![pt(0.0, 0.0), pt(4.0, 0.0), pt(0.0, 4.0)]).unwrap();
    assert_eq!(
      interior_grid_points(&triangle, (0.0, 0.0)).unwrap_err(),
      Error::InvalidInterval
    );
  }
}
