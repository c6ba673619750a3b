use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};

/// Computes the [`Aabb`] of a set of points.
///
/// Returns an invalid [`Aabb`] (see [`Aabb::new_invalid`]) if `pts` is empty.
pub fn local_point_cloud_aabb<I>(pts: I) -> Aabb
where
    I: IntoIterator<Item = Point<Real>>,
{
    let mut aabb = Aabb::new_invalid();

    for pt in pts {
        aabb.take_point(pt);
    }

    aabb
}
