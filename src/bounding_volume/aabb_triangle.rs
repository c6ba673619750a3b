use crate::math::{Point, DIM};
use crate::{bounding_volume::Aabb, shape::Triangle};

impl Triangle {
    /// Computes the local-space [`Aabb`] of this triangle.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        let mut mins = Point::origin();
        let mut maxs = Point::origin();

        for d in 0..DIM {
            mins[d] = self.a[d].min(self.b[d]).min(self.c[d]);
            maxs[d] = self.a[d].max(self.b[d]).max(self.c[d]);
        }

        Aabb::new(mins, maxs)
    }
}
