//! Test meshes and reference algorithms shared by the geometry tests.

use std::collections::VecDeque;
use voxelize3d::math::{Point, Real};
use voxelize3d::shape::{PolygonMesh, Triangle};
use voxelize3d::transformation::voxelization::{VoxelGrid, VoxelLabel};

/// The boundary of an axis-aligned box, made of six quads.
pub fn box_mesh(mins: Point<Real>, maxs: Point<Real>) -> PolygonMesh {
    let vertices = (0..8)
        .map(|i: usize| {
            Point::new(
                if i & 1 == 0 { mins.x } else { maxs.x },
                if i & 2 == 0 { mins.y } else { maxs.y },
                if i & 4 == 0 { mins.z } else { maxs.z },
            )
        })
        .collect();
    let faces = vec![
        vec![0, 2, 6, 4],
        vec![1, 5, 7, 3],
        vec![0, 4, 5, 1],
        vec![2, 3, 7, 6],
        vec![0, 1, 3, 2],
        vec![4, 6, 7, 5],
    ];

    PolygonMesh::new(vertices, faces).unwrap()
}

/// The same box as [`box_mesh`], as a triangle soup.
pub fn box_triangles(mins: Point<Real>, maxs: Point<Real>) -> Vec<Triangle> {
    let mesh = box_mesh(mins, maxs);
    let vtx = mesh.vertices();

    mesh.polygons()
        .flat_map(|quad| {
            let p = |i: usize| vtx[quad[i] as usize];
            [
                Triangle::new(p(0), p(1), p(2)),
                Triangle::new(p(0), p(2), p(3)),
            ]
        })
        .collect()
}

/// A latitude-longitude sphere centered at the origin, with quads between the rings and
/// triangles around the poles.
pub fn uv_sphere(radius: Real, stacks: u32, slices: u32) -> PolygonMesh {
    let pi = std::f64::consts::PI as Real;
    let mut vertices = vec![Point::new(0.0, 0.0, radius)];

    for s in 1..stacks {
        let theta = pi * s as Real / stacks as Real;

        for l in 0..slices {
            let phi = 2.0 * pi * l as Real / slices as Real;
            vertices.push(Point::new(
                radius * theta.sin() * phi.cos(),
                radius * theta.sin() * phi.sin(),
                radius * theta.cos(),
            ));
        }
    }

    vertices.push(Point::new(0.0, 0.0, -radius));
    let south = vertices.len() as u32 - 1;
    let ring = |s: u32, l: u32| 1 + (s - 1) * slices + l % slices;

    let mut polygons = Vec::new();

    for l in 0..slices {
        polygons.push(vec![0, ring(1, l), ring(1, l + 1)]);
        polygons.push(vec![south, ring(stacks - 1, l + 1), ring(stacks - 1, l)]);
    }

    for s in 1..stacks - 1 {
        for l in 0..slices {
            polygons.push(vec![
                ring(s, l),
                ring(s + 1, l),
                ring(s + 1, l + 1),
                ring(s, l + 1),
            ]);
        }
    }

    PolygonMesh::new(vertices, polygons).unwrap()
}

/// Reference exterior: the cells reachable through non-`Boundary` cells from the shell cell
/// with the smallest linear index that is not `Boundary`.
pub fn reference_exterior(grid: &VoxelGrid) -> Vec<bool> {
    let [nx, ny, nz] = grid.dims();
    let mut visited = vec![false; grid.num_cells()];
    let is_open = |id: usize| grid.label_at(id) != VoxelLabel::Boundary;

    let seed = (0..grid.num_cells()).find(|id| {
        let [i, j, k] = grid.coords_of(*id);
        let on_shell = i == 0 || j == 0 || k == 0 || i == nx - 1 || j == ny - 1 || k == nz - 1;
        on_shell && is_open(*id)
    });

    let Some(seed) = seed else {
        return visited;
    };

    let mut queue = VecDeque::from([seed]);
    visited[seed] = true;

    while let Some(id) = queue.pop_front() {
        let [i, j, k] = grid.coords_of(id);
        let (i, j, k) = (i as i64, j as i64, k as i64);

        for (di, dj, dk) in [
            (-1, 0, 0),
            (1, 0, 0),
            (0, -1, 0),
            (0, 1, 0),
            (0, 0, -1),
            (0, 0, 1),
        ] {
            let (a, b, c) = (i + di, j + dj, k + dk);

            if a < 0 || b < 0 || c < 0 || a >= nx as i64 || b >= ny as i64 || c >= nz as i64 {
                continue;
            }

            let neighbor = grid.index_of(a as u32, b as u32, c as u32);

            if !visited[neighbor] && is_open(neighbor) {
                visited[neighbor] = true;
                queue.push_back(neighbor);
            }
        }
    }

    visited
}
