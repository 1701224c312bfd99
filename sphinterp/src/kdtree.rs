/////////////////////////////////////////////////////////////////////////////////////////////
//
// Provides a static KD-tree for finding particles whose kernels may reach a sample point.
//
// Created on: 19 Oct 2026     Author: Daniel Owen
//
// Copyright (c) 2026, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

// Particle position tagged with its index in the source data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PointWithId {
    pub coords: [f64; 3],
    pub id: usize,
}

impl PointWithId {
    pub fn new(coords: [f64; 3], id: usize) -> Self {
        Self { coords, id }
    }

    /// Euclidean distance over the first `dims` coordinates.
    #[inline(always)]
    pub fn distance(&self, other: &[f64; 3], dims: usize) -> f64 {
        let dist: f64 = self.coords[..dims]
            .iter()
            .zip(other[..dims].iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum();

        dist.sqrt()
    }
}

/// A node in the KDTree
#[derive(Debug)]
struct Node {
    point: PointWithId,
    left: Option<usize>,
    right: Option<usize>,
}

/// The KDTree structure
#[derive(Debug)]
pub(crate) struct KDTree {
    nodes: Vec<Node>,
    dims: usize,
}

impl KDTree {
    /// Constructs a new KDTree over the first `dims` coordinates of each position.
    pub fn new(positions: &[[f64; 3]], dims: usize) -> Self {
        let dims = dims.clamp(1, 3);
        let mut points: Vec<PointWithId> = positions
            .iter()
            .enumerate()
            .map(|(i, &coords)| PointWithId::new(coords, i))
            .collect();

        let mut tree = KDTree {
            nodes: Vec::with_capacity(points.len()),
            dims,
        };
        tree.build_tree(&mut points, 0);
        tree
    }

    /// Recursively builds the KDTree and stores nodes in a flat vector.
    fn build_tree(&mut self, points: &mut [PointWithId], depth: usize) -> Option<usize> {
        if points.is_empty() {
            return None;
        }

        let axis = depth % self.dims;

        points.sort_by(|a, b| a.coords[axis].total_cmp(&b.coords[axis]));

        // Choose the median as the pivot
        let mid = points.len() / 2;

        let node_index = self.nodes.len();
        self.nodes.push(Node {
            point: points[mid],
            left: None,
            right: None,
        });

        self.nodes[node_index].left = self.build_tree(&mut points[..mid], depth + 1);
        self.nodes[node_index].right = self.build_tree(&mut points[mid + 1..], depth + 1);

        Some(node_index)
    }

    /// Returns the ids of every point within `radius` of `target`, in ascending order.
    pub fn radius_search(&self, target: &[f64; 3], radius: f64) -> Vec<usize> {
        let mut result = Vec::new();
        self.radius_search_impl(0, target, radius, 0, &mut result);
        result.sort_unstable();
        result
    }

    fn radius_search_impl(
        &self,
        node_index: usize,
        target: &[f64; 3],
        radius: f64,
        depth: usize,
        result: &mut Vec<usize>,
    ) {
        if node_index >= self.nodes.len() {
            return;
        }

        let node = &self.nodes[node_index];
        if node.point.distance(target, self.dims) <= radius {
            result.push(node.point.id);
        }

        let axis = depth % self.dims;
        let diff = target[axis] - node.point.coords[axis];

        // |diff| <= radius: the search sphere straddles the splitting plane.
        if diff.abs() <= radius {
            if let Some(left) = node.left {
                self.radius_search_impl(left, target, radius, depth + 1, result);
            }
            if let Some(right) = node.right {
                self.radius_search_impl(right, target, radius, depth + 1, result);
            }
        } else if diff < 0.0 {
            if let Some(left) = node.left {
                self.radius_search_impl(left, target, radius, depth + 1, result);
            }
        } else if let Some(right) = node.right {
            self.radius_search_impl(right, target, radius, depth + 1, result);
        }
    }
}
