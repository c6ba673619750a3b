use super::Bvh;
use std::collections::HashSet;

impl Bvh {
    /// Panics if this tree is malformed: loops, wrong leaf counts, or parents not enclosing
    /// their children.
    pub fn assert_well_formed(&self) {
        if self.is_empty() {
            return;
        } else if self.nodes[0].right.leaf_count() == 0 {
            assert_eq!(self.nodes[0].leaf_count(), 1);
            assert!(self.nodes[0].left.is_leaf());
            return;
        }

        let mut loop_detection = HashSet::new();
        let _ = self.assert_well_formed_recurse(0, &mut loop_detection);
    }

    fn assert_well_formed_recurse(&self, node_id: u32, loop_detection: &mut HashSet<u32>) -> u32 {
        let node = &self.nodes[node_id as usize];

        if !loop_detection.insert(node_id) {
            panic!("Detected loop. Node {} visited twice.", node_id);
        }

        let mut total = 0;

        for child in [&node.left, &node.right] {
            total += if child.is_leaf() {
                1
            } else {
                let calculated_leaf_count =
                    self.assert_well_formed_recurse(child.children, loop_detection);
                let grand_children = &self.nodes[child.children as usize];
                assert!(child.contains(&grand_children.left));
                assert!(child.contains(&grand_children.right));
                assert_eq!(child.leaf_count(), grand_children.leaf_count());
                assert_eq!(child.leaf_count(), calculated_leaf_count);
                calculated_leaf_count
            };
        }

        total
    }
}
