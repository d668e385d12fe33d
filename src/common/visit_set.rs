use fixedbitset::FixedBitSet;

pub trait VisitSet<I> {
    /// Marks the index as visited. Returns `true` if it was not visited before.
    fn visit(&mut self, index: I) -> bool;
    /// Removes the visited mark. Returns `true` if the index was visited.
    fn unvisit(&mut self, index: &I) -> bool;
    fn is_visited(&self, index: &I) -> bool;
    fn reset_visited(&mut self);
}

impl VisitSet<usize> for FixedBitSet {
    fn visit(&mut self, index: usize) -> bool {
        if self.len() <= index {
            self.grow(index + 1);
        }
        !self.put(index)
    }

    fn unvisit(&mut self, index: &usize) -> bool {
        if !self.contains(*index) {
            return false;
        }
        self.set(*index, false);
        true
    }

    fn is_visited(&self, index: &usize) -> bool {
        self.contains(*index)
    }

    fn reset_visited(&mut self) {
        self.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_bit_set() {
        let mut set = FixedBitSet::with_capacity(8);

        assert!(set.visit(3));
        assert!(!set.visit(3));
        assert!(set.visit(70));
        assert!(set.is_visited(&3));
        assert!(!set.is_visited(&4));

        assert!(set.unvisit(&3));
        assert!(!set.unvisit(&3));
        assert!(!set.unvisit(&1000));
        assert!(set.is_visited(&70));

        set.reset_visited();
        assert!(!set.is_visited(&70));
    }
}
