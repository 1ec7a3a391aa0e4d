// Set capability: the contract between dictionaries and their consumers.

/// A collection of distinct elements with membership queries.
///
/// Implemented by `wordcheck_avl::BalancedSet`. The suggestion engine only
/// needs [`Set::contains`] and takes `&dyn Set<String>`, so any conforming
/// dictionary can be substituted.
pub trait Set<T> {
    /// Capability probe: `true` if this implementation is functional.
    ///
    /// Placeholder implementations return `false` so callers can detect
    /// them before loading data into them.
    fn is_implemented(&self) -> bool {
        true
    }

    /// Add an element. Has no effect if an equal element is present.
    fn add(&mut self, element: T);

    /// Returns `true` if an element equal to `element` is present.
    fn contains(&self, element: &T) -> bool;

    /// Number of distinct elements.
    fn size(&self) -> usize;
}

impl<T, S: Set<T> + ?Sized> Set<T> for Box<S> {
    fn is_implemented(&self) -> bool {
        (**self).is_implemented()
    }

    fn add(&mut self, element: T) {
        (**self).add(element)
    }

    fn contains(&self, element: &T) -> bool {
        (**self).contains(element)
    }

    fn size(&self) -> usize {
        (**self).size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Linear-scan set used to exercise the default methods.
    struct VecSet(Vec<u32>);

    impl Set<u32> for VecSet {
        fn add(&mut self, element: u32) {
            if !self.0.contains(&element) {
                self.0.push(element);
            }
        }

        fn contains(&self, element: &u32) -> bool {
            self.0.contains(element)
        }

        fn size(&self) -> usize {
            self.0.len()
        }
    }

    struct Unimplemented;

    impl Set<u32> for Unimplemented {
        fn is_implemented(&self) -> bool {
            false
        }

        fn add(&mut self, _element: u32) {}

        fn contains(&self, _element: &u32) -> bool {
            false
        }

        fn size(&self) -> usize {
            0
        }
    }

    #[test]
    fn default_probe_reports_implemented() {
        let set = VecSet(Vec::new());
        assert!(set.is_implemented());
        assert!(!Unimplemented.is_implemented());
    }

    #[test]
    fn add_ignores_duplicates() {
        let mut set = VecSet(Vec::new());
        set.add(3);
        set.add(3);
        set.add(5);
        assert_eq!(set.size(), 2);
        assert!(set.contains(&5));
        assert!(!set.contains(&4));
    }

    #[test]
    fn boxed_trait_object_forwards() {
        let mut set: Box<dyn Set<u32>> = Box::new(VecSet(Vec::new()));
        set.add(7);
        assert!(set.is_implemented());
        assert!(set.contains(&7));
        assert_eq!(set.size(), 1);
    }
}
