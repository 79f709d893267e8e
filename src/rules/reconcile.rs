//! Expected-versus-observed diffing shared by the label and column rules.

/// How one observed item relates to the expected set.
#[derive(Debug, PartialEq, Eq)]
pub enum Entry<'e, 'o, E, O> {
    Matched { expected: &'e E, observed: &'o O },
    Unexpected(&'o O),
}

#[derive(Debug)]
pub struct Reconciliation<'e, 'o, E, O> {
    /// One entry per observed item, in observed order.
    pub entries: Vec<Entry<'e, 'o, E, O>>,
    /// Expected items never observed, in expected order.
    pub missing: Vec<&'e E>,
}

impl<E, O> Reconciliation<'_, '_, E, O> {
    pub fn is_exact(&self) -> bool {
        self.missing.is_empty()
            && self
                .entries
                .iter()
                .all(|e| matches!(e, Entry::Matched { .. }))
    }
}

/// Matches `observed` against `expected` by key.
///
/// Matches are tracked in a bitmask with one bit per expected entry, so
/// `expected` holds at most 64 items.
pub fn reconcile<'e, 'o, E, O, K>(
    expected: &'e [E],
    observed: &'o [O],
    expected_key: impl Fn(&E) -> &K,
    observed_key: impl Fn(&O) -> &K,
) -> Reconciliation<'e, 'o, E, O>
where
    K: PartialEq + ?Sized,
{
    debug_assert!(expected.len() <= u64::BITS as usize);

    let mut seen: u64 = 0;
    let entries = observed
        .iter()
        .map(|item| {
            let key = observed_key(item);
            // First expected entry with the same key; duplicates hit the same bit.
            match expected.iter().position(|e| expected_key(e) == key) {
                Some(index) => {
                    seen |= 1u64 << index;
                    Entry::Matched {
                        expected: &expected[index],
                        observed: item,
                    }
                }
                None => Entry::Unexpected(item),
            }
        })
        .collect();

    // Any bit still clear is an expected entry nothing matched.
    let missing = expected
        .iter()
        .enumerate()
        .filter(|(index, _)| seen & (1u64 << *index) == 0)
        .map(|(_, e)| e)
        .collect();

    Reconciliation { entries, missing }
}
