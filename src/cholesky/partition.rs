use super::CholeskyError;

/// Contiguous column blocks ("supernodes") for a blocked factorization.
///
/// A partition `(s₁,…,sₘ)` of an `n × n` matrix defines the column blocks
/// `[0,s₁)`, `[s₁,s₁+s₂)`, … .  Every size must be positive and the
/// sizes must sum to `n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupernodePartition {
    sizes: Vec<usize>,
    // cumulative block boundaries, length sizes.len() + 1
    bounds: Vec<usize>,
}

impl SupernodePartition {
    /// Validates `sizes` against the matrix dimension `n`
    pub fn new(sizes: &[usize], n: usize) -> Result<Self, CholeskyError> {
        // boundaries must not wrap around usize
        let mut bounds = Vec::with_capacity(sizes.len() + 1);
        let mut k: usize = 0;
        bounds.push(k);
        for &s in sizes {
            if s == 0 {
                return Err(CholeskyError::InvalidPartition);
            }
            k = k.checked_add(s).ok_or(CholeskyError::InvalidPartition)?;
            bounds.push(k);
        }
        if k != n {
            return Err(CholeskyError::InvalidPartition);
        }

        Ok(Self {
            sizes: sizes.to_vec(),
            bounds,
        })
    }

    /// One column per supernode, i.e. the partition that
    /// reduces the blocked factorization to left-looking
    pub fn ones(n: usize) -> Self {
        Self {
            sizes: vec![1; n],
            bounds: (0..=n).collect(),
        }
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Cumulative column boundaries `0 = k₀ < k₁ < … < kₘ = n`
    pub fn boundaries(&self) -> &[usize] {
        &self.bounds
    }

    /// number of supernodes
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// matrix dimension covered by the partition
    pub fn dim(&self) -> usize {
        self.bounds[self.bounds.len() - 1]
    }

    /// Iterator over the column ranges `k1..k2` of each supernode
    pub fn blocks(&self) -> impl Iterator<Item = std::ops::Range<usize>> + '_ {
        self.bounds.windows(2).map(|w| w[0]..w[1])
    }
}

#[test]
fn test_partition_valid() {
    let p = SupernodePartition::new(&[2, 1, 3], 6).unwrap();
    assert_eq!(p.boundaries(), &[0, 2, 3, 6]);
    assert_eq!(p.len(), 3);
    assert_eq!(p.dim(), 6);
    let blocks: Vec<_> = p.blocks().collect();
    assert_eq!(blocks, vec![0..2, 2..3, 3..6]);
}

#[test]
fn test_partition_invalid() {
    // sum 3 != 4
    assert_eq!(
        SupernodePartition::new(&[2, 1], 4),
        Err(CholeskyError::InvalidPartition)
    );
    // zero sized supernode
    assert_eq!(
        SupernodePartition::new(&[2, 0, 2], 4),
        Err(CholeskyError::InvalidPartition)
    );
    // oversized
    assert_eq!(
        SupernodePartition::new(&[5], 4),
        Err(CholeskyError::InvalidPartition)
    );
}

#[test]
fn test_partition_ones() {
    let p = SupernodePartition::ones(4);
    assert_eq!(p, SupernodePartition::new(&[1, 1, 1, 1], 4).unwrap());
    assert_eq!(p.boundaries(), &[0, 1, 2, 3, 4]);

    let empty = SupernodePartition::ones(0);
    assert!(empty.is_empty());
    assert_eq!(empty.dim(), 0);
    assert_eq!(SupernodePartition::new(&[], 0), Ok(empty));
}

#[test]
fn test_partition_overflow() {
    // sizes wrapping to 4 in modular arithmetic
    assert_eq!(
        SupernodePartition::new(&[usize::MAX, 5], 4),
        Err(CholeskyError::InvalidPartition)
    );
    assert_eq!(
        SupernodePartition::new(&[usize::MAX, 1], 0),
        Err(CholeskyError::InvalidPartition)
    );
}
