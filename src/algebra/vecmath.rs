use super::{FloatT, VectorMath};
use std::iter::zip;

impl<T: FloatT> VectorMath for [T] {
    type T = T;

    fn set(&mut self, c: T) -> &mut Self {
        self.fill(c);
        self
    }

    fn scale(&mut self, c: T) -> &mut Self {
        self.iter_mut().for_each(|x| *x *= c);
        self
    }

    fn dot(&self, y: &[T]) -> T {
        assert_eq!(self.len(), y.len());
        accumulate_pairwise(zip(self, y), |(&x, &y)| x * y)
    }

    // pivot radicands are formed from this, so it shares
    // the pairwise summation of dot
    fn sumsq(&self) -> T {
        self.dot(self)
    }

    fn norm_inf(&self) -> T {
        let mut out = T::zero();
        for v in self.iter().map(|v| v.abs()) {
            if v.is_nan() {
                return T::nan();
            }
            out = T::max(out, v);
        }
        out
    }

    // max absolute difference (used for unit testing)
    fn norm_inf_diff(&self, b: &[T]) -> T {
        assert_eq!(self.len(), b.len());
        zip(self, b).fold(T::zero(), |acc, (x, y)| T::max(acc, T::abs(*x - *y)))
    }

    fn minimum(&self) -> T {
        self.iter().fold(T::infinity(), |r, &s| T::min(r, s))
    }

    fn maximum(&self) -> T {
        self.iter().fold(-T::infinity(), |r, &s| T::max(r, s))
    }
}

// ---------------------------------------------------------------------
// pairwise accumulation, bounding the rounding error of long
// reductions to O(log n) rather than O(n)

fn accumulate_pairwise<T, I, A, F>(x: I, op: F) -> T
where
    T: FloatT,
    I: IntoIterator<Item = A> + Clone,
    I::IntoIter: ExactSizeIterator,
    F: Fn(A) -> T,
{
    const BASE_CASE_DIM: usize = 16;

    fn inner<T, I, A, F>(x: I, op: &F, start: usize, len: usize) -> T
    where
        T: FloatT,
        I: IntoIterator<Item = A> + Clone,
        F: Fn(A) -> T,
    {
        if len < BASE_CASE_DIM {
            x.into_iter()
                .skip(start)
                .take(len)
                .fold(T::zero(), |acc, a| acc + op(a))
        } else {
            let half = len / 2;
            inner(x.clone(), op, start, half) + inner(x, op, start + half, len - half)
        }
    }

    let n = x.clone().into_iter().len();
    inner(x, &op, 0, n)
}

#[test]
fn test_dot() {
    let x = vec![1., 2., 3., 4.];
    let y = vec![4., 5., 6., 7.];
    assert_eq!(x.dot(&y), 60.);

    // lengths either side of the pairwise base case
    let maxlen = 128 * 7 + 1;
    let x: Vec<f64> = (1..=maxlen).map(|x| x as f64).collect();
    let y: Vec<f64> = (1..=maxlen).map(|y| (y as f64 - 3.0) / 2.0).collect();

    for i in 0..=x.len() {
        let (xt, yt) = (&x[0..i], &y[0..i]);
        let dot1 = zip(xt, yt).fold(0.0, |acc, (&x, &y)| acc + x * y);
        assert_eq!(dot1, xt.dot(yt));
        assert_eq!(xt.sumsq(), xt.dot(xt));
    }
}

#[test]
fn test_set_and_scale() {
    let mut x = vec![1., -2., 3.];
    x.scale(-2.0);
    assert_eq!(x, vec![-2., 4., -6.]);
    x.set(0.5);
    assert_eq!(x, vec![0.5; 3]);
}

#[test]
fn test_extrema_and_norms() {
    let x = vec![3., -7., 2., 0.5];
    assert_eq!(x.minimum(), -7.);
    assert_eq!(x.maximum(), 3.);
    assert_eq!(x.norm_inf(), 7.);
    assert_eq!(x.norm_inf_diff(&[3., -6., 2., 0.]), 1.);
    assert!([0.0, f64::NAN].norm_inf().is_nan());
}
