use super::{FloatT, ScalarMath};

impl<T: FloatT> ScalarMath for T {
    type T = T;

    fn logsafe(&self) -> T {
        if *self <= T::zero() {
            -T::infinity()
        } else {
            self.ln()
        }
    }
}

#[test]
fn test_logsafe() {
    assert_eq!((1.0f64).logsafe(), 0.0);
    assert_eq!((0.0f64).logsafe(), f64::NEG_INFINITY);
    assert_eq!((-2.0f32).logsafe(), f32::NEG_INFINITY);
}
