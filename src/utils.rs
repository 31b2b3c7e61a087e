/// Access to the ends of a slice that is known to be non-empty.
///
/// A network always has at least one weight layer, so the first and last
/// layer can be reached without threading `Option`s around.
pub trait Ends<T> {
    fn front(&self) -> &T;
    fn back(&self) -> &T;
    fn back_mut(&mut self) -> &mut T;
}

impl<T> Ends<T> for [T] {
    #[inline(always)]
    fn front(&self) -> &T {
        &self[0]
    }

    #[inline(always)]
    fn back(&self) -> &T {
        &self[self.len() - 1]
    }

    #[inline(always)]
    fn back_mut(&mut self) -> &mut T {
        let i = self.len() - 1;
        &mut self[i]
    }
}

/// Resets scratch storage to zeros.
pub trait ZeroOut {
    fn zero_out(&mut self);
}

impl ZeroOut for f64 {
    fn zero_out(&mut self) {
        *self = 0.0;
    }
}

impl<T: ZeroOut> ZeroOut for [T] {
    fn zero_out(&mut self) {
        self.iter_mut().for_each(ZeroOut::zero_out);
    }
}

impl<T: ZeroOut> ZeroOut for Vec<T> {
    fn zero_out(&mut self) {
        self.as_mut_slice().zero_out();
    }
}
