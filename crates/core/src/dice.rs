//! Random source seam for every chance-driven rule in the cave.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;

pub trait Dice {
    /// Uniform draw in `0..bound`. `bound` is never zero.
    fn roll_below(&mut self, bound: usize) -> usize;

    fn pick<T: Copy>(&mut self, options: &[T]) -> T
    where
        Self: Sized,
    {
        options[self.roll_below(options.len())]
    }
}

impl Dice for ChaCha8Rng {
    fn roll_below(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0);
        (self.next_u64() % bound as u64) as usize
    }
}

impl<D: Dice + ?Sized> Dice for &mut D {
    fn roll_below(&mut self, bound: usize) -> usize {
        (**self).roll_below(bound)
    }
}
