use rand::Rng;

use crate::grid::{Cell, GRID_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fruit {
    pub pos: Cell,
}

impl Fruit {
    pub fn at(pos: Cell) -> Self {
        Fruit { pos }
    }

    /// Moves the fruit to a uniformly random cell outside `forbidden`.
    ///
    /// Loops forever if `forbidden` covers the whole grid.
    pub fn randomize<'a, R, I>(&mut self, rng: &mut R, forbidden: I)
    where
        R: Rng + ?Sized,
        I: IntoIterator<Item = &'a Cell> + Clone,
    {
        loop {
            let pos = Cell::new(rng.gen_range(0..GRID_SIZE), rng.gen_range(0..GRID_SIZE));
            if !forbidden.clone().into_iter().any(|&c| c == pos) {
                self.pos = pos;
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::in_bounds;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_randomize_avoids_forbidden() {
        let mut rng = StdRng::seed_from_u64(11);
        let forbidden: Vec<Cell> = (0..GRID_SIZE).map(|x| Cell::new(x, 10)).collect();
        let mut fruit = Fruit::at(Cell::new(0, 10));
        for _ in 0..500 {
            fruit.randomize(&mut rng, &forbidden);
            assert!(!forbidden.contains(&fruit.pos));
            assert!(in_bounds(fruit.pos));
        }
    }

    #[test]
    fn test_randomize_finds_last_free_cell() {
        let mut rng = StdRng::seed_from_u64(3);
        let free = Cell::new(7, 13);
        let forbidden: Vec<Cell> = (0..GRID_SIZE)
            .flat_map(|x| (0..GRID_SIZE).map(move |y| Cell::new(x, y)))
            .filter(|&c| c != free)
            .collect();
        let mut fruit = Fruit::at(Cell::new(0, 0));
        fruit.randomize(&mut rng, &forbidden);
        assert_eq!(fruit.pos, free);
    }
}
