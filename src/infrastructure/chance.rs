use crate::application::ports::chance::Chance;
use rand::Rng;

#[derive(Default, Clone)]
pub struct RandomChance;

impl Chance for RandomChance {
    fn roll(&self, sides: u32) -> u32 {
        if sides <= 1 {
            return 0;
        }
        rand::rng().random_range(0..sides)
    }
}
