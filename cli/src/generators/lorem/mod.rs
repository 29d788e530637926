pub mod paragraph;
pub mod sentence;
pub mod word;

use super::words::{capitalize, pick, LOREM};
use rand::Rng;

pub(crate) fn sentence<R: Rng>(rng: &mut R, words: usize) -> String {
    let body: Vec<&str> = (0..words).map(|_| pick(rng, LOREM)).collect();
    format!("{}.", capitalize(&body.join(" ")))
}

pub(crate) fn paragraph<R: Rng>(rng: &mut R, sentences: usize) -> String {
    (0..sentences)
        .map(|_| {
            let words = rng.gen_range(4..=10);
            sentence(rng, words)
        })
        .collect::<Vec<_>>()
        .join(" ")
}
