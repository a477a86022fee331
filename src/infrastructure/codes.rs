// src/infrastructure/codes.rs
use crate::application::ports::codes::CodeGenerator;
use crate::domain::article::value_objects::{SHORT_CODE_ALPHABET, SHORT_CODE_LENGTH};
use rand::Rng;

/// Draws each character uniformly from the 62-character alphabet.
#[derive(Default)]
pub struct RandomCodeGenerator;

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> String {
        let mut rng = rand::thread_rng();
        (0..SHORT_CODE_LENGTH)
            .map(|_| {
                let idx = rng.gen_range(0..SHORT_CODE_ALPHABET.len());
                SHORT_CODE_ALPHABET[idx] as char
            })
            .collect()
    }
}
