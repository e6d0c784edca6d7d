use rand::Rng;

use crate::auth::application::ports::outgoing::CodeGenerator;

/// Uniform six-digit numeric codes in `[100000, 999999]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomCodeGenerator;

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> String {
        rand::thread_rng().gen_range(100_000..=999_999u32).to_string()
    }
}
